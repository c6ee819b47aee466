//! Locale-aware currency and quantity text.
//!
//! Display strings use `,` as the decimal separator, `.` as the thousands
//! separator and always start with the currency marker followed by a space,
//! e.g. `"$ 1.234,56"`. Values are carried as [`Decimal`] everywhere else.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Currency marker prefixed to every display string.
pub const MARKER: &str = "$";

/// Maximum number of decimal digits kept while formatting.
const DECIMAL_DIGITS: usize = 2;

/// Formats user-typed text into a display string.
///
/// Everything but digits and the first decimal comma is dropped, so the
/// function is idempotent on its own output. A trailing comma survives so the
/// user can keep typing the decimal part.
pub fn format(raw: &str) -> String {
    let raw = dot_as_decimal(raw);

    let mut integer = String::new();
    let mut decimal: Option<String> = None;

    for c in raw.chars() {
        match (c, decimal.as_mut()) {
            ('0'..='9', None) => integer.push(c),
            ('0'..='9', Some(decimal)) => {
                if decimal.len() < DECIMAL_DIGITS {
                    decimal.push(c);
                }
            }
            (',', None) => decimal = Some(String::new()),
            _ => {}
        }
    }

    if integer.is_empty() && decimal.is_none() {
        return empty();
    }

    let integer = integer.trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };

    let mut out = empty();
    out.push_str(&group_thousands(integer));

    if let Some(decimal) = decimal {
        out.push(',');
        out.push_str(&decimal);
    }

    out
}

/// Parses a display string back into a number.
///
/// Returns `None` when no digits are present (a bare marker, or text that is
/// not a number at all).
pub fn parse(display: &str) -> Option<Decimal> {
    let text = display.trim();
    let text = text.strip_prefix(MARKER).unwrap_or(text).trim();
    let negative = text.starts_with('-');

    let plain: String = text
        .chars()
        .filter_map(|c| match c {
            '0'..='9' => Some(c),
            ',' => Some('.'),
            _ => None,
        })
        .collect();

    let value = parse_plain(&plain)?;
    Some(if negative { -value } else { value })
}

/// Like [`parse`], but yields zero for text without a value.
pub fn parse_or_zero(display: &str) -> Decimal {
    parse(display).unwrap_or(Decimal::ZERO)
}

/// Renders a number as a display string rounded to two decimal places.
///
/// Zero renders as `"$ 0,00"`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let abs = rounded.abs();

    let integer = abs.trunc();
    let cents = ((abs - integer) * Decimal::ONE_HUNDRED).trunc();

    let mut out = empty();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(&integer.to_string()));
    out.push(',');
    out.push_str(&format!("{:0>2}", cents.to_string()));
    out
}

/// Filters a quantity keystroke.
///
/// Keeps digits and separators, normalizes `,` to `.`, and returns `None` when
/// the result would carry more than one decimal separator so the caller can
/// ignore the keystroke.
pub fn normalize_quantity(text: &str) -> Option<String> {
    let normalized: String = text
        .chars()
        .filter_map(|c| match c {
            '0'..='9' | '.' => Some(c),
            ',' => Some('.'),
            _ => None,
        })
        .collect();

    if normalized.matches('.').count() > 1 {
        return None;
    }

    Some(normalized)
}

/// Parses a dot-separated plain number such as `"12"`, `"12."`, `".5"` or
/// `"1.25"`.
pub fn parse_quantity(text: &str) -> Option<Decimal> {
    parse_plain(text.trim())
}

/// Currency text field that reformats on every keystroke.
///
/// The numeric value only follows the text once the text denotes a complete
/// number: while the user has typed a comma but no decimal digits yet the
/// previous value is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyInput {
    display: String,
    value: Decimal,
}

impl CurrencyInput {
    pub fn new() -> CurrencyInput {
        CurrencyInput {
            display: empty(),
            value: Decimal::ZERO,
        }
    }

    /// Starts from an existing amount.
    pub fn from_amount(value: Decimal) -> CurrencyInput {
        CurrencyInput {
            display: format(&format_amount(value)),
            value,
        }
    }

    /// Text to show in the input.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Last committed numeric value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Applies the full text of the input after a keystroke.
    pub fn input(&mut self, text: &str) {
        if text.is_empty() || text == MARKER {
            *self = CurrencyInput::new();
            return;
        }

        if let Some((_, decimals)) = text.split_once(',') {
            self.display = format(text);
            if !decimals.is_empty() {
                self.value = parse_or_zero(&self.display);
            }
            return;
        }

        self.display = if text.starts_with(MARKER) {
            format(text)
        } else {
            format(&format!("{MARKER} {text}"))
        };
        self.value = parse_or_zero(&self.display);
    }
}

impl Default for CurrencyInput {
    fn default() -> Self {
        CurrencyInput::new()
    }
}

fn empty() -> String {
    format!("{MARKER} ")
}

/// Rewrites a trailing `.d`/`.dd`/`.` decimal (canonical numbers such as
/// `"1234.5"`) to use the display comma. Thousands groups always have three
/// digits, so they are never mistaken for a decimal part.
///
/// Display text (anything starting with the marker) is left alone: every `.`
/// in it is a thousands separator, even after a backspace shortens a group.
fn dot_as_decimal(raw: &str) -> std::borrow::Cow<'_, str> {
    if raw.contains(',') || raw.trim_start().starts_with(MARKER) {
        return raw.into();
    }

    let Some(dot) = raw.rfind('.') else {
        return raw.into();
    };

    let tail = &raw[dot + 1..];
    if tail.len() <= DECIMAL_DIGITS && tail.chars().all(|c| c.is_ascii_digit()) {
        let mut rewritten = String::with_capacity(raw.len());
        rewritten.push_str(&raw[..dot]);
        rewritten.push(',');
        rewritten.push_str(tail);
        rewritten.into()
    } else {
        raw.into()
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }

    out
}

fn parse_plain(text: &str) -> Option<Decimal> {
    let text = text.strip_suffix('.').unwrap_or(text);
    if text.is_empty() || text == "." {
        return None;
    }

    if text.starts_with('.') {
        Decimal::from_str(&format!("0{text}")).ok()
    } else {
        Decimal::from_str(text).ok()
    }
}
