use larder_core::codec;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    /// Header indicator.
    pub fn glyph(self) -> &'static str {
        match self {
            Direction::Asc => "▲",
            Direction::Desc => "▼",
        }
    }
}

/// The single sorted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub direction: Direction,
}

impl SortState {
    /// Next state after clicking the header of `column`: ascending, then
    /// descending, then unsorted. Another column starts over at ascending.
    pub fn toggle(current: Option<SortState>, column: usize) -> Option<SortState> {
        let direction = match current {
            Some(state) if state.column == column => match state.direction {
                Direction::Asc => Some(Direction::Desc),
                Direction::Desc => None,
            },
            _ => Some(Direction::Asc),
        };

        direction.map(|direction| SortState { column, direction })
    }
}

#[derive(Debug, PartialEq, PartialOrd)]
enum SortKey {
    Bool(bool),
    Number(f64),
    Text(String),
}

fn sort_key(value: &Value) -> Option<SortKey> {
    match value {
        Value::Null => None,
        Value::Bool(value) => Some(SortKey::Bool(*value)),
        Value::Number(number) => number.as_f64().map(SortKey::Number),
        Value::String(text) => Some(
            number_in(text)
                .map(SortKey::Number)
                .unwrap_or_else(|| SortKey::Text(text.clone())),
        ),
        other => Some(SortKey::Text(other.to_string())),
    }
}

/// Decimals serialize as strings and costs as currency text; both sort as
/// numbers.
fn number_in(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.starts_with(codec::MARKER) {
        return codec::parse(text)?.to_f64();
    }
    text.parse().ok()
}

/// Orders two accessor values in `direction`. Nulls sort last either way.
pub(crate) fn compare(a: &Value, b: &Value, direction: Direction) -> Ordering {
    let ordering = match (sort_key(a), sort_key(b)) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
        (Some(a), Some(b)) => match (&a, &b) {
            (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
            (SortKey::Text(x), SortKey::Text(y)) => compare_text(x, y),
            _ => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        },
    };

    match direction {
        Direction::Asc => ordering,
        Direction::Desc => ordering.reverse(),
    }
}

/// Case-insensitive order; ties fall back to the raw text so the order
/// stays total.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}
