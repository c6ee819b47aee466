use larder_core::{
    codec,
    model::{IngredientOption, LinkId},
};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use uuid::Uuid;

/// Editor-local identity of one ingredient row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(Uuid);

impl RowId {
    pub fn new() -> RowId {
        RowId(Uuid::new_v4())
    }
}

impl Default for RowId {
    fn default() -> Self {
        RowId::new()
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Quantity of an ingredient row.
///
/// While the user types, the raw (normalized) text is kept so the input does
/// not fight the keystrokes; focus loss commits it to a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantity {
    Typing(String),
    Committed(Decimal),
}

impl Quantity {
    /// Numeric value for arithmetic; text that is not a number counts as zero.
    pub fn value(&self) -> Decimal {
        match self {
            Quantity::Typing(text) => codec::parse_quantity(text).unwrap_or(Decimal::ZERO),
            Quantity::Committed(value) => *value,
        }
    }

    /// Text shown in the quantity input.
    pub fn text(&self) -> String {
        match self {
            Quantity::Typing(text) => text.clone(),
            Quantity::Committed(value) => {
                let mut value =
                    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                value.rescale(2);
                value.to_string()
            }
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, Quantity::Committed(_))
    }

    /// The same quantity as a number.
    pub fn committed(&self) -> Quantity {
        Quantity::Committed(self.value())
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Committed(Decimal::ZERO)
    }
}

/// One line of a recipe being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRow {
    pub row_id: RowId,
    pub selected: Option<IngredientOption>,
    pub quantity: Quantity,
    pub unit_cost: Decimal,

    /// Set only for rows loaded from a persisted composition
    pub link_id: Option<LinkId>,
}

impl IngredientRow {
    pub fn empty() -> IngredientRow {
        IngredientRow {
            row_id: RowId::new(),
            selected: None,
            quantity: Quantity::default(),
            unit_cost: Decimal::ZERO,
            link_id: None,
        }
    }

    /// A row mirroring one persisted composition row.
    pub fn persisted(
        link_id: LinkId,
        option: IngredientOption,
        quantity: Decimal,
    ) -> IngredientRow {
        IngredientRow {
            row_id: RowId::new(),
            unit_cost: option.unit_cost,
            selected: Some(option),
            quantity: Quantity::Committed(quantity),
            link_id: Some(link_id),
        }
    }

    /// `unit_cost × quantity`, or zero for rows without a selection.
    pub fn line_cost(&self) -> Decimal {
        match self.selected {
            Some(_) => self.unit_cost * self.quantity.value(),
            None => Decimal::ZERO,
        }
    }

    /// Unit cost as shown in the read-only cost input.
    pub fn cost_display(&self) -> String {
        codec::format_amount(self.unit_cost)
    }
}
