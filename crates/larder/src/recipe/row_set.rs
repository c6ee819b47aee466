use super::{IngredientRow, Quantity, RowId};

use larder_core::{codec, model::IngredientOption};
use rust_decimal::{Decimal, RoundingStrategy};

/// Ordered ingredient rows of one recipe being edited.
///
/// Never empty. No two rows select the same option: options picked by one
/// row are filtered out of every other row's choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSet {
    rows: Vec<IngredientRow>,
}

impl RowSet {
    pub fn new() -> RowSet {
        RowSet {
            rows: vec![IngredientRow::empty()],
        }
    }

    /// Builds a set from existing rows, falling back to one empty row.
    pub fn from_rows(rows: Vec<IngredientRow>) -> RowSet {
        if rows.is_empty() {
            RowSet::new()
        } else {
            RowSet { rows }
        }
    }

    pub fn rows(&self) -> &[IngredientRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row_id: RowId) -> Option<&IngredientRow> {
        self.rows.iter().find(|row| row.row_id == row_id)
    }

    pub fn last(&self) -> Option<&IngredientRow> {
        self.rows.last()
    }

    /// Options the given row may pick, in the order of `options`.
    ///
    /// Options selected by other rows are excluded; the row's own selection
    /// stays available. `None` stands for a row that is not in the set yet, so
    /// every selected option is excluded.
    pub fn available_options_for<'a>(
        &self,
        row_id: Option<RowId>,
        options: &'a [IngredientOption],
    ) -> Vec<&'a IngredientOption> {
        options
            .iter()
            .filter(|option| !self.is_taken_by_other(row_id, option))
            .collect()
    }

    /// Appends an empty row, unless every option is already selected.
    pub fn add_row(&mut self, options: &[IngredientOption]) -> Option<RowId> {
        if self.available_options_for(None, options).is_empty() {
            return None;
        }

        let row = IngredientRow::empty();
        let row_id = row.row_id;
        self.rows.push(row);
        Some(row_id)
    }

    /// Removes a row, unless it is the only one.
    pub fn remove_row(&mut self, row_id: RowId) -> bool {
        if self.rows.len() <= 1 {
            return false;
        }

        let before = self.rows.len();
        self.rows.retain(|row| row.row_id != row_id);
        self.rows.len() != before
    }

    /// Selects (or clears) the option of a row and picks up its unit cost.
    ///
    /// Selecting an option another row already holds is ignored.
    pub fn set_selection(&mut self, row_id: RowId, option: Option<IngredientOption>) -> bool {
        if let Some(option) = &option {
            if self.is_taken_by_other(Some(row_id), option) {
                return false;
            }
        }

        let Some(row) = self.row_mut(row_id) else {
            return false;
        };

        row.unit_cost = option
            .as_ref()
            .map_or(Decimal::ZERO, |option| option.unit_cost);
        row.selected = option;
        true
    }

    /// Applies the text of a quantity input after a keystroke.
    ///
    /// Keystrokes that would produce a second decimal separator are ignored.
    pub fn set_quantity(&mut self, row_id: RowId, raw: &str) -> bool {
        let Some(normalized) = codec::normalize_quantity(raw) else {
            return false;
        };

        let Some(row) = self.row_mut(row_id) else {
            return false;
        };

        row.quantity = Quantity::Typing(normalized);
        true
    }

    /// Commits a row's quantity to a number rounded to two places.
    ///
    /// Blank, zero or unparseable quantities commit `fallback`; with no
    /// fallback the row is left blank. Returns `Some(true)` when the fallback
    /// was used and `None` for an unknown row.
    pub fn commit_quantity(&mut self, row_id: RowId, fallback: Option<Decimal>) -> Option<bool> {
        let row = self.row_mut(row_id)?;

        let parsed = match &row.quantity {
            Quantity::Committed(value) => Some(*value),
            Quantity::Typing(text) => codec::parse_quantity(text),
        };

        // zero counts as blank
        let (value, used_fallback) = match parsed {
            Some(value) if !value.is_zero() => (Some(value), false),
            _ => (fallback, true),
        };

        row.quantity = match value {
            Some(value) => Quantity::Committed(
                value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            ),
            None => Quantity::Typing(String::new()),
        };

        Some(used_fallback)
    }

    /// The rows with every quantity coerced to a number.
    pub fn committed_rows(&self) -> Vec<IngredientRow> {
        self.rows
            .iter()
            .map(|row| IngredientRow {
                quantity: row.quantity.committed(),
                ..row.clone()
            })
            .collect()
    }

    /// `Σ unit_cost × quantity` over rows with a selection, at full precision.
    pub fn total_cost(&self) -> Decimal {
        total_cost(&self.rows)
    }

    fn row_mut(&mut self, row_id: RowId) -> Option<&mut IngredientRow> {
        self.rows.iter_mut().find(|row| row.row_id == row_id)
    }

    fn is_taken_by_other(&self, row_id: Option<RowId>, option: &IngredientOption) -> bool {
        self.rows.iter().any(|row| {
            Some(row.row_id) != row_id
                && row
                    .selected
                    .as_ref()
                    .is_some_and(|selected| selected.id == option.id)
        })
    }
}

impl Default for RowSet {
    fn default() -> Self {
        RowSet::new()
    }
}

/// `Σ unit_cost × quantity` over rows with a selection.
pub(crate) fn total_cost(rows: &[IngredientRow]) -> Decimal {
    rows.iter().map(IngredientRow::line_cost).sum()
}
