use super::{IngredientRow, RowId, RowSet};
use crate::{Config, Form};

use larder_core::model::{IngredientOption, InventoryId};
use log::warn;
use rust_decimal::Decimal;

/// Paired ingredient select / quantity input rows bound to one form field.
///
/// The editor owns its [`RowSet`]. Every edit that changes it writes the whole
/// set into the bound field, so the form's dirty tracking and validation see
/// the same rows the editor shows.
#[derive(Debug, Clone)]
pub struct IngredientEditor {
    field: String,
    rows: RowSet,
    options: Vec<IngredientOption>,
    blank_quantity_default: Option<Decimal>,
}

/// What one editor row renders.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView<'a> {
    pub row: &'a IngredientRow,

    /// Choices for the ingredient select
    pub options: Vec<&'a IngredientOption>,

    /// Nothing left to pick
    pub select_disabled: bool,

    pub quantity_text: String,

    /// The quantity is only editable once an ingredient is picked
    pub quantity_disabled: bool,

    /// Read-only unit cost
    pub cost_display: String,

    pub can_remove: bool,

    /// Present on the last row only; whether the add button is enabled
    pub can_add: Option<bool>,
}

impl IngredientEditor {
    pub fn new(field: impl Into<String>, options: Vec<IngredientOption>, config: &Config) -> Self {
        IngredientEditor::with_rows(field, options, vec![], config)
    }

    /// Starts from existing rows (edit mode).
    pub fn with_rows(
        field: impl Into<String>,
        options: Vec<IngredientOption>,
        rows: Vec<IngredientRow>,
        config: &Config,
    ) -> Self {
        IngredientEditor {
            field: field.into(),
            rows: RowSet::from_rows(rows),
            options,
            blank_quantity_default: config.blank_quantity_default,
        }
    }

    /// Name of the bound form field.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rows(&self) -> &RowSet {
        &self.rows
    }

    pub fn options(&self) -> &[IngredientOption] {
        &self.options
    }

    /// Writes the current rows into the bound field.
    pub fn bind(&self, form: &mut Form) {
        self.propagate(form, self.rows.rows().to_vec());
    }

    pub fn available_options_for(&self, row_id: RowId) -> Vec<&IngredientOption> {
        self.rows.available_options_for(Some(row_id), &self.options)
    }

    pub fn add_row(&mut self, form: &mut Form) -> Option<RowId> {
        let row_id = self.rows.add_row(&self.options)?;
        self.propagate(form, self.rows.rows().to_vec());
        Some(row_id)
    }

    pub fn remove_row(&mut self, form: &mut Form, row_id: RowId) -> bool {
        if !self.rows.remove_row(row_id) {
            return false;
        }
        self.propagate(form, self.rows.rows().to_vec());
        true
    }

    /// Picks the option with the given id for a row, or clears the row with
    /// `None`.
    ///
    /// Ids that are unknown or held by another row are ignored.
    pub fn set_selection(
        &mut self,
        form: &mut Form,
        row_id: RowId,
        option: Option<InventoryId>,
    ) -> bool {
        let option = match option {
            Some(id) => match self.options.iter().find(|option| option.id == id) {
                Some(option) => Some(option.clone()),
                None => return false,
            },
            None => None,
        };

        if !self.rows.set_selection(row_id, option) {
            return false;
        }
        self.propagate(form, self.rows.rows().to_vec());
        true
    }

    pub fn set_quantity(&mut self, form: &mut Form, row_id: RowId, raw: &str) -> bool {
        if !self.rows.set_quantity(row_id, raw) {
            return false;
        }
        self.propagate(form, self.rows.rows().to_vec());
        true
    }

    /// Commits the row's quantity, then writes every row into the form with
    /// its quantity as a number.
    pub fn on_quantity_blur(&mut self, form: &mut Form, row_id: RowId) -> bool {
        let Some(used_fallback) = self
            .rows
            .commit_quantity(row_id, self.blank_quantity_default)
        else {
            return false;
        };

        if used_fallback {
            // A cleared input silently becoming the fallback may not be what
            // the user meant
            warn!(
                "blank quantity committed as fallback; row={row_id}; fallback={:?}",
                self.blank_quantity_default
            );
        }

        self.propagate(form, self.rows.committed_rows());
        true
    }

    /// Reloads the rows from the bound field, e.g. after the form was reset.
    ///
    /// Does not write back to the form.
    pub fn restore(&mut self, form: &Form) {
        self.rows = RowSet::from_rows(form.ingredients(&self.field).to_vec());
    }

    pub fn total_cost(&self) -> Decimal {
        self.rows.total_cost()
    }

    pub fn rows_view(&self) -> Vec<RowView<'_>> {
        let rows = self.rows.rows();
        let can_remove = rows.len() > 1;
        let can_add = !self
            .rows
            .available_options_for(None, &self.options)
            .is_empty();

        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                let options = self.available_options_for(row.row_id);
                RowView {
                    row,
                    select_disabled: options.is_empty(),
                    options,
                    quantity_text: row.quantity.text(),
                    quantity_disabled: row.selected.is_none(),
                    cost_display: row.cost_display(),
                    can_remove,
                    can_add: (i + 1 == rows.len()).then_some(can_add),
                }
            })
            .collect()
    }

    fn propagate(&self, form: &mut Form, rows: Vec<IngredientRow>) {
        form.set_value(&self.field, rows);
    }
}
