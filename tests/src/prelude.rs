//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::fixtures::{bakery, Bakery};
pub use crate::{ExecLog, LarderTest};

pub use larder::{
    model::{IngredientOption, InventoryId, LinkId, MeasurementUnit},
    notice::NoticeLog,
    recipe::{Mode, RecipeForm, RecipeFormWrapper, RowId, SubmitOutcome},
    Client, Config, Decimal, Notice,
};
pub use pretty_assertions::assert_eq;

/// Row of `recipe` that selects `ingredient`.
pub fn row_of(recipe: &RecipeForm, ingredient: InventoryId) -> RowId {
    recipe
        .editor()
        .rows()
        .rows()
        .iter()
        .find(|row| row.selected.as_ref().is_some_and(|option| option.id == ingredient))
        .map(|row| row.row_id)
        .expect("no row selects the ingredient")
}
