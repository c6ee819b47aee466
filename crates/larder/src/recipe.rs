//! Recipe (bill-of-materials) composition.
//!
//! [`IngredientEditor`] owns the ingredient rows and mirrors every edit into a
//! [`Form`](crate::Form) field; [`RecipeForm`] observes that field to keep the
//! average cost current and reconciles the rows with the backend on submit.

mod diff;
pub use diff::{IngredientLine, LinkDiff};

mod editor;
pub use editor::{IngredientEditor, RowView};

mod form;
pub use form::{Mode, RecipeForm, SubmitOutcome};

mod row;
pub use row::{IngredientRow, Quantity, RowId};

mod row_set;
pub use row_set::RowSet;

pub mod schema;
pub use schema::RecipeValues;

mod wrapper;
pub use wrapper::{Loadable, RecipeFormWrapper};
