//! Records exchanged with the backend and the option type the recipe editor
//! works with.

mod id;
pub use id::{InventoryId, LinkId};

mod ingredient;
pub use ingredient::IngredientOption;

mod inventory;
pub use inventory::{
    IngredientLink, IngredientLinkBody, IngredientLinkUpdate, IngredientSummary, InventoryDetail,
    InventoryHeaderBody, InventoryItem, InventoryKind, ItemsPage,
};

mod measurement_unit;
pub use measurement_unit::MeasurementUnit;
