mod create_ingredient_link;
pub use create_ingredient_link::CreateIngredientLink;

mod create_inventory_header;
pub use create_inventory_header::CreateInventoryHeader;

mod delete_ingredient_link;
pub use delete_ingredient_link::DeleteIngredientLink;

mod fetch_inventory_item;
pub use fetch_inventory_item::FetchInventoryItem;

mod fetch_inventory_items;
pub use fetch_inventory_items::FetchInventoryItems;

mod update_ingredient_link;
pub use update_ingredient_link::UpdateIngredientLink;

mod update_inventory_header;
pub use update_inventory_header::UpdateInventoryHeader;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// List inventory items, one page at a time
    FetchInventoryItems(FetchInventoryItems),

    /// Load one inventory header and its composition
    FetchInventoryItem(FetchInventoryItem),

    /// Persist a new inventory header
    CreateInventoryHeader(CreateInventoryHeader),

    /// Persist edits to an inventory header
    UpdateInventoryHeader(UpdateInventoryHeader),

    /// Persist one new composition row
    CreateIngredientLink(CreateIngredientLink),

    /// Persist edits to one composition row
    UpdateIngredientLink(UpdateIngredientLink),

    /// Remove one composition row
    DeleteIngredientLink(DeleteIngredientLink),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::FetchInventoryItems(_) => "FetchInventoryItems",
            Operation::FetchInventoryItem(_) => "FetchInventoryItem",
            Operation::CreateInventoryHeader(_) => "CreateInventoryHeader",
            Operation::UpdateInventoryHeader(_) => "UpdateInventoryHeader",
            Operation::CreateIngredientLink(_) => "CreateIngredientLink",
            Operation::UpdateIngredientLink(_) => "UpdateIngredientLink",
            Operation::DeleteIngredientLink(_) => "DeleteIngredientLink",
        }
    }

    /// Returns `true` for operations that change server state.
    pub fn is_write(&self) -> bool {
        !matches!(
            self,
            Operation::FetchInventoryItems(_) | Operation::FetchInventoryItem(_)
        )
    }
}
