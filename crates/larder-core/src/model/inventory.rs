use super::{InventoryId, LinkId, MeasurementUnit};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What an inventory item is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryKind {
    /// Purchased raw material
    Raw,

    /// Produced from a recipe
    Processed,

    /// Returned goods
    Returned,
}

/// One entry of the inventory listing, as returned by the backend.
///
/// The cost is a currency display string (`"$ 1.234,56"`) and the unit is
/// the wire name; both are decoded at the boundary by
/// [`IngredientOption`](super::IngredientOption).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: InventoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: InventoryKind,
    pub measurement_unit: String,
    pub cost: String,
    #[serde(default)]
    pub stock: Decimal,
}

/// A page of the inventory listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsPage {
    pub items: Vec<InventoryItem>,

    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    #[serde(default)]
    pub total_pages: Option<usize>,
}

impl ItemsPage {
    /// Number of pages, falling back to `ceil(total_items / page_size)`.
    pub fn page_count(&self) -> usize {
        self.total_pages
            .unwrap_or_else(|| self.total_items.div_ceil(self.page_size.max(1)))
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }
}

/// One inventory header together with its composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDetail {
    pub id: InventoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: InventoryKind,
    pub measurement_unit: String,
    pub cost: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientLink>,
}

/// A persisted composition row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLink {
    pub id: LinkId,
    pub quantity: Decimal,
    #[serde(default)]
    pub cost: String,
    pub ingredient: IngredientSummary,
}

/// The ingredient a composition row points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSummary {
    pub id: InventoryId,
    pub name: String,
    pub cost: String,
    pub measurement_unit: String,
}

/// Body of the create/update inventory header calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryHeaderBody {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: InventoryKind,
    pub measurement_unit: MeasurementUnit,
    pub cost: Decimal,
}

/// Body of the create ingredient link call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLinkBody {
    pub quantity: Decimal,
    pub cost: Decimal,
    pub inventory_id: InventoryId,
    pub ingredient_id: InventoryId,
}

/// Body of the update ingredient link call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLinkUpdate {
    pub quantity: Decimal,
    pub cost: Decimal,
}
