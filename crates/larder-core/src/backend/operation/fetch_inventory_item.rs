use super::*;
use crate::model::*;

/// Load one inventory header with its composition.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchInventoryItem {
    pub id: InventoryId,
}

impl From<FetchInventoryItem> for Operation {
    fn from(value: FetchInventoryItem) -> Self {
        Self::FetchInventoryItem(value)
    }
}
