use super::*;
use crate::model::*;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateInventoryHeader {
    pub id: InventoryId,
    pub body: InventoryHeaderBody,
}

impl From<UpdateInventoryHeader> for Operation {
    fn from(value: UpdateInventoryHeader) -> Self {
        Self::UpdateInventoryHeader(value)
    }
}
