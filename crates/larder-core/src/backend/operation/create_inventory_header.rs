use super::*;
use crate::model::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateInventoryHeader {
    pub body: InventoryHeaderBody,
}

impl From<CreateInventoryHeader> for Operation {
    fn from(value: CreateInventoryHeader) -> Self {
        Self::CreateInventoryHeader(value)
    }
}
