use crate::model::{InventoryDetail, InventoryId, ItemsPage, LinkId};
use crate::{Error, Result};

/// Successful result of one [`Operation`](super::Operation).
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// A page of the inventory listing
    Items(ItemsPage),

    /// One inventory header with its composition
    Item(Box<InventoryDetail>),

    /// Id of a newly created inventory header
    CreatedInventory(InventoryId),

    /// Id of a newly created composition row
    CreatedLink(LinkId),

    /// The call succeeded without a payload
    Done,
}

impl Response {
    pub fn name(&self) -> &'static str {
        match self {
            Response::Items(_) => "Items",
            Response::Item(_) => "Item",
            Response::CreatedInventory(_) => "CreatedInventory",
            Response::CreatedLink(_) => "CreatedLink",
            Response::Done => "Done",
        }
    }

    pub fn into_items(self, op: &'static str) -> Result<ItemsPage> {
        match self {
            Response::Items(page) => Ok(page),
            other => Err(Error::unexpected_response(op, other.name())),
        }
    }

    pub fn into_item(self, op: &'static str) -> Result<InventoryDetail> {
        match self {
            Response::Item(detail) => Ok(*detail),
            other => Err(Error::unexpected_response(op, other.name())),
        }
    }

    pub fn into_created_inventory(self, op: &'static str) -> Result<InventoryId> {
        match self {
            Response::CreatedInventory(id) => Ok(id),
            other => Err(Error::unexpected_response(op, other.name())),
        }
    }

    pub fn into_created_link(self, op: &'static str) -> Result<LinkId> {
        match self {
            Response::CreatedLink(id) => Ok(id),
            other => Err(Error::unexpected_response(op, other.name())),
        }
    }

    pub fn into_done(self, op: &'static str) -> Result<()> {
        match self {
            Response::Done => Ok(()),
            other => Err(Error::unexpected_response(op, other.name())),
        }
    }
}
