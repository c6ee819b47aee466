use super::*;

/// List inventory items, one page at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchInventoryItems {
    /// 1-based page number
    pub page: usize,

    pub page_size: usize,
}

impl From<FetchInventoryItems> for Operation {
    fn from(value: FetchInventoryItems) -> Self {
        Self::FetchInventoryItems(value)
    }
}
