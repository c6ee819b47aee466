use larder_core::model::ItemsPage;

/// Pagination owned by the caller (server-driven mode).
///
/// The table shows `data` as the current page and reports page changes
/// instead of slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: Option<usize>,
}

impl Pagination {
    /// `total_pages` when known, else `ceil(total_items / page_size)`.
    pub fn page_count(&self) -> usize {
        self.total_pages
            .unwrap_or_else(|| self.total_items.div_ceil(self.page_size.max(1)))
    }
}

impl From<&ItemsPage> for Pagination {
    fn from(page: &ItemsPage) -> Self {
        Pagination {
            page: page.page,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
        }
    }
}
