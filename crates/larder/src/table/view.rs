use super::Direction;

/// Render model of a [`DataTable`](super::DataTable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<HeaderView>,

    /// Rendered cells, one inner vec per visible row
    pub rows: Vec<Vec<String>>,

    /// Present when at least one column has a footer
    pub footers: Option<Vec<String>>,

    pub filter: String,
    pub pager: PagerView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub label: String,
    pub sortable: bool,
    pub sort: Option<Direction>,
}

impl HeaderView {
    /// `▲` / `▼` for the sorted column, empty otherwise.
    pub fn glyph(&self) -> &'static str {
        self.sort.map_or("", Direction::glyph)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerView {
    /// 1-based
    pub page: usize,
    pub page_count: usize,
    pub can_previous: bool,
    pub can_next: bool,
}
