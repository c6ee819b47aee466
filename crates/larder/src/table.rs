//! Paginated, filterable, sortable data table.
//!
//! A [`DataTable`] paginates locally unless the caller hands it a
//! [`Pagination`]; then `data` is taken to be the current page and every pager
//! control reports the 1-based target page through `on_page_change`. Filtering
//! and sorting only ever see the rows currently held.

mod column;
pub use column::{Accessor, CellRenderer, Column};

mod pagination;
pub use pagination::Pagination;

mod sort;
pub use sort::{Direction, SortState};

mod view;
pub use view::{HeaderView, PagerView, TableView};

use crate::Config;

use log::warn;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

pub struct DataTable<T> {
    columns: Vec<Column<T>>,
    rows: Vec<Row<T>>,
    page_size: usize,

    /// 0-based; only used when paginating locally
    page_index: usize,

    pagination: Option<Pagination>,
    filter: Filter,
    sort: Option<SortState>,
    on_page_change: Option<Box<dyn FnMut(usize) + Send>>,
    on_row_click: Option<Box<dyn FnMut(&T) + Send>>,
}

struct Row<T> {
    data: T,

    /// Serialized form, read by key accessors
    record: Value,
}

enum Filter {
    Local(String),

    /// Text owned by the caller
    Lifted {
        text: String,
        on_change: Box<dyn FnMut(&str) + Send>,
    },
}

impl<T: Serialize> DataTable<T> {
    pub fn new(data: Vec<T>, columns: Vec<Column<T>>) -> DataTable<T> {
        DataTable {
            columns,
            rows: data.into_iter().map(Row::new).collect(),
            page_size: Config::default().page_size,
            page_index: 0,
            pagination: None,
            filter: Filter::Local(String::new()),
            sort: None,
            on_page_change: None,
            on_row_click: None,
        }
    }

    /// Takes the local page size from `config`.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.page_size = config.page_size.max(1);
        self
    }

    /// Switches to server-driven pagination.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn on_page_change(mut self, f: impl FnMut(usize) + Send + 'static) -> Self {
        self.on_page_change = Some(Box::new(f));
        self
    }

    pub fn on_row_click(mut self, f: impl FnMut(&T) + Send + 'static) -> Self {
        self.on_row_click = Some(Box::new(f));
        self
    }

    /// Lifts the filter text to the caller, who receives every edit through
    /// `on_change` and pushes the text back with [`set_filtering`].
    ///
    /// [`set_filtering`]: DataTable::set_filtering
    pub fn with_filtering(
        mut self,
        text: impl Into<String>,
        on_change: impl FnMut(&str) + Send + 'static,
    ) -> Self {
        self.filter = Filter::Lifted {
            text: text.into(),
            on_change: Box::new(on_change),
        };
        self
    }

    /// Replaces the rows, e.g. when a new server page arrives.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.rows = data.into_iter().map(Row::new).collect();
    }

    pub fn set_pagination(&mut self, pagination: Option<Pagination>) {
        self.pagination = pagination;
    }

    /// Updates the filter text from outside the table.
    pub fn set_filtering(&mut self, text: impl Into<String>) {
        let text = text.into();
        let current = match &mut self.filter {
            Filter::Local(current) | Filter::Lifted { text: current, .. } => current,
        };

        if *current != text {
            *current = text;
            self.page_index = 0;
        }
    }

    /// The user typed in the filter box.
    pub fn type_filter(&mut self, text: &str) {
        if let Filter::Lifted { on_change, .. } = &mut self.filter {
            on_change(text);
            return;
        }
        self.set_filtering(text);
    }

    pub fn filter_text(&self) -> &str {
        match &self.filter {
            Filter::Local(text) | Filter::Lifted { text, .. } => text,
        }
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Header click: ascending, descending, unsorted. Unsortable and unknown
    /// columns are ignored.
    pub fn toggle_sort(&mut self, column: usize) {
        if !self.columns.get(column).is_some_and(|column| column.sortable) {
            return;
        }
        self.sort = SortState::toggle(self.sort, column);
    }

    pub fn is_server_paginated(&self) -> bool {
        self.pagination.is_some()
    }

    /// Current page, 0-based.
    pub fn page_index(&self) -> usize {
        match &self.pagination {
            Some(pagination) => pagination.page.saturating_sub(1),
            None => self.page_index.min(self.page_count() - 1),
        }
    }

    /// Number of pages; never less than 1.
    pub fn page_count(&self) -> usize {
        let count = match &self.pagination {
            Some(pagination) => pagination.page_count(),
            None => self.matching().len().div_ceil(self.page_size),
        };
        count.max(1)
    }

    pub fn can_previous(&self) -> bool {
        self.page_index() > 0
    }

    pub fn can_next(&self) -> bool {
        self.page_index() + 1 < self.page_count()
    }

    pub fn first_page(&mut self) -> bool {
        self.can_previous() && self.go_to(0)
    }

    pub fn previous_page(&mut self) -> bool {
        self.can_previous() && self.go_to(self.page_index() - 1)
    }

    pub fn next_page(&mut self) -> bool {
        self.can_next() && self.go_to(self.page_index() + 1)
    }

    pub fn last_page(&mut self) -> bool {
        self.can_next() && self.go_to(self.page_count() - 1)
    }

    /// The user typed in the page number box.
    ///
    /// Empty text means the first page; numbers are 1-based and clamped to the
    /// existing pages. Anything else is ignored.
    pub fn type_page(&mut self, text: &str) -> bool {
        let text = text.trim();
        let index = if text.is_empty() {
            0
        } else {
            match text.parse::<usize>() {
                Ok(page) => page.saturating_sub(1).min(self.page_count() - 1),
                Err(_) => return false,
            }
        };

        self.go_to(index)
    }

    /// Rows of the current page after filtering and sorting.
    pub fn visible_rows(&self) -> Vec<&T> {
        self.visible().into_iter().map(|row| &row.data).collect()
    }

    pub fn render(&self) -> TableView {
        let headers = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| HeaderView {
                label: column.header.clone(),
                sortable: column.sortable,
                sort: self
                    .sort
                    .filter(|sort| sort.column == i)
                    .map(|sort| sort.direction),
            })
            .collect();

        let rows = self
            .visible()
            .into_iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| column.render(&row.data, &column.value(&row.data, &row.record)))
                    .collect()
            })
            .collect();

        let footers = self
            .columns
            .iter()
            .any(|column| column.footer.is_some())
            .then(|| {
                self.columns
                    .iter()
                    .map(|column| column.footer.clone().unwrap_or_default())
                    .collect()
            });

        TableView {
            headers,
            rows,
            footers,
            filter: self.filter_text().to_string(),
            pager: PagerView {
                page: self.page_index() + 1,
                page_count: self.page_count(),
                can_previous: self.can_previous(),
                can_next: self.can_next(),
            },
        }
    }

    /// Row click on the `index`-th visible row.
    pub fn click_row(&mut self, index: usize) -> bool {
        let Some(mut on_row_click) = self.on_row_click.take() else {
            return false;
        };

        let clicked = match self.visible().get(index) {
            Some(row) => {
                on_row_click(&row.data);
                true
            }
            None => false,
        };

        self.on_row_click = Some(on_row_click);
        clicked
    }

    fn go_to(&mut self, index: usize) -> bool {
        if self.pagination.is_none() {
            self.page_index = index;
            return true;
        }

        match &mut self.on_page_change {
            Some(on_page_change) => {
                on_page_change(index + 1);
                true
            }
            None => {
                warn!("server paginated table has no page change handler; page={}", index + 1);
                false
            }
        }
    }

    /// Filtered and sorted rows, before slicing.
    fn matching(&self) -> Vec<&Row<T>> {
        let needle = self.filter_text().trim().to_lowercase();
        let mut rows: Vec<_> = self
            .rows
            .iter()
            .filter(|row| needle.is_empty() || self.row_matches(row, &needle))
            .collect();

        if let Some(sort) = self.sort {
            if let Some(column) = self.columns.get(sort.column) {
                rows.sort_by(|a, b| {
                    sort::compare(
                        &column.value(&a.data, &a.record),
                        &column.value(&b.data, &b.record),
                        sort.direction,
                    )
                });
            }
        }

        rows
    }

    fn visible(&self) -> Vec<&Row<T>> {
        let rows = self.matching();
        if self.pagination.is_some() {
            return rows;
        }

        rows.into_iter()
            .skip(self.page_index() * self.page_size)
            .take(self.page_size)
            .collect()
    }

    fn row_matches(&self, row: &Row<T>, needle: &str) -> bool {
        self.columns.iter().any(|column| {
            let value = column.value(&row.data, &row.record);
            column::plain_text(&value).to_lowercase().contains(needle)
                || column.render(&row.data, &value).to_lowercase().contains(needle)
        })
    }
}

impl<T: Serialize> Row<T> {
    fn new(data: T) -> Row<T> {
        let record = serde_json::to_value(&data).unwrap_or_else(|err| {
            warn!("table row does not serialize; key accessors read null; err={err}");
            Value::Null
        });
        Row { data, record }
    }
}

impl<T> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("page_size", &self.page_size)
            .field("page_index", &self.page_index)
            .field("pagination", &self.pagination)
            .field("sort", &self.sort)
            .finish_non_exhaustive()
    }
}
