use serde_json::Value;
use std::{fmt, sync::Arc};

/// How a column reads its value from a row.
pub enum Accessor<T> {
    /// Top-level key of the row's serialized form
    Key(String),

    /// Computed from the row
    Fn(Arc<dyn Fn(&T) -> Value + Send + Sync>),
}

/// Renders a cell from its row and accessor value.
pub type CellRenderer<T> = Arc<dyn Fn(&T, &Value) -> String + Send + Sync>;

pub struct Column<T> {
    pub header: String,
    pub accessor: Accessor<T>,
    pub cell: Option<CellRenderer<T>>,
    pub footer: Option<String>,
    pub sortable: bool,
}

impl<T> Column<T> {
    /// A column showing one key of the serialized row.
    pub fn key(header: impl Into<String>, key: impl Into<String>) -> Column<T> {
        Column::new(header, Accessor::Key(key.into()))
    }

    /// A column whose value is computed from the row.
    pub fn computed(
        header: impl Into<String>,
        f: impl Fn(&T) -> Value + Send + Sync + 'static,
    ) -> Column<T> {
        Column::new(header, Accessor::Fn(Arc::new(f)))
    }

    fn new(header: impl Into<String>, accessor: Accessor<T>) -> Column<T> {
        Column {
            header: header.into(),
            accessor,
            cell: None,
            footer: None,
            sortable: true,
        }
    }

    pub fn cell(mut self, f: impl Fn(&T, &Value) -> String + Send + Sync + 'static) -> Column<T> {
        self.cell = Some(Arc::new(f));
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Column<T> {
        self.footer = Some(footer.into());
        self
    }

    pub fn unsortable(mut self) -> Column<T> {
        self.sortable = false;
        self
    }

    /// Accessor value for a row; `record` is the row's serialized form.
    pub(crate) fn value(&self, row: &T, record: &Value) -> Value {
        match &self.accessor {
            Accessor::Key(key) => record.get(key).cloned().unwrap_or(Value::Null),
            Accessor::Fn(f) => f(row),
        }
    }

    pub(crate) fn render(&self, row: &T, value: &Value) -> String {
        match &self.cell {
            Some(cell) => cell(row, value),
            None => plain_text(value),
        }
    }
}

/// Text of a JSON value without quotes; `null` renders empty.
pub(crate) fn plain_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Key(key) => Accessor::Key(key.clone()),
            Accessor::Fn(f) => Accessor::Fn(f.clone()),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Column {
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            cell: self.cell.clone(),
            footer: self.footer.clone(),
            sortable: self.sortable,
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Accessor::Fn(_) => f.write_str("Fn(..)"),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("cell", &self.cell.as_ref().map(|_| ".."))
            .field("footer", &self.footer)
            .field("sortable", &self.sortable)
            .finish()
    }
}
