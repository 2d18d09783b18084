//! Shared types used across csvxl.
//! Includes the in-memory `Table`, its `Column`s, and the `Cell` values they hold.
use chrono::NaiveDateTime;

/// A single cell value.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Cell {
    /// Absent data as reported by the CSV source (empty field, `NA`, `NaN`, ...)
    Missing,
    Text(String),
    DateTime(NaiveDateTime),
}

impl Cell {
    pub fn text<S: Into<String>>(s: S) -> Self {
        Cell::Text(s.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

/// Semantic type of a column, as seen by the writer.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ColumnKind {
    Text,
    DateTime,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new<S: Into<String>>(name: S, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// `DateTime` only when every non-blank cell is a date and at least one is.
    pub fn kind(&self) -> ColumnKind {
        let mut saw_date = false;
        for cell in &self.cells {
            match cell {
                Cell::DateTime(_) => saw_date = true,
                Cell::Text(s) if s.is_empty() => {}
                Cell::Missing => {}
                Cell::Text(_) => return ColumnKind::Text,
            }
        }
        if saw_date {
            ColumnKind::DateTime
        } else {
            ColumnKind::Text
        }
    }
}

/// Rectangular table: every column holds the same number of cells.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Build a table from columns. Returns `None` if the columns differ in length.
    pub fn from_columns(columns: Vec<Column>) -> Option<Self> {
        let rows = columns.first().map(|c| c.cells.len()).unwrap_or(0);
        if columns.iter().any(|c| c.cells.len() != rows) {
            return None;
        }
        Some(Self { columns, rows })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Apply `f` to every column, keeping the row count.
    /// `f` must not change the number of cells in a column.
    pub fn map_columns<F>(self, mut f: F) -> Self
    where
        F: FnMut(Column) -> Column,
    {
        let rows = self.rows;
        let columns: Vec<Column> = self.columns.into_iter().map(&mut f).collect();
        debug_assert!(columns.iter().all(|c| c.cells.len() == rows));
        Self { columns, rows }
    }
}
