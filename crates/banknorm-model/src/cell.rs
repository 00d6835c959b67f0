//! Raw cell and row types produced by document loaders.

use std::fmt;

/// A single cell as read from the source document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Missing or blank cell.
    #[default]
    Empty,
    /// Text content, untrimmed.
    Text(String),
    /// Numeric content from a typed spreadsheet cell.
    Number(f64),
}

impl CellValue {
    /// Builds a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns true for `Empty` and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(value) => value.trim().is_empty(),
            Self::Number(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value.to_string())
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// One row of the source document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    /// 1-based physical row number in the source document.
    pub line: usize,
    pub cells: Vec<CellValue>,
}

impl RawRow {
    pub fn new(line: usize, cells: Vec<CellValue>) -> Self {
        Self { line, cells }
    }

    /// Builds a row from string cells; empty strings become [`CellValue::Empty`].
    pub fn from_strs(line: usize, cells: &[&str]) -> Self {
        Self {
            line,
            cells: cells.iter().map(|cell| CellValue::from(*cell)).collect(),
        }
    }

    /// Returns the cell at `index`, if the row is long enough.
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }

    /// Number of cells that are not blank.
    pub fn non_empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_blank()).count()
    }

    /// True when every cell is blank (or the row has no cells).
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(CellValue::is_blank)
    }
}
