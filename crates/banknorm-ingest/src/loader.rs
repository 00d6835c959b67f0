//! Document format dispatch.

use std::path::Path;

use tracing::info;

use banknorm_model::{DecimalConvention, RawRow};

use crate::csv::read_csv_rows;
use crate::error::{IngestError, Result};
use crate::sheet::read_sheet_rows;

/// Loader options shared by every document format.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Number of leading physical rows not to load.
    pub start_row: usize,
    /// Render numeric spreadsheet cells as text.
    pub all_text: bool,
    /// Decimal separator used when `all_text` renders a number.
    pub decimal: DecimalConvention,
    /// CSV delimiter; sniffed from the content when `None`.
    pub delimiter: Option<u8>,
}

/// Source document kind, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Csv,
    Spreadsheet,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" | "txt" | "tsv" => Some(Self::Csv),
            "xls" | "xlsx" | "xlsm" | "xlsb" | "ods" => Some(Self::Spreadsheet),
            _ => None,
        }
    }
}

/// Loads every row of a statement document.
pub fn load_document(path: &Path, options: &LoadOptions) -> Result<Vec<RawRow>> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
        extension: path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_string(),
    })?;
    let rows = match format {
        DocumentFormat::Csv => read_csv_rows(path, options)?,
        DocumentFormat::Spreadsheet => read_sheet_rows(path, options)?,
    };
    info!(
        path = %path.display(),
        format = ?format,
        rows = rows.len(),
        "document loaded"
    );
    Ok(rows)
}
