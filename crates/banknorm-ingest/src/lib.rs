//! Statement document ingestion.
//!
//! This crate loads bank statement exports into raw rows and locates the
//! header row within noisy leading content.
//!
//! # Features
//!
//! - **CSV Loading**: Delimiter sniffing, UTF-8 with a Windows-1252 fallback
//! - **Spreadsheet Loading**: First worksheet of xls/xlsx/ods workbooks
//! - **Header Location**: Fixed offsets, marker tokens, or a non-empty cell threshold
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use banknorm_ingest::{LoadOptions, load_document, locate_header};
//!
//! let rows = load_document(Path::new("statement.xls"), &LoadOptions::default())?;
//! let header = locate_header(&rows, &profile.header)?;
//! ```

mod csv;
mod error;
mod header;
mod loader;
mod sheet;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use csv::{decode_text, parse_csv_text, read_csv_rows, sniff_delimiter};
pub use loader::{DocumentFormat, LoadOptions, load_document};
pub use sheet::{SHEET_DATETIME_FORMAT, number_text, read_sheet_rows};

// === Header Location ===
pub use header::{header_labels, locate_header, normalize_header};
