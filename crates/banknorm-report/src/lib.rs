//! Output generation for normalized bank statements.
//!
//! Writes canonical records as an unquoted `Date,Payee,Notes,Amount` CSV
//! with backslash escapes, and derives the default output path from the
//! input document.

mod error;
mod paths;
mod writer;

pub use error::ReportError;
pub use paths::{OUTPUT_SUFFIX, output_path_for};
pub use writer::{OUTPUT_HEADER, escape_field, render_records, write_records, write_records_to_path};
