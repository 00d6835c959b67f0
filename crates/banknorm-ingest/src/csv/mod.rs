//! CSV reading utilities.

mod reader;

pub use reader::{decode_text, parse_csv_text, read_csv_rows, sniff_delimiter};
