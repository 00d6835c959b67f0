//! Parsing of normalized cell text into typed values.
//!
//! - **datetime**: dates against an ordered list of chrono formats
//! - **numeric**: signed decimal amounts and their rounding

pub mod datetime;
pub mod numeric;

pub use datetime::parse_date_with_formats;
pub use numeric::{AMOUNT_SCALE, number_to_amount, parse_amount, round_amount};
