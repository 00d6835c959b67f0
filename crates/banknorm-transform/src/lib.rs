//! Row-level normalization for bank statement data.
//!
//! This crate turns the cells of one data row into a canonical record:
//!
//! - **cell**: cell text extraction, amount text cleanup and payee sanitizing
//! - **normalization**: date parsing against ordered formats and decimal amount parsing
//! - **record**: the [`RecordNormalizer`] applying both to a mapped row

pub mod cell;
pub mod normalization;
pub mod record;

pub use cell::{cell_text, normalize_amount_text, sanitize_payee};
pub use normalization::{number_to_amount, parse_amount, parse_date_with_formats, round_amount};
pub use record::RecordNormalizer;
