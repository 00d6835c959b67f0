//! Bank statement conversion pipeline.
//!
//! Wires the header locator, column mapper and record normalizer into one
//! pure conversion from raw rows and a layout profile to canonical records
//! plus per-row skip outcomes.
//!
//! # Example
//!
//! ```ignore
//! use banknorm_core::convert;
//!
//! let conversion = convert(&rows, &profile)?;
//! for skip in &conversion.skipped {
//!     eprintln!("{skip}");
//! }
//! ```

pub mod detect;
pub mod error;
pub mod pipeline;

pub use detect::{convert_auto, detect_profile};
pub use error::{ConvertError, FatalKind};
pub use pipeline::{Conversion, convert};
