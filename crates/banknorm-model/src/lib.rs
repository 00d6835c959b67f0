//! Shared data model for bank statement normalization.
//!
//! Raw document rows come in as [`RawRow`]s, a [`LayoutProfile`] describes
//! how one bank lays out its export, and every data row ends up either as a
//! [`CanonicalRecord`] or as a [`SkipOutcome`].

pub mod cell;
pub mod error;
pub mod profile;
pub mod record;

pub use cell::{CellValue, RawRow};
pub use error::{ModelError, Result};
pub use profile::{DecimalConvention, HeaderRule, LayoutProfile, Role, RoleAliases};
pub use record::{CANONICAL_DATE_FORMAT, CanonicalRecord, ColumnIndex, SkipOutcome, SkipReason};
