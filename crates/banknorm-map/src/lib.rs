//! Column mapping: resolve header labels to the Date, Payee and Amount roles.

mod engine;
mod error;
mod utils;

pub use engine::{ColumnMapper, ColumnMatch, MatchKind, NearMiss};
pub use error::MappingError;
pub use utils::normalize_text;
