//! Error types for column mapping.

use std::fmt;

use banknorm_model::Role;

/// Errors from column mapping. Both variants are fatal to a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// No header label matched any alias of these roles.
    MissingColumn { roles: Vec<Role> },
    /// One column was claimed by two roles.
    AmbiguousColumnMapping {
        column: usize,
        label: String,
        roles: (Role, Role),
    },
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { roles } => {
                let names: Vec<&str> = roles.iter().map(|role| role.as_str()).collect();
                write!(f, "missing required column(s): {}", names.join(", "))
            }
            Self::AmbiguousColumnMapping {
                column,
                label,
                roles: (first, second),
            } => write!(
                f,
                "column {column} ('{label}') matches both {first} and {second}"
            ),
        }
    }
}

impl std::error::Error for MappingError {}
