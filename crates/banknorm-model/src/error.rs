use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown column role: {0}")]
    UnknownRole(String),
    #[error("unknown decimal convention: {0}")]
    UnknownDecimalConvention(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
