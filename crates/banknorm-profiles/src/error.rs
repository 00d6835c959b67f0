#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML profile {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid profile '{name}': {message}")]
    Invalid { name: String, message: String },

    #[error("unknown profile '{name}' (known: {known})")]
    UnknownProfile { name: String, known: String },
}

impl ProfileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(name: &str, message: impl Into<String>) -> Self {
        Self::Invalid {
            name: name.to_string(),
            message: message.into(),
        }
    }
}
