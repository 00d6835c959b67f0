#![deny(unsafe_code)]

//! Layout profiles: the built-in bank layouts, TOML profile files and the
//! profile directory.

pub mod builtin;
pub mod error;
pub mod loader;
pub mod paths;
pub mod registry;

pub use crate::builtin::builtin_profiles;
pub use crate::error::ProfileError;
pub use crate::loader::{load_profile, parse_profile, validate_profile};
pub use crate::paths::{PROFILE_DIR_ENV_VAR, profile_dir, profile_path};
pub use crate::registry::ProfileRegistry;
