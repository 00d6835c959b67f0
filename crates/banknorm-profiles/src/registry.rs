#![deny(unsafe_code)]

use std::path::Path;

use tracing::debug;

use banknorm_model::LayoutProfile;

use crate::builtin::builtin_profiles;
use crate::error::ProfileError;
use crate::loader::load_profile;
use crate::paths::{profile_dir, profile_path};

/// Ordered set of known layout profiles.
///
/// Order matters: auto-detection tries profiles front to back.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: Vec<LayoutProfile>,
}

impl ProfileRegistry {
    pub fn new(profiles: Vec<LayoutProfile>) -> Self {
        Self { profiles }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_profiles())
    }

    /// Looks a profile up by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&LayoutProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayoutProfile> {
        self.profiles.iter()
    }

    pub fn as_slice(&self) -> &[LayoutProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Adds a profile, replacing any existing one with the same name.
    pub fn insert(&mut self, profile: LayoutProfile) {
        match self
            .profiles
            .iter_mut()
            .find(|existing| existing.name.eq_ignore_ascii_case(&profile.name))
        {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    /// Resolves a profile by name: registry first, then `<dir>/<name>.toml`
    /// in the profile directory.
    pub fn resolve(&self, name: &str) -> Result<LayoutProfile, ProfileError> {
        if let Some(profile) = self.get(name) {
            return Ok(profile.clone());
        }
        if let Some(dir) = profile_dir() {
            return self.resolve_in(&dir, name);
        }
        Err(self.unknown(name))
    }

    /// Resolves a profile by name against an explicit profile directory.
    pub fn resolve_in(&self, dir: &Path, name: &str) -> Result<LayoutProfile, ProfileError> {
        if let Some(profile) = self.get(name) {
            return Ok(profile.clone());
        }
        let path = profile_path(dir, name);
        if !path.is_file() {
            debug!(path = %path.display(), "no profile file");
            return Err(self.unknown(name));
        }
        load_profile(&path)
    }

    fn unknown(&self, name: &str) -> ProfileError {
        ProfileError::UnknownProfile {
            name: name.to_string(),
            known: self.names().join(", "),
        }
    }
}

impl<'a> IntoIterator for &'a ProfileRegistry {
    type Item = &'a LayoutProfile;
    type IntoIter = std::slice::Iter<'a, LayoutProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.profiles.iter()
    }
}
