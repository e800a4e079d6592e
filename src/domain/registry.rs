use std::collections::HashSet;

use tracing::debug;

use super::{catalog, Profile};

/// The fixed collection of known profiles.
///
/// Profiles keep their registration order, which is also the display order
/// used by [`Registry::list_keys`]. The registry is never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    profiles: Vec<Profile>,
}

impl Registry {
    /// Builds a registry from profiles in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateKey`] if two profiles share a key.
    pub fn new(profiles: Vec<Profile>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.key()) {
                return Err(RegistryError::DuplicateKey(profile.key().to_string()));
            }
        }
        Ok(Self { profiles })
    }

    /// The registry of built-in profiles: `aztec`, `zama` and `soundness`.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in table is malformed.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(catalog::profiles()?)
    }

    /// Looks up a profile by key.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownProfileError`] if no profile has the given key.
    pub fn get(&self, key: &str) -> Result<&Profile, UnknownProfileError> {
        debug!(key, "looking up profile");
        self.profiles
            .iter()
            .find(|profile| profile.key() == key)
            .ok_or_else(|| UnknownProfileError::new(key, self.list_keys()))
    }

    /// All profile keys, in registration order.
    #[must_use]
    pub fn list_keys(&self) -> Vec<&str> {
        self.profiles.iter().map(Profile::key).collect()
    }

    /// Iterates over the profiles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    /// The number of registered profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the registry holds no profiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Error returned when a profile key is not in the registry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown profile '{key}' (available: {})", .available.join(", "))]
pub struct UnknownProfileError {
    key: String,
    available: Vec<String>,
}

impl UnknownProfileError {
    pub(crate) fn new(key: &str, available: Vec<&str>) -> Self {
        Self {
            key: key.to_string(),
            available: available.into_iter().map(str::to_string).collect(),
        }
    }

    /// The key that was requested.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Errors raised while building a registry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A required text field is empty.
    #[error("profile '{key}' has an empty {field}")]
    EmptyField {
        /// The key of the offending profile.
        key: String,
        /// The name of the empty field.
        field: &'static str,
    },

    /// Two profiles share the same key.
    #[error("duplicate profile key '{0}'")]
    DuplicateKey(String),
}
