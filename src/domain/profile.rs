use non_empty_string::NonEmptyString;

use super::{RegistryError, Section};

/// A named threat model.
///
/// A profile is an overview paragraph plus four ordered lists. The order of
/// each list is meaningful: it determines the numbering when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    key: String,
    name: NonEmptyString,
    overview: NonEmptyString,
    assets: Vec<String>,
    adversaries: Vec<String>,
    attack_surfaces: Vec<String>,
    mitigations: Vec<String>,
}

impl Profile {
    /// Creates a profile with empty lists.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyField`] if the key, name or overview is
    /// empty.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        overview: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        let key = key.into();
        let empty = |field| RegistryError::EmptyField {
            key: key.clone(),
            field,
        };

        if key.is_empty() {
            return Err(empty("key"));
        }
        let name = NonEmptyString::new(name.into()).map_err(|_| empty("name"))?;
        let overview = NonEmptyString::new(overview.into()).map_err(|_| empty("overview"))?;

        Ok(Self {
            key,
            name,
            overview,
            assets: Vec::new(),
            adversaries: Vec::new(),
            attack_surfaces: Vec::new(),
            mitigations: Vec::new(),
        })
    }

    /// Sets the assets to protect.
    #[must_use]
    pub fn with_assets<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assets = items.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the adversaries.
    #[must_use]
    pub fn with_adversaries<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.adversaries = items.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the attack surfaces.
    #[must_use]
    pub fn with_attack_surfaces<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attack_surfaces = items.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the mitigations.
    #[must_use]
    pub fn with_mitigations<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mitigations = items.into_iter().map(Into::into).collect();
        self
    }

    /// The registry key, e.g. `aztec`.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The overview paragraph.
    #[must_use]
    pub fn overview(&self) -> &str {
        self.overview.as_str()
    }

    /// Assets to protect.
    #[must_use]
    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    /// Adversaries.
    #[must_use]
    pub fn adversaries(&self) -> &[String] {
        &self.adversaries
    }

    /// Attack surfaces.
    #[must_use]
    pub fn attack_surfaces(&self) -> &[String] {
        &self.attack_surfaces
    }

    /// Mitigations.
    #[must_use]
    pub fn mitigations(&self) -> &[String] {
        &self.mitigations
    }

    /// The items of a list section.
    ///
    /// Returns an empty slice for [`Section::Overview`] and [`Section::Full`],
    /// which are not lists.
    #[must_use]
    pub fn items(&self, section: Section) -> &[String] {
        match section {
            Section::Assets => &self.assets,
            Section::Adversaries => &self.adversaries,
            Section::AttackSurfaces => &self.attack_surfaces,
            Section::Mitigations => &self.mitigations,
            Section::Overview | Section::Full => &[],
        }
    }
}
