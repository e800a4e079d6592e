use std::{fmt, str::FromStr};

/// A part of a profile that can be rendered on its own.
///
/// [`Section::Full`] is the default and stands for every part in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// The overview paragraph.
    Overview,
    /// Assets to protect.
    Assets,
    /// Adversaries.
    Adversaries,
    /// Attack surfaces.
    AttackSurfaces,
    /// Mitigations.
    Mitigations,
    /// The whole threat model.
    #[default]
    Full,
}

impl Section {
    /// Every section, in the order accepted on the command line.
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Assets,
        Self::Adversaries,
        Self::AttackSurfaces,
        Self::Mitigations,
        Self::Full,
    ];

    /// The sections that make up a full threat model, in rendering order.
    pub const BODY: [Self; 5] = [
        Self::Overview,
        Self::Assets,
        Self::Adversaries,
        Self::AttackSurfaces,
        Self::Mitigations,
    ];

    /// The four numbered list sections.
    pub const LISTS: [Self; 4] = [
        Self::Assets,
        Self::Adversaries,
        Self::AttackSurfaces,
        Self::Mitigations,
    ];

    /// The canonical identifier of the section.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Assets => "assets",
            Self::Adversaries => "adversaries",
            Self::AttackSurfaces => "attack_surfaces",
            Self::Mitigations => "mitigations",
            Self::Full => "full",
        }
    }

    /// The human-readable title printed above the section.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Assets => "Assets to protect",
            Self::Adversaries => "Adversaries",
            Self::AttackSurfaces => "Attack surfaces",
            Self::Mitigations => "Mitigations",
            Self::Full => "Threat model",
        }
    }

    /// Whether the section is rendered as a numbered list.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(
            self,
            Self::Assets | Self::Adversaries | Self::AttackSurfaces | Self::Mitigations
        )
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Section names are matched case-insensitively, with `-` and `_`
/// interchangeable. `attacks` is accepted for attack surfaces.
impl FromStr for Section {
    type Err = UnknownSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "overview" => Ok(Self::Overview),
            "assets" => Ok(Self::Assets),
            "adversaries" => Ok(Self::Adversaries),
            "attack_surfaces" | "attacks" => Ok(Self::AttackSurfaces),
            "mitigations" => Ok(Self::Mitigations),
            "full" => Ok(Self::Full),
            _ => Err(UnknownSectionError(s.to_string())),
        }
    }
}

/// Error returned when a section name is not recognised.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error(
    "unknown section '{0}' (expected one of: overview, assets, adversaries, attack_surfaces, \
     mitigations, full)"
)]
pub struct UnknownSectionError(String);

impl UnknownSectionError {
    /// The name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}
