//! Domain models for threat model profiles.
//!
//! This module contains the core domain types: profiles, the registry that
//! holds them, the addressable sections of a profile, and configuration.

mod catalog;

mod config;
pub use config::{Config, Error as ConfigError};

/// Threat model profile records.
pub mod profile;
pub use profile::Profile;

/// The fixed, ordered collection of known profiles.
pub mod registry;
pub use registry::{Registry, RegistryError, UnknownProfileError};

/// Addressable parts of a profile.
pub mod section;
pub use section::{Section, UnknownSectionError};

/// Companion qualitative risk matrices.
pub mod risk;
pub use risk::{RiskCell, RiskLevel, RiskProfile};
