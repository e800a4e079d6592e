//! Web3 Threat Model Profiles
//!
//! A fixed registry of high level threat models for Web3 privacy and
//! soundness projects, rendered as plain text.

pub mod domain;
pub use domain::{
    Config, Profile, Registry, RiskProfile, Section, UnknownProfileError, UnknownSectionError,
};

/// Plain-text rendering of profiles.
pub mod render;
pub use render::{render, render_named, Part, Rendered};

/// Line search across rendered profiles.
pub mod search;

/// Unified diffs between rendered profiles.
pub mod compare;

/// Filesystem output: batch export and Markdown helpers.
pub mod storage;
pub use storage::{export_all, ExportError, ExportFormat, ExportOptions};
