//! Filesystem output for rendered profiles.
//!
//! The [`export`] module writes one file per profile; the [`markdown`]
//! module formats rendered text and the registry for Markdown documents.

pub mod export;
/// Markdown formatting for exports and the profile table.
pub mod markdown;

pub use export::{export_all, ExportError, ExportFormat, ExportJob, ExportOptions};
