//! Batch export of every profile to its own file.
//!
//! Files are named after the profile key (`<key>.txt` or `<key>.md`) and are
//! overwritten without warning if they already exist. Export stops at the
//! first filesystem error.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::markdown;
use crate::{render, Registry, Section};

/// The file format written by the exporter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Plain text, identical to the full rendered profile.
    #[default]
    Txt,
    /// Markdown, with a heading and an optional code fence.
    Md,
}

impl ExportFormat {
    /// The file extension, without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Md => "md",
        }
    }
}

/// Options controlling the exported files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// The file format.
    pub format: ExportFormat,
    /// Whether Markdown bodies are fenced as a `text` code block.
    pub code_block: bool,
    /// The Markdown heading level.
    pub heading_level: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Txt,
            code_block: true,
            heading_level: 1,
        }
    }
}

/// A single file the exporter intends to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    key: String,
    path: PathBuf,
    contents: String,
}

impl ExportJob {
    /// The profile key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The destination path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file contents.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Writes the file, replacing any existing file at the same path.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Write`] if the file cannot be written.
    #[instrument(level = "debug", skip(self), fields(key = %self.key))]
    pub fn write(&self) -> Result<(), ExportError> {
        if self.path.exists() {
            debug!(path = %self.path.display(), "overwriting existing file");
        }
        fs::write(&self.path, &self.contents).map_err(|source| ExportError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), "wrote export");
        Ok(())
    }
}

/// Builds the list of files to write, one per profile in registry order.
#[must_use]
pub fn plan(registry: &Registry, dir: &Path, options: &ExportOptions) -> Vec<ExportJob> {
    registry
        .iter()
        .map(|profile| {
            let body = render(profile, Section::Full).to_string();
            let contents = match options.format {
                ExportFormat::Txt => body,
                ExportFormat::Md => markdown::wrap(
                    profile.key(),
                    &body,
                    options.heading_level,
                    options.code_block,
                ),
            };
            ExportJob {
                key: profile.key().to_string(),
                path: dir.join(format!("{}.{}", profile.key(), options.format.extension())),
                contents,
            }
        })
        .collect()
}

/// Creates the output directory and any missing parents.
///
/// # Errors
///
/// Returns [`ExportError::CreateDir`] if the directory cannot be created.
pub fn prepare_dir(dir: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Renders every profile and writes each to its own file in `dir`.
///
/// Returns the written paths in registry order.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a file cannot be
/// written. Files written before the failure are left in place.
#[instrument(level = "debug", skip(registry, options))]
pub fn export_all(
    registry: &Registry,
    dir: &Path,
    options: &ExportOptions,
) -> Result<Vec<PathBuf>, ExportError> {
    prepare_dir(dir)?;

    let mut written = Vec::with_capacity(registry.len());
    for job in plan(registry, dir, options) {
        job.write()?;
        written.push(job.path);
    }
    Ok(written)
}

/// Errors raised while exporting profiles.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The output directory could not be created.
    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// A profile file could not be written.
    #[error("failed to write {}", .path.display())]
    Write {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}
