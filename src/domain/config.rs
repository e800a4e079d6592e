use std::{
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::storage::ExportFormat;

/// Output preferences for the command-line tools.
///
/// Configuration is optional. It never adds or changes profiles; it only
/// supplies defaults that command-line flags can override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The directory the exporter writes into.
    out_dir: PathBuf,

    /// The file format used by the exporter.
    format: ExportFormat,

    /// Whether Markdown exports wrap the body in a ```` ```text ```` block.
    pub code_block: bool,

    /// The heading level of Markdown exports.
    ///
    /// Clamped to the range 1-6.
    heading_level: u8,

    /// Whether search ignores case unless told otherwise.
    pub ignore_case: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            format: ExportFormat::default(),
            code_block: true,
            heading_level: default_heading_level(),
            ignore_case: false,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The directory the exporter writes into.
    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Sets the export directory.
    pub fn set_out_dir(&mut self, out_dir: impl Into<PathBuf>) {
        self.out_dir = out_dir.into();
    }

    /// The file format used by the exporter.
    #[must_use]
    pub const fn format(&self) -> ExportFormat {
        self.format
    }

    /// Sets the export format.
    pub const fn set_format(&mut self, format: ExportFormat) {
        self.format = format;
    }

    /// The heading level of Markdown exports, between 1 and 6.
    #[must_use]
    pub fn heading_level(&self) -> u8 {
        self.heading_level.clamp(1, 6)
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("exports")
}

const fn default_heading_level() -> u8 {
    1
}

const fn default_true() -> bool {
    true
}

/// Errors raised while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("failed to read config file {}", .path.display())]
    Read {
        /// The file that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The configuration file could not be written.
    #[error("failed to write config file {}", .path.display())]
    Write {
        /// The file that was written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_out_dir")]
        out_dir: PathBuf,

        #[serde(default)]
        format: ExportFormat,

        #[serde(default = "default_true")]
        code_block: bool,

        /// Markdown heading level for exported files.
        #[serde(default = "default_heading_level")]
        heading_level: u8,

        #[serde(default)]
        ignore_case: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                out_dir,
                format,
                code_block,
                heading_level,
                ignore_case,
            } => Self {
                out_dir,
                format,
                code_block,
                heading_level,
                ignore_case,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            out_dir: config.out_dir,
            format: config.format,
            code_block: config.code_block,
            heading_level: config.heading_level,
            ignore_case: config.ignore_case,
        }
    }
}
