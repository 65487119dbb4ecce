//! Storage infrastructure: `config.json` persistence.
//!
//! This module provides a thin adapter between the configuration service and
//! the file system.  The [`ConfigStore`] trait covers every file operation the
//! service performs:
//!
//! - Checking whether `config.json` exists and creating it on first run.
//! - Reading its raw text.
//! - Writing a [`Configuration`] back as pretty-printed JSON.
//! - Copying the current file to a once-per-day backup before a migration.
//!
//! [`json_file::JsonFileStore`] is the real implementation.  Unit tests for
//! the service substitute a mock so they can simulate a disk that refuses
//! writes.

use std::path::PathBuf;

use chrono::NaiveDate;
use containersort_core::Configuration;
use thiserror::Error;

pub mod json_file;

pub use json_file::JsonFileStore;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `config.json` did not exist and could not be created.
    #[error("could not create config file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but its bytes could not be read as UTF-8 text.
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the config file or a backup copy failed.
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration could not be serialised to JSON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File operations needed by the configuration service.
pub trait ConfigStore {
    /// Full path of the config file, used for logging and display.
    fn location(&self) -> PathBuf;

    /// Returns `true` if the config file exists.
    fn exists(&self) -> bool;

    /// Creates an empty config file.  Fails if it cannot be created.
    fn create(&self) -> Result<(), ConfigError>;

    /// Returns the full text of the config file.
    fn read(&self) -> Result<String, ConfigError>;

    /// Overwrites the config file with `config` as pretty-printed JSON.
    fn save(&self, config: &Configuration) -> Result<(), ConfigError>;

    /// Copies the config file verbatim to the backup slot for `date`.
    ///
    /// Returns the backup path if a copy was made, or `None` if a backup for
    /// that day already exists (it is never overwritten).
    fn backup(&self, date: NaiveDate) -> Result<Option<PathBuf>, ConfigError>;
}
