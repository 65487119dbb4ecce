//! Host plugin runtime abstraction.
//!
//! The configuration service needs exactly two things from the game server
//! that loads the plugin: the plugin's data directory and the plugin's
//! version string.  [`PluginHost`] exposes only those, so the service never
//! reaches for a global plugin handle and tests can supply a fixed host.

use std::path::{Path, PathBuf};

/// Read-only view of the host runtime consumed by the configuration service.
pub trait PluginHost {
    /// Directory owned by the plugin; `config.json` lives directly inside it.
    fn data_directory(&self) -> &Path;

    /// Version reported by the plugin metadata, possibly with a pre-release
    /// suffix (`"2.3.1-SNAPSHOT"`).  `None` if the host has no metadata.
    fn version(&self) -> Option<&str>;
}

/// A [`PluginHost`] built from fixed values.
///
/// Used by the command-line tool (values come from flags) and by tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHost {
    data_directory: PathBuf,
    version: Option<String>,
}

impl StaticHost {
    /// Creates a host rooted at `data_directory` reporting `version`.
    pub fn new(data_directory: impl Into<PathBuf>, version: Option<String>) -> Self {
        Self {
            data_directory: data_directory.into(),
            version,
        }
    }
}

impl PluginHost for StaticHost {
    fn data_directory(&self) -> &Path {
        &self.data_directory
    }

    fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
