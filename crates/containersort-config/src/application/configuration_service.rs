//! ConfigurationService: owns the lifecycle of `config.json`.
//!
//! The service keeps exactly one active [`Configuration`] in memory and makes
//! sure the file on disk belongs to the running plugin version.
//!
//! # Lifecycle
//!
//! ```text
//! new()
//!  ├─ config.json missing  → create file, save defaults, active = defaults
//!  └─ config.json present  → load_and_migrate()
//!
//! load_and_migrate()
//!  ├─ read file            (I/O error → returned to caller)
//!  ├─ parse JSON           (empty / invalid / non-object → needs migration)
//!  ├─ version matches      → active = parsed file
//!  └─ needs migration      → backup (once per day), save defaults,
//!                            active = defaults
//! ```
//!
//! # What is a migration? (for beginners)
//!
//! Whenever the plugin is updated, the stored `pluginVersion` no longer
//! matches the running build.  Rather than trying to merge old settings into
//! a new schema, the old file is copied to `bak_config_<yyyy.MM.dd>.json` and
//! replaced with fresh defaults.  The operator can copy settings back by hand.
//!
//! # Error policy
//!
//! Only two failures reach the caller: the file could not be created on first
//! run, or it could not be read.  Backup and save failures are logged with
//! `tracing::warn!` and the in-memory configuration is still replaced.
//!
//! # Threading
//!
//! The service performs blocking file I/O and holds no locks.  Callers
//! sharing one instance between threads must wrap it in their own `Mutex`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use containersort_core::Configuration;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::infrastructure::clock::{Clock, SystemClock};
use crate::infrastructure::host::PluginHost;
use crate::infrastructure::storage::{ConfigError, ConfigStore, JsonFileStore};

/// Loads, defaults, migrates, and backs up the plugin configuration.
pub struct ConfigurationService {
    store: Box<dyn ConfigStore>,
    clock: Box<dyn Clock>,
    config_path: PathBuf,
    /// Built from the host version on construction, never read from disk.
    default_config: Configuration,
    configuration: Arc<Configuration>,
}

impl ConfigurationService {
    /// Creates the service for `host`, storing `config.json` directly in the
    /// host's data directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CreateFile`] if the file is missing and cannot
    /// be created, or [`ConfigError::Read`] if it exists but cannot be read.
    pub fn new(host: &dyn PluginHost) -> Result<Self, ConfigError> {
        let store = JsonFileStore::new(host.data_directory());
        Self::with_parts(host.version(), Box::new(store), Box::new(SystemClock))
    }

    /// Creates the service with explicit collaborators.
    ///
    /// `host_version` is the raw host-reported version; any pre-release
    /// suffix is stripped before it is stored or compared.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigurationService::new`].
    pub fn with_parts(
        host_version: Option<&str>,
        store: Box<dyn ConfigStore>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        let default_config = Configuration::for_host_version(host_version);
        let config_path = store.location();

        let mut service = Self {
            store,
            clock,
            config_path,
            configuration: Arc::new(default_config.clone()),
            default_config,
        };

        if service.store.exists() {
            service.configuration = Arc::new(service.load_and_migrate()?);
        } else {
            service.store.create()?;
            info!(
                path = %service.config_path.display(),
                version = %service.default_config.plugin_version,
                "no config file found; writing defaults"
            );
            service.save_best_effort(&service.default_config);
        }

        Ok(service)
    }

    /// Re-reads `config.json`, migrating it if necessary, and replaces the
    /// active configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read.  The
    /// previously active configuration stays in place in that case.
    pub fn reload_config(&mut self) -> Result<(), ConfigError> {
        let reloaded = self.load_and_migrate()?;
        self.configuration = Arc::new(reloaded);
        debug!(path = %self.config_path.display(), "config reloaded");
        Ok(())
    }

    /// Returns the active configuration.
    ///
    /// The handle is a snapshot: a later reload swaps in a new value and does
    /// not affect handles already given out.
    pub fn configuration(&self) -> Arc<Configuration> {
        Arc::clone(&self.configuration)
    }

    /// Returns the hard-coded defaults for the running plugin version.
    pub fn default_configuration(&self) -> &Configuration {
        &self.default_config
    }

    /// Path of the managed `config.json`.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn load_and_migrate(&self) -> Result<Configuration, ConfigError> {
        let content = self.store.read()?;
        let current_version = &self.default_config.plugin_version;

        match parse_configuration(&content, &self.config_path) {
            Some(loaded) if loaded.is_current(current_version) => {
                debug!(path = %self.config_path.display(), "loaded config file");
                return Ok(loaded);
            }
            Some(loaded) => info!(
                path = %self.config_path.display(),
                found = %loaded.plugin_version,
                current = %current_version,
                "config file belongs to another plugin version; migrating"
            ),
            None => info!(
                path = %self.config_path.display(),
                "config file has no usable content; migrating"
            ),
        }

        self.backup_best_effort();
        self.save_best_effort(&self.default_config);
        Ok(self.default_config.clone())
    }

    fn backup_best_effort(&self) {
        match self.store.backup(self.clock.today()) {
            Ok(Some(backup)) => info!(backup = %backup.display(), "backed up old config file"),
            Ok(None) => debug!("backup for today already exists; keeping it"),
            Err(e) => warn!(error = %e, "failed to back up config file; continuing"),
        }
    }

    fn save_best_effort(&self, config: &Configuration) {
        if let Err(e) = self.store.save(config) {
            warn!(error = %e, "failed to save config file; keeping in-memory config");
        }
    }
}

/// Parses the text of `config.json`.
///
/// Returns `None` for anything that does not describe a configuration:
/// an empty file, a literal `null`, malformed JSON, or a non-object value.
fn parse_configuration(content: &str, path: &Path) -> Option<Configuration> {
    if content.trim().is_empty() {
        return None;
    }
    let value = match serde_json::from_str::<Value>(content) {
        Ok(value) => value,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "config file is not valid JSON");
            return None;
        }
    };
    // Derived struct deserializers also accept arrays; only an object is a
    // configuration document.
    if !value.is_object() {
        warn!(path = %path.display(), "config file is not a JSON object");
        return None;
    }
    match serde_json::from_value::<Configuration>(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "config file does not match the expected shape");
            None
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
