//! JSON file implementation of [`ConfigStore`].
//!
//! Layout inside the plugin data directory:
//!
//! ```text
//! <data dir>/
//!  ├─ config.json                 current configuration
//!  └─ bak_config_2024.05.17.json  pre-migration copy, at most one per day
//! ```
//!
//! # Why no HTML escaping?
//!
//! Sign text uses `&` as the colour-code prefix (`&6ContainerSort`).  Some
//! JSON libraries escape it as `\u0026`, which makes the file painful to edit
//! by hand.  `serde_json` never escapes HTML characters, so the pretty printer
//! output is written as-is.

use std::fs::{self, File, OpenOptions};
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use containersort_core::Configuration;
use tracing::debug;

use super::{ConfigError, ConfigStore};

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// `chrono` format for the date part of a backup file name (`yyyy.MM.dd`).
const BACKUP_DATE_FORMAT: &str = "%Y.%m.%d";

/// Stores `config.json` and its backups in one directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    directory: PathBuf,
    config_file: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for `<directory>/config.json`.
    ///
    /// Nothing is touched on disk until an operation is called.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        let directory = directory.into();
        let config_file = directory.join(CONFIG_FILE_NAME);
        Self {
            directory,
            config_file,
        }
    }

    /// Path of the config file.
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Path of the backup file for `date`, e.g. `bak_config_2024.05.17.json`.
    pub fn backup_path(&self, date: NaiveDate) -> PathBuf {
        self.directory
            .join(format!("bak_config_{}.json", date.format(BACKUP_DATE_FORMAT)))
    }
}

impl ConfigStore for JsonFileStore {
    fn location(&self) -> PathBuf {
        self.config_file.clone()
    }

    fn exists(&self) -> bool {
        self.config_file.exists()
    }

    fn create(&self) -> Result<(), ConfigError> {
        // `create_new` refuses to truncate a file that already exists.
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.config_file)
            .map_err(|source| ConfigError::CreateFile {
                path: self.config_file.clone(),
                source,
            })?;
        debug!(path = %self.config_file.display(), "created config file");
        Ok(())
    }

    fn read(&self) -> Result<String, ConfigError> {
        let to_err = |source: std::io::Error| ConfigError::Read {
            path: self.config_file.clone(),
            source,
        };
        let mut file = File::open(&self.config_file).map_err(to_err)?;
        let mut content = String::new();
        file.read_to_string(&mut content).map_err(to_err)?;
        Ok(content)
    }

    fn save(&self, config: &Configuration) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_file, content).map_err(|source| ConfigError::Write {
            path: self.config_file.clone(),
            source,
        })?;
        debug!(path = %self.config_file.display(), "saved config file");
        Ok(())
    }

    fn backup(&self, date: NaiveDate) -> Result<Option<PathBuf>, ConfigError> {
        let backup = self.backup_path(date);
        if backup.exists() {
            return Ok(None);
        }
        fs::copy(&self.config_file, &backup).map_err(|source| ConfigError::Write {
            path: backup.clone(),
            source,
        })?;
        Ok(Some(backup))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    // ── Paths ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_config_file_is_config_json_in_directory() {
        let store = JsonFileStore::new("/data/ContainerSort");
        assert_eq!(store.config_file(), Path::new("/data/ContainerSort/config.json"));
        assert_eq!(store.location(), PathBuf::from("/data/ContainerSort/config.json"));
    }

    #[test]
    fn test_backup_path_uses_zero_padded_dotted_date() {
        // Arrange
        let store = JsonFileStore::new("/data");

        // Act
        let path = store.backup_path(date(2024, 5, 7));

        // Assert
        assert_eq!(path, PathBuf::from("/data/bak_config_2024.05.07.json"));
    }

    // ── File operations ───────────────────────────────────────────────────────

    #[test]
    fn test_create_then_read_returns_empty_text() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path());

        // Act
        store.create().expect("create");

        // Assert
        assert!(store.exists());
        assert_eq!(store.read().expect("read"), "");
    }

    #[test]
    fn test_create_fails_when_file_already_exists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path());
        fs::write(store.config_file(), "keep me").expect("seed");

        let result = store.create();

        assert!(matches!(result, Err(ConfigError::CreateFile { .. })));
        assert_eq!(fs::read_to_string(store.config_file()).expect("read"), "keep me");
    }

    #[test]
    fn test_create_fails_when_directory_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("missing"));
        assert!(matches!(store.create(), Err(ConfigError::CreateFile { .. })));
    }

    #[test]
    fn test_read_missing_file_is_read_error_with_original_message() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path());

        // Act
        let err = store.read().expect_err("file is missing");

        // Assert
        let ConfigError::Read { source, .. } = &err else {
            panic!("expected Read error, got {err:?}");
        };
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains(&source.to_string()));
    }

    #[test]
    fn test_read_invalid_utf8_is_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path());
        fs::write(store.config_file(), [0xff_u8, 0xfe, 0x00]).expect("seed");

        assert!(matches!(store.read(), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_save_writes_pretty_json_with_raw_ampersands() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path());
        let cfg = Configuration::defaults("1.0");

        // Act
        store.save(&cfg).expect("save");
        let text = fs::read_to_string(store.config_file()).expect("read");

        // Assert
        assert!(text.starts_with("{\n  \"pluginVersion\": \"1.0\""), "{text}");
        assert!(text.contains("&f[&6ContainerSort&f]"));
        let restored: Configuration = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(restored, cfg);
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path());
        fs::write(store.config_file(), "x".repeat(10_000)).expect("seed");

        store.save(&Configuration::defaults("2.0")).expect("save");

        let restored: Configuration =
            serde_json::from_str(&store.read().expect("read")).expect("deserialize");
        assert_eq!(restored.plugin_version, "2.0");
    }

    #[test]
    fn test_backup_copies_bytes_verbatim() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path());
        let original = b"{ \"pluginVersion\": \"0.1\" }\n";
        fs::write(store.config_file(), original).expect("seed");

        // Act
        let created = store.backup(date(2024, 1, 31)).expect("backup");

        // Assert
        let path = created.expect("backup must be created");
        assert_eq!(path, dir.path().join("bak_config_2024.01.31.json"));
        assert_eq!(fs::read(&path).expect("read backup"), original);
    }

    #[test]
    fn test_second_backup_on_same_day_is_skipped() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path());
        fs::write(store.config_file(), "first").expect("seed");
        store.backup(date(2024, 1, 31)).expect("first backup");
        fs::write(store.config_file(), "second").expect("rewrite");

        // Act
        let created = store.backup(date(2024, 1, 31)).expect("second backup");

        // Assert
        assert_eq!(created, None);
        let kept = fs::read_to_string(store.backup_path(date(2024, 1, 31))).expect("read");
        assert_eq!(kept, "first");
    }

    #[test]
    fn test_backups_on_different_days_are_separate_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path());
        fs::write(store.config_file(), "content").expect("seed");

        assert!(store.backup(date(2024, 1, 31)).expect("day one").is_some());
        assert!(store.backup(date(2024, 2, 1)).expect("day two").is_some());
    }

    #[test]
    fn test_backup_without_config_file_is_write_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path());
        assert!(matches!(
            store.backup(date(2024, 1, 31)),
            Err(ConfigError::Write { .. })
        ));
    }
}
