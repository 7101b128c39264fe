//! # Configuration
//!
//! Mason configuration is loaded with [`confique`], layering environment
//! variables over an optional TOML file over compiled defaults.
//!
//! ## Sources
//!
//! Resolved in priority order:
//! 1. **Command line**: `--data-dir` replaces `data_dir` after loading.
//! 2. **Environment variables**: `MASON_DATA_DIR`, `MASON_BIRTHDAY_WINDOW`,
//!    `MASON_CONTACTS_FILE`, `MASON_NOTES_FILE`.
//! 3. **Config file**: `mason.toml` in the config directory (OS default, or
//!    `MASON_CONFIG_DIR`).
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data directory | Where `contacts.json` and `notes.json` live |
//! | `birthday_window` | `7` | Days ahead `mason birthdays` looks by default |
//! | `contacts_file` | `contacts.json` | Contact snapshot file name |
//! | `notes_file` | `notes.json` | Note snapshot file name |

use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::error::{MasonError, Result};
use crate::store::fs::{DEFAULT_CONTACTS_FILE, DEFAULT_NOTES_FILE};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "mason.toml";

/// Configuration for mason, stored in `mason.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MasonConfig {
    /// Directory holding the snapshots. Unset means the OS data directory.
    #[config(env = "MASON_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Default lookahead for upcoming birthdays, in days.
    ///
    /// The `default` literals here mirror `DEFAULT_WINDOW_DAYS` and the
    /// `FileStore` file names, which `Default` uses directly.
    #[config(env = "MASON_BIRTHDAY_WINDOW", default = 7)]
    pub birthday_window: u32,

    #[config(env = "MASON_CONTACTS_FILE", default = "contacts.json")]
    pub contacts_file: String,

    #[config(env = "MASON_NOTES_FILE", default = "notes.json")]
    pub notes_file: String,
}

impl Default for MasonConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            birthday_window: DEFAULT_WINDOW_DAYS,
            contacts_file: DEFAULT_CONTACTS_FILE.to_string(),
            notes_file: DEFAULT_NOTES_FILE.to_string(),
        }
    }
}

impl MasonConfig {
    /// Environment, then `mason.toml` in `config_dir` (if any), then defaults.
    pub fn load(config_dir: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(dir) = config_dir {
            builder = builder.file(dir.join(CONFIG_FILENAME));
        }
        builder.load().map_err(|e| MasonError::Config(e.to_string()))
    }

    /// Only `path`, then defaults. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::builder()
            .file(path)
            .load()
            .map_err(|e| MasonError::Config(e.to_string()))
    }

    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = Some(dir);
        self
    }

    /// Every setting as `(key, value)`, in table order.
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "data_dir",
                self.data_dir
                    .as_ref()
                    .map(|d| d.display().to_string())
                    .unwrap_or_else(|| "(default)".to_string()),
            ),
            ("birthday_window", self.birthday_window.to_string()),
            ("contacts_file", self.contacts_file.clone()),
            ("notes_file", self.notes_file.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = MasonConfig::from_file(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, MasonConfig::default());
    }

    #[test]
    fn file_defaults_agree_with_the_store() {
        let dir = tempdir().unwrap();
        let config = MasonConfig::from_file(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config.birthday_window, DEFAULT_WINDOW_DAYS);
        assert_eq!(config.contacts_file, DEFAULT_CONTACTS_FILE);
        assert_eq!(config.notes_file, DEFAULT_NOTES_FILE);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "birthday_window = 14\nnotes_file = \"memo.json\"\n").unwrap();

        let config = MasonConfig::from_file(&path).unwrap();
        assert_eq!(config.birthday_window, 14);
        assert_eq!(config.notes_file, "memo.json");
        assert_eq!(config.contacts_file, "contacts.json");
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "birthday_window = \"soon\"\n").unwrap();
        assert!(matches!(
            MasonConfig::from_file(&path),
            Err(MasonError::Config(_))
        ));
    }

    #[test]
    fn list_all_shows_every_key() {
        let config = MasonConfig::default().with_data_dir(PathBuf::from("/tmp/mason"));
        let keys: Vec<&str> = config.list_all().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["data_dir", "birthday_window", "contacts_file", "notes_file"]
        );
        assert_eq!(config.list_all()[0].1, "/tmp/mason");
        assert_eq!(MasonConfig::default().list_all()[0].1, "(default)");
    }
}
