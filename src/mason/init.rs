//! # Startup
//!
//! Resolves where configuration and data live, loads [`MasonConfig`] and
//! builds the file-backed [`MasonApi`].
//!
//! ## Directory Resolution
//!
//! - **Config directory**: `MASON_CONFIG_DIR` if set, else the OS config
//!   directory from `directories::ProjectDirs` (e.g. `~/.config/mason` on
//!   Linux). `mason.toml` is read from there when present.
//! - **Data directory**: the `--data-dir` flag, else `data_dir` from the
//!   configuration (`MASON_DATA_DIR` or `mason.toml`), else the OS data
//!   directory (e.g. `~/.local/share/mason`).
//!
//! Nothing is created at startup; the data directory appears on first save.

use crate::api::MasonApi;
use crate::config::MasonConfig;
use crate::error::{MasonError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_ENV: &str = "MASON_CONFIG_DIR";

pub struct MasonContext {
    pub api: MasonApi<FileStore>,
    pub data_dir: PathBuf,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "mason", "mason")
}

pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn default_data_dir() -> Result<PathBuf> {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            MasonError::Config(
                "could not determine a data directory; set MASON_DATA_DIR or pass --data-dir"
                    .to_string(),
            )
        })
}

/// Loads configuration from the environment and the default config directory.
pub fn initialize(data_override: Option<&Path>) -> Result<MasonContext> {
    initialize_from(config_dir().as_deref(), data_override)
}

pub fn initialize_from(config_dir: Option<&Path>, data_override: Option<&Path>) -> Result<MasonContext> {
    let config = MasonConfig::load(config_dir)?;
    build_context(config, data_override)
}

fn build_context(config: MasonConfig, data_override: Option<&Path>) -> Result<MasonContext> {
    let data_dir = match (data_override, config.data_dir.as_ref()) {
        (Some(dir), _) => dir.to_path_buf(),
        (None, Some(dir)) => dir.clone(),
        (None, None) => default_data_dir()?,
    };
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    let store = FileStore::new(data_dir.clone())
        .with_file_names(&config.contacts_file, &config.notes_file);
    let config = config.with_data_dir(data_dir.clone());

    Ok(MasonContext {
        api: MasonApi::new(store, config),
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn override_wins_over_config() {
        let data = tempdir().unwrap();
        let config = MasonConfig::default().with_data_dir(PathBuf::from("/nonexistent/mason"));
        let ctx = build_context(config, Some(data.path())).unwrap();
        assert_eq!(ctx.data_dir, data.path());
        assert_eq!(ctx.api.config().data_dir.as_deref(), Some(data.path()));
    }

    #[test]
    fn config_data_dir_is_used_without_override() {
        let config = MasonConfig::default().with_data_dir(PathBuf::from("/srv/mason"));
        let ctx = build_context(config, None).unwrap();
        assert_eq!(ctx.data_dir, PathBuf::from("/srv/mason"));
    }

    #[test]
    fn configured_file_names_reach_the_store() {
        let dir = tempdir().unwrap();
        let config = MasonConfig {
            contacts_file: "people.json".into(),
            ..Default::default()
        };
        let mut ctx = build_context(config, Some(dir.path())).unwrap();
        ctx.api
            .add_contact(crate::api::ContactDraft {
                name: "Jane Doe".into(),
                ..Default::default()
            })
            .unwrap();
        assert!(dir.path().join("people.json").exists());
    }
}
