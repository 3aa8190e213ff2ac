//! Configuration resolution: flags, then the TOML file, then defaults.
//!
//! ```toml
//! data_dir = "/home/teacher/journal"
//! snapshot_key = "gradeBook"
//!
//! [columns]
//! identity = "ФИО"
//! class_label = "Класс"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gradebook::{GradebookConfig, ReservedColumns};
use serde::Deserialize;
use tracing::debug;

/// Contents of the optional config file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub data_dir: Option<PathBuf>,
    pub snapshot_key: Option<String>,
    pub columns: Option<ReservedColumns>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gradebook").join("config.toml"))
}

fn default_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("Failed to determine data directory")?;
    Ok(data_dir.join("gradebook"))
}

/// Load settings from a TOML file
pub fn load_settings(path: &Path) -> Result<FileSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Build the effective configuration.
///
/// An explicit config path must exist; the default one is optional.
pub fn resolve(data_dir: Option<&Path>, config_path: Option<&Path>) -> Result<GradebookConfig> {
    let settings = match config_path {
        Some(path) => load_settings(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => load_settings(&path)?,
            _ => FileSettings::default(),
        },
    };

    let data_dir = match data_dir.map(Path::to_path_buf).or(settings.data_dir) {
        Some(dir) => dir,
        None => default_data_dir()?,
    };

    let mut builder = GradebookConfig::builder().data_dir(data_dir);
    if let Some(key) = settings.snapshot_key {
        builder = builder.snapshot_key(key);
    }
    if let Some(columns) = settings.columns {
        builder = builder
            .identity_column(columns.identity)
            .class_column(columns.class_label);
    }

    let config = builder.build();
    debug!("Using data directory {}", config.data_dir.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "data_dir = \"/srv/journal\"\nsnapshot_key = \"journal\"\n\n[columns]\nidentity = \"Name\"\n",
        )
        .unwrap();

        let config = resolve(None, Some(&path)).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/journal"));
        assert_eq!(config.snapshot_key, "journal");
        assert_eq!(config.reserved.identity, "Name");
        assert_eq!(config.reserved.class_label, "Класс");
    }

    #[test]
    fn test_flag_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_dir = \"/srv/journal\"\n").unwrap();

        let config = resolve(Some(Path::new("/tmp/other")), Some(&path)).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/other"));
        assert_eq!(config.snapshot_key, "gradeBook");
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = TempDir::new().unwrap();
        let err = resolve(None, Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "colour = \"red\"\n").unwrap();
        assert!(load_settings(&path).is_err());
    }
}
