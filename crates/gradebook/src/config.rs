//! Gradebook configuration.
//!
//! ## Example
//!
//! ```ignore
//! use gradebook::config::GradebookConfig;
//!
//! let config = GradebookConfig::builder()
//!     .data_dir("journal")
//!     .identity_column("Name")
//!     .class_column("Class")
//!     .build();
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default snapshot key, shared with snapshots written by earlier versions
pub const DEFAULT_SNAPSHOT_KEY: &str = "gradeBook";

/// Names of the two columns every record carries.
///
/// They are matched by name against input headers and written back as
/// snapshot keys and export headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservedColumns {
    pub identity: String,
    pub class_label: String,
}

impl Default for ReservedColumns {
    fn default() -> Self {
        Self {
            identity: "ФИО".to_string(),
            class_label: "Класс".to_string(),
        }
    }
}

impl ReservedColumns {
    pub fn new(identity: impl Into<String>, class_label: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            class_label: class_label.into(),
        }
    }

    /// Whether `name` is one of the reserved columns
    pub fn contains(&self, name: &str) -> bool {
        name == self.identity || name == self.class_label
    }
}

/// Configuration for a gradebook instance
#[derive(Debug, Clone)]
pub struct GradebookConfig {
    /// Directory holding the persisted snapshot
    pub data_dir: PathBuf,
    /// Key the snapshot is stored under
    pub snapshot_key: String,
    /// Reserved column names
    pub reserved: ReservedColumns,
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            snapshot_key: DEFAULT_SNAPSHOT_KEY.to_string(),
            reserved: ReservedColumns::default(),
        }
    }
}

impl GradebookConfig {
    /// Create a new configuration builder
    pub fn builder() -> GradebookConfigBuilder {
        GradebookConfigBuilder::default()
    }
}

/// Builder for GradebookConfig
#[derive(Debug, Clone, Default)]
pub struct GradebookConfigBuilder {
    data_dir: Option<PathBuf>,
    snapshot_key: Option<String>,
    identity_column: Option<String>,
    class_column: Option<String>,
}

impl GradebookConfigBuilder {
    /// Set the data directory
    pub fn data_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.into());
        self
    }

    /// Set the snapshot key
    pub fn snapshot_key<S: Into<String>>(mut self, key: S) -> Self {
        self.snapshot_key = Some(key.into());
        self
    }

    /// Set the identity column name
    pub fn identity_column<S: Into<String>>(mut self, name: S) -> Self {
        self.identity_column = Some(name.into());
        self
    }

    /// Set the class column name
    pub fn class_column<S: Into<String>>(mut self, name: S) -> Self {
        self.class_column = Some(name.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> GradebookConfig {
        let default = GradebookConfig::default();
        GradebookConfig {
            data_dir: self.data_dir.unwrap_or(default.data_dir),
            snapshot_key: self.snapshot_key.unwrap_or(default.snapshot_key),
            reserved: ReservedColumns {
                identity: self
                    .identity_column
                    .unwrap_or(default.reserved.identity),
                class_label: self
                    .class_column
                    .unwrap_or(default.reserved.class_label),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = GradebookConfig::builder().build();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.snapshot_key, "gradeBook");
        assert_eq!(config.reserved, ReservedColumns::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = GradebookConfig::builder()
            .data_dir("/tmp/journal")
            .snapshot_key("journal")
            .identity_column("Name")
            .build();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/journal"));
        assert_eq!(config.snapshot_key, "journal");
        assert_eq!(config.reserved.identity, "Name");
        assert_eq!(config.reserved.class_label, "Класс");
    }

    #[test]
    fn test_reserved_contains() {
        let reserved = ReservedColumns::new("Name", "Class");
        assert!(reserved.contains("Name"));
        assert!(reserved.contains("Class"));
        assert!(!reserved.contains("Math"));
    }
}
