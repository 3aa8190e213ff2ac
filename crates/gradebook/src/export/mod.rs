//! Delimited text export.
//!
//! - **CSV**: comma-separated, identity and class quoted
//! - **TSV**: tab-separated, nothing quoted

mod csv;
mod format;
mod tsv;

pub use csv::CsvExporter;
pub use format::ExportFormat;
pub use tsv::TsvExporter;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::{Error, Result};
use crate::persist::KeyValueStore;
use crate::store::GradeStore;

/// Export dialect
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Csv,
    Tsv,
}

impl Dialect {
    /// Conventional file extension
    pub fn extension(self) -> &'static str {
        match self {
            Dialect::Csv => "csv",
            Dialect::Tsv => "txt",
        }
    }

    pub fn exporter(self) -> &'static dyn ExportFormat {
        match self {
            Dialect::Csv => &CsvExporter,
            Dialect::Tsv => &TsvExporter,
        }
    }
}

/// Serialize the whole store in `dialect`
pub fn export<S: KeyValueStore>(store: &GradeStore<S>, dialect: Dialect) -> Result<String> {
    if store.is_empty() {
        return Err(Error::EmptyStore);
    }
    Ok(dialect
        .exporter()
        .format_rows(store.records(), store.reserved(), store.subjects()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GradebookConfig;
    use crate::persist::MemoryStore;
    use std::str::FromStr;

    #[test]
    fn test_dialect_from_str() {
        assert_eq!(Dialect::from_str("csv").unwrap(), Dialect::Csv);
        assert_eq!(Dialect::from_str("TSV").unwrap(), Dialect::Tsv);
        assert!(Dialect::from_str("xlsx").is_err());
        assert_eq!(Dialect::Tsv.to_string(), "tsv");
        assert_eq!(Dialect::Tsv.extension(), "txt");
    }

    #[test]
    fn test_export_empty_store() {
        let store = GradeStore::new(MemoryStore::new(), &GradebookConfig::default());
        assert!(matches!(export(&store, Dialect::Csv), Err(Error::EmptyStore)));
    }
}
