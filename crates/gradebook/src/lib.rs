//! # gradebook
//!
//! Core library for the class gradebook.
//!
//! This crate provides:
//! - Delimited text parsing (comma, semicolon, tab) with encoding detection
//! - A persisted roster store with grade-checked mutations
//! - Per-class and per-subject statistics with natural class ordering
//! - CSV and TSV export
//!
//! ## Example
//!
//! ```ignore
//! use gradebook::prelude::*;
//!
//! let config = GradebookConfig::default();
//! let mut store = GradeStore::open(FileStore::new(&config.data_dir), &config);
//!
//! let table = parse(&decode_input(&std::fs::read("journal.csv")?));
//! store.replace_from_parsed_rows(&table.rows)?;
//! store.edit_field(0, "Математика", "4,5")?;
//!
//! if let Statistics::Report(report) = compute(&store) {
//!     println!("{} classes", report.classes.len());
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod parse;
pub mod persist;
pub mod prelude;
pub mod record;
pub mod snapshot;
pub mod stats;
pub mod store;

pub use config::{GradebookConfig, GradebookConfigBuilder, ReservedColumns};
pub use error::{Error, Result};
pub use export::{CsvExporter, Dialect, ExportFormat, TsvExporter, export};
pub use parse::{ParsedRow, ParsedTable, decode_input, parse};
pub use persist::{FileStore, KeyValueStore, MemoryStore};
pub use record::{GradeCell, Record};
pub use stats::{
    Aggregate, ClassAggregate, GradeDistribution, Histogram, Statistics, StatisticsReport,
    SubjectStatistics, compute,
};
pub use store::{AlwaysConfirm, DeletePrompter, GradeStore, StoreChange};
