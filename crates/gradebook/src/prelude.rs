//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from gradebook.
//!
//! # Usage
//!
//! ```ignore
//! use gradebook::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Store: `GradeStore`, `StoreChange`, `DeletePrompter`
//! - Records: `Record`, `GradeCell`
//! - Parsing: `parse`, `decode_input`, `ParsedTable`
//! - Statistics: `compute`, `Statistics`, `StatisticsReport`, `Histogram`
//! - Export: `export`, `Dialect`
//! - Persistence backends and configuration
//! - Error handling: `Error`, `Result`

// Configuration
pub use crate::config::{GradebookConfig, ReservedColumns};

// Error handling
pub use crate::error::{Error, Result};

// Store and records
pub use crate::record::{GradeCell, Record};
pub use crate::store::{AlwaysConfirm, DeletePrompter, GradeStore, StoreChange};

// Persistence backends
pub use crate::persist::{FileStore, KeyValueStore, MemoryStore};

// Parsing
pub use crate::parse::{ParsedRow, ParsedTable, decode_input, parse};

// Statistics
pub use crate::stats::{Histogram, Statistics, StatisticsReport, compute};

// Export
pub use crate::export::{Dialect, ExportFormat, export};
