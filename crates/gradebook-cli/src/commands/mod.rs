//! Subcommand implementations

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod show;
pub mod stats;

/// Printed by read-only commands on an empty roster
pub const NO_DATA: &str = "No data. Import a journal first.";
