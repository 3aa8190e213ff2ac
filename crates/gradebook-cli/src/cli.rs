//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use gradebook::Dialect;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(version, about = "Class gradebook: import, edit and summarize student grades")]
pub struct Cli {
    /// Directory holding the roster snapshot
    #[arg(long, global = true, env = "GRADEBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "GRADEBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replace the roster with a CSV/TXT journal
    Import {
        /// Comma-, semicolon- or tab-separated file with a header row
        file: PathBuf,
    },
    /// Print the roster
    Show,
    /// Change one field of one row
    Edit {
        /// Row number as printed by `show`
        row: usize,
        /// Column name: the name column, the class column or a subject
        field: String,
        /// New value; subjects take a grade from 1 to 5 (`4,5` is accepted)
        value: String,
    },
    /// Append an empty row
    Add,
    /// Remove a row
    Delete {
        /// Row number as printed by `show`
        row: usize,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Per-class averages, medians and the grade distribution
    Stats {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the roster as CSV or TSV
    Export {
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Remove every row and subject
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl From<ExportFormat> for Dialect {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Csv => Dialect::Csv,
            ExportFormat::Tsv => Dialect::Tsv,
        }
    }
}

/// Convert a 1-based row number from the command line
pub fn row_index(row: usize) -> anyhow::Result<usize> {
    row.checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("Rows are numbered from 1"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_edit() {
        let cli = Cli::try_parse_from(["gradebook", "edit", "2", "Математика", "4,5"]).unwrap();
        match cli.command {
            Command::Edit { row, field, value } => {
                assert_eq!(row, 2);
                assert_eq!(field, "Математика");
                assert_eq!(value, "4,5");
            }
            _ => panic!("expected edit"),
        }
    }

    #[test]
    fn test_parse_export_defaults() {
        let cli = Cli::try_parse_from(["gradebook", "export", "-f", "tsv"]).unwrap();
        match cli.command {
            Command::Export { format, output } => {
                assert_eq!(Dialect::from(format), Dialect::Tsv);
                assert!(output.is_none());
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_row_index() {
        assert_eq!(row_index(1).unwrap(), 0);
        assert!(row_index(0).is_err());
    }
}
