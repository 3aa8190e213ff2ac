//! Import command for replacing the roster from a file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use gradebook::{Error, GradeStore, KeyValueStore, StoreChange, decode_input, parse};
use tracing::warn;

/// Replace the roster with the contents of `file`
pub fn run<S: KeyValueStore>(store: &mut GradeStore<S>, file: &Path) -> Result<()> {
    let extension = file
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    if !matches!(extension.as_deref(), Some("csv" | "txt" | "tsv")) {
        warn!("{} is not a .csv or .txt file, trying anyway", file.display());
    }

    let bytes = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let table = parse(&decode_input(&bytes));

    let change = match store.replace_from_parsed_rows(&table.rows) {
        Ok(change) => change,
        Err(Error::ParseEmpty) => bail!("File is empty or invalid: {}", file.display()),
        Err(e) => return Err(e.into()),
    };

    if let StoreChange::Replaced { records, subjects } = change {
        eprintln!("Imported {} records with {} subjects", records, subjects);
    }
    let dropped = table.rows.len() - store.len();
    if table.skipped > 0 || dropped > 0 {
        eprintln!(
            "Skipped {} malformed lines and {} rows without name or class",
            table.skipped, dropped
        );
    }
    Ok(())
}
