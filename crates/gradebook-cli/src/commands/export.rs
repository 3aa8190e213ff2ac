//! Export command for writing the roster as CSV or TSV.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use gradebook::{Dialect, Error, GradeStore, KeyValueStore};

/// Export the roster to `output`, or stdout when `None`
pub fn run<S: KeyValueStore>(
    store: &GradeStore<S>,
    dialect: Dialect,
    output: Option<&Path>,
) -> Result<()> {
    let content = match gradebook::export(store, dialect) {
        Ok(content) => content,
        Err(Error::EmptyStore) => bail!("No data to export"),
        Err(e) => return Err(e.into()),
    };

    if let Some(output_path) = output {
        let output_path = match output_path.extension() {
            Some(_) => output_path.to_path_buf(),
            None => output_path.with_extension(dialect.extension()),
        };
        fs::write(&output_path, &content)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        eprintln!(
            "Exported {} rows as {} to: {}",
            store.len(),
            dialect,
            output_path.display()
        );
    } else {
        print!("{}", content);
    }

    Ok(())
}
