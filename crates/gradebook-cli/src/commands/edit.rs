//! Edit command for changing a single field.

use anyhow::{Result, bail};
use gradebook::{Error, GradeStore, KeyValueStore};

/// Set `field` of the record at `row` (0-based)
pub fn run<S: KeyValueStore>(
    store: &mut GradeStore<S>,
    row: usize,
    field: &str,
    value: &str,
) -> Result<()> {
    match store.edit_field(row, field, value) {
        Ok(_) => {
            eprintln!("Row {}: {} = {}", row + 1, field, value);
            Ok(())
        }
        Err(Error::InvalidGrade { field, value }) => {
            let kept = store
                .record(row)
                .map(|record| record.grade(&field).to_string())
                .unwrap_or_default();
            bail!(
                "Grade must be a number from 1 to 5, got {:?}; {} keeps {:?}",
                value,
                field,
                kept
            )
        }
        Err(Error::IndexOutOfRange { len, .. }) => {
            bail!("Row {} does not exist (roster has {} rows)", row + 1, len)
        }
        Err(e) => Err(e.into()),
    }
}
