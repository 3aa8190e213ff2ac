//! Delete command for removing a row.

use anyhow::{Result, bail};
use gradebook::{AlwaysConfirm, DeletePrompter, Error, GradeStore, KeyValueStore};

use crate::prompter::CliPrompter;

/// Remove the record at `row` (0-based), asking first unless `yes`
pub fn run<S: KeyValueStore>(store: &mut GradeStore<S>, row: usize, yes: bool) -> Result<()> {
    let prompter: &dyn DeletePrompter = if yes { &AlwaysConfirm } else { &CliPrompter };

    match store.delete_record(row, prompter) {
        Ok(Some(_)) => {
            eprintln!("Deleted row {}", row + 1);
            Ok(())
        }
        Ok(None) => {
            eprintln!("Cancelled");
            Ok(())
        }
        Err(Error::IndexOutOfRange { len, .. }) => {
            bail!("Row {} does not exist (roster has {} rows)", row + 1, len)
        }
        Err(e) => Err(e.into()),
    }
}
