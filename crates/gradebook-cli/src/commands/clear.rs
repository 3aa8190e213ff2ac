use anyhow::Result;
use gradebook::{GradeStore, KeyValueStore};

use crate::prompter::confirm;

/// Drop the whole roster, asking first unless `yes`
pub fn run<S: KeyValueStore>(store: &mut GradeStore<S>, yes: bool) -> Result<()> {
    if store.is_empty() {
        eprintln!("Roster is already empty");
        return Ok(());
    }
    if !yes && !confirm(&format!("Remove all {} rows?", store.len())) {
        eprintln!("Cancelled");
        return Ok(());
    }
    store.clear()?;
    eprintln!("Roster cleared");
    Ok(())
}
