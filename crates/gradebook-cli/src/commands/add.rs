use anyhow::Result;
use gradebook::{GradeStore, KeyValueStore, StoreChange};

/// Append an empty row
pub fn run<S: KeyValueStore>(store: &mut GradeStore<S>) -> Result<()> {
    if let StoreChange::RecordAdded { row } = store.add_record()? {
        eprintln!("Added row {}", row + 1);
    }
    Ok(())
}
