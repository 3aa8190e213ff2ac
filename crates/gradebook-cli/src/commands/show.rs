//! Show command for printing the roster.

use anyhow::Result;
use gradebook::{GradeStore, KeyValueStore};

use super::NO_DATA;
use crate::table::Table;

/// Print every record with its 1-based row number
pub fn run<S: KeyValueStore>(store: &GradeStore<S>) -> Result<()> {
    if store.is_empty() {
        println!("{}", NO_DATA);
        return Ok(());
    }

    let reserved = store.reserved();
    let mut header = vec![
        "#".to_string(),
        reserved.identity.clone(),
        reserved.class_label.clone(),
    ];
    header.extend(store.subjects().iter().cloned());

    let mut table = Table::new(header);
    for (index, record) in store.records().iter().enumerate() {
        let mut row = vec![
            (index + 1).to_string(),
            record.identity.clone(),
            record.class_label.clone(),
        ];
        row.extend(
            record
                .grades_in(store.subjects())
                .map(|(_, cell)| cell.to_string()),
        );
        table.push(row);
    }

    print!("{}", table.render());
    Ok(())
}
