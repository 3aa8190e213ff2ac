//! Canonical roster state.
//!
//! [`GradeStore`] owns the record collection, the subject list and the
//! persistence backend. All mutation goes through it:
//!
//! - **Replace**: wholesale import of parsed rows
//! - **Edit**: one field of one record, grade-checked for subjects
//! - **Add / Delete**: append a blank record, remove one with confirmation
//!
//! Each successful mutation writes a full snapshot before the new state is
//! committed in memory, then returns a [`StoreChange`] describing it.

use tracing::{debug, info, warn};

use crate::config::{GradebookConfig, ReservedColumns};
use crate::error::{Error, Result};
use crate::parse::ParsedRow;
use crate::persist::KeyValueStore;
use crate::record::{GradeCell, Record, parse_grade};
use crate::snapshot;

/// What a successful mutation changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    Replaced { records: usize, subjects: usize },
    FieldEdited { row: usize, field: String },
    RecordAdded { row: usize },
    RecordDeleted { row: usize, identity: String },
    Cleared,
}

/// Confirmation hook for deletes
pub trait DeletePrompter {
    /// Return `true` to go ahead with removing `record` at `row`
    fn confirm_delete(&self, row: usize, record: &Record) -> bool;
}

/// Prompter that approves every delete
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl DeletePrompter for AlwaysConfirm {
    fn confirm_delete(&self, _row: usize, _record: &Record) -> bool {
        true
    }
}

impl<F> DeletePrompter for F
where
    F: Fn(usize, &Record) -> bool,
{
    fn confirm_delete(&self, row: usize, record: &Record) -> bool {
        self(row, record)
    }
}

pub struct GradeStore<S: KeyValueStore> {
    backend: S,
    snapshot_key: String,
    reserved: ReservedColumns,
    records: Vec<Record>,
    subjects: Vec<String>,
    revision: u64,
}

impl<S: KeyValueStore> GradeStore<S> {
    /// Create an empty store without reading the backend
    pub fn new(backend: S, config: &GradebookConfig) -> Self {
        Self {
            backend,
            snapshot_key: config.snapshot_key.clone(),
            reserved: config.reserved.clone(),
            records: Vec::new(),
            subjects: Vec::new(),
            revision: 0,
        }
    }

    /// Create a store and hydrate it from the backend's snapshot, if any
    pub fn open(backend: S, config: &GradebookConfig) -> Self {
        let mut store = Self::new(backend, config);
        store.reload();
        store
    }

    /// Re-read the snapshot from the backend.
    ///
    /// Returns `false` (and leaves the store empty) when the snapshot is
    /// missing, unreadable or invalid.
    pub fn reload(&mut self) -> bool {
        match self.backend.get(&self.snapshot_key) {
            Ok(Some(raw)) => self.load_snapshot(&raw),
            Ok(None) => {
                debug!("No snapshot stored under {}", self.snapshot_key);
                self.reset();
                false
            }
            Err(e) => {
                warn!("Failed to read snapshot: {}", e);
                self.reset();
                false
            }
        }
    }

    /// Replace state with a serialized snapshot.
    ///
    /// On any failure the store is cleared and `false` is returned.
    pub fn load_snapshot(&mut self, raw: &str) -> bool {
        match snapshot::decode(raw, &self.reserved) {
            Ok(decoded) if decoded.records.is_empty() => {
                debug!("Snapshot holds no records");
                self.reset();
                false
            }
            Ok(decoded) => {
                info!(
                    "Loaded snapshot: {} records, {} subjects",
                    decoded.records.len(),
                    decoded.subjects.len()
                );
                self.records = decoded.records;
                self.subjects = decoded.subjects;
                self.revision += 1;
                true
            }
            Err(e) => {
                warn!("Ignoring snapshot: {}", e);
                self.reset();
                false
            }
        }
    }

    /// Make parsed rows the new canonical collection.
    ///
    /// Rows missing either reserved field (or holding it empty) are dropped.
    /// Fails with [`Error::ParseEmpty`] and changes nothing when no row is
    /// left.
    pub fn replace_from_parsed_rows(&mut self, rows: &[ParsedRow]) -> Result<StoreChange> {
        let reserved = &self.reserved;
        let kept: Vec<&ParsedRow> = rows
            .iter()
            .filter(|row| {
                let present = |name: &str| row.get(name).is_some_and(|v| !v.is_empty());
                present(reserved.identity.as_str()) && present(reserved.class_label.as_str())
            })
            .collect();

        let Some(first) = kept.first() else {
            debug!(
                "No rows carry both {} and {} ({} rows in input)",
                reserved.identity,
                reserved.class_label,
                rows.len()
            );
            return Err(Error::ParseEmpty);
        };

        let subjects: Vec<String> = first
            .keys()
            .filter(|k| !reserved.contains(k))
            .map(str::to_string)
            .collect();

        let mut unrecognized = 0usize;
        let records: Vec<Record> = kept
            .iter()
            .map(|row| {
                let mut record = Record::new(
                    row.get(&reserved.identity).unwrap_or_default(),
                    row.get(&reserved.class_label).unwrap_or_default(),
                );
                for subject in &subjects {
                    let cell = GradeCell::from_import(row.get(subject).unwrap_or_default());
                    if matches!(cell, GradeCell::Text(_)) {
                        unrecognized += 1;
                    }
                    record.set_grade(subject, cell);
                }
                record
            })
            .collect();

        if unrecognized > 0 {
            warn!(
                "{} imported cells are not grades from 1 to 5; kept as text",
                unrecognized
            );
        }

        let change = StoreChange::Replaced {
            records: records.len(),
            subjects: subjects.len(),
        };
        self.commit_all(records, subjects)?;
        info!(
            "Replaced roster from {} parsed rows ({} dropped)",
            rows.len(),
            rows.len() - self.records.len()
        );
        Ok(change)
    }

    /// Set one field of one record.
    ///
    /// Subject fields must hold a number from 1 to 5 (a decimal comma is
    /// accepted). The identity and class fields take the raw string.
    pub fn edit_field(&mut self, row: usize, field: &str, raw: &str) -> Result<StoreChange> {
        self.check_index(row)?;

        let mut records = self.records.clone();
        let record = &mut records[row];

        if field == self.reserved.identity {
            record.identity = raw.to_string();
        } else if field == self.reserved.class_label {
            record.class_label = raw.to_string();
        } else if self.subjects.iter().any(|s| s == field) {
            let score = parse_grade(raw).ok_or_else(|| Error::InvalidGrade {
                field: field.to_string(),
                value: raw.to_string(),
            })?;
            record.set_grade(field, GradeCell::Score(score));
        } else {
            return Err(Error::UnknownField(field.to_string()));
        }

        self.commit(records)?;
        debug!("Edited row {} field {}", row, field);
        Ok(StoreChange::FieldEdited {
            row,
            field: field.to_string(),
        })
    }

    /// Remove the record at `row` once `prompter` confirms.
    ///
    /// Later rows shift down by one. Returns `Ok(None)` when declined.
    pub fn delete_record<P>(&mut self, row: usize, prompter: &P) -> Result<Option<StoreChange>>
    where
        P: DeletePrompter + ?Sized,
    {
        self.check_index(row)?;

        if !prompter.confirm_delete(row, &self.records[row]) {
            debug!("Delete of row {} declined", row);
            return Ok(None);
        }

        let mut records = self.records.clone();
        let removed = records.remove(row);
        self.commit(records)?;
        info!("Deleted row {} ({})", row, removed.identity);
        Ok(Some(StoreChange::RecordDeleted {
            row,
            identity: removed.identity,
        }))
    }

    /// Append a blank record covering every current subject
    pub fn add_record(&mut self) -> Result<StoreChange> {
        let mut records = self.records.clone();
        records.push(Record::blank(&self.subjects));
        let row = records.len() - 1;
        self.commit(records)?;
        Ok(StoreChange::RecordAdded { row })
    }

    /// Drop every record and subject
    pub fn clear(&mut self) -> Result<StoreChange> {
        self.commit_all(Vec::new(), Vec::new())?;
        info!("Cleared roster");
        Ok(StoreChange::Cleared)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, row: usize) -> Option<&Record> {
        self.records.get(row)
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn reserved(&self) -> &ReservedColumns {
        &self.reserved
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counter bumped on every state change, for callers that poll
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Hand back the backend, dropping in-memory state
    pub fn into_backend(self) -> S {
        self.backend
    }

    fn check_index(&self, row: usize) -> Result<()> {
        if row < self.records.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: row,
                len: self.records.len(),
            })
        }
    }

    fn reset(&mut self) {
        if !self.records.is_empty() || !self.subjects.is_empty() {
            self.revision += 1;
        }
        self.records.clear();
        self.subjects.clear();
    }

    fn commit(&mut self, records: Vec<Record>) -> Result<()> {
        let raw = snapshot::encode(&records, &self.subjects, &self.reserved)?;
        self.backend.set(&self.snapshot_key, &raw)?;
        self.records = records;
        self.revision += 1;
        Ok(())
    }

    fn commit_all(&mut self, records: Vec<Record>, subjects: Vec<String>) -> Result<()> {
        let raw = snapshot::encode(&records, &subjects, &self.reserved)?;
        self.backend.set(&self.snapshot_key, &raw)?;
        self.records = records;
        self.subjects = subjects;
        self.revision += 1;
        Ok(())
    }
}
