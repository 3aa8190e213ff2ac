//! JSON snapshot encoding.
//!
//! A snapshot is an array of objects, one per record. Each object carries
//! the identity and class keys followed by every subject in order. Scores
//! are JSON numbers; empty and unrecognized cells are strings.

use serde_json::{Map, Number, Value};

use crate::config::ReservedColumns;
use crate::error::{Error, Result};
use crate::record::{GradeCell, Record, in_grade_range};

/// Decoded snapshot contents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub subjects: Vec<String>,
    pub records: Vec<Record>,
}

/// Serialize records into snapshot JSON
pub fn encode(records: &[Record], subjects: &[String], reserved: &ReservedColumns) -> Result<String> {
    let items: Vec<Value> = records
        .iter()
        .map(|record| {
            let mut object = Map::new();
            object.insert(
                reserved.identity.clone(),
                Value::String(record.identity.clone()),
            );
            object.insert(
                reserved.class_label.clone(),
                Value::String(record.class_label.clone()),
            );
            for (subject, cell) in record.grades_in(subjects) {
                object.insert(subject.to_string(), cell_to_json(cell));
            }
            Value::Object(object)
        })
        .collect();

    Ok(serde_json::to_string(&Value::Array(items))?)
}

/// Parse snapshot JSON.
///
/// Requires an array of objects. An empty array decodes to an empty
/// snapshot, which callers treat as "no data". Subjects come from the first
/// object's keys; keys outside that set in later objects are ignored.
pub fn decode(raw: &str, reserved: &ReservedColumns) -> Result<Snapshot> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| Error::SnapshotCorrupt(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(Error::SnapshotCorrupt("expected an array of records".into()));
    };

    let Some(first) = items.first() else {
        return Ok(Snapshot::default());
    };

    let subjects: Vec<String> = as_object(first, 0)?
        .keys()
        .filter(|k| !reserved.contains(k))
        .cloned()
        .collect();

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let object = as_object(item, index)?;
        let mut record = Record::new(
            text_field(object, &reserved.identity, index)?,
            text_field(object, &reserved.class_label, index)?,
        );
        for subject in &subjects {
            let cell = match object.get(subject) {
                Some(value) => cell_from_json(value).ok_or_else(|| {
                    Error::SnapshotCorrupt(format!(
                        "record {}: unsupported value for {}",
                        index, subject
                    ))
                })?,
                None => GradeCell::Empty,
            };
            record.set_grade(subject, cell);
        }
        records.push(record);
    }

    Ok(Snapshot { subjects, records })
}

fn as_object(value: &Value, index: usize) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::SnapshotCorrupt(format!("record {} is not an object", index)))
}

fn text_field(object: &Map<String, Value>, key: &str, index: usize) -> Result<String> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(Error::SnapshotCorrupt(format!(
            "record {}: {} must be text",
            index, key
        ))),
    }
}

fn cell_to_json(cell: &GradeCell) -> Value {
    match cell {
        GradeCell::Empty => Value::String(String::new()),
        GradeCell::Score(score) => Number::from_f64(*score)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(score.to_string())),
        GradeCell::Text(text) => Value::String(text.clone()),
    }
}

fn cell_from_json(value: &Value) -> Option<GradeCell> {
    match value {
        Value::Null => Some(GradeCell::Empty),
        Value::String(s) => Some(GradeCell::from_import(s)),
        Value::Number(n) => {
            let score = n.as_f64().filter(|v| v.is_finite() && in_grade_range(*v));
            Some(match score {
                Some(score) => GradeCell::Score(score),
                None => GradeCell::Text(n.to_string()),
            })
        }
        _ => None,
    }
}
