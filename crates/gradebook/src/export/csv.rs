//! CSV export format implementation

use crate::config::ReservedColumns;
use crate::record::{GradeCell, Record};

use super::format::ExportFormat;

/// CSV (comma-separated) exporter.
///
/// Identity and class are always quoted. Grades are written bare; imported
/// text cells are quoted only when they would otherwise break the line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl ExportFormat for CsvExporter {
    fn header(&self, reserved: &ReservedColumns, subjects: &[String]) -> String {
        let mut columns = vec![reserved.identity.as_str(), reserved.class_label.as_str()];
        columns.extend(subjects.iter().map(String::as_str));
        columns.join(",")
    }

    fn format_row(&self, record: &Record, subjects: &[String]) -> String {
        let mut line = format!("{},{}", quote(&record.identity), quote(&record.class_label));
        for (_, cell) in record.grades_in(subjects) {
            line.push(',');
            match cell {
                GradeCell::Text(text) if needs_quoting(text) => line.push_str(&quote(text)),
                other => line.push_str(&other.to_string()),
            }
        }
        line
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn needs_quoting(value: &str) -> bool {
    value.contains([',', '"', '\n', '\r'])
}
