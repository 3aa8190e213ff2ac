//! TSV export format implementation

use crate::config::ReservedColumns;
use crate::record::Record;

use super::format::ExportFormat;

/// TSV (Tab-Separated Values) exporter
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvExporter;

impl ExportFormat for TsvExporter {
    fn header(&self, reserved: &ReservedColumns, subjects: &[String]) -> String {
        let mut columns = vec![reserved.identity.as_str(), reserved.class_label.as_str()];
        columns.extend(subjects.iter().map(String::as_str));
        columns.join("\t")
    }

    fn format_row(&self, record: &Record, subjects: &[String]) -> String {
        let mut values = vec![clean(&record.identity), clean(&record.class_label)];
        values.extend(record.grades_in(subjects).map(|(_, cell)| clean(&cell.to_string())));
        values.join("\t")
    }
}

/// TSV has no quoting, so separators inside a value become spaces
fn clean(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::GradeCell;

    #[test]
    fn test_format_tsv_header() {
        let subjects = vec!["Математика".to_string()];
        let header = TsvExporter.header(&ReservedColumns::default(), &subjects);
        assert_eq!(header, "ФИО\tКласс\tМатематика");
    }

    #[test]
    fn test_tsv_row() {
        let subjects = vec!["Математика".to_string(), "Физика".to_string()];
        let record = Record::new("Иванов", "9А").with_grade("Математика", GradeCell::Score(5.0));
        assert_eq!(TsvExporter.format_row(&record, &subjects), "Иванов\t9А\t5\t");
    }

    #[test]
    fn test_tsv_rows_and_cleaning() {
        let subjects = vec!["Математика".to_string()];
        let records = vec![
            Record::new("Иванов\tИван", "9А").with_grade("Математика", GradeCell::Score(3.5)),
            Record::new("Петров", "9Б"),
        ];
        let output = TsvExporter.format_rows(&records, &ReservedColumns::default(), &subjects);
        assert_eq!(
            output,
            "ФИО\tКласс\tМатематика\nИванов Иван\t9А\t3.5\nПетров\t9Б\t\n"
        );
    }
}
