//! Line formatting shared by the export dialects

use crate::config::ReservedColumns;
use crate::record::Record;

/// One delimited dialect: how the header and each record become a line
pub trait ExportFormat {
    /// Header line naming the reserved columns, then every subject
    fn header(&self, reserved: &ReservedColumns, subjects: &[String]) -> String;

    /// Format a single record, subject cells in `subjects` order
    fn format_row(&self, record: &Record, subjects: &[String]) -> String;

    /// Format the header and every record, one line each
    fn format_rows(
        &self,
        records: &[Record],
        reserved: &ReservedColumns,
        subjects: &[String],
    ) -> String {
        let mut output = self.header(reserved, subjects);
        output.push('\n');
        for record in records {
            output.push_str(&self.format_row(record, subjects));
            output.push('\n');
        }
        output
    }
}
