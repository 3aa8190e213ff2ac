//! Plain-text table layout for terminal output

/// Left-aligned columns separated by two spaces
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }

    /// Lay out one line; trailing padding is dropped
    pub fn format_line(cells: &[String], widths: &[usize]) -> String {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        line.trim_end().to_string()
    }

    /// Header line, separator and body lines, each ending in a newline
    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut output = Table::format_line(&self.header, &widths);
        output.push('\n');
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        output.push_str(&rule.join("  "));
        output.push('\n');
        for row in &self.rows {
            output.push_str(&Table::format_line(row, &widths));
            output.push('\n');
        }
        output
    }

    /// Column widths shared by header and body, for callers styling lines
    pub fn layout(&self) -> Vec<usize> {
        self.widths()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_pads_by_chars() {
        let mut table = Table::new(strings(&["ФИО", "Класс"]));
        table.push(strings(&["Иванов Иван", "9А"]));
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "ФИО          Класс");
        assert_eq!(lines[1], "-----------  -----");
        assert_eq!(lines[2], "Иванов Иван  9А");
    }

    #[test]
    fn test_layout_covers_wide_rows() {
        let mut table = Table::new(strings(&["a"]));
        table.push(strings(&["xyz", "1"]));
        assert_eq!(table.layout(), vec![3, 1]);
    }
}
