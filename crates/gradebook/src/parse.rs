//! Delimited text parsing.
//!
//! Turns comma-, semicolon- or tab-separated text into field-keyed rows.
//! Values stay raw strings here; grade validation happens in the store.

use std::borrow::Cow;

use encoding_rs::WINDOWS_1251;
use tracing::debug;

const UTF8_BOM: char = '\u{feff}';

/// One data line, keyed by header name in header order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRow {
    fields: Vec<(String, String)>,
}

impl ParsedRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. A repeated name overwrites the earlier value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParsedRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = ParsedRow::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

/// Result of parsing a delimited document
#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    /// Trimmed header names, duplicates included
    pub headers: Vec<String>,
    /// Accepted data rows
    pub rows: Vec<ParsedRow>,
    /// Data lines dropped because their field count did not match the header
    pub skipped: usize,
}

impl ParsedTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Field delimiter detected from the header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Semicolon,
    Comma,
}

impl Delimiter {
    /// Tab wins over semicolon, semicolon over comma
    pub fn detect(header: &str) -> Self {
        if header.contains('\t') {
            Delimiter::Tab
        } else if header.contains(';') {
            Delimiter::Semicolon
        } else {
            Delimiter::Comma
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
            Delimiter::Comma => ',',
        }
    }
}

/// Decode raw file bytes into text.
///
/// UTF-8 is used when the bytes are valid UTF-8; anything else is read as
/// Windows-1251.
pub fn decode_input(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let (text, had_errors) = WINDOWS_1251.decode_without_bom_handling(bytes);
            debug!(
                "Input is not valid UTF-8, decoded as windows-1251 (errors: {})",
                had_errors
            );
            text
        }
    }
}

/// Parse delimited text into rows.
///
/// Returns an empty table when there is no header plus at least one data line.
/// Surrounding whitespace of the whole document is ignored, except tabs.
pub fn parse(text: &str) -> ParsedTable {
    // Tabs are separators, so a last row ending in empty TSV cells keeps them
    let text = text
        .trim_start_matches(UTF8_BOM)
        .trim_matches(|c: char| c.is_whitespace() && c != '\t');
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.len() < 2 {
        return ParsedTable::default();
    }

    let delimiter = Delimiter::detect(lines[0]);
    let headers = split_fields(lines[0], delimiter);

    let mut table = ParsedTable {
        headers,
        rows: Vec::with_capacity(lines.len() - 1),
        skipped: 0,
    };

    for line in &lines[1..] {
        let values = split_fields(line, delimiter);
        if values.len() != table.headers.len() {
            table.skipped += 1;
            continue;
        }
        let row: ParsedRow = table.headers.iter().cloned().zip(values).collect();
        table.rows.push(row);
    }

    debug!(
        "Parsed {} rows ({:?} delimiter, {} columns, {} skipped)",
        table.rows.len(),
        delimiter,
        table.headers.len(),
        table.skipped
    );

    table
}

/// Split one line on `delimiter`, honoring double-quoted fields.
///
/// A line with unbalanced quotes is split naively so a stray `"` in a name
/// does not swallow the rest of the line.
fn split_fields(line: &str, delimiter: Delimiter) -> Vec<String> {
    let delim = delimiter.as_char();
    let balanced = line.matches('"').count() % 2 == 0;

    let raw: Vec<&str> = if balanced {
        let mut parts = Vec::new();
        let mut in_quotes = false;
        let mut start = 0;
        for (i, c) in line.char_indices() {
            if c == '"' {
                in_quotes = !in_quotes;
            } else if c == delim && !in_quotes {
                parts.push(&line[start..i]);
                start = i + c.len_utf8();
            }
        }
        parts.push(&line[start..]);
        parts
    } else {
        line.split(delim).collect()
    };

    raw.into_iter()
        .map(|field| {
            let field = field.trim();
            if balanced && field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
                field[1..field.len() - 1].replace("\"\"", "\"")
            } else {
                field.to_string()
            }
        })
        .collect()
}
