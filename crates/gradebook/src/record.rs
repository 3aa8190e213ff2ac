//! Typed student records.

use std::collections::HashMap;
use std::fmt;

/// Lowest accepted grade
pub const MIN_GRADE: f64 = 1.0;
/// Highest accepted grade
pub const MAX_GRADE: f64 = 5.0;

/// Parse a grade-like string into a finite number.
///
/// The first decimal comma is read as a decimal point, so `"3,5"` is `3.5`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replacen(',', ".", 1);
    normalized.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Whether `value` lies in the accepted grade range
pub fn in_grade_range(value: f64) -> bool {
    (MIN_GRADE..=MAX_GRADE).contains(&value)
}

/// Parse and range-check a grade
pub fn parse_grade(raw: &str) -> Option<f64> {
    parse_number(raw).filter(|n| in_grade_range(*n))
}

/// A single subject cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GradeCell {
    /// No grade yet
    #[default]
    Empty,
    /// A validated grade in [1, 5]
    Score(f64),
    /// Imported text that is not a valid grade, kept verbatim
    Text(String),
}

impl GradeCell {
    /// Classify an imported string
    pub fn from_import(raw: &str) -> Self {
        if raw.is_empty() {
            GradeCell::Empty
        } else if let Some(score) = parse_grade(raw) {
            GradeCell::Score(score)
        } else {
            GradeCell::Text(raw.to_string())
        }
    }

    /// Numeric value for aggregation, regardless of range
    pub fn numeric(&self) -> Option<f64> {
        match self {
            GradeCell::Empty => None,
            GradeCell::Score(score) => Some(*score),
            GradeCell::Text(text) => parse_number(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GradeCell::Empty)
    }
}

impl fmt::Display for GradeCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeCell::Empty => Ok(()),
            GradeCell::Score(score) => write!(f, "{}", score),
            GradeCell::Text(text) => f.write_str(text),
        }
    }
}

/// One student: identity, class and subject grades.
///
/// Subject cells are keyed by name; iteration order comes from the store's
/// subject list, not from this map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub identity: String,
    pub class_label: String,
    grades: HashMap<String, GradeCell>,
}

impl Record {
    /// An empty record with an `Empty` cell for every subject
    pub fn blank(subjects: &[String]) -> Self {
        Self {
            identity: String::new(),
            class_label: String::new(),
            grades: subjects
                .iter()
                .map(|s| (s.clone(), GradeCell::Empty))
                .collect(),
        }
    }

    pub fn new(identity: impl Into<String>, class_label: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            class_label: class_label.into(),
            grades: HashMap::new(),
        }
    }

    /// Builder-style cell setter, used when hydrating records
    pub fn with_grade(mut self, subject: impl Into<String>, cell: GradeCell) -> Self {
        self.grades.insert(subject.into(), cell);
        self
    }

    /// Cell for `subject`; absent subjects read as `Empty`
    pub fn grade(&self, subject: &str) -> &GradeCell {
        static EMPTY: GradeCell = GradeCell::Empty;
        self.grades.get(subject).unwrap_or(&EMPTY)
    }

    pub(crate) fn set_grade(&mut self, subject: &str, cell: GradeCell) {
        self.grades.insert(subject.to_string(), cell);
    }

    /// Cells in `subjects` order
    pub fn grades_in<'a>(
        &'a self,
        subjects: &'a [String],
    ) -> impl Iterator<Item = (&'a str, &'a GradeCell)> + 'a {
        subjects.iter().map(|s| (s.as_str(), self.grade(s)))
    }
}
