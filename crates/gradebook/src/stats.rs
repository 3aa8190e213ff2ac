//! Roster statistics.
//!
//! Aggregates grades per subject and class (count, mean, median), adds a
//! per-subject total row, and counts how often each grade 1-5 occurs across
//! the whole roster.
//!
//! Classes are ordered naturally: `9А`, `9Б`, `10А`, `11`. Labels that are
//! not "digits followed by letters" go last.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::persist::KeyValueStore;
use crate::record::{Record, in_grade_range};
use crate::store::GradeStore;

/// Count, mean and median of one group of grades
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Aggregate {
    pub count: usize,
    /// Arithmetic mean rounded to 2 decimals; 0 for an empty group
    pub mean: f64,
    /// 0 for an empty group
    pub median: f64,
}

impl Aggregate {
    pub fn from_values(mut values: Vec<f64>) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let sum: f64 = values.iter().sum();
        let mean = round_to(sum / values.len() as f64, 2);
        values.sort_by(f64::total_cmp);
        Self {
            count: values.len(),
            mean,
            median: median_sorted(&values),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassAggregate {
    pub class_label: String,
    #[serde(flatten)]
    pub aggregate: Aggregate,
}

/// All rows for one subject: one per class, plus the total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectStatistics {
    pub subject: String,
    pub classes: Vec<ClassAggregate>,
    pub total: Aggregate,
}

/// Frequency of each grade 1-5 across all subjects and records
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Histogram {
    NoGrades,
    Grades(GradeDistribution),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeDistribution {
    /// `counts[g - 1]` is the number of cells holding grade `g`
    pub counts: [usize; 5],
    /// Share of `total` per grade, one decimal
    pub percentages: [f64; 5],
    /// In-range grades that are not whole numbers (e.g. 3.5)
    pub fractional: usize,
    /// Every in-range grade, fractional ones included
    pub total: usize,
}

impl GradeDistribution {
    pub fn count(&self, grade: u8) -> usize {
        match grade {
            1..=5 => self.counts[grade as usize - 1],
            _ => 0,
        }
    }

    pub fn percentage(&self, grade: u8) -> f64 {
        match grade {
            1..=5 => self.percentages[grade as usize - 1],
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    /// Distinct class labels in display order
    pub classes: Vec<String>,
    pub subjects: Vec<SubjectStatistics>,
    pub histogram: Histogram,
}

/// Outcome of a statistics run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistics {
    /// The roster is empty
    NoData,
    Report(StatisticsReport),
}

impl Statistics {
    pub fn report(&self) -> Option<&StatisticsReport> {
        match self {
            Statistics::NoData => None,
            Statistics::Report(report) => Some(report),
        }
    }
}

/// Compute statistics for the current store state
pub fn compute<S: KeyValueStore>(store: &GradeStore<S>) -> Statistics {
    compute_records(store.records(), store.subjects())
}

/// Compute statistics for a record slice with the given subject order
pub fn compute_records(records: &[Record], subjects: &[String]) -> Statistics {
    if records.is_empty() {
        return Statistics::NoData;
    }

    let classes = ordered_classes(records);

    let subject_stats = subjects
        .iter()
        .map(|subject| {
            let class_rows = classes
                .iter()
                .map(|class| ClassAggregate {
                    class_label: class.clone(),
                    aggregate: Aggregate::from_values(numeric_values(
                        records.iter().filter(|r| &r.class_label == class),
                        subject,
                    )),
                })
                .collect();
            SubjectStatistics {
                subject: subject.clone(),
                classes: class_rows,
                total: Aggregate::from_values(numeric_values(records.iter(), subject)),
            }
        })
        .collect();

    Statistics::Report(StatisticsReport {
        classes,
        subjects: subject_stats,
        histogram: histogram(records, subjects),
    })
}

/// Median of an ascending slice; 0 when empty
pub fn median_sorted(sorted: &[f64]) -> f64 {
    let len = sorted.len();
    if len == 0 {
        return 0.0;
    }
    let mid = len / 2;
    if len % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Median of unsorted values; 0 when empty
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    median_sorted(&sorted)
}

/// Distinct class labels of `records`, naturally ordered
pub fn ordered_classes(records: &[Record]) -> Vec<String> {
    let distinct: BTreeSet<&str> = records.iter().map(|r| r.class_label.as_str()).collect();
    let mut classes: Vec<String> = distinct.into_iter().map(str::to_string).collect();
    classes.sort_by(|a, b| compare_classes(a, b));
    classes
}

/// Natural class comparator.
///
/// `"<digits><letters>"` labels sort by number, then by upper-cased letter
/// suffix in alphabet order. Everything else sorts after them by text.
pub fn compare_classes(a: &str, b: &str) -> Ordering {
    let ordering = match (class_key(a), class_key(b)) {
        (Some((num_a, suffix_a)), Some((num_b, suffix_b))) => num_a
            .cmp(&num_b)
            .then_with(|| collate(&suffix_a, &suffix_b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => collate(a, b),
    };
    ordering.then_with(|| a.cmp(b))
}

fn class_key(label: &str) -> Option<(u64, String)> {
    let digits_end = label
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(label.len());
    if digits_end == 0 {
        return None;
    }
    let suffix = &label[digits_end..];
    if !suffix.chars().all(is_section_letter) {
        return None;
    }
    let number = label[..digits_end].parse().ok()?;
    Some((number, suffix.to_uppercase()))
}

fn is_section_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, 'А'..='я' | 'Ё' | 'ё')
}

/// Case-insensitive comparison in alphabet order; `Ё` sits right after `Е`
fn collate(a: &str, b: &str) -> Ordering {
    let weights = |s: &str| -> Vec<(u32, u8)> {
        s.chars()
            .map(|c| {
                let upper = c.to_uppercase().next().unwrap_or(c);
                match upper {
                    'Ё' => ('Е' as u32, 1),
                    other => (other as u32, 0),
                }
            })
            .collect()
    };
    weights(a).cmp(&weights(b))
}

fn numeric_values<'a>(records: impl Iterator<Item = &'a Record>, subject: &str) -> Vec<f64> {
    records
        .filter_map(|record| record.grade(subject).numeric())
        .collect()
}

fn histogram(records: &[Record], subjects: &[String]) -> Histogram {
    let mut counts = [0usize; 5];
    let mut fractional = 0;
    let mut total = 0;

    for record in records {
        for (_, cell) in record.grades_in(subjects) {
            let Some(value) = cell.numeric().filter(|v| in_grade_range(*v)) else {
                continue;
            };
            total += 1;
            if value.fract() == 0.0 {
                counts[value as usize - 1] += 1;
            } else {
                fractional += 1;
            }
        }
    }

    if total == 0 {
        return Histogram::NoGrades;
    }

    let percentages = counts.map(|count| round_to(count as f64 / total as f64 * 100.0, 1));
    Histogram::Grades(GradeDistribution {
        counts,
        percentages,
        fractional,
        total,
    })
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::GradeCell;

    fn subjects(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn student(class: &str, grades: &[(&str, GradeCell)]) -> Record {
        grades
            .iter()
            .fold(Record::new("student", class), |record, (subject, cell)| {
                record.with_grade(*subject, cell.clone())
            })
    }

    fn score(v: f64) -> GradeCell {
        GradeCell::Score(v)
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[2.0, 3.0, 4.0, 5.0]), 3.5);
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[]), 0.0);
        assert_eq!(median(&[4.0]), 4.0);
    }

    #[test]
    fn test_class_ordering() {
        let records: Vec<Record> = ["10А", "9Б", "9А", "11", "9А"]
            .iter()
            .map(|c| Record::new("x", *c))
            .collect();
        assert_eq!(ordered_classes(&records), vec!["9А", "9Б", "10А", "11"]);
    }

    #[test]
    fn test_class_ordering_unmatched_last() {
        let mut labels = vec!["Выпуск", "", "2b", "10а", "9Я", "2A", "A1"];
        labels.sort_by(|a, b| compare_classes(a, b));
        assert_eq!(labels, vec!["2A", "2b", "9Я", "10а", "", "A1", "Выпуск"]);
    }

    #[test]
    fn test_class_ordering_yo_after_ye() {
        let mut labels = vec!["5Ж", "5Ё", "5Е"];
        labels.sort_by(|a, b| compare_classes(a, b));
        assert_eq!(labels, vec!["5Е", "5Ё", "5Ж"]);
    }

    #[test]
    fn test_class_ordering_case_variants_are_stable() {
        assert_eq!(compare_classes("9а", "9А"), "9а".cmp("9А"));
        assert_eq!(compare_classes("9А", "9А"), Ordering::Equal);
    }

    #[test]
    fn test_no_data() {
        assert_eq!(compute_records(&[], &subjects(&["Математика"])), Statistics::NoData);
    }

    #[test]
    fn test_per_class_and_total_aggregates() {
        let subjects = subjects(&["Математика", "Физика"]);
        let records = vec![
            student("9А", &[("Математика", score(5.0)), ("Физика", score(4.0))]),
            student("9А", &[("Математика", score(4.0)), ("Физика", GradeCell::Empty)]),
            student("9Б", &[("Математика", score(3.0)), ("Физика", GradeCell::Text("н/а".into()))]),
            student("9А", &[("Математика", score(4.0)), ("Физика", score(2.0))]),
        ];
        let stats = compute_records(&records, &subjects);
        let report = stats.report().unwrap();
        assert_eq!(report.classes, vec!["9А", "9Б"]);

        let math = &report.subjects[0];
        assert_eq!(math.subject, "Математика");
        assert_eq!(math.classes[0].class_label, "9А");
        assert_eq!(
            math.classes[0].aggregate,
            Aggregate { count: 3, mean: 4.33, median: 4.0 }
        );
        assert_eq!(
            math.classes[1].aggregate,
            Aggregate { count: 1, mean: 3.0, median: 3.0 }
        );
        assert_eq!(math.total, Aggregate { count: 4, mean: 4.0, median: 4.0 });

        let physics = &report.subjects[1];
        assert_eq!(
            physics.classes[0].aggregate,
            Aggregate { count: 2, mean: 3.0, median: 3.0 }
        );
        // Only a non-numeric cell in 9Б
        assert_eq!(physics.classes[1].aggregate, Aggregate::default());
        assert_eq!(physics.total.count, 2);
    }

    #[test]
    fn test_histogram_counts_and_percentages() {
        let subjects = subjects(&["Математика"]);
        let records: Vec<Record> = [5.0, 5.0, 4.0, 3.0, 5.0]
            .iter()
            .map(|v| student("9А", &[("Математика", score(*v))]))
            .collect();
        let stats = compute_records(&records, &subjects);
        let Histogram::Grades(dist) = &stats.report().unwrap().histogram else {
            panic!("expected grades");
        };
        assert_eq!(dist.counts, [0, 0, 1, 1, 3]);
        assert_eq!(dist.total, 5);
        assert_eq!(dist.percentage(3), 20.0);
        assert_eq!(dist.percentage(4), 20.0);
        assert_eq!(dist.percentage(5), 60.0);
        assert_eq!(dist.percentage(1), 0.0);
        assert_eq!(dist.count(5), 3);
    }

    #[test]
    fn test_histogram_fractional_and_out_of_range() {
        let subjects = subjects(&["Математика", "Физика"]);
        let records = vec![
            student("9А", &[("Математика", score(3.5)), ("Физика", score(4.0))]),
            student("9А", &[("Математика", GradeCell::Text("7".into())), ("Физика", score(2.0))]),
        ];
        let stats = compute_records(&records, &subjects);
        let report = stats.report().unwrap();
        let Histogram::Grades(dist) = &report.histogram else {
            panic!("expected grades");
        };
        assert_eq!(dist.total, 3);
        assert_eq!(dist.fractional, 1);
        assert_eq!(dist.counts, [0, 1, 0, 1, 0]);
        assert_eq!(dist.percentage(2), 33.3);

        // Numeric text still counts toward the mean, just not the histogram
        assert_eq!(report.subjects[0].total, Aggregate { count: 2, mean: 5.25, median: 5.25 });
    }

    #[test]
    fn test_histogram_no_grades() {
        let subjects = subjects(&["Математика"]);
        let records = vec![Record::blank(&subjects)];
        let stats = compute_records(&records, &subjects);
        let report = stats.report().unwrap();
        assert_eq!(report.histogram, Histogram::NoGrades);
        assert_eq!(report.classes, vec![""]);
        assert_eq!(report.subjects[0].total, Aggregate::default());
    }

    #[test]
    fn test_report_serializes() {
        let subjects = subjects(&["Математика"]);
        let records = vec![student("9А", &[("Математика", score(5.0))])];
        let json = serde_json::to_value(compute_records(&records, &subjects)).unwrap();
        assert_eq!(json["report"]["classes"][0], "9А");
        assert_eq!(json["report"]["subjects"][0]["classes"][0]["class_label"], "9А");
        assert_eq!(json["report"]["subjects"][0]["classes"][0]["mean"], 5.0);
        assert_eq!(json["report"]["histogram"]["grades"]["counts"][4], 1);
        assert_eq!(serde_json::to_value(Statistics::NoData).unwrap(), "no_data");
    }
}
