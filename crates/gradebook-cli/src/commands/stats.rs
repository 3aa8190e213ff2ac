//! Stats command for per-class aggregates and the grade distribution.

use anyhow::Result;
use gradebook::{
    Aggregate, GradeStore, Histogram, KeyValueStore, Statistics, StatisticsReport, compute,
};
use owo_colors::OwoColorize;

use super::NO_DATA;
use crate::table::Table;

/// Print statistics as tables, or as JSON when `json` is set
pub fn run<S: KeyValueStore>(store: &GradeStore<S>, json: bool) -> Result<()> {
    let stats = compute(store);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    match &stats {
        Statistics::NoData => println!("{}", NO_DATA),
        Statistics::Report(report) => print_report(report, &store.reserved().class_label),
    }
    Ok(())
}

fn print_report(report: &StatisticsReport, class_column: &str) {
    for subject in &report.subjects {
        println!("{}", subject.subject.bold().underline());

        let header = vec![
            class_column.to_string(),
            "Count".to_string(),
            "Mean".to_string(),
            "Median".to_string(),
        ];
        let mut table = Table::new(header.clone());
        let rows: Vec<Vec<String>> = subject
            .classes
            .iter()
            .map(|class| {
                let label = if class.class_label.is_empty() {
                    "(none)".to_string()
                } else {
                    class.class_label.clone()
                };
                aggregate_row(label, &class.aggregate)
            })
            .collect();
        let total = aggregate_row("Total".to_string(), &subject.total);
        for row in rows.iter().chain(std::iter::once(&total)) {
            table.push(row.clone());
        }

        let widths = table.layout();
        println!("{}", Table::format_line(&header, &widths).bold());
        for row in &rows {
            println!("{}", Table::format_line(row, &widths));
        }
        println!("{}", Table::format_line(&total, &widths).bold());
        println!();
    }

    println!("{}", "Grade distribution".bold().underline());
    match &report.histogram {
        Histogram::NoGrades => println!("No grades yet"),
        Histogram::Grades(dist) => {
            for grade in (1..=5u8).rev() {
                let line = format!(
                    "{}: {:>4} ({:.1}%)",
                    grade,
                    dist.count(grade),
                    dist.percentage(grade)
                );
                match grade {
                    5 | 4 => println!("{}", line.green()),
                    3 => println!("{}", line.yellow()),
                    _ => println!("{}", line.red()),
                }
            }
            if dist.fractional > 0 {
                println!(
                    "{} of {} grades are fractional and not bucketed",
                    dist.fractional, dist.total
                );
            }
        }
    }
}

fn aggregate_row(label: String, aggregate: &Aggregate) -> Vec<String> {
    vec![
        label,
        aggregate.count.to_string(),
        format!("{:.2}", aggregate.mean),
        format!("{:.2}", aggregate.median),
    ]
}
