// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Terminal presentation of reports

use colored::Colorize;
use tabled::{builder::Builder, settings::Style as TableStyle};

use crate::chart::{ChartKind, ChartSpec};
use crate::colors::{Status, StyledText};
use crate::error::ReportError;
use crate::models::ReportTable;
use crate::pipeline::QueryResult;

/// Render a report table as text, or a notice when it has no rows
pub fn render_table(table: &ReportTable) -> String {
    if table.is_empty() {
        return "No data returned for this query.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(table.columns.iter().cloned());
    for row in &table.rows {
        builder.push_record(row.iter().cloned());
    }

    builder
        .build()
        .with(TableStyle::ascii_rounded())
        .to_string()
}

/// Message and guidance lines for a failed report
pub fn render_report_error(error: &ReportError) -> Vec<String> {
    let mut lines = vec![error.to_string()];
    if !matches!(error, ReportError::NotConfigured) {
        lines.push("Please check:".to_string());
    }
    lines.extend(error.guidance().iter().map(|g| format!("  - {}", g)));
    lines
}

pub fn print_report_error(error: &ReportError) {
    let lines = render_report_error(error);
    let marker = match error {
        ReportError::NotConfigured => Status::warn(),
        _ => Status::error(),
    };
    if let Some((first, rest)) = lines.split_first() {
        println!("{} {}", marker, first);
        for line in rest {
            println!("    {}", line);
        }
    }
}

/// One-line description of a chart
pub fn describe_chart(spec: &ChartSpec) -> String {
    match (spec.kind, &spec.color) {
        (ChartKind::Pie, _) => format!("pie chart of {} by {}", spec.y, spec.x),
        (kind, Some(color)) if *color != spec.x => {
            format!("{} chart of {} vs {} colored by {}", kind, spec.y, spec.x, color)
        }
        (kind, _) => format!("{} chart of {} vs {}", kind, spec.y, spec.x),
    }
}

/// Print everything produced for one question
pub fn print_query_result(result: &QueryResult) {
    if result.enhanced != result.original {
        println!("{} Enhanced: {}", Status::info(), result.enhanced.dimmed());
    }
    println!(
        "{} {} {} | {} {} | {} .. {}",
        Status::fetch(),
        "Dimensions:".header(),
        result.params.dimensions.join(", "),
        "Metrics:".header(),
        result.params.metrics.join(", "),
        result.range.start_date,
        result.range.end_date,
    );

    if let Some(error) = &result.outcome.error {
        print_report_error(error);
        println!("{}", render_table(&result.outcome.table));
        return;
    }

    println!();
    println!("{}", render_table(&result.outcome.table));
    println!(
        "{} {} row(s)",
        Status::ok(),
        result.outcome.table.row_count().to_string().count()
    );

    match &result.chart {
        Some(spec) => println!(
            "{} Chart: {} ({})",
            Status::hint(),
            spec.title.header(),
            describe_chart(spec)
        ),
        None if !result.outcome.table.is_empty() => println!(
            "{} Add \"by\", \"trend\", \"share\" or \"correlation\" to the question for a chart",
            Status::hint()
        ),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_notice() {
        let table = ReportTable::new(vec!["country".into(), "activeUsers".into()]);
        assert_eq!(render_table(&table), "No data returned for this query.");
    }

    #[test]
    fn test_table_contains_cells() {
        let table = ReportTable::with_rows(
            vec!["country".into(), "activeUsers".into()],
            vec![vec!["Canada".into(), "42".into()]],
        );
        let text = render_table(&table);
        assert!(text.contains("country"));
        assert!(text.contains("Canada"));
        assert!(text.contains("42"));
    }

    #[test]
    fn test_error_lines_include_guidance() {
        let lines = render_report_error(&ReportError::PermissionDenied("403".into()));
        assert_eq!(lines[0], "Permission denied: 403");
        assert_eq!(lines[1], "Please check:");
        assert!(lines.iter().any(|l| l.contains("Viewer access")));

        let lines = render_report_error(&ReportError::NotConfigured);
        assert_eq!(lines.len(), 2);
    }
}
