// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Question answering and report display commands

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::*;

use super::AppContext;
use crate::analytics::AnalyticsBackend;
use crate::chart::{choose_chart, ChartSpec};
use crate::colors::{Status, StyledText};
use crate::enhancer::PromptEnhancer;
use crate::export::{write_export, ExportFormat};
use crate::extractor;
use crate::models::{DateRange, ReportTable};
use crate::pipeline::{Assistant, QueryResult};
use crate::render;
use crate::session::Session;

/// Ask a question against the connected property
pub fn ask(
    ctx: &AppContext,
    query: &str,
    raw: bool,
    start: Option<String>,
    end: Option<String>,
    formats: &[ExportFormat],
    out: Option<PathBuf>,
) -> Result<()> {
    let range = ctx.date_range(start, end)?;
    let mut session = ctx.session();
    if raw {
        session.set_enhance_enabled(false);
    }
    let assistant = ctx.assistant()?;
    let dir = ctx.export_dir(out);

    answer(ctx, &assistant, &mut session, query, &range, formats, &dir)?;
    Ok(())
}

/// Submit one question, persist history, print the result and write exports.
///
/// A failed report is printed, not returned as an error.
pub fn answer<B: AnalyticsBackend>(
    ctx: &AppContext,
    assistant: &Assistant<B>,
    session: &mut Session,
    query: &str,
    range: &DateRange,
    formats: &[ExportFormat],
    dir: &Path,
) -> Result<QueryResult> {
    if query.trim().is_empty() {
        anyhow::bail!("Question is empty");
    }

    let result = assistant.submit(session, query, range);
    ctx.save_history(session)?;
    render::print_query_result(&result);

    if !formats.is_empty() {
        if result.outcome.is_success() {
            export_all(
                &result.outcome.table,
                result.chart.as_ref(),
                &result.original,
                formats,
                dir,
            )?;
        } else {
            println!("{} Nothing exported: the report failed", Status::warn());
        }
    }

    Ok(result)
}

/// Write each requested format into `dir`
pub fn export_all(
    table: &ReportTable,
    chart: Option<&ChartSpec>,
    title: &str,
    formats: &[ExportFormat],
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for &format in formats {
        if format == ExportFormat::Html && chart.is_none() {
            println!(
                "{} Skipping {}: no chart for this question",
                Status::warn(),
                format.display_name()
            );
            continue;
        }
        let path = write_export(dir, table, chart, title, format)
            .with_context(|| format!("Failed to write {} export", format.display_name()))?;
        println!(
            "{} {} -> {}",
            Status::write(),
            format.display_name(),
            path.display().to_string().path()
        );
        written.push(path);
    }
    Ok(written)
}

/// Print the enhanced form of a question
pub fn enhance_query(ctx: &AppContext, query: &str) -> Result<()> {
    let enhancer = PromptEnhancer::new(ctx.config.vocabulary);
    println!("{}", enhancer.enhance(query));
    Ok(())
}

/// Print the dimensions and metrics a question maps to
pub fn extract_params(ctx: &AppContext, query: &str, enhanced: bool) -> Result<()> {
    let text = if enhanced {
        PromptEnhancer::new(ctx.config.vocabulary).enhance(query)
    } else {
        query.to_string()
    };
    let params = extractor::extract(&text);

    println!("{} {}", "Dimensions:".header(), params.dimensions.join(", "));
    println!("{} {}", "Metrics:".header(), params.metrics.join(", "));
    Ok(())
}

/// Render a previously exported CSV report
pub fn show_csv(
    ctx: &AppContext,
    file: &Path,
    query: Option<&str>,
    formats: &[ExportFormat],
    out: Option<PathBuf>,
) -> Result<()> {
    let data =
        std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let table = ReportTable::from_csv(&data)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    let title = query
        .map(str::to_string)
        .or_else(|| file.file_stem().map(|s| s.to_string_lossy().to_string()))
        .unwrap_or_else(|| "Report".to_string());
    let chart = query.and_then(|q| choose_chart(&table, q));

    println!("{}", title.bold());
    println!("{}", render::render_table(&table));
    if let Some(spec) = &chart {
        println!(
            "{} Chart: {} ({})",
            Status::hint(),
            spec.title.header(),
            render::describe_chart(spec)
        );
    }

    if !formats.is_empty() {
        export_all(&table, chart.as_ref(), &title, formats, &ctx.export_dir(out))?;
    }
    Ok(())
}
