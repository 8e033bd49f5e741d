// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! History commands (list, rerun, clear)

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::*;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use super::{answer, AppContext};
use crate::colors::{print_separator, Status};
use crate::export::ExportFormat;
use crate::models::HistoryEntry;

const PREVIEW_WIDTH: usize = 50;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Question")]
    question: String,
    #[tabled(rename = "Asked")]
    asked: String,
}

/// Table of history entries, numbered from 1
pub fn history_table(history: &[HistoryEntry]) -> String {
    let rows: Vec<HistoryRow> = history
        .iter()
        .enumerate()
        .map(|(i, entry)| HistoryRow {
            number: i + 1,
            question: entry.preview(PREVIEW_WIDTH),
            asked: entry
                .asked_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
        })
        .collect();

    Table::new(rows).with(TableStyle::ascii_rounded()).to_string()
}

/// List earlier questions
pub fn history_list(ctx: &AppContext) -> Result<()> {
    let history = ctx.cache.load_history().context("Failed to read history")?;

    if history.is_empty() {
        println!("No questions asked yet.");
        return Ok(());
    }

    println!("\n{} Question History", "[*]".blue());
    print_separator(70);
    println!("{}", history_table(&history));
    println!(
        "\n{} Re-run an entry with: ga4a history rerun <#>",
        Status::info()
    );
    Ok(())
}

/// Ask history entry `number` again with the current date defaults
pub fn history_rerun(
    ctx: &AppContext,
    number: usize,
    formats: &[ExportFormat],
    out: Option<PathBuf>,
) -> Result<()> {
    let mut session = ctx.session();
    let query = session.history_entry(number)?.original.clone();
    println!("{} Re-running #{}: {}", Status::info(), number, query.cyan());

    let range = ctx.date_range(None, None)?;
    let assistant = ctx.assistant()?;
    answer(
        ctx,
        &assistant,
        &mut session,
        &query,
        &range,
        formats,
        &ctx.export_dir(out),
    )?;
    Ok(())
}

/// Delete all history
pub fn history_clear(ctx: &AppContext) -> Result<()> {
    ctx.cache.clear_history().context("Failed to clear history")?;
    println!("{} History cleared", Status::ok());
    Ok(())
}
