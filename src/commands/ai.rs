// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! AI provider settings commands

use anyhow::{Context, Result};
use colored::*;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use super::AppContext;
use crate::colors::{Status, StyledText};
use crate::providers::{AiProvider, AiSettings};

#[derive(Tabled)]
struct ProviderRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Provider")]
    display_name: &'static str,
    #[tabled(rename = "API Key Page")]
    key_url: &'static str,
}

/// Save provider and key to the settings cache
pub fn ai_save(ctx: &AppContext, provider: AiProvider, api_key: Option<&str>) -> Result<()> {
    let settings = AiSettings::new(provider, api_key.unwrap_or_default().trim());
    ctx.cache
        .save_ai_settings(&settings)
        .context("Failed to save AI settings")?;

    println!("{} AI settings saved: {}", Status::ok(), provider.to_string().brand());
    if !settings.has_api_key() {
        print!("{} No API key given", Status::warn());
        match provider.api_key_url() {
            Some(url) => println!("; get one at {}", url.path()),
            None => println!(),
        }
    }
    Ok(())
}

/// Remove saved provider and key
pub fn ai_clear(ctx: &AppContext) -> Result<()> {
    if !ctx.cache.has_ai_settings() {
        println!("{} No saved AI settings", Status::info());
        return Ok(());
    }
    ctx.cache
        .clear_ai_settings()
        .context("Failed to remove AI settings")?;
    println!(
        "{} Saved AI settings cleared (back to {})",
        Status::ok(),
        AiProvider::default()
    );
    Ok(())
}

/// Show saved provider and masked key
pub fn ai_show(ctx: &AppContext) -> Result<()> {
    let settings = ctx
        .cache
        .load_ai_settings()
        .context("Failed to read AI settings")?;

    let Some(settings) = settings else {
        println!(
            "{} No saved AI settings (default: {})",
            Status::info(),
            AiProvider::default()
        );
        return Ok(());
    };

    println!("  {:<10} {}", "Provider:", settings.provider.to_string().brand());
    if settings.has_api_key() {
        println!("  {:<10} {}", "API key:", settings.masked_api_key().dimmed());
    } else {
        println!("  {:<10} {}", "API key:", "(none)".dimmed());
    }
    if let Some(url) = settings.provider.api_key_url() {
        println!("  {:<10} {}", "Keys:", url.path());
    }
    Ok(())
}

/// List supported providers
pub fn ai_providers() -> Result<()> {
    let rows: Vec<ProviderRow> = AiProvider::ALL
        .iter()
        .map(|p| ProviderRow {
            name: p.cli_name(),
            display_name: p.display_name(),
            key_url: p.api_key_url().unwrap_or("-"),
        })
        .collect();

    println!("{}", Table::new(rows).with(TableStyle::ascii_rounded()));
    Ok(())
}
