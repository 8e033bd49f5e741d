// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Connection commands

use std::path::Path;

use anyhow::{Context, Result};
use colored::*;

use super::AppContext;
use crate::colors::{Status, StyledText};
use crate::config::AppConfig;
use crate::session::Session;

/// Validate a property id and key file, then save both
pub fn connect(ctx: &AppContext, property_id: &str, key_file: &Path) -> Result<()> {
    let key_json = std::fs::read_to_string(key_file)
        .with_context(|| format!("Failed to read key file {}", key_file.display()))?;

    let mut session = Session::new();
    let credentials = session.connect(property_id, &key_json)?;
    ctx.cache
        .save_credentials(credentials)
        .context("Failed to save credentials")?;

    println!(
        "{} Connected to GA4 property {}",
        Status::ok(),
        credentials.property_id.as_str().brand()
    );
    if let Some(email) = credentials.key.client_email() {
        println!("    Service account: {}", email.path());
        println!(
            "    {} This account needs Viewer access on the property",
            Status::info()
        );
    }
    Ok(())
}

/// Remove saved credentials
pub fn disconnect(ctx: &AppContext) -> Result<()> {
    let was_connected = ctx.cache.load_credentials().ok().flatten().is_some();
    ctx.cache
        .clear_credentials()
        .context("Failed to remove saved credentials")?;

    if was_connected {
        println!("{} Disconnected from Google Analytics", Status::ok());
    } else {
        println!("{} No saved connection", Status::info());
    }
    Ok(())
}

/// Print connection, AI and history status
pub fn status(ctx: &AppContext) -> Result<()> {
    let session = ctx.session();
    print_status(&session);

    println!();
    println!("  {:<14} {}", "Vocabulary:", ctx.config.vocabulary);
    if let Ok(path) = AppConfig::config_path() {
        println!("  {:<14} {}", "Config:", path.display().to_string().path());
    }
    println!(
        "  {:<14} {}",
        "Cache:",
        ctx.cache.base_dir().display().to_string().path()
    );
    Ok(())
}

/// Status block shared by `status` and the shell
pub fn print_status(session: &Session) {
    println!("{}", "GA4 Assistant".brand());
    println!();

    match session.credentials() {
        Some(credentials) => {
            println!(
                "  {:<14} {} property {}",
                "Analytics:",
                "Connected".green(),
                credentials.property_id.as_str().brand()
            );
            if let Some(email) = credentials.key.client_email() {
                println!("  {:<14} {}", "Account:", email);
            }
        }
        None => println!("  {:<14} {}", "Analytics:", "Not connected".red()),
    }

    let ai = session.ai();
    println!(
        "  {:<14} {} {}",
        "AI provider:",
        ai.provider,
        if ai.has_api_key() {
            format!("(key {})", ai.masked_api_key()).dimmed()
        } else {
            "(no key)".dimmed()
        }
    );
    println!(
        "  {:<14} {}",
        "History:",
        format!("{} question(s)", session.history().len()).count()
    );
    println!(
        "  {:<14} {}",
        "Enhancement:",
        if session.enhance_enabled() {
            "on".green()
        } else {
            "off".yellow()
        }
    );
}
