// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Configuration file commands

use anyhow::Result;

use super::AppContext;
use crate::colors::{Status, StyledText};
use crate::config::AppConfig;

/// Print the effective configuration as JSON
pub fn config_show(ctx: &AppContext) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    Ok(())
}

pub fn config_path() -> Result<()> {
    println!("{}", AppConfig::config_path()?.display());
    Ok(())
}

/// Overwrite the config file with defaults
pub fn config_reset() -> Result<()> {
    let path = AppConfig::config_path()?;
    AppConfig::default().save_to(&path)?;
    println!(
        "{} Configuration reset: {}",
        Status::ok(),
        path.display().to_string().path()
    );
    Ok(())
}
