// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Shared state for command handlers

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analytics::{GaDataApi, ReportClient};
use crate::config::AppConfig;
use crate::enhancer::PromptEnhancer;
use crate::models::DateRange;
use crate::pipeline::Assistant;
use crate::session::Session;
use crate::settings::SettingsCache;

/// Configuration plus the settings cache every command reads from
pub struct AppContext {
    pub config: AppConfig,
    pub cache: SettingsCache,
}

impl AppContext {
    /// Load the config file and locate the settings cache in the home directory
    pub fn load() -> Result<Self> {
        let config = AppConfig::load().context("Failed to load configuration")?;
        let cache = SettingsCache::in_home()?;
        Ok(Self::new(config, cache))
    }

    pub fn new(config: AppConfig, cache: SettingsCache) -> Self {
        Self { config, cache }
    }

    /// Session restored from the cache, with enhancement set from config
    pub fn session(&self) -> Session {
        let mut session = self.cache.load_session();
        session.set_enhance_enabled(self.config.enhance_by_default);
        session
    }

    /// Assistant wired to the live Data API
    pub fn assistant(&self) -> Result<Assistant<GaDataApi>> {
        let api = GaDataApi::new(&self.config.http_client_config())
            .context("Failed to build HTTP client")?
            .with_api_base(self.config.api_base_url.as_str())
            .with_token_uri(self.config.token_uri_override.clone());
        Ok(Assistant::new(
            ReportClient::new(api),
            PromptEnhancer::new(self.config.vocabulary),
        ))
    }

    /// Date range from command-line overrides, falling back to config
    pub fn date_range(&self, start: Option<String>, end: Option<String>) -> Result<DateRange> {
        let defaults = self.config.date_range();
        let range = DateRange::new(
            start.unwrap_or(defaults.start_date),
            end.unwrap_or(defaults.end_date),
        )?;
        Ok(range)
    }

    /// Directory exports are written to
    pub fn export_dir(&self, out: Option<PathBuf>) -> PathBuf {
        out.or_else(|| self.config.export_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn save_history(&self, session: &Session) -> Result<()> {
        self.cache
            .save_history(session.history())
            .context("Failed to save history")
    }
}
