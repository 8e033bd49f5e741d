// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::analytics::api::{HttpClientConfig, DEFAULT_API_BASE};
use crate::enhancer::Vocabulary;
use crate::models::DateRange;

/// Tool-wide settings stored at `<config_dir>/ga4-assistant/config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Substitution table used by the prompt enhancer
    pub vocabulary: Vocabulary,

    /// Whether `ask` enhances queries unless `--raw` is given
    pub enhance_by_default: bool,

    pub default_start_date: String,
    pub default_end_date: String,

    /// Data API host
    pub api_base_url: String,

    /// Token endpoint to use instead of the key file's `token_uri`
    pub token_uri_override: Option<String>,

    pub timeout_secs: u64,

    /// Directory for exports when `--out` is not given
    pub export_dir: Option<PathBuf>,

    /// Log level when neither RUST_LOG nor -v is set
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let range = DateRange::default();
        Self {
            vocabulary: Vocabulary::default(),
            enhance_by_default: true,
            default_start_date: range.start_date,
            default_end_date: range.end_date,
            api_base_url: DEFAULT_API_BASE.to_string(),
            token_uri_override: None,
            timeout_secs: HttpClientConfig::default().timeout_secs,
            export_dir: None,
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults when absent
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join("ga4-assistant").join("config.json"))
    }

    /// Default report date range
    pub fn date_range(&self) -> DateRange {
        DateRange {
            start_date: self.default_start_date.clone(),
            end_date: self.default_end_date.clone(),
        }
    }

    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            timeout_secs: self.timeout_secs,
            ..Default::default()
        }
    }
}
