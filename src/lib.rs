// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! GA4 Assistant (ga4a) - Library
//!
//! Turns plain-language questions into Google Analytics 4 reports:
//!
//! - **Prompt enhancer** - annotates jargon and adds time-range and
//!   visualization hints
//! - **Parameter extractor** - maps a question to report dimensions and metrics
//! - **Report client** - runs the report for the connected property and
//!   classifies failures
//! - **Chart selection** - picks bar, line, pie or scatter from the question
//! - **Export** - CSV, Excel, PDF, Word and HTML chart files
//!
//! ```rust,ignore
//! use ga4a::{enhance, extract};
//!
//! let enhanced = enhance("Compare visitors using phones vs computers");
//! let params = extract(&enhanced);
//! assert_eq!(params.dimensions, vec!["deviceCategory"]);
//! ```

pub mod analytics;
pub mod chart;
pub mod cli;
pub mod colors;
pub mod commands;
pub mod config;
pub mod enhancer;
pub mod error;
pub mod export;
pub mod extractor;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod providers;
pub mod render;
pub mod session;
pub mod settings;

// Re-export commonly used items
pub use analytics::{
    AnalyticsBackend, Credentials, GaDataApi, ReportClient, ReportOutcome, RunReportRequest,
    RunReportResponse, ServiceAccountKey,
};
pub use chart::{choose_chart, render_chart_html, ChartKind, ChartSpec};
pub use cli::{AiCommands, Cli, Commands, ConfigCommands, HistoryCommands};
pub use config::AppConfig;
pub use enhancer::{enhance, PromptEnhancer, Vocabulary};
pub use error::{AssistantError, ReportError};
pub use export::{export, ExportFormat};
pub use extractor::{extract, ParameterExtractor};
pub use models::{DateRange, HistoryEntry, ParameterSet, ReportTable};
pub use pipeline::{Assistant, QueryResult};
pub use providers::{AiProvider, AiSettings};
pub use session::Session;
pub use settings::SettingsCache;
