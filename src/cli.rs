// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! CLI argument definitions using clap derive macros

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::export::ExportFormat;
use crate::providers::AiProvider;

/// GA4 Assistant (ga4a) - Ask Google Analytics questions in plain language
#[derive(Parser)]
#[command(name = "ga4a")]
#[command(author = "Nervosys")]
#[command(version)]
#[command(about = "Ask Google Analytics 4 questions in plain language", long_about = None)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    // ============================================================================
    // Connection Commands
    // ============================================================================
    /// Connect to a GA4 property with a service-account key file
    Connect {
        /// GA4 property ID (5-12 digits)
        #[arg(short, long, env = "GA4_PROPERTY_ID")]
        property: String,

        /// Path to the service-account JSON key
        #[arg(short, long, env = "GA4_KEY_FILE")]
        key_file: PathBuf,
    },

    /// Forget the saved property and key
    Disconnect,

    /// Show connection, AI provider and history status
    #[command(visible_alias = "st")]
    Status,

    // ============================================================================
    // Query Commands
    // ============================================================================
    /// Ask a question and show the report
    #[command(visible_alias = "q")]
    Ask {
        /// The question, e.g. "Users by country"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Send the question as typed, without enhancement
        #[arg(long)]
        raw: bool,

        /// Report start date (YYYY-MM-DD, today, yesterday or NdaysAgo)
        #[arg(long)]
        start: Option<String>,

        /// Report end date
        #[arg(long)]
        end: Option<String>,

        /// Export formats to write (csv, xlsx, pdf, docx, html)
        #[arg(short, long, num_args = 1..)]
        export: Vec<ExportFormat>,

        /// Directory for exported files
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show how a question would be enhanced
    Enhance {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Show the dimensions and metrics a question maps to
    Extract {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Enhance the question before extracting
        #[arg(long)]
        enhanced: bool,
    },

    /// List sample questions
    Samples,

    /// Render a previously exported CSV report
    Show {
        /// CSV file to load
        file: PathBuf,

        /// Question used to pick a chart
        #[arg(long)]
        query: Option<String>,

        /// Export formats to write
        #[arg(short, long, num_args = 1..)]
        export: Vec<ExportFormat>,

        /// Directory for exported files
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    // ============================================================================
    // History Commands
    // ============================================================================
    /// Review and re-run earlier questions
    #[command(visible_alias = "hist")]
    History {
        #[command(subcommand)]
        command: Option<HistoryCommands>,
    },

    // ============================================================================
    // AI Provider Commands
    // ============================================================================
    /// Manage AI provider settings
    Ai {
        #[command(subcommand)]
        command: AiCommands,
    },

    // ============================================================================
    // Interactive Shell
    // ============================================================================
    /// Start an interactive session
    #[command(visible_alias = "repl")]
    Shell,

    // ============================================================================
    // Config Commands
    // ============================================================================
    /// Show or reset the configuration file
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

// ============================================================================
// History Subcommands
// ============================================================================

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List earlier questions
    #[command(visible_alias = "ls")]
    List,

    /// Ask history entry N again
    Rerun {
        /// Entry number as shown by `history list`
        number: usize,

        /// Export formats to write
        #[arg(short, long, num_args = 1..)]
        export: Vec<ExportFormat>,

        /// Directory for exported files
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Delete all history
    Clear,
}

// ============================================================================
// AI Subcommands
// ============================================================================

#[derive(Subcommand)]
pub enum AiCommands {
    /// Save the AI provider and API key
    Save {
        /// Provider (openai, claude, gemini, mistral, cohere, custom)
        #[arg(short, long)]
        provider: AiProvider,

        /// API key for the provider
        #[arg(short = 'k', long, env = "GA4A_AI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Remove saved AI settings
    Clear,

    /// Show saved AI settings
    Show,

    /// List supported providers
    Providers,
}

// ============================================================================
// Config Subcommands
// ============================================================================

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write the default configuration
    Reset,
}
