// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! GA4 Assistant (ga4a) - Main entry point
//!
//! Ask Google Analytics 4 questions in plain language from the terminal.

use anyhow::Result;
use clap::Parser;

use ga4a::cli::{AiCommands, Cli, Commands, ConfigCommands, HistoryCommands};
use ga4a::commands::{self, AppContext};
use ga4a::{colors, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colors::disable();
    }

    let ctx = AppContext::load()?;
    logging::init(cli.verbose, &ctx.config.log_level);

    match cli.command {
        // ====================================================================
        // Connection Commands
        // ====================================================================
        Commands::Connect { property, key_file } => {
            commands::connect(&ctx, &property, &key_file)
        }
        Commands::Disconnect => commands::disconnect(&ctx),
        Commands::Status => commands::status(&ctx),

        // ====================================================================
        // Query Commands
        // ====================================================================
        Commands::Ask {
            query,
            raw,
            start,
            end,
            export,
            out,
        } => commands::ask(&ctx, &query.join(" "), raw, start, end, &export, out),
        Commands::Enhance { query } => commands::enhance_query(&ctx, &query.join(" ")),
        Commands::Extract { query, enhanced } => {
            commands::extract_params(&ctx, &query.join(" "), enhanced)
        }
        Commands::Samples => commands::list_samples(),
        Commands::Show {
            file,
            query,
            export,
            out,
        } => commands::show_csv(&ctx, &file, query.as_deref(), &export, out),

        // ====================================================================
        // History Commands
        // ====================================================================
        Commands::History { command } => match command {
            Some(HistoryCommands::List) | None => commands::history_list(&ctx),
            Some(HistoryCommands::Rerun {
                number,
                export,
                out,
            }) => commands::history_rerun(&ctx, number, &export, out),
            Some(HistoryCommands::Clear) => commands::history_clear(&ctx),
        },

        // ====================================================================
        // AI Provider Commands
        // ====================================================================
        Commands::Ai { command } => match command {
            AiCommands::Save { provider, api_key } => {
                commands::ai_save(&ctx, provider, api_key.as_deref())
            }
            AiCommands::Clear => commands::ai_clear(&ctx),
            AiCommands::Show => commands::ai_show(&ctx),
            AiCommands::Providers => commands::ai_providers(),
        },

        // ====================================================================
        // Interactive Shell
        // ====================================================================
        Commands::Shell => commands::shell(&ctx),

        // ====================================================================
        // Config Commands
        // ====================================================================
        Commands::Config { command } => match command {
            Some(ConfigCommands::Show) | None => commands::config_show(&ctx),
            Some(ConfigCommands::Path) => commands::config_path(),
            Some(ConfigCommands::Reset) => commands::config_reset(),
        },
    }
}
