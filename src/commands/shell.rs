// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Interactive shell
//!
//! Reads one command per line. Anything that is not a shell command is asked
//! as a question, so `Users by country` and `ask Users by country` are the same.

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::*;

use super::{answer, history_table, print_samples, print_status, AppContext, SAMPLE_QUESTIONS};
use crate::analytics::AnalyticsBackend;
use crate::colors::{Status, StyledText};
use crate::pipeline::Assistant;
use crate::session::Session;

const PROMPT: &str = "ga4a> ";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Ask(String),
    History,
    Rerun(usize),
    Sample(usize),
    Samples,
    Enhance(bool),
    Status,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head.to_lowercase().as_str() {
            "quit" | "exit" | "q" if rest.is_empty() => Self::Quit,
            "help" | "?" if rest.is_empty() => Self::Help,
            "history" if rest.is_empty() => Self::History,
            "samples" if rest.is_empty() => Self::Samples,
            "status" if rest.is_empty() => Self::Status,
            "ask" if rest.is_empty() => Self::Invalid("usage: ask <question>".to_string()),
            "ask" => Self::Ask(rest.to_string()),
            "rerun" => match rest.parse() {
                Ok(n) => Self::Rerun(n),
                Err(_) => Self::Invalid("usage: rerun <number>".to_string()),
            },
            "sample" => match rest.parse() {
                Ok(n) => Self::Sample(n),
                Err(_) => Self::Invalid("usage: sample <number>".to_string()),
            },
            "enhance" => match rest.to_lowercase().as_str() {
                "on" => Self::Enhance(true),
                "off" => Self::Enhance(false),
                _ => Self::Invalid("usage: enhance on|off".to_string()),
            },
            _ => Self::Ask(line.to_string()),
        }
    }
}

fn print_help() {
    println!("{}", "Commands".header());
    println!("  <question>        ask a question, e.g. Users by country");
    println!("  ask <question>    same as above");
    println!("  history           list earlier questions");
    println!("  rerun <n>         ask history entry n again");
    println!("  samples           list sample questions");
    println!("  sample <n>        ask sample question n");
    println!("  enhance on|off    toggle question enhancement");
    println!("  status            show connection status");
    println!("  help              show this help");
    println!("  quit              leave the shell");
}

/// Start the shell on stdin
pub fn shell(ctx: &AppContext) -> Result<()> {
    let assistant = ctx.assistant()?;
    let mut session = ctx.session();
    let stdin = std::io::stdin();
    run_shell(ctx, &assistant, &mut session, stdin.lock())
}

/// Command loop over any line source; returns at `quit` or end of input
pub fn run_shell<B: AnalyticsBackend, R: BufRead>(
    ctx: &AppContext,
    assistant: &Assistant<B>,
    session: &mut Session,
    input: R,
) -> Result<()> {
    println!(
        "{} GA4 Assistant shell. Type {} for commands.",
        Status::info(),
        "help".cyan()
    );
    if !session.is_connected() {
        println!(
            "{} Not connected. Run `ga4a connect` first to get report data.",
            Status::warn()
        );
    }

    let range = ctx.config.date_range();
    let dir = ctx.export_dir(None);
    let mut lines = input.lines();

    loop {
        print!("{}", PROMPT.cyan().bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;

        let question = match ShellCommand::parse(&line) {
            ShellCommand::Quit => break,
            ShellCommand::Empty => continue,
            ShellCommand::Help => {
                print_help();
                continue;
            }
            ShellCommand::Status => {
                print_status(session);
                continue;
            }
            ShellCommand::Samples => {
                print_samples();
                continue;
            }
            ShellCommand::History => {
                if session.history().is_empty() {
                    println!("No questions asked yet.");
                } else {
                    println!("{}", history_table(session.history()));
                }
                continue;
            }
            ShellCommand::Enhance(enabled) => {
                session.set_enhance_enabled(enabled);
                println!(
                    "{} Enhancement {}",
                    Status::ok(),
                    if enabled { "on" } else { "off" }
                );
                continue;
            }
            ShellCommand::Invalid(usage) => {
                println!("{} {}", Status::warn(), usage);
                continue;
            }
            ShellCommand::Rerun(n) => match session.history_entry(n) {
                Ok(entry) => entry.original.clone(),
                Err(e) => {
                    println!("{} {}", Status::error(), e);
                    continue;
                }
            },
            ShellCommand::Sample(n) => match n.checked_sub(1).and_then(|i| SAMPLE_QUESTIONS.get(i)) {
                Some((question, _)) => question.to_string(),
                None => {
                    println!("{} No sample #{}", Status::error(), n);
                    continue;
                }
            },
            ShellCommand::Ask(question) => question,
        };

        if let Err(e) = answer(ctx, assistant, session, &question, &range, &[], &dir) {
            println!("{} {:#}", Status::error(), e);
        }
        println!();
    }

    println!("{} Bye", Status::ok());
    Ok(())
}
