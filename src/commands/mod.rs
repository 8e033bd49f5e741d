// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Command implementations

mod ai;
mod ask;
mod config_cmds;
mod connect;
mod context;
mod history;
mod samples;
pub mod shell;

pub use ai::*;
pub use ask::*;
pub use config_cmds::*;
pub use connect::*;
pub use context::*;
pub use history::*;
pub use samples::*;
pub use shell::{run_shell, shell, ShellCommand};
