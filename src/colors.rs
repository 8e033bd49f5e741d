// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Terminal styling
//!
//! Status markers and text styles shared by every command.
//!
//! - Green - success, connected
//! - Cyan - info, property ids, paths
//! - Yellow - warnings, counts
//! - Red - errors
//! - Magenta - headers, labels

use colored::{ColoredString, Colorize};

/// Status indicators with consistent colors
pub struct Status;

impl Status {
    /// `[OK]` in green
    pub fn ok() -> ColoredString {
        "[OK]".green()
    }

    /// `[i]` in cyan
    pub fn info() -> ColoredString {
        "[i]".cyan()
    }

    /// `[!]` in yellow
    pub fn warn() -> ColoredString {
        "[!]".yellow()
    }

    /// `[X]` in red
    pub fn error() -> ColoredString {
        "[X]".red()
    }

    /// `[<]` in blue, shown while a report is fetched
    pub fn fetch() -> ColoredString {
        "[<]".blue()
    }

    /// `[>]` in yellow, shown for files written
    pub fn write() -> ColoredString {
        "[>]".yellow()
    }

    /// `[?]` in magenta, shown for suggestions
    pub fn hint() -> ColoredString {
        "[?]".magenta()
    }
}

/// Text styling helpers
pub trait StyledText {
    fn header(&self) -> ColoredString;
    fn path(&self) -> ColoredString;
    fn count(&self) -> ColoredString;
    fn separator(&self) -> ColoredString;
    fn brand(&self) -> ColoredString;
}

impl StyledText for str {
    fn header(&self) -> ColoredString {
        self.magenta().bold()
    }

    fn path(&self) -> ColoredString {
        self.cyan()
    }

    fn count(&self) -> ColoredString {
        self.yellow()
    }

    fn separator(&self) -> ColoredString {
        self.dimmed()
    }

    fn brand(&self) -> ColoredString {
        self.cyan().bold()
    }
}

impl StyledText for String {
    fn header(&self) -> ColoredString {
        self.as_str().header()
    }

    fn path(&self) -> ColoredString {
        self.as_str().path()
    }

    fn count(&self) -> ColoredString {
        self.as_str().count()
    }

    fn separator(&self) -> ColoredString {
        self.as_str().separator()
    }

    fn brand(&self) -> ColoredString {
        self.as_str().brand()
    }
}

/// Print a dimmed rule `width` characters wide
pub fn print_separator(width: usize) {
    println!("{}", "=".repeat(width).separator());
}

/// Turn all color output off (`--no-color` or `NO_COLOR`)
pub fn disable() {
    colored::control::set_override(false);
}
