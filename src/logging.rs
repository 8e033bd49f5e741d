// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Logging setup
//!
//! Diagnostics go to stderr so report tables on stdout stay clean. The level
//! comes from `RUST_LOG` when set, otherwise from the `-v` count, otherwise
//! from the config file. Records emitted through the `log` macros are picked
//! up by the same subscriber.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level name for a `-v` count, or `None` when no flag was given
pub fn level_for_verbosity(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Filter directive used when `RUST_LOG` is absent
pub fn directive(verbosity: u8, config_level: &str) -> String {
    let level = level_for_verbosity(verbosity).unwrap_or(config_level);
    // HTTP stack internals stay quiet below trace
    if level == "trace" {
        level.to_string()
    } else {
        format!("{},hyper=warn,rustls=warn,reqwest=warn", level)
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(verbosity: u8, config_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(verbosity, config_level)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2);

    if tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!(verbosity, config_level, "Logging initialized");
    }
}

/// Logging for tests (captured by the test harness)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
