// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! AI assistant provider settings
//!
//! The provider choice and its API key are saved alongside the analytics
//! connection so the assistant is configured on the next start.

pub mod config;

pub use config::{AiProvider, AiSettings};
