// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Sample questions

use anyhow::Result;

use crate::colors::{Status, StyledText};

/// (question, what it shows)
pub const SAMPLE_QUESTIONS: &[(&str, &str)] = &[
    ("Users by device", "Compare visitors using phones vs computers"),
    ("Top countries", "See where your visitors are located"),
    ("Popular pages", "Find your most visited content"),
    ("Traffic sources", "Discover how people find your site"),
    ("New vs returning", "See how many visitors come back"),
];

pub fn print_samples() {
    for (i, (question, explanation)) in SAMPLE_QUESTIONS.iter().enumerate() {
        println!("  {}. {}: {}", i + 1, question.header(), explanation);
    }
}

pub fn list_samples() -> Result<()> {
    println!("{} Sample Questions", Status::hint());
    println!();
    print_samples();
    println!();
    println!("{} Try: ga4a ask \"{}\"", Status::info(), SAMPLE_QUESTIONS[0].0);
    Ok(())
}
