// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Prompt enhancement
//!
//! Rewrites a raw question into a more explicit one before parameter
//! extraction:
//!
//! - annotates known terms from a vocabulary table, in table order
//! - appends `for the last 30 days` when no time range is mentioned
//! - appends a bar chart or table hint when no visualization is mentioned
//!
//! Matching is literal substring matching on lowercased text, so a term also
//! matches inside longer words ("page" in "pages"). Time keywords match the
//! same way: "ago" in "Chicago" counts as a time range.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Appended when the query names no time range
pub const DEFAULT_TIME_RANGE: &str = " for the last 30 days";

/// Appended to grouping queries (` by `) with no visualization keyword
pub const BAR_CHART_HINT: &str = ". Show in an easy-to-understand bar chart";

/// Appended to other queries with no visualization keyword
pub const TABLE_HINT: &str = ". Display in a simple table";

const TIME_TERMS: &[&str] = &[
    "yesterday",
    "today",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
    "days",
    "week",
    "month",
    "year",
    "ago",
];

const VISUALIZATION_TERMS: &[&str] = &["chart", "graph", "plot", "table"];

/// Jargon explained in plain English
const EXPLAIN_TERMS: &[(&str, &str)] = &[
    ("users", "number of visitors"),
    ("traffic", "website visits"),
    ("bounce", "visitors who left quickly"),
    ("device", "device type (phone, computer, tablet)"),
    ("country", "visitor location"),
    ("source", "where visitors came from"),
    ("page", "specific pages visited"),
    ("sessions", "visits to your site"),
    ("organic", "search engine traffic"),
    ("direct", "people typing your URL"),
    ("referral", "links from other sites"),
];

/// Plain-English terms mapped to report field names
const CANONICAL_TERMS: &[(&str, &str)] = &[
    ("visitors", "activeUsers"),
    ("users", "activeUsers"),
    ("phones", "deviceCategory"),
    ("mobile", "deviceCategory"),
    ("desktop", "deviceCategory"),
    ("computers", "deviceCategory"),
    ("device", "deviceCategory"),
    ("countries", "country"),
    ("country", "country"),
    ("located", "country"),
    ("city", "city"),
    ("pages", "pagePath"),
    ("content", "pagePath"),
    ("traffic source", "sourceMedium"),
    ("find your site", "sourceMedium"),
    ("visits", "sessions"),
    ("bounce", "bounceRate"),
    ("time on site", "avgSessionDuration"),
];

/// Which substitution table the enhancer applies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vocabulary {
    /// term -> plain-English explanation
    #[default]
    Explain,
    /// plain-English term -> report field name
    Canonical,
}

impl Vocabulary {
    pub fn terms(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Explain => EXPLAIN_TERMS,
            Self::Canonical => CANONICAL_TERMS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Explain => "explain",
            Self::Canonical => "canonical",
        }
    }
}

impl std::fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Vocabulary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "explain" => Ok(Self::Explain),
            "canonical" => Ok(Self::Canonical),
            other => Err(format!("unknown vocabulary '{}'", other)),
        }
    }
}

/// Query rewriter over one vocabulary table
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptEnhancer {
    vocabulary: Vocabulary,
}

impl PromptEnhancer {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }

    pub fn enhance(&self, query: &str) -> String {
        let mut enhanced = query.to_string();
        let mut annotations = self.annotation_spans(&enhanced);

        for (term, replacement) in self.vocabulary.terms() {
            annotate_first(&mut enhanced, &mut annotations, term, replacement);
        }

        // Hints are decided on the caller's text; explanations such as
        // "tablet" must not count as a visualization keyword.
        let lower = query.to_ascii_lowercase();
        if !TIME_TERMS.iter().any(|t| lower.contains(t)) {
            enhanced.push_str(DEFAULT_TIME_RANGE);
        }

        if !VISUALIZATION_TERMS.iter().any(|t| lower.contains(t)) {
            if lower.contains(" by ") {
                enhanced.push_str(BAR_CHART_HINT);
            } else {
                enhanced.push_str(TABLE_HINT);
            }
        }

        enhanced
    }

    /// Byte ranges of `(replacement)` markers this vocabulary already wrote
    /// into `text`
    fn annotation_spans(&self, text: &str) -> Vec<Range<usize>> {
        let mut spans: Vec<Range<usize>> = self
            .vocabulary
            .terms()
            .iter()
            .flat_map(|(_, replacement)| {
                let marker = format!("({})", replacement);
                text.match_indices(&marker)
                    .map(|(i, m)| i..i + m.len())
                    .collect::<Vec<_>>()
            })
            .collect();
        spans.sort_by_key(|a| a.start);
        spans.dedup();
        spans
    }
}

/// Enhance with the default explain vocabulary
pub fn enhance(query: &str) -> String {
    PromptEnhancer::default().enhance(query)
}

/// Insert ` (replacement)` after the first case-insensitive occurrence of `term`
/// that does not overlap an annotation span, then record the new span.
///
/// ASCII lowercasing keeps byte offsets identical between `text` and its
/// lowercase copy.
fn annotate_first(
    text: &mut String,
    annotations: &mut Vec<Range<usize>>,
    term: &str,
    replacement: &str,
) {
    let lower = text.to_ascii_lowercase();
    let needle = term.to_ascii_lowercase();
    let Some(start) = lower
        .match_indices(&needle)
        .map(|(i, _)| i)
        .find(|&i| !annotations.iter().any(|a| i < a.end && a.start < i + needle.len()))
    else {
        return;
    };
    let end = start + needle.len();
    let annotation = format!(" ({})", replacement);

    if text[end..].starts_with(&annotation) {
        return;
    }
    text.insert_str(end, &annotation);

    let shift = annotation.len();
    for span in annotations.iter_mut().filter(|a| a.start >= end) {
        *span = span.start + shift..span.end + shift;
    }
    annotations.push(end..end + shift);
}
