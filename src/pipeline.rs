// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Query pipeline: enhance, extract, run report, pick chart

use crate::analytics::{AnalyticsBackend, ReportClient, ReportOutcome};
use crate::chart::{choose_chart, ChartSpec};
use crate::enhancer::PromptEnhancer;
use crate::extractor::ParameterExtractor;
use crate::models::{DateRange, HistoryEntry, ParameterSet};
use crate::session::Session;

/// Everything produced for one submitted question
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub original: String,
    pub enhanced: String,
    pub params: ParameterSet,
    pub range: DateRange,
    pub outcome: ReportOutcome,
    pub chart: Option<ChartSpec>,
}

pub struct Assistant<B: AnalyticsBackend> {
    enhancer: PromptEnhancer,
    extractor: ParameterExtractor,
    client: ReportClient<B>,
}

impl<B: AnalyticsBackend> Assistant<B> {
    pub fn new(client: ReportClient<B>, enhancer: PromptEnhancer) -> Self {
        Self {
            enhancer,
            extractor: ParameterExtractor::default(),
            client,
        }
    }

    pub fn with_extractor(mut self, extractor: ParameterExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn client(&self) -> &ReportClient<B> {
        &self.client
    }

    pub fn enhancer(&self) -> &PromptEnhancer {
        &self.enhancer
    }

    /// Enhanced form of `query`, or `query` itself when enhancement is off
    pub fn prepare(&self, session: &Session, query: &str) -> String {
        if session.enhance_enabled() {
            self.enhancer.enhance(query)
        } else {
            query.to_string()
        }
    }

    /// Run one question end to end and append it to the session history.
    ///
    /// The chart is chosen from the question as typed, not the enhanced text.
    pub fn submit(&self, session: &mut Session, query: &str, range: &DateRange) -> QueryResult {
        let query = query.trim();
        let enhanced = self.prepare(session, query);
        session.record(HistoryEntry::new(query, enhanced.clone()));

        let params = self.extractor.extract(&enhanced);
        log::debug!("Enhanced query: {}", enhanced);
        log::debug!("Extracted parameters: {:?}", params);

        let outcome = self.client.run_report(session, &params, range);
        let chart = choose_chart(&outcome.table, query);

        QueryResult {
            original: query.to_string(),
            enhanced,
            params,
            range: range.clone(),
            outcome,
            chart,
        }
    }
}
