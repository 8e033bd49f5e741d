// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Report execution against the hosted analytics API
//!
//! [`ReportClient`] owns the preconditions and the error policy; the network
//! call itself goes through an [`AnalyticsBackend`] so it can be swapped out.
//! Every failure comes back as an empty table plus a typed [`ReportError`].

pub mod api;
pub mod auth;

pub use api::{classify_api_error, GaDataApi, HttpClientConfig, RunReportRequest, RunReportResponse};
pub use auth::{validate_property_id, Credentials, ServiceAccountKey};

use crate::error::ReportError;
use crate::models::{DateRange, ParameterSet, ReportTable};
use crate::session::Session;

/// Transport for a single `runReport` call
pub trait AnalyticsBackend {
    /// Backend name for log lines
    fn name(&self) -> &'static str;

    fn run_report(
        &self,
        credentials: &Credentials,
        request: &RunReportRequest,
    ) -> Result<RunReportResponse, ReportError>;
}

impl<B: AnalyticsBackend + ?Sized> AnalyticsBackend for Box<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn run_report(
        &self,
        credentials: &Credentials,
        request: &RunReportRequest,
    ) -> Result<RunReportResponse, ReportError> {
        (**self).run_report(credentials, request)
    }
}

/// Result of one report request. `table` is empty whenever `error` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    pub table: ReportTable,
    pub error: Option<ReportError>,
}

impl ReportOutcome {
    pub fn success(table: ReportTable) -> Self {
        Self { table, error: None }
    }

    pub fn failure(error: ReportError) -> Self {
        Self {
            table: ReportTable::empty(),
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

pub struct ReportClient<B: AnalyticsBackend> {
    backend: B,
}

impl<B: AnalyticsBackend> ReportClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run one report for the session's connected property.
    ///
    /// Nothing is sent when the session is not connected or the date range
    /// is malformed.
    pub fn run_report(
        &self,
        session: &Session,
        params: &ParameterSet,
        range: &DateRange,
    ) -> ReportOutcome {
        let Some(credentials) = session.credentials() else {
            log::warn!("Report requested without a connected property");
            return ReportOutcome::failure(ReportError::NotConfigured);
        };

        if let Err(e) = range.validate() {
            return ReportOutcome::failure(ReportError::InvalidArgument(e.to_string()));
        }

        let request = RunReportRequest::new(params, range);
        log::info!(
            "Running report on property {} via {}: dimensions={:?} metrics={:?} range={}..{}",
            credentials.property_id,
            self.backend.name(),
            params.dimensions,
            params.metrics,
            range.start_date,
            range.end_date
        );

        match self.backend.run_report(credentials, &request) {
            Ok(response) => {
                let table = response.into_table();
                log::info!("Report returned {} row(s)", table.row_count());
                ReportOutcome::success(table)
            }
            Err(e) => {
                log::warn!("Report failed ({}): {}", e.kind(), e);
                ReportOutcome::failure(e)
            }
        }
    }
}
