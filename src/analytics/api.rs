// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Google Analytics Data API (v1beta) backend
//!
//! One operation is used: `properties/{id}:runReport`.
//!
//! ## Authentication
//!
//! Each report call exchanges the connected service-account key for a
//! read-only access token first; see [`super::auth`].

use serde::{Deserialize, Serialize};

use super::auth::{fetch_access_token, Credentials};
use super::AnalyticsBackend;
use crate::error::ReportError;
use crate::models::{DateRange, ParameterSet, ReportTable};

pub const DEFAULT_API_BASE: &str = "https://analyticsdata.googleapis.com";

/// HTTP client configuration for the Data API
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("ga4a/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Build a configured HTTP client
pub fn build_http_client(config: &HttpClientConfig) -> anyhow::Result<reqwest::blocking::Client> {
    use std::time::Duration;

    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(&config.user_agent)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireDateRange {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedField {
    pub name: String,
}

/// Body of a `runReport` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReportRequest {
    pub date_ranges: Vec<WireDateRange>,
    pub dimensions: Vec<NamedField>,
    pub metrics: Vec<NamedField>,
}

impl RunReportRequest {
    pub fn new(params: &ParameterSet, range: &DateRange) -> Self {
        let named = |names: &[String]| {
            names
                .iter()
                .map(|n| NamedField { name: n.clone() })
                .collect::<Vec<_>>()
        };
        Self {
            date_ranges: vec![WireDateRange {
                start_date: range.start_date.clone(),
                end_date: range.end_date.clone(),
            }],
            dimensions: named(&params.dimensions),
            metrics: named(&params.metrics),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricHeader {
    pub name: String,
    #[serde(rename = "type", default)]
    pub metric_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CellValue {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRowValues {
    #[serde(default)]
    pub dimension_values: Vec<CellValue>,
    #[serde(default)]
    pub metric_values: Vec<CellValue>,
}

/// Response of a `runReport` call. Empty reports omit `rows` entirely.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReportResponse {
    #[serde(default)]
    pub dimension_headers: Vec<NamedField>,
    #[serde(default)]
    pub metric_headers: Vec<MetricHeader>,
    #[serde(default)]
    pub rows: Vec<ReportRowValues>,
    #[serde(default)]
    pub row_count: Option<u64>,
}

impl RunReportResponse {
    /// Flatten into a table: dimension headers then metric headers, in API order
    pub fn into_table(self) -> ReportTable {
        let columns = self
            .dimension_headers
            .into_iter()
            .map(|h| h.name)
            .chain(self.metric_headers.into_iter().map(|h| h.name))
            .collect();

        let mut table = ReportTable::new(columns);
        for row in self.rows {
            table.push_row(
                row.dimension_values
                    .into_iter()
                    .chain(row.metric_values)
                    .map(|c| c.value)
                    .collect(),
            );
        }
        table
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Map a failed API response to a report error category
pub fn classify_api_error(http_status: u16, body: &str) -> ReportError {
    let detail = serde_json::from_str::<ApiErrorBody>(body).ok().map(|b| b.error);
    let message = detail
        .as_ref()
        .and_then(|d| d.message.clone())
        .unwrap_or_else(|| format!("HTTP {}: {}", http_status, body.trim()));
    let status = detail.and_then(|d| d.status).unwrap_or_default();

    match status.as_str() {
        "PERMISSION_DENIED" | "UNAUTHENTICATED" => ReportError::PermissionDenied(message),
        "INVALID_ARGUMENT" | "NOT_FOUND" => ReportError::InvalidArgument(message),
        _ => match http_status {
            401 | 403 => ReportError::PermissionDenied(message),
            400 | 404 => ReportError::InvalidArgument(message),
            _ => ReportError::Unexpected(message),
        },
    }
}

// ============================================================================
// Backend
// ============================================================================

/// Live Data API backend over blocking HTTP
pub struct GaDataApi {
    client: reqwest::blocking::Client,
    api_base: String,
    token_uri_override: Option<String>,
}

impl GaDataApi {
    pub fn new(config: &HttpClientConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client: build_http_client(config)?,
            api_base: DEFAULT_API_BASE.to_string(),
            token_uri_override: None,
        })
    }

    /// Point the backend at another API host
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Use this token endpoint instead of the key's `token_uri`
    pub fn with_token_uri(mut self, token_uri: Option<String>) -> Self {
        self.token_uri_override = token_uri;
        self
    }

    pub fn report_url(&self, property_id: &str) -> String {
        format!(
            "{}/v1beta/properties/{}:runReport",
            self.api_base, property_id
        )
    }
}

impl AnalyticsBackend for GaDataApi {
    fn name(&self) -> &'static str {
        "Google Analytics Data API"
    }

    fn run_report(
        &self,
        credentials: &Credentials,
        request: &RunReportRequest,
    ) -> Result<RunReportResponse, ReportError> {
        let token = fetch_access_token(
            &self.client,
            &credentials.key,
            self.token_uri_override.as_deref(),
        )?;

        let url = self.report_url(&credentials.property_id);
        log::info!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(request)
            .send()
            .map_err(|e| ReportError::Unexpected(format!("request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ReportError::Unexpected(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            log::warn!("runReport returned {}", status);
            return Err(classify_api_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| ReportError::Unexpected(format!("failed to parse report: {}", e)))
    }
}
