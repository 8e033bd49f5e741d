// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Error types for ga4a

use thiserror::Error;

/// Errors raised before a report is ever requested: bad input, bad key files,
/// unreadable settings, failed exports.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Property ID must be a 5-12 digit number, got '{0}'")]
    InvalidPropertyId(String),

    #[error("Invalid service account file: {0}")]
    InvalidCredentials(String),

    #[error("Service account file is missing required keys: {}", .0.join(", "))]
    MissingCredentialKeys(Vec<String>),

    #[error("Invalid date '{0}': use YYYY-MM-DD, today, yesterday or NdaysAgo")]
    InvalidDateRange(String),

    #[error("No history entry #{0}")]
    HistoryEntryNotFound(usize),

    #[error("Unknown AI provider: {0}")]
    UnknownProvider(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Home directory not found")]
    HomeNotFound,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AssistantError>;

/// Typed failure of a report request. The table returned alongside it is
/// always empty; the presentation layer decides how each kind is shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Google Analytics is not connected")]
    NotConfigured,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid request: {0}")]
    InvalidArgument(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ReportError {
    /// Short stable name of the failure category
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not-configured",
            Self::PermissionDenied(_) => "permission-denied",
            Self::InvalidArgument(_) => "invalid-argument",
            Self::Unexpected(_) => "unexpected",
        }
    }

    /// Remediation steps shown under the error message
    pub fn guidance(&self) -> &'static [&'static str] {
        match self {
            Self::NotConfigured => &[
                "Connect Google Analytics first: ga4a connect --property <ID> --key-file <service-account.json>",
            ],
            Self::PermissionDenied(_) => &[
                "Service account has Viewer access in GA4",
                "The service account email is added under GA4 Admin > Property Access Management",
                "Wait 5-10 minutes after granting permissions",
            ],
            Self::InvalidArgument(_) => &[
                "Check your property ID is correct",
                "Verify dimensions/metrics exist in GA4",
                "Reference: https://developers.google.com/analytics/devguides/reporting/data/v1/api-schema",
            ],
            Self::Unexpected(_) => &[
                "Try reconnecting Google Analytics",
                "Check your GA4 property has data",
                "Help: https://support.google.com/analytics",
            ],
        }
    }
}
