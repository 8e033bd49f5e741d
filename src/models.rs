// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Data structures shared by the query pipeline

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AssistantError, Result};

static RELATIVE_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(today|yesterday|[0-9]+daysAgo)$").expect("relative date pattern is valid")
});

/// Report dimensions and metrics picked for one query.
///
/// Both lists are non-empty once produced by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub dimensions: Vec<String>,
    pub metrics: Vec<String>,
}

impl ParameterSet {
    pub fn new(dimensions: Vec<String>, metrics: Vec<String>) -> Self {
        Self {
            dimensions,
            metrics,
        }
    }

    /// Column names a report for these parameters is expected to carry
    pub fn schema(&self) -> Vec<String> {
        self.dimensions
            .iter()
            .chain(self.metrics.iter())
            .cloned()
            .collect()
    }
}

/// Report date range in the Data API date grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start_date: "30daysAgo".to_string(),
            end_date: "today".to_string(),
        }
    }
}

impl DateRange {
    /// Build a range, rejecting dates the API would refuse
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Result<Self> {
        let range = Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        validate_date(&self.start_date)?;
        validate_date(&self.end_date)?;

        if let (Ok(start), Ok(end)) = (
            NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d"),
            NaiveDate::parse_from_str(&self.end_date, "%Y-%m-%d"),
        ) {
            if start > end {
                return Err(AssistantError::InvalidDateRange(format!(
                    "{} is after {}",
                    self.start_date, self.end_date
                )));
            }
        }
        Ok(())
    }
}

fn validate_date(value: &str) -> Result<()> {
    if RELATIVE_DATE.is_match(value) || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        Err(AssistantError::InvalidDateRange(value.to_string()))
    }
}

/// One report row: dimension values followed by metric values
pub type ReportRow = Vec<String>;

/// Tabular report result.
///
/// Columns are dimension headers followed by metric headers, in the order the
/// API returned them. Cells are kept as the API's string values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    pub columns: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Table with no columns and no rows, returned for every failed request
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_rows(columns: Vec<String>, rows: Vec<ReportRow>) -> Self {
        Self { columns, rows }
    }

    /// Append a row, padding or truncating it to the column count
    pub fn push_row(&mut self, mut row: ReportRow) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cells of one column as strings
    pub fn column_values(&self, index: usize) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.get(index).cloned().unwrap_or_default())
            .collect()
    }

    /// Cells of one column parsed as numbers; unparsable cells become 0
    pub fn numeric_values(&self, index: usize) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.get(index).and_then(|v| parse_number(v)).unwrap_or(0.0))
            .collect()
    }

    /// Parse a CSV document with a header row into a table
    pub fn from_csv(data: &[u8]) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data);

        let columns = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>();
        let mut table = Self::new(columns);

        for record in reader.records() {
            let record = record?;
            table.push_row(record.iter().map(|c| c.to_string()).collect());
        }

        Ok(table)
    }
}

/// Parse a report cell as a number
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A submitted question, kept in the session history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub original: String,
    pub enhanced: String,
    pub asked_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(original: impl Into<String>, enhanced: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            enhanced: enhanced.into(),
            asked_at: Utc::now(),
        }
    }

    /// Truncated original query for list displays
    pub fn preview(&self, width: usize) -> String {
        if self.original.chars().count() <= width {
            self.original.clone()
        } else {
            let cut: String = self.original.chars().take(width).collect();
            format!("{}...", cut)
        }
    }
}
