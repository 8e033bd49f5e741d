// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Report parameter extraction from free text

use crate::models::ParameterSet;

/// Dimensions a query may ask for, in result order
pub const DIMENSIONS: &[&str] = &[
    "country",
    "city",
    "deviceCategory",
    "pagePath",
    "sourceMedium",
];

/// Metrics a query may ask for, in result order
pub const METRICS: &[&str] = &["activeUsers", "sessions", "bounceRate", "avgSessionDuration"];

pub const DEFAULT_DIMENSION: &str = "deviceCategory";
pub const DEFAULT_METRIC: &str = "activeUsers";

/// Substring matcher over fixed dimension/metric allow-lists
#[derive(Debug, Clone)]
pub struct ParameterExtractor {
    dimensions: Vec<String>,
    metrics: Vec<String>,
    default_dimension: String,
    default_metric: String,
}

impl Default for ParameterExtractor {
    fn default() -> Self {
        Self::new(DIMENSIONS, METRICS, DEFAULT_DIMENSION, DEFAULT_METRIC)
    }
}

impl ParameterExtractor {
    pub fn new(
        dimensions: &[&str],
        metrics: &[&str],
        default_dimension: &str,
        default_metric: &str,
    ) -> Self {
        Self {
            dimensions: dimensions.iter().map(|s| s.to_string()).collect(),
            metrics: metrics.iter().map(|s| s.to_string()).collect(),
            default_dimension: default_dimension.to_string(),
            default_metric: default_metric.to_string(),
        }
    }

    /// Pick every allow-listed name that occurs verbatim in `query`.
    ///
    /// Matching is case-sensitive. Result order follows the allow-list, and
    /// an empty side falls back to its default.
    pub fn extract(&self, query: &str) -> ParameterSet {
        let mut dimensions = matches(&self.dimensions, query);
        let mut metrics = matches(&self.metrics, query);

        if dimensions.is_empty() {
            dimensions.push(self.default_dimension.clone());
        }
        if metrics.is_empty() {
            metrics.push(self.default_metric.clone());
        }

        ParameterSet::new(dimensions, metrics)
    }
}

fn matches(names: &[String], query: &str) -> Vec<String> {
    names
        .iter()
        .filter(|name| query.contains(name.as_str()))
        .cloned()
        .collect()
}

/// Extract with the built-in allow-lists
pub fn extract(query: &str) -> ParameterSet {
    ParameterExtractor::default().extract(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_order_wins() {
        let params = extract("sessions and activeUsers by pagePath and country");
        assert_eq!(params.dimensions, vec!["country", "pagePath"]);
        assert_eq!(params.metrics, vec!["activeUsers", "sessions"]);
    }

    #[test]
    fn test_case_sensitive() {
        let params = extract("devicecategory ACTIVEUSERS");
        assert_eq!(params.dimensions, vec![DEFAULT_DIMENSION]);
        assert_eq!(params.metrics, vec![DEFAULT_METRIC]);
    }

    #[test]
    fn test_custom_lists() {
        let extractor = ParameterExtractor::new(&["browser"], &["views"], "browser", "views");
        let params = extractor.extract("views please");
        assert_eq!(params.dimensions, vec!["browser"]);
        assert_eq!(params.metrics, vec!["views"]);
    }
}
