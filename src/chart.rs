// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Chart selection and rendering
//!
//! The chart kind is picked from keywords in the user's question; the first
//! matching rule wins:
//!
//! | Keyword                              | Chart   | Axes                      |
//! |--------------------------------------|---------|---------------------------|
//! | ` by `                               | bar     | x = col 0, y = col 1      |
//! | `over time`, `trend`, `date`         | line    | x = col 0, y = col 1      |
//! | `proportion`, `percentage`, `share`  | pie     | names = col 0, values = 1 |
//! | `scatter`, `correlation`             | scatter | x = col 1, y = col 2      |
//!
//! Anything else is shown as a table only.

use std::collections::BTreeMap;

use plotly::common::{Mode, Title};
use plotly::{Bar, Layout, Plot, Scatter, Trace};
use serde::{Deserialize, Serialize};

use crate::models::ReportTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Scatter,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Scatter => "scatter",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which columns of a report a chart plots.
///
/// For pie charts `x` is the names column and `y` the values column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x: String,
    pub y: String,
    pub color: Option<String>,
}

/// Pick a chart for `table` from keywords in `query`.
///
/// Returns `None` for tables with fewer than two columns or no rows, and for
/// queries that match no rule.
pub fn choose_chart(table: &ReportTable, query: &str) -> Option<ChartSpec> {
    if table.column_count() < 2 || table.is_empty() {
        return None;
    }

    let q = query.to_lowercase();
    let cols = &table.columns;
    let spec = |kind, title: String, x: usize, y: usize, color: Option<usize>| ChartSpec {
        kind,
        title,
        x: cols[x].clone(),
        y: cols[y].clone(),
        color: color.map(|c| cols[c].clone()),
    };

    if q.contains(" by ") {
        Some(spec(ChartKind::Bar, query.to_string(), 0, 1, Some(0)))
    } else if contains_any(&q, &["over time", "trend", "date"]) {
        Some(spec(ChartKind::Line, format!("{} Trend", query), 0, 1, None))
    } else if contains_any(&q, &["proportion", "percentage", "share"]) {
        Some(spec(ChartKind::Pie, format!("{} Distribution", query), 0, 1, None))
    } else if contains_any(&q, &["scatter", "correlation"]) {
        let title = format!("{} Correlation", query);
        if cols.len() >= 3 {
            Some(spec(ChartKind::Scatter, title, 1, 2, Some(0)))
        } else {
            Some(spec(ChartKind::Scatter, title, 0, 1, None))
        }
    } else {
        None
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Build a plotly figure for `spec` over `table`.
///
/// Returns `None` when a column named in `spec` is missing from the table.
pub fn build_plot(table: &ReportTable, spec: &ChartSpec) -> Option<Plot> {
    let x_idx = table.column_index(&spec.x)?;
    let y_idx = table.column_index(&spec.y)?;
    let color_idx = match &spec.color {
        Some(c) => Some(table.column_index(c)?),
        None => None,
    };

    let mut plot = Plot::new();

    match spec.kind {
        ChartKind::Bar => {
            let labels = table.column_values(x_idx);
            let values = table.numeric_values(y_idx);
            if color_idx == Some(x_idx) {
                // One trace per category gives each bar its own color
                for (label, value) in labels.into_iter().zip(values) {
                    plot.add_trace(Bar::new(vec![label.clone()], vec![value]).name(&label));
                }
            } else {
                plot.add_trace(Bar::new(labels, values).name(&spec.y));
            }
        }
        ChartKind::Line => {
            let trace = Scatter::new(table.column_values(x_idx), table.numeric_values(y_idx))
                .mode(Mode::Lines)
                .name(&spec.y);
            plot.add_trace(trace);
        }
        ChartKind::Pie => {
            plot.add_trace(PieTrace::new(
                table.column_values(x_idx),
                table.numeric_values(y_idx),
                &spec.y,
            ));
        }
        ChartKind::Scatter => {
            let xs = table.numeric_values(x_idx);
            let ys = table.numeric_values(y_idx);
            match color_idx {
                Some(c) => {
                    let mut groups: BTreeMap<String, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
                    for ((x, y), key) in xs.into_iter().zip(ys).zip(table.column_values(c)) {
                        let entry = groups.entry(key).or_default();
                        entry.0.push(x);
                        entry.1.push(y);
                    }
                    for (key, (gx, gy)) in groups {
                        plot.add_trace(Scatter::new(gx, gy).mode(Mode::Markers).name(&key));
                    }
                }
                None => {
                    plot.add_trace(Scatter::new(xs, ys).mode(Mode::Markers).name(&spec.y));
                }
            }
        }
    }

    plot.set_layout(Layout::new().title(Title::with_text(spec.title.as_str())));
    Some(plot)
}

/// Pie trace in plotly.js JSON form; plotly 0.10 ships no pie trace type.
#[derive(Debug, Clone, Serialize)]
struct PieTrace {
    r#type: &'static str,
    name: String,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl PieTrace {
    fn new(labels: Vec<String>, values: Vec<f64>, name: &str) -> Box<Self> {
        Box::new(Self {
            r#type: "pie",
            name: name.to_string(),
            labels,
            values,
        })
    }
}

impl Trace for PieTrace {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Render a chart as a standalone HTML page
pub fn render_chart_html(table: &ReportTable, spec: &ChartSpec) -> Option<String> {
    build_plot(table, spec).map(|plot| plot.to_html())
}
