//! Tests for chart selection and rendering

use ga4a::chart::build_plot;
use ga4a::{choose_chart, render_chart_html, ChartKind, ReportTable};

fn table(columns: &[&str], rows: &[&[&str]]) -> ReportTable {
    ReportTable::with_rows(
        columns.iter().map(|c| c.to_string()).collect(),
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

fn country_table() -> ReportTable {
    table(
        &["country", "activeUsers"],
        &[&["United States", "1200"], &["India", "640"], &["Germany", "310"]],
    )
}

// ============================================================================
// Selection Rules
// ============================================================================

mod selection_tests {
    use super::*;

    #[test]
    fn test_users_by_country_is_bar() {
        let spec = choose_chart(&country_table(), "Users by country").unwrap();
        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.x, "country");
        assert_eq!(spec.y, "activeUsers");
        assert_eq!(spec.color.as_deref(), Some("country"));
        assert_eq!(spec.title, "Users by country");
    }

    #[test]
    fn test_trend_is_line() {
        let t = table(&["date", "sessions"], &[&["20240101", "10"], &["20240102", "12"]]);
        for query in ["Sessions over time", "Session TREND", "sessions per date"] {
            let spec = choose_chart(&t, query).unwrap();
            assert_eq!(spec.kind, ChartKind::Line, "{}", query);
            assert_eq!(spec.color, None);
        }
    }

    #[test]
    fn test_share_is_pie() {
        let spec = choose_chart(&country_table(), "Percentage of users per country").unwrap();
        assert_eq!(spec.kind, ChartKind::Pie);
        assert_eq!(spec.x, "country");
        assert_eq!(spec.y, "activeUsers");
        assert_eq!(spec.title, "Percentage of users per country Distribution");
    }

    #[test]
    fn test_correlation_with_three_columns() {
        let t = table(
            &["deviceCategory", "sessions", "bounceRate"],
            &[&["mobile", "100", "0.4"], &["desktop", "80", "0.3"]],
        );
        let spec = choose_chart(&t, "Correlation of sessions and bounce").unwrap();
        assert_eq!(spec.kind, ChartKind::Scatter);
        assert_eq!(spec.x, "sessions");
        assert_eq!(spec.y, "bounceRate");
        assert_eq!(spec.color.as_deref(), Some("deviceCategory"));
    }

    #[test]
    fn test_correlation_with_two_columns() {
        let spec = choose_chart(&country_table(), "scatter of users").unwrap();
        assert_eq!(spec.kind, ChartKind::Scatter);
        assert_eq!(spec.x, "country");
        assert_eq!(spec.y, "activeUsers");
        assert_eq!(spec.color, None);
    }

    #[test]
    fn test_no_keyword_no_chart() {
        assert_eq!(choose_chart(&country_table(), "Top countries"), None);
    }

    #[test]
    fn test_single_column_no_chart() {
        let t = table(&["activeUsers"], &[&["5"]]);
        assert_eq!(choose_chart(&t, "Users by country"), None);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let t = country_table();
        let first = choose_chart(&t, "Users by country");
        let second = choose_chart(&t, "Users by country");
        assert_eq!(first, second);
    }
}

// ============================================================================
// HTML Rendering
// ============================================================================

mod render_tests {
    use super::*;

    #[test]
    fn test_bar_chart_page_mentions_categories() {
        let t = country_table();
        let spec = choose_chart(&t, "Users by country").unwrap();
        let html = render_chart_html(&t, &spec).unwrap();
        assert!(html.contains("<html"));
        assert!(html.contains("Germany"));
        assert!(html.contains("Users by country"));
    }

    #[test]
    fn test_pie_chart_page_has_labels_and_values() {
        let t = country_table();
        let spec = choose_chart(&t, "share of users").unwrap();
        assert_eq!(spec.kind, ChartKind::Pie);

        let plot: serde_json::Value =
            serde_json::from_str(&build_plot(&t, &spec).unwrap().to_json()).unwrap();
        assert_eq!(plot["data"][0]["type"], "pie");
        assert_eq!(plot["data"][0]["labels"][2], "Germany");

        let html = render_chart_html(&t, &spec).unwrap();
        assert!(html.contains("United States"));
        assert!(html.contains("India"));
        assert!(html.contains("1200"));
        assert!(html.contains("share of users Distribution"));
    }

    #[test]
    fn test_missing_column_renders_nothing() {
        let t = country_table();
        let mut spec = choose_chart(&t, "Users by country").unwrap();
        spec.y = "sessions".to_string();
        assert!(render_chart_html(&t, &spec).is_none());
    }
}
