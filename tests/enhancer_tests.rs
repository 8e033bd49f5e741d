//! Tests for prompt enhancement
//!
//! Covers:
//! - Term annotation with both vocabularies
//! - Time-range qualifier placement
//! - Visualization hints
//! - Parentheses typed by the user
//! - Repeated enhancement

use ga4a::enhancer::{BAR_CHART_HINT, DEFAULT_TIME_RANGE, TABLE_HINT};
use ga4a::{enhance, PromptEnhancer, Vocabulary};

// ============================================================================
// Time Range Tests
// ============================================================================

mod time_range_tests {
    use super::*;

    #[test]
    fn test_qualifier_added_once_without_time_keyword() {
        let out = enhance("Show me bounce rate");
        assert_eq!(out.matches(DEFAULT_TIME_RANGE).count(), 1);
    }

    #[test]
    fn test_no_qualifier_with_time_keyword() {
        for query in [
            "Users yesterday",
            "Sessions today",
            "Visits on Monday",
            "Last 7 days of traffic",
            "Users this WEEK",
            "Signups per month",
            "Year over year",
            "Two weeks ago",
        ] {
            let out = enhance(query);
            assert!(
                !out.contains(DEFAULT_TIME_RANGE),
                "unexpected qualifier for {:?}: {}",
                query,
                out
            );
        }
    }

    #[test]
    fn test_time_keyword_matches_inside_words() {
        // "ago" inside "Chicago" counts as a time keyword
        assert!(!enhance("Users in Chicago").contains(DEFAULT_TIME_RANGE));
    }

    #[test]
    fn test_qualifier_follows_annotations() {
        let out = enhance("Users by country");
        assert!(out.starts_with("Users (number of visitors) by country (visitor location)"));
        assert!(out.contains(&format!("(visitor location){}", DEFAULT_TIME_RANGE)));
    }
}

// ============================================================================
// Visualization Hint Tests
// ============================================================================

mod visualization_tests {
    use super::*;

    #[test]
    fn test_bar_chart_hint_for_grouping() {
        let out = enhance("Sessions by city");
        assert!(out.ends_with(BAR_CHART_HINT));
    }

    #[test]
    fn test_by_must_be_a_word() {
        let out = enhance("Sessions nearby");
        assert!(out.ends_with(TABLE_HINT));
    }

    #[test]
    fn test_table_hint_otherwise() {
        let out = enhance("Compare visitors using phones vs computers");
        assert!(out.ends_with(TABLE_HINT));
    }

    #[test]
    fn test_no_hint_when_visualization_named() {
        for query in ["Users by city as a chart", "Plot sessions", "Bounce GRAPH", "country table"] {
            let out = enhance(query);
            assert!(!out.contains(BAR_CHART_HINT), "{}", out);
            assert!(!out.contains(TABLE_HINT), "{}", out);
        }
    }
}

// ============================================================================
// Vocabulary Tests
// ============================================================================

mod vocabulary_tests {
    use super::*;

    #[test]
    fn test_explain_vocabulary_is_default() {
        assert_eq!(PromptEnhancer::default().vocabulary(), Vocabulary::Explain);
        assert_eq!(
            enhance("organic traffic"),
            PromptEnhancer::new(Vocabulary::Explain).enhance("organic traffic")
        );
    }

    #[test]
    fn test_explain_annotations() {
        let out = enhance("direct and referral traffic");
        assert!(out.contains("direct (people typing your URL)"));
        assert!(out.contains("referral (links from other sites)"));
        assert!(out.contains("traffic (website visits)"));
    }

    #[test]
    fn test_canonical_maps_to_field_names() {
        let enhancer = PromptEnhancer::new(Vocabulary::Canonical);
        let out = enhancer.enhance("Compare visitors using phones vs computers");
        assert_eq!(
            out,
            "Compare visitors (activeUsers) using phones (deviceCategory) vs computers (deviceCategory) for the last 30 days. Display in a simple table"
        );
    }

    #[test]
    fn test_canonical_multi_word_terms() {
        let enhancer = PromptEnhancer::new(Vocabulary::Canonical);
        let out = enhancer.enhance("How do people find your site this month");
        assert!(out.contains("find your site (sourceMedium)"));
    }
}

// ============================================================================
// User Parentheses Tests
// ============================================================================

mod parentheses_tests {
    use super::*;

    #[test]
    fn test_term_inside_user_parentheses_is_annotated() {
        assert_eq!(
            enhance("Show (users) by country"),
            format!(
                "Show (users (number of visitors)) by country (visitor location){}{}",
                DEFAULT_TIME_RANGE, BAR_CHART_HINT
            )
        );
    }

    #[test]
    fn test_unbalanced_parenthesis_does_not_stop_annotation() {
        assert_eq!(
            enhance("Top pages :( by country"),
            format!(
                "Top page (specific pages visited)s :( by country (visitor location){}{}",
                DEFAULT_TIME_RANGE, BAR_CHART_HINT
            )
        );
    }

    #[test]
    fn test_canonical_term_inside_user_parentheses() {
        let enhancer = PromptEnhancer::new(Vocabulary::Canonical);
        let out = enhancer.enhance("Visitors from (phones) this week as a table");
        assert_eq!(
            out,
            "Visitors (activeUsers) from (phones (deviceCategory)) this week as a table"
        );
    }
}

// ============================================================================
// Repeated Enhancement Tests
// ============================================================================

mod repeat_tests {
    use super::*;

    #[test]
    fn test_enhancing_twice_keeps_single_annotation() {
        let once = enhance("Users by country this week as a chart");
        let twice = enhance(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_canonical_enhancing_twice_keeps_single_annotation() {
        let enhancer = PromptEnhancer::new(Vocabulary::Canonical);
        let once = enhancer.enhance("Compare visitors using phones vs computers");
        let twice = enhancer.enhance(&once);
        assert_eq!(once, twice);
        assert_eq!(twice.matches("activeUsers").count(), 1);
    }

    #[test]
    fn test_unchanged_when_complete() {
        let query = "Top things yesterday in a chart";
        assert_eq!(enhance(query), query);
    }
}
