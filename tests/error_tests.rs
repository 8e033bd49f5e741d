//! Tests for error handling
//!
//! - AssistantError messages and conversions
//! - ReportError categories and guidance

use ga4a::{AssistantError, DateRange, ReportError};

// ============================================================================
// AssistantError Tests
// ============================================================================

mod assistant_error_tests {
    use super::*;

    #[test]
    fn test_invalid_property_message() {
        let msg = AssistantError::InvalidPropertyId("abc".into()).to_string();
        assert!(msg.contains("5-12 digit"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn test_missing_keys_message_lists_keys() {
        let err = AssistantError::MissingCredentialKeys(vec!["private_key".into(), "type".into()]);
        assert!(err.to_string().ends_with("private_key, type"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AssistantError = io.into();
        assert!(matches!(err, AssistantError::IoError(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AssistantError = json.into();
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_bad_dates_rejected() {
        for (start, end) in [
            ("2024-13-01", "today"),
            ("yesterday", "tomorrow"),
            ("30 days ago", "today"),
            ("2024-02-10", "2024-02-01"),
        ] {
            let err = DateRange::new(start, end).unwrap_err();
            assert!(matches!(err, AssistantError::InvalidDateRange(_)), "{} {}", start, end);
        }
    }

    #[test]
    fn test_errors_work_with_anyhow() {
        fn fails() -> anyhow::Result<()> {
            Err(AssistantError::HistoryEntryNotFound(4))?
        }
        assert_eq!(fails().unwrap_err().to_string(), "No history entry #4");
    }
}

// ============================================================================
// ReportError Tests
// ============================================================================

mod report_error_tests {
    use super::*;

    #[test]
    fn test_kinds_are_distinct() {
        let kinds = [
            ReportError::NotConfigured.kind(),
            ReportError::PermissionDenied(String::new()).kind(),
            ReportError::InvalidArgument(String::new()).kind(),
            ReportError::Unexpected(String::new()).kind(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_every_error_has_guidance() {
        for err in [
            ReportError::NotConfigured,
            ReportError::PermissionDenied("x".into()),
            ReportError::InvalidArgument("x".into()),
            ReportError::Unexpected("x".into()),
        ] {
            assert!(!err.guidance().is_empty(), "{}", err.kind());
        }
    }

    #[test]
    fn test_permission_guidance_mentions_viewer_access() {
        let guidance = ReportError::PermissionDenied("denied".into()).guidance();
        assert!(guidance.iter().any(|g| g.contains("Viewer")));
    }

    #[test]
    fn test_invalid_argument_guidance_links_schema() {
        let guidance = ReportError::InvalidArgument("bad".into()).guidance();
        assert!(guidance.iter().any(|g| g.contains("api-schema")));
    }

    #[test]
    fn test_message_kept_in_display() {
        let err = ReportError::Unexpected("connection reset".into());
        assert_eq!(err.to_string(), "Unexpected error: connection reset");
    }
}
