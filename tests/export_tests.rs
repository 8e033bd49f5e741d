//! Tests for report export formats

use ga4a::export::{write_export, ExportFormat};
use ga4a::{choose_chart, export, AssistantError, ReportTable};

fn device_table() -> ReportTable {
    ReportTable::with_rows(
        vec!["deviceCategory".into(), "activeUsers".into(), "bounceRate".into()],
        vec![
            vec!["desktop".into(), "1200".into(), "0.41".into()],
            vec!["mobile".into(), "850".into(), "0.55".into()],
            vec!["smart tv, \"living room\"".into(), "3".into(), "n/a".into()],
        ],
    )
}

// ============================================================================
// CSV
// ============================================================================

mod csv_tests {
    use super::*;

    #[test]
    fn test_csv_reparses_to_same_table() {
        let table = device_table();
        let bytes = export(&table, None, "Devices", ExportFormat::Csv).unwrap();
        let parsed = ReportTable::from_csv(&bytes).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn test_csv_of_empty_report_keeps_headers() {
        let table = ReportTable::new(vec!["country".into(), "sessions".into()]);
        let bytes = export(&table, None, "Empty", ExportFormat::Csv).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "country,sessions\n");
    }
}

// ============================================================================
// Binary Formats
// ============================================================================

mod binary_tests {
    use super::*;

    #[test]
    fn test_xlsx_is_zip() {
        let table = device_table();
        let chart = choose_chart(&table, "Users by device");
        let bytes = export(&table, chart.as_ref(), "Users by device", ExportFormat::Xlsx).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_xlsx_without_chart() {
        let bytes = export(&device_table(), None, "Devices", ExportFormat::Xlsx).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_docx_is_zip() {
        let table = device_table();
        let bytes = export(&table, None, "Devices", ExportFormat::Docx).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_pdf_header() {
        let bytes = export(&device_table(), None, "Devices", ExportFormat::Pdf).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_pdf_spans_pages_for_long_reports() {
        let rows = (0..200)
            .map(|i| vec![format!("/page-{}", i), i.to_string()])
            .collect();
        let table = ReportTable::with_rows(vec!["pagePath".into(), "sessions".into()], rows);
        let bytes = export(&table, None, "Pages", ExportFormat::Pdf).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}

// ============================================================================
// HTML Chart
// ============================================================================

mod html_tests {
    use super::*;

    #[test]
    fn test_html_with_chart() {
        let table = device_table();
        let chart = choose_chart(&table, "Share of users per device");
        let bytes = export(&table, chart.as_ref(), "Share", ExportFormat::Html).unwrap();
        let html = String::from_utf8(bytes).unwrap();
        assert!(html.contains("desktop"));
    }

    #[test]
    fn test_html_without_chart_fails() {
        let err = export(&device_table(), None, "Devices", ExportFormat::Html).unwrap_err();
        assert!(matches!(err, AssistantError::Export(_)));
    }
}

// ============================================================================
// Files
// ============================================================================

mod file_tests {
    use super::*;

    #[test]
    fn test_default_file_names() {
        let names: Vec<String> = ExportFormat::ALL
            .iter()
            .map(|f| f.default_file_name())
            .collect();
        assert_eq!(
            names,
            vec![
                "analytics.csv",
                "analytics.xlsx",
                "analytics.pdf",
                "analytics.docx",
                "analytics.html"
            ]
        );
    }

    #[test]
    fn test_write_export_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports");
        let path = write_export(&out, &device_table(), None, "Devices", ExportFormat::Csv).unwrap();
        assert_eq!(path, out.join("analytics.csv"));
        assert!(path.exists());
    }
}
