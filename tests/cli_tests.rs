//! Command-line tests
//!
//! Each test runs the binary with HOME and the config directory pointed at a
//! fresh temporary directory, so nothing touches the real settings cache.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const KEY: &str = r#"{"type":"service_account","project_id":"demo","private_key_id":"k1","private_key":"pem","client_email":"reader@demo.iam.gserviceaccount.com"}"#;

fn ga4a(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ga4a").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("GA4_PROPERTY_ID")
        .env_remove("GA4_KEY_FILE")
        .env_remove("GA4A_AI_API_KEY")
        .arg("--no-color");
    cmd
}

fn write_key(home: &TempDir) -> std::path::PathBuf {
    let path = home.path().join("service-account.json");
    std::fs::write(&path, KEY).unwrap();
    path
}

// ============================================================================
// Dry-run Commands
// ============================================================================

mod dry_run_tests {
    use super::*;

    #[test]
    fn test_enhance() {
        let home = tempfile::tempdir().unwrap();
        ga4a(&home)
            .args(["enhance", "Users", "by", "country"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Users (number of visitors) by country (visitor location) for the last 30 days",
            ));
    }

    #[test]
    fn test_extract() {
        let home = tempfile::tempdir().unwrap();
        ga4a(&home)
            .args(["extract", "sessions", "by", "city"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Dimensions: city"))
            .stdout(predicate::str::contains("Metrics: sessions"));
    }

    #[test]
    fn test_samples() {
        let home = tempfile::tempdir().unwrap();
        ga4a(&home)
            .arg("samples")
            .assert()
            .success()
            .stdout(predicate::str::contains("Users by device"))
            .stdout(predicate::str::contains("See how many visitors come back"));
    }
}

// ============================================================================
// Connection Commands
// ============================================================================

mod connection_tests {
    use super::*;

    #[test]
    fn test_ask_without_connection_reports_and_exits_cleanly() {
        let home = tempfile::tempdir().unwrap();
        ga4a(&home)
            .args(["ask", "Users", "by", "country"])
            .assert()
            .success()
            .stdout(predicate::str::contains("not connected"))
            .stdout(predicate::str::contains("ga4a connect"));

        ga4a(&home)
            .args(["history", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Users by country"));
    }

    #[test]
    fn test_connect_rejects_bad_property() {
        let home = tempfile::tempdir().unwrap();
        let key = write_key(&home);
        ga4a(&home)
            .args(["connect", "--property", "abc"])
            .arg("--key-file")
            .arg(&key)
            .assert()
            .failure()
            .stderr(predicate::str::contains("5-12 digit"));
        assert!(!home.path().join(".ga4_assistant_credentials.json").exists());
    }

    #[test]
    fn test_connect_status_disconnect() {
        let home = tempfile::tempdir().unwrap();
        let key = write_key(&home);

        ga4a(&home)
            .args(["connect", "--property", "396502027"])
            .arg("--key-file")
            .arg(&key)
            .assert()
            .success()
            .stdout(predicate::str::contains("396502027"));
        assert!(home.path().join(".ga4_assistant_propertyid.txt").exists());

        ga4a(&home)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Connected"))
            .stdout(predicate::str::contains("reader@demo.iam.gserviceaccount.com"));

        ga4a(&home).arg("disconnect").assert().success();
        ga4a(&home)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Not connected"));
    }

    #[test]
    fn test_ask_rejects_bad_date() {
        let home = tempfile::tempdir().unwrap();
        ga4a(&home)
            .args(["ask", "Users", "--start", "last week"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid date"));
    }
}

// ============================================================================
// History and AI Settings
// ============================================================================

mod settings_tests {
    use super::*;

    #[test]
    fn test_history_rerun_unknown_entry() {
        let home = tempfile::tempdir().unwrap();
        ga4a(&home)
            .args(["history", "rerun", "3"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No history entry #3"));
    }

    #[test]
    fn test_history_clear() {
        let home = tempfile::tempdir().unwrap();
        ga4a(&home).args(["ask", "Top pages"]).assert().success();
        ga4a(&home).args(["history", "clear"]).assert().success();
        ga4a(&home)
            .args(["history"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No questions asked yet"));
    }

    #[test]
    fn test_ai_save_show_clear() {
        let home = tempfile::tempdir().unwrap();
        ga4a(&home)
            .args(["ai", "save", "--provider", "claude", "--api-key", "sk-ant-abcdef1234"])
            .assert()
            .success();
        ga4a(&home)
            .args(["ai", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Claude"))
            .stdout(predicate::str::contains("1234"))
            .stdout(predicate::str::contains("abcdef").not());
        ga4a(&home).args(["ai", "clear"]).assert().success();
        assert!(!home.path().join(".ga4_assistant_llm.json").exists());
    }

    #[test]
    fn test_ai_unknown_provider() {
        let home = tempfile::tempdir().unwrap();
        ga4a(&home)
            .args(["ai", "save", "--provider", "skynet"])
            .assert()
            .failure();
    }
}

// ============================================================================
// Show and Export
// ============================================================================

mod show_tests {
    use super::*;

    #[test]
    fn test_show_csv_and_export() {
        let home = tempfile::tempdir().unwrap();
        let csv = home.path().join("report.csv");
        std::fs::write(&csv, "country,activeUsers\nCanada,42\nBrazil,17\n").unwrap();
        let out = home.path().join("out");

        ga4a(&home)
            .arg("show")
            .arg(&csv)
            .args(["--query", "Users by country", "--export", "xlsx", "html"])
            .arg("--out")
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("Canada"))
            .stdout(predicate::str::contains("bar chart"));

        assert!(out.join("analytics.xlsx").exists());
        assert!(out.join("analytics.html").exists());
    }
}
