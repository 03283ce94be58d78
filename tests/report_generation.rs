//! End-to-end tests: from an input file to the rendered report.

use std::fs;
use std::path::PathBuf;

use assetviz::{run_report, Config, LogFormat, LogLevel};
use tempfile::TempDir;

/// Helper to build a test config pointed at temp paths
fn test_config(file: Option<PathBuf>, report_dir: PathBuf) -> Config {
    Config {
        file,
        report_dir,
        log_level: LogLevel::Error, // Reduce log noise
        log_format: LogFormat::Plain,
    }
}

#[test]
fn generates_timestamped_report_for_valid_input() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let input = temp.path().join("domains.txt");
    fs::write(&input, "a.b.example.com\nexample.net\n").expect("Failed to write test file");
    let report_dir = temp.path().join("reports");

    let summary =
        run_report(test_config(Some(input), report_dir.clone())).expect("run should succeed");

    assert_eq!(summary.total_lines, 2);
    assert_eq!(summary.skipped_lines, 0);
    assert_eq!(summary.domain_count, 2);

    let file_name = summary
        .report_path
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned();
    assert!(file_name.starts_with("assetviz_report_"));
    assert!(file_name.ends_with(".html"));
    assert!(summary.report_path.starts_with(&report_dir));

    let html = fs::read_to_string(&summary.report_path).expect("report should exist");
    assert!(html.contains("\"a.b.example.com\""));
    assert!(html.contains("\"example.net\""));
    assert!(html.contains("jsmind"));
}

#[test]
fn invalid_input_produces_no_report() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let input = temp.path().join("domains.txt");
    fs::write(&input, "good.example.com\nnot a domain!!\nanother.example.com\n")
        .expect("Failed to write test file");
    let report_dir = temp.path().join("reports");

    let err = run_report(test_config(Some(input), report_dir.clone()))
        .expect_err("run should fail fast");

    assert!(format!("{err:#}").contains("input contains invalid entries"));
    // the run aborted before rendering; the report directory was never created
    assert!(!report_dir.exists());
}

#[test]
fn missing_input_file_is_an_error() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let missing = temp.path().join("no_such_file.txt");
    let report_dir = temp.path().join("reports");

    let err = run_report(test_config(Some(missing), report_dir)).expect_err("open should fail");
    assert!(format!("{err:#}").contains("Failed to open input file"));
}

#[test]
fn empty_input_still_produces_a_report() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let input = temp.path().join("domains.txt");
    fs::write(&input, "").expect("Failed to write test file");
    let report_dir = temp.path().join("reports");

    let summary = run_report(test_config(Some(input), report_dir)).expect("run should succeed");

    assert_eq!(summary.domain_count, 0);
    let html = fs::read_to_string(&summary.report_path).expect("report should exist");
    assert!(html.contains("var jsondata = {}"));
}
