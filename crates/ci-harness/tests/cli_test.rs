//! Integration tests for the ci-harness command-line flow.

use std::fs;
use std::path::PathBuf;

use ci_harness::{run_with_config, Cli, HarnessConfig};
use clap::Parser;
use serde_json::json;

fn write_report(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("report.json");
    fs::write(&path, contents).unwrap();
    path
}

/// Parse argv and run against a config that ignores the process environment.
fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let config = HarnessConfig::from_lookup(|_| None).with_cli(&cli);
    let mut out = Vec::new();
    run_with_config(&cli, &config, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_main_outputs_success_summary() {
    let dir = tempfile::tempdir().unwrap();
    let payload = json!({
        "tests": [
            {
                "nodeid": "tests/test_cli.py::test_main_outputs_summary",
                "outcome": "passed",
                "duration": 0.2
            }
        ]
    });
    let path = write_report(&dir, &payload.to_string());

    let stdout = run_args(&["ci-harness", path.to_str().unwrap()]).unwrap();
    assert!(stdout.contains("✅ All tests passed"), "{stdout}");
    assert_eq!(stdout, "✅ All tests passed in 0.20s.\n");
}

#[test]
fn test_failure_summary_text() {
    let dir = tempfile::tempdir().unwrap();
    let payload = json!({
        "tests": [
            {"nodeid": "t::a", "outcome": "failed", "duration": 0.4, "captured_output": "E   assert 1 == 2"},
            {"nodeid": "t::b", "outcome": "passed", "duration": 0.1}
        ]
    });
    let path = write_report(&dir, &payload.to_string());

    let stdout = run_args(&["ci-harness", "--history", "1", path.to_str().unwrap()]).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "❌ Tests failing: 1 failing of 2");
    assert_eq!(lines[1], "Longest failing test: ``t::a`` (0.40s).");
    assert_eq!(lines[2], "Failure excerpt (first 3 lines):");
    assert_eq!(lines[3], "> E   assert 1 == 2");
    assert!(!stdout.contains("Last suggestions"));
}

#[test]
fn test_json_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(&dir, r#"{"tests": []}"#);

    let stdout = run_args(&["ci-harness", "--format", "json", path.to_str().unwrap()]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["verdict"]["status"], "no_tests_collected");
    assert_eq!(value["total"], 0);
    assert!(value["message"]
        .as_str()
        .unwrap()
        .contains("No tests were collected"));
}

#[test]
fn test_bare_array_report_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(&dir, "[1, 2, 3]");

    let err = run_args(&["ci-harness", path.to_str().unwrap()]).unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.contains("Failed to load pytest report"), "{chain}");
    assert!(chain.contains("mapping at the top level"), "{chain}");
}

#[test]
fn test_missing_report_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    assert!(run_args(&["ci-harness", path.to_str().unwrap()]).is_err());
}

#[test]
fn test_maximum_history_flag_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(&dir, r#"{"tests": [{"nodeid": "t::a", "outcome": "passed"}]}"#);

    let max = u64::MAX.to_string();
    let stdout = run_args(&["ci-harness", "--history", &max, path.to_str().unwrap()]).unwrap();
    assert_eq!(stdout, "✅ All tests passed in 0.00s.\n");
}
