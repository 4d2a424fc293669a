//! End-to-end tests: report file on disk → RunSummary → agent message.

use std::fs;
use std::path::PathBuf;

use harness_core::{load_report, CaseRecord, ReportError, RunSummary, SummaryAgent};
use serde_json::json;

/// Write a JSON payload into a temp dir and return its path.
fn write_report(dir: &tempfile::TempDir, payload: &serde_json::Value) -> PathBuf {
    let path = dir.path().join("report.json");
    fs::write(&path, serde_json::to_string_pretty(payload).unwrap()).unwrap();
    path
}

#[test]
fn test_parse_report_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(
        &dir,
        &json!({
            "tests": [
                {
                    "nodeid": "tests/test_example.py::test_ok",
                    "outcome": "passed",
                    "duration": 0.12,
                    "captured_output": ""
                },
                {
                    "nodeid": "tests/test_example.py::test_fail",
                    "outcome": "failed",
                    "duration": 0.45,
                    "captured_output": "AssertionError: bad"
                }
            ]
        }),
    );

    let summary = load_report(&path).unwrap();

    assert_eq!(summary.len(), 2);
    assert!(summary.has_failures());
    let failures = summary.failures();
    assert!(failures[0].identifier().ends_with("test_fail"));
    assert_eq!(failures[0].captured_output(), "AssertionError: bad");
}

#[test]
fn test_bare_array_report_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invalid.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let err = load_report(&path).unwrap_err();
    assert!(matches!(err, ReportError::NotAMapping { .. }));
    assert!(err.to_string().contains("mapping at the top level"));
}

#[test]
fn test_report_file_to_failure_digest() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(
        &dir,
        &json!({
            "tests": [
                {
                    "nodeid": "tests/test_example.py::test_gamma",
                    "outcome": "failed",
                    "duration": 0.8,
                    "captured_output": "AssertionError: expected 42 got 0\npossible flake"
                },
                {
                    "nodeid": "tests/test_example.py::test_delta",
                    "outcome": "error",
                    "duration": 0.3,
                    "captured_output": "ValueError: boom"
                }
            ]
        }),
    );

    let summary = load_report(&path).unwrap();
    let mut agent = SummaryAgent::default();
    let first = agent.summarise(&summary);
    let second = agent.summarise(&summary);

    assert!(first.lines().next().unwrap().starts_with("❌ Tests failing: 2"));
    assert!(first.contains("Longest failing test: ``tests/test_example.py::test_gamma`` (0.80s)."));
    assert!(first.contains("Potential flakiness detected in: tests/test_example.py::test_gamma."));
    assert!(!first.contains("test_delta."));
    assert!(first.contains("Failure excerpt"));
    assert!(second.contains("Last suggestions:"));
    assert_eq!(second.matches("\n- ").count(), 1);
}

#[test]
fn test_round_trip_preserves_order_and_count() {
    let cases: Vec<CaseRecord> = (0..7)
        .map(|i| {
            let outcome = if i % 3 == 0 { "failed" } else { "passed" };
            CaseRecord::new(format!("tests/test_n.py::test_{i}"), outcome, i as f64, "")
        })
        .collect();

    let summary = RunSummary::from_cases(cases.clone());
    assert_eq!(summary.len(), cases.len());
    assert_eq!(summary.cases(), cases.as_slice());
}

#[test]
fn test_history_holds_last_messages_in_call_order() {
    let capacity = 3;
    let mut agent = SummaryAgent::new(capacity);
    let mut produced = Vec::new();

    for n in 0..7 {
        let mut summary = RunSummary::new();
        for i in 0..n {
            summary.add_case(CaseRecord::new(format!("t{i}"), "passed", 0.25, ""));
        }
        if n % 2 == 1 {
            summary.add_case(CaseRecord::new("broken", "failed", 0.1, "boom"));
        }
        produced.push(agent.summarise(&summary));

        let expected_len = (n + 1).min(capacity);
        assert_eq!(agent.history().len(), expected_len);
        assert_eq!(
            agent.history().to_vec(),
            produced[produced.len() - expected_len..].to_vec()
        );
    }
}
