//! Pytest JSON report ingestion
//!
//! Walks a decoded `--json-report` document and builds a [`RunSummary`].
//! Only the top-level shape is validated; individual test entries are
//! best-effort:
//!
//! | field             | default if absent/null |
//! |-------------------|------------------------|
//! | `nodeid`          | `"<unknown>"`          |
//! | `outcome`         | `"failed"`             |
//! | `duration`        | `0.0`                  |
//! | `captured_output` | `""`                   |
//!
//! Entries that are not objects are skipped.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::case::CaseRecord;
use crate::error::{ReportError, ReportResult};
use crate::summary::RunSummary;

const DEFAULT_NODEID: &str = "<unknown>";
const DEFAULT_OUTCOME: &str = "failed";

/// Read and parse a report file.
pub fn load_report(path: impl AsRef<Path>) -> ReportResult<RunSummary> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let summary = parse_report_str(&text)?;
    info!(
        path = %path.display(),
        cases = summary.len(),
        "Loaded pytest report"
    );
    Ok(summary)
}

/// Parse report JSON text.
pub fn parse_report_str(text: &str) -> ReportResult<RunSummary> {
    let value: Value = serde_json::from_str(text)?;
    parse_report_value(value)
}

/// Build a summary from an already-decoded document.
pub fn parse_report_value(value: Value) -> ReportResult<RunSummary> {
    let report = match value {
        Value::Object(report) => report,
        other => {
            return Err(ReportError::NotAMapping {
                found: json_kind(&other),
            })
        }
    };

    let entries: &[Value] = match report.get("tests") {
        Some(Value::Array(entries)) => entries.as_slice(),
        Some(other) => {
            warn!(found = json_kind(other), "\"tests\" is not a list, ignoring");
            &[]
        }
        None => &[],
    };

    let mut summary = RunSummary::new();
    for (index, entry) in entries.iter().enumerate() {
        match entry {
            Value::Object(fields) => summary.add_case(case_from_entry(fields)),
            other => debug!(index, found = json_kind(other), "Skipping non-mapping test entry"),
        }
    }
    Ok(summary)
}

fn case_from_entry(fields: &Map<String, Value>) -> CaseRecord {
    let nodeid = string_field(fields, "nodeid").unwrap_or_else(|| DEFAULT_NODEID.to_string());
    let outcome = string_field(fields, "outcome").unwrap_or_else(|| DEFAULT_OUTCOME.to_string());
    let duration = duration_field(fields, &nodeid);
    let captured = string_field(fields, "captured_output").unwrap_or_default();
    CaseRecord::new(nodeid, outcome, duration, captured)
}

/// String value of a field; scalars are stringified, null counts as absent.
///
/// Booleans use pytest's own spelling (`True` / `False`).
fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        other => Some(other.to_string()),
    }
}

fn duration_field(fields: &Map<String, Value>, nodeid: &str) -> f64 {
    match fields.get("duration") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => 0.0,
        Some(Value::Bool(true)) => 1.0,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or_else(|_| {
            warn!(nodeid, value = %s, "Non-numeric duration, using 0.0");
            0.0
        }),
        Some(other) => {
            warn!(nodeid, found = json_kind(other), "Unsupported duration type, using 0.0");
            0.0
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
