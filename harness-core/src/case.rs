//! Single test case results and outcome classification.

use serde::{Deserialize, Serialize};

/// Outcome tag reported by pytest for a single test case.
///
/// Success is an allow-list: only `Passed`, `XFailed` and `Skipped` count as
/// success. Every other spelling, including ones pytest may add later, lands
/// in `Other` and is treated as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Outcome {
    Passed,
    XFailed,
    Skipped,
    Failed,
    Error,
    XPassed,
    /// Any spelling not listed above, kept verbatim.
    ///
    /// Never holds a named spelling: values built by hand are re-parsed by
    /// [`Outcome::normalize`] when they enter a [`CaseRecord`].
    Other(String),
}

impl Outcome {
    /// Classify a raw outcome string. Matching is exact: no case folding, no trimming.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "passed" => Self::Passed,
            "xfailed" => Self::XFailed,
            "skipped" => Self::Skipped,
            "failed" => Self::Failed,
            "error" => Self::Error,
            "xpassed" => Self::XPassed,
            other => Self::Other(other.to_string()),
        }
    }

    /// Re-classify an `Other` that carries a named spelling.
    pub fn normalize(self) -> Self {
        match self {
            Self::Other(raw) => Self::parse(&raw),
            named => named,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Passed => "passed",
            Self::XFailed => "xfailed",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
            Self::Error => "error",
            Self::XPassed => "xpassed",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_success(&self) -> bool {
        match self {
            Self::Passed | Self::XFailed | Self::Skipped => true,
            Self::Failed | Self::Error | Self::XPassed | Self::Other(_) => false,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Outcome {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for Outcome {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Other(raw) => raw,
            named => named.as_str().to_string(),
        }
    }
}

/// Result of a single pytest test case.
///
/// Immutable once built. Negative durations are not rejected; they are
/// carried and summed as reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Fully qualified node id (e.g. `tests/test_example.py::test_pass`)
    identifier: String,
    /// Outcome reported by pytest
    outcome: Outcome,
    /// Execution time in seconds
    duration_seconds: f64,
    /// Captured stdout/stderr or traceback excerpt
    #[serde(default)]
    captured_output: String,
}

impl CaseRecord {
    pub fn new(
        identifier: impl Into<String>,
        outcome: impl Into<Outcome>,
        duration_seconds: f64,
        captured_output: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            outcome: Into::<Outcome>::into(outcome).normalize(),
            duration_seconds,
            captured_output: captured_output.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn captured_output(&self) -> &str {
        &self.captured_output
    }

    /// Whether the case counts as a success. Depends on `outcome` only.
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }
}
