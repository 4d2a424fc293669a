//! Summary agent — deterministic digests of a test run for CI logs
//!
//! The agent turns a [`RunSummary`] into a short message: a headline plus
//! prioritised hints about the failing cases. Every produced message is kept
//! in a bounded [`RollingHistory`] so later failing summaries can quote the
//! earlier ones.
//!
//! Summarisation happens in two steps: [`SummaryAgent::analyse`] builds a
//! structured [`Digest`], and [`SummaryAgent::record`] renders it and stores
//! the message. [`SummaryAgent::summarise`] does both.

use serde::Serialize;
use tracing::{debug, trace};

use crate::case::CaseRecord;
use crate::heuristics::{failure_excerpt, flaky_failures, longest_failure, EXCERPT_MAX_LINES};
use crate::history::RollingHistory;
use crate::summary::RunSummary;

/// Headline prefix for runs without failures.
pub const SUCCESS_PREFIX: &str = "✅ All tests passed";
/// Headline prefix for runs with at least one failure.
pub const FAILURE_PREFIX: &str = "❌ Tests failing";
/// Full message for runs where no test was collected.
pub const NO_TESTS_MESSAGE: &str =
    "ℹ️ No tests were collected. Ensure pytest discovered your test suite.";

/// Overall classification of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// The run contained zero cases
    NoTestsCollected,
    /// At least one case is failure-like
    Failing { failing: usize, total: usize },
    /// Every case is success-like
    Passed { total_duration: f64 },
}

impl Verdict {
    /// Headline line for this verdict.
    pub fn headline(&self) -> String {
        match self {
            Self::NoTestsCollected => NO_TESTS_MESSAGE.to_string(),
            Self::Failing { failing, total } => {
                format!("{}: {} failing of {}", FAILURE_PREFIX, failing, total)
            }
            Self::Passed { total_duration } => {
                format!("{} in {:.2}s.", SUCCESS_PREFIX, total_duration)
            }
        }
    }
}

/// One heuristic observation about the failing cases, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Hint {
    /// Slowest failing case
    LongestFailure {
        identifier: String,
        duration_seconds: f64,
    },
    /// Failing cases whose output mentions "flake"
    Flakiness { identifiers: Vec<String> },
    /// Leading lines of the first failure's captured output
    FailureExcerpt { lines: Vec<String> },
    /// The first failure captured nothing
    NoCapturedOutput,
    /// Messages produced by earlier summarisations, oldest first
    PriorSuggestions { messages: Vec<String> },
}

impl Hint {
    /// Append the log lines for this hint.
    pub fn render_into(&self, out: &mut Vec<String>) {
        match self {
            Self::LongestFailure {
                identifier,
                duration_seconds,
            } => out.push(format!(
                "Longest failing test: ``{}`` ({:.2}s).",
                identifier, duration_seconds
            )),
            Self::Flakiness { identifiers } => out.push(format!(
                "Potential flakiness detected in: {}.",
                identifiers.join(", ")
            )),
            Self::FailureExcerpt { lines } => {
                out.push(format!(
                    "Failure excerpt (first {} lines):",
                    EXCERPT_MAX_LINES
                ));
                out.extend(lines.iter().map(|line| format!("> {}", line)));
            }
            Self::NoCapturedOutput => {
                out.push("No captured output available for the first failing test.".to_string())
            }
            Self::PriorSuggestions { messages } => {
                out.push("Last suggestions:".to_string());
                out.extend(messages.iter().map(|msg| format!("- {}", msg)));
            }
        }
    }
}

/// Structured result of analysing a run, before it is rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Digest {
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<Hint>,
}

impl Digest {
    /// Render the headline and hint lines, newline-joined.
    pub fn render(&self) -> String {
        let mut lines = vec![self.verdict.headline()];
        for hint in &self.hints {
            hint.render_into(&mut lines);
        }
        lines.join("\n")
    }
}

/// Small deterministic helper that summarises pytest outcomes.
///
/// Holds the only mutable state of the summarisation path: the rolling
/// history. Callers sharing one agent must serialise their calls.
#[derive(Debug, Clone)]
pub struct SummaryAgent {
    history: RollingHistory,
}

impl Default for SummaryAgent {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HISTORY)
    }
}

impl SummaryAgent {
    /// Number of previous messages retained when no capacity is given.
    pub const DEFAULT_HISTORY: usize = 5;

    pub fn new(history_capacity: usize) -> Self {
        Self {
            history: RollingHistory::new(history_capacity),
        }
    }

    pub fn history(&self) -> &RollingHistory {
        &self.history
    }

    /// Build the digest for `summary` without recording anything.
    pub fn analyse(&self, summary: &RunSummary) -> Digest {
        if summary.is_empty() {
            return Digest {
                verdict: Verdict::NoTestsCollected,
                hints: Vec::new(),
            };
        }

        if !summary.has_failures() {
            return Digest {
                verdict: Verdict::Passed {
                    total_duration: summary.total_duration(),
                },
                hints: Vec::new(),
            };
        }

        let failures = summary.failures();
        Digest {
            verdict: Verdict::Failing {
                failing: failures.len(),
                total: summary.len(),
            },
            hints: self.suggestions(&failures),
        }
    }

    /// Render `digest` and push the message into the history.
    pub fn record(&mut self, digest: &Digest) -> String {
        let message = digest.render();
        self.history.push(message.clone());
        debug!(
            history_len = self.history.len(),
            capacity = self.history.capacity(),
            "Recorded summary message"
        );
        message
    }

    /// Produce a short summary for the CI logs and remember it.
    pub fn summarise(&mut self, summary: &RunSummary) -> String {
        let digest = self.analyse(summary);
        debug!(
            cases = summary.len(),
            hints = digest.hints.len(),
            "Summarising test run"
        );
        self.record(&digest)
    }

    fn suggestions(&self, failures: &[&CaseRecord]) -> Vec<Hint> {
        let mut hints = Vec::new();

        if let Some(longest) = longest_failure(failures) {
            trace!(identifier = longest.identifier(), "Longest failing test");
            hints.push(Hint::LongestFailure {
                identifier: longest.identifier().to_string(),
                duration_seconds: longest.duration_seconds(),
            });
        }

        let flaky = flaky_failures(failures);
        if !flaky.is_empty() {
            trace!(count = flaky.len(), "Flakiness markers found");
            hints.push(Hint::Flakiness {
                identifiers: flaky.iter().map(|c| c.identifier().to_string()).collect(),
            });
        }

        if let Some(first) = failures.first() {
            let lines = failure_excerpt(first);
            if lines.is_empty() {
                hints.push(Hint::NoCapturedOutput);
            } else {
                hints.push(Hint::FailureExcerpt { lines });
            }
        }

        if !self.history.is_empty() {
            hints.push(Hint::PriorSuggestions {
                messages: self.history.to_vec(),
            });
        }

        hints
    }
}
