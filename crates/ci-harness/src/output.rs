//! Rendering of the final summary for stdout.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use harness_core::{Digest, Hint, RunSummary, Verdict};
use serde::Serialize;

use crate::config::OutputFormat;

/// Structured digest written by `--format json`.
#[derive(Debug, Serialize)]
pub struct JsonDigest<'a> {
    /// Same text the plain output prints
    pub message: &'a str,
    pub verdict: &'a Verdict,
    pub total: usize,
    pub failing: usize,
    pub total_duration_seconds: f64,
    /// Case count per outcome spelling
    pub outcomes: BTreeMap<String, usize>,
    #[serde(skip_serializing_if = "no_hints")]
    pub hints: &'a [Hint],
}

impl<'a> JsonDigest<'a> {
    pub fn new(summary: &RunSummary, digest: &'a Digest, message: &'a str) -> Self {
        Self {
            message,
            verdict: &digest.verdict,
            total: summary.len(),
            failing: summary.failures().len(),
            total_duration_seconds: summary.total_duration(),
            outcomes: summary.outcome_counts(),
            hints: &digest.hints,
        }
    }
}

fn no_hints(hints: &&[Hint]) -> bool {
    hints.is_empty()
}

/// Render the summary in the requested format.
pub fn render(
    format: OutputFormat,
    summary: &RunSummary,
    digest: &Digest,
    message: &str,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(message.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&JsonDigest::new(summary, digest, message))
            .context("Failed to serialize summary digest"),
    }
}
