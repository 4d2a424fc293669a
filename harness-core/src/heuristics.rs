//! Fixed failure heuristics used by the summary agent.
//!
//! Each function inspects the failing cases of a run and returns the raw
//! observation; rendering into log lines happens in [`crate::agent`].

use crate::case::CaseRecord;

/// Substring that marks captured output as a flakiness candidate.
pub const FLAKE_MARKER: &str = "flake";

/// Maximum number of captured-output lines quoted in a failure excerpt.
pub const EXCERPT_MAX_LINES: usize = 3;

/// Failing case with the largest duration. The first one wins on ties.
pub fn longest_failure<'a>(failures: &[&'a CaseRecord]) -> Option<&'a CaseRecord> {
    let mut longest: Option<&'a CaseRecord> = None;
    for case in failures {
        match longest {
            None => longest = Some(case),
            Some(current) if case.duration_seconds() > current.duration_seconds() => {
                longest = Some(case)
            }
            Some(_) => {}
        }
    }
    longest
}

/// Failing cases whose captured output mentions "flake" in any letter case.
///
/// This is a plain substring match, so output such as `flake8` also counts.
pub fn flaky_failures<'a>(failures: &[&'a CaseRecord]) -> Vec<&'a CaseRecord> {
    failures
        .iter()
        .copied()
        .filter(|case| case.captured_output().to_lowercase().contains(FLAKE_MARKER))
        .collect()
}

/// First lines of trimmed captured output, at most [`EXCERPT_MAX_LINES`].
///
/// Returns an empty vec when the output is blank.
pub fn failure_excerpt(case: &CaseRecord) -> Vec<String> {
    let trimmed = case.captured_output().trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .lines()
        .flat_map(|line| line.split('\r'))
        .take(EXCERPT_MAX_LINES)
        .map(str::to_string)
        .collect()
}
