//! Aggregated view over every case in one test run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::case::CaseRecord;

/// Ordered collection of case results for an entire run.
///
/// All derived views (`failures`, `total_duration`, `has_failures`) are
/// recomputed from `cases` on every call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    cases: Vec<CaseRecord>,
}

impl RunSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a summary owning its own copy of the given cases.
    pub fn from_cases<I>(cases: I) -> Self
    where
        I: IntoIterator<Item = CaseRecord>,
    {
        Self {
            cases: cases.into_iter().collect(),
        }
    }

    pub fn add_case(&mut self, case: CaseRecord) {
        self.cases.push(case);
    }

    pub fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Failing cases in insertion order.
    pub fn failures(&self) -> Vec<&CaseRecord> {
        self.cases.iter().filter(|c| c.is_failure()).collect()
    }

    /// Sum of all case durations (0.0 for an empty run).
    pub fn total_duration(&self) -> f64 {
        self.cases
            .iter()
            .fold(0.0, |total, c| total + c.duration_seconds())
    }

    pub fn has_failures(&self) -> bool {
        self.cases.iter().any(|c| c.is_failure())
    }

    /// Number of cases per outcome spelling, sorted by spelling.
    pub fn outcome_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for case in &self.cases {
            *counts.entry(case.outcome().to_string()).or_insert(0) += 1;
        }
        counts
    }
}

impl FromIterator<CaseRecord> for RunSummary {
    fn from_iter<I: IntoIterator<Item = CaseRecord>>(iter: I) -> Self {
        Self::from_cases(iter)
    }
}

impl Extend<CaseRecord> for RunSummary {
    fn extend<I: IntoIterator<Item = CaseRecord>>(&mut self, iter: I) {
        for case in iter {
            self.add_case(case);
        }
    }
}
