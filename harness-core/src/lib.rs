//! Harness Core Library
//!
//! This library provides:
//! - The in-memory model of a test run (`CaseRecord`, `Outcome`, `RunSummary`)
//! - Report ingestion for pytest `--json-report` documents
//! - A small deterministic summarisation agent with a bounded rolling history
//!
//! # Data Flow
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ JSON report  │────▶│  RunSummary  │────▶│ SummaryAgent │────▶ message
//! │  (ingest)    │     │ (cases)      │     │ (heuristics) │
//! └──────────────┘     └──────────────┘     └──────┬───────┘
//!                                                  │
//!                                                  ▼
//!                                           ┌──────────────┐
//!                                           │RollingHistory│
//!                                           └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use harness_core::{CaseRecord, RunSummary, SummaryAgent};
//!
//! let summary = RunSummary::from_cases(vec![
//!     CaseRecord::new("tests/test_a.py::test_ok", "passed", 0.10, ""),
//!     CaseRecord::new("tests/test_a.py::test_xf", "xfailed", 0.05, ""),
//! ]);
//!
//! let mut agent = SummaryAgent::default();
//! let message = agent.summarise(&summary);
//! assert!(message.contains("0.15"));
//! ```

#![allow(clippy::uninlined_format_args)]

pub mod agent;
pub mod case;
pub mod error;
pub mod heuristics;
pub mod history;
pub mod ingest;
pub mod summary;

pub use agent::{Digest, Hint, SummaryAgent, Verdict};
pub use case::{CaseRecord, Outcome};
pub use error::{ReportError, ReportResult};
pub use history::RollingHistory;
pub use ingest::{load_report, parse_report_str, parse_report_value};
pub use summary::RunSummary;
