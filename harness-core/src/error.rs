//! Report ingestion error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for report ingestion
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors raised while turning a report document into a `RunSummary`.
///
/// Summarisation itself cannot fail; every error in this crate comes from
/// reading or validating the input document.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to read report {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Report is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pytest JSON report must be a mapping at the top level, found {found}")]
    NotAMapping { found: &'static str },
}

impl ReportError {
    /// Whether the document was readable but had the wrong shape or syntax.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Json(_) | Self::NotAMapping { .. })
    }
}
