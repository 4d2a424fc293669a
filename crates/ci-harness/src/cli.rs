use std::path::PathBuf;

use clap::Parser;

use crate::config::OutputFormat;

/// Produce a short, deterministic summary of a pytest JSON report.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ci-harness",
    version,
    about = "Summarise a pytest --json-report file into a short CI log digest."
)]
pub struct Cli {
    /// Path to the pytest --json-report output
    pub report: PathBuf,

    #[arg(
        long,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Number of previous summaries to retain for context (default: 5, env CI_HARNESS_HISTORY)"
    )]
    pub history: Option<u64>,

    #[arg(
        long,
        value_enum,
        help = "Output format (default: text, env CI_HARNESS_FORMAT)"
    )]
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_report_only() {
        let cli = Cli::try_parse_from(["ci-harness", "report.json"]).unwrap();
        assert_eq!(cli.report, PathBuf::from("report.json"));
        assert_eq!(cli.history, None);
        assert_eq!(cli.format, None);
    }

    #[test]
    fn test_history_and_format_flags() {
        let cli = Cli::try_parse_from([
            "ci-harness",
            "--history",
            "2",
            "--format",
            "json",
            "out/report.json",
        ])
        .unwrap();
        assert_eq!(cli.history, Some(2));
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_zero_history_rejected() {
        assert!(Cli::try_parse_from(["ci-harness", "r.json", "--history", "0"]).is_err());
        assert!(Cli::try_parse_from(["ci-harness", "r.json", "--history", "many"]).is_err());
    }

    #[test]
    fn test_report_is_required() {
        assert!(Cli::try_parse_from(["ci-harness"]).is_err());
    }
}
