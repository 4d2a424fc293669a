use clap::ValueEnum;
use harness_core::SummaryAgent;
use tracing::warn;

use crate::cli::Cli;

/// Environment variable overriding the rolling-history capacity.
pub const HISTORY_ENV: &str = "CI_HARNESS_HISTORY";
/// Environment variable overriding the output format.
pub const FORMAT_ENV: &str = "CI_HARNESS_FORMAT";

/// How the summary is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The plain summary message
    #[default]
    Text,
    /// Structured digest with the message, counts and hints
    Json,
}

impl OutputFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Top-level harness configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Previous summaries retained by the agent (always >= 1).
    pub history_capacity: usize,
    pub format: OutputFormat,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl HarnessConfig {
    /// Build from a variable lookup, falling back to built-in defaults.
    ///
    /// Invalid values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let history_capacity = match lookup(HISTORY_ENV) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!(value = %raw, "Ignoring invalid {}", HISTORY_ENV);
                    SummaryAgent::DEFAULT_HISTORY
                }
            },
            None => SummaryAgent::DEFAULT_HISTORY,
        };

        let format = match lookup(FORMAT_ENV) {
            Some(raw) => OutputFormat::parse(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "Ignoring invalid {}", FORMAT_ENV);
                OutputFormat::default()
            }),
            None => OutputFormat::default(),
        };

        Self {
            history_capacity,
            format,
        }
    }

    /// Apply command-line overrides.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(history) = cli.history {
            self.history_capacity = usize::try_from(history).unwrap_or(usize::MAX);
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        self
    }
}
