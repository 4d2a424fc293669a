//! ci-harness — summarise pytest JSON reports for CI logs.
//!
//! Thin command-line layer over [`harness_core`]: argument parsing,
//! configuration layering (defaults → environment → flags), logging setup
//! and output rendering. All summarisation logic lives in `harness_core`.

#![allow(clippy::uninlined_format_args)]

pub mod cli;
pub mod config;
pub mod output;
pub mod telemetry;

use std::io::Write;

use anyhow::{Context, Result};
use harness_core::{load_report, SummaryAgent};
use tracing::info;

pub use cli::Cli;
pub use config::{HarnessConfig, OutputFormat};

/// Run one summarisation using configuration from the environment and `cli`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let config = HarnessConfig::default().with_cli(cli);
    run_with_config(cli, &config, out)
}

/// Run one summarisation with an explicit configuration.
pub fn run_with_config<W: Write>(cli: &Cli, config: &HarnessConfig, out: &mut W) -> Result<()> {
    info!(
        report = %cli.report.display(),
        history = config.history_capacity,
        format = %config.format,
        "Summarising pytest report"
    );

    let summary = load_report(&cli.report)
        .with_context(|| format!("Failed to load pytest report {}", cli.report.display()))?;

    let mut agent = SummaryAgent::new(config.history_capacity);
    let digest = agent.analyse(&summary);
    let message = agent.record(&digest);

    let rendered = output::render(config.format, &summary, &digest, &message)?;
    writeln!(out, "{}", rendered).context("Failed to write summary")?;
    Ok(())
}
