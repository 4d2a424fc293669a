use std::io;

use anyhow::Result;
use ci_harness::{telemetry, Cli};
use clap::Parser;

fn main() -> Result<()> {
    telemetry::init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ci_harness::run(&cli, &mut out)
}
