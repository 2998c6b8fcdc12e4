//! Ultimate tic-tac-toe agent
//!
//! Speaks the arbiter line protocol on stdin/stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uttt::{build_strategy, EngineOptions, MatchDriver, ProtocolChannel, StrategyKind};

/// Ultimate tic-tac-toe agent for the arbiter line protocol
#[derive(Parser, Debug)]
#[command(name = "uttt")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Strategy that answers move requests
    #[arg(long, value_enum, default_value_t = StrategyKind::Random)]
    strategy: StrategyKind,

    /// Seed for the random strategy
    #[arg(long)]
    seed: Option<u64>,

    /// Engine option as NAME=VALUE, applied after the flags above (repeatable)
    #[arg(long = "option", value_name = "NAME=VALUE")]
    options: Vec<String>,

    /// Read arbiter lines from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `uttt=trace` (defaults to RUST_LOG, then `warn`)
    #[arg(long)]
    log: Option<String>,
}

fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // stdout belongs to the protocol
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    let mut options = EngineOptions::new(cli.strategy, cli.seed);
    for setting in &cli.options {
        options.apply(setting)?;
    }
    let mut driver = MatchDriver::new(build_strategy(&options));

    let report = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            let mut channel = ProtocolChannel::new(BufReader::new(file), io::stdout());
            driver.run(&mut channel)?
        }
        None => driver.run(&mut ProtocolChannel::stdio())?,
    };

    info!(%report, "done");
    Ok(())
}
