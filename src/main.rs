//! Connect Four in the terminal
//!
//! Play against the engine: type a column from 1 to 7, or `exit` to quit.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect4::{AIEngine, EngineConfig, GameSession};

/// Play Connect Four against the computer.
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override thinking time per move, in milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Override the deepest search iteration
    #[arg(long)]
    max_depth: Option<u8>,

    /// Log filter (e.g. `debug`, `connect4=trace`); defaults to RUST_LOG, then `warn`
    #[arg(long)]
    log_level: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the board on stdout stays readable
    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{}'", level))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load_or_default(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    // Apply CLI overrides
    if let Some(time_limit_ms) = cli.time_limit_ms {
        config.time_limit_ms = time_limit_ms;
    }
    if cli.max_depth.is_some() {
        config.max_depth = cli.max_depth;
    }
    config.validate().context("invalid engine configuration")?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    tracing::info!(
        time_limit_ms = config.time_limit_ms,
        max_depth = ?config.max_depth,
        "starting game"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = GameSession::new(AIEngine::with_config(config), stdin.lock(), stdout.lock());
    session.run().context("game aborted")?;
    Ok(())
}
