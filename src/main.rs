//! Log File Genius - validate project log files and report their health

use anyhow::Result;
use clap::Parser;
use logfile_genius::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging; RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let code = cli::run(cli)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
