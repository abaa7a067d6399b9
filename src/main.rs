use std::io::BufRead;

use anyhow::{Context, Result};

use fanlog::config::{self, Config};
use fanlog::LogLevel;

fn main() -> Result<()> {
    // Diagnostics go to stderr so they never mix with logged lines on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fanlog=info".into()),
        )
        .init();

    let level = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<LogLevel>()?,
        None => LogLevel::Info,
    };

    let config = Config::load()?;
    tracing::debug!("Loaded config from {}", config::config_file_path().display());

    let (logger, memory) = config.build_logger();

    let stdin = std::io::stdin();
    let mut lines = 0usize;
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        logger.log(level, &line, None);
        lines += 1;
    }

    tracing::info!(
        "Logged {} lines as {}, {} retained in memory",
        lines,
        logger.name(),
        memory.size()
    );

    Ok(())
}
