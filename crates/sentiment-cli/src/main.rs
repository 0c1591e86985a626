//! Sentiment CLI
//!
//! Runs the sentiment analysis service, or a single analysis from the
//! command line.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::{Cli, Commands};

/// Initialize tracing with optional file logging.
fn init_tracing(log_file: Option<&std::path::Path>) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sentiment=info,sentiment_core=info,sentiment_web=debug,tower_http=info".into());

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        // stderr keeps stdout clean for `analyze` output
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match &cli.command {
        Commands::Serve(args) => args.log_file.clone(),
        _ => None,
    };
    init_tracing(log_file.as_deref())?;

    cli.execute().await
}
