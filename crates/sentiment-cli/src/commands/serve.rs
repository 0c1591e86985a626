//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use super::ServiceArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "SENTIMENT_PORT", default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "SENTIMENT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, services: &ServiceArgs) -> Result<()> {
    let analyzer = Arc::new(services.build_analyzer().await?);

    println!();
    println!("  {} {}", "Sentiment".cyan().bold(), "Analysis Service".bold());
    println!();
    println!("  {}  http://{}:{}/analyze", "Endpoint".green(), args.host, args.port);
    println!("  {}  {}", "Classifier".green(), services.classifier_url);
    println!("  {}       {} ({})", "Store".green(), services.redis_url, services.table);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    sentiment_web::run_server(analyzer, &args.host, args.port).await?;

    Ok(())
}
