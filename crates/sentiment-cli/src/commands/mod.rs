//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sentiment_classifier::HttpClassifier;
use sentiment_core::{AnalyzerConfig, SentimentAnalyzer, DEFAULT_LANGUAGE_CODE};
use sentiment_redis::DEFAULT_TABLE;
use std::sync::Arc;
use tracing::info;

pub mod analyze;
pub mod serve;

/// Sentiment analysis service
#[derive(Parser)]
#[command(name = "sentiment")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub services: ServiceArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP service
    Serve(serve::ServeArgs),

    /// Analyze a single text and print the response
    Analyze(analyze::AnalyzeArgs),
}

/// Location of the external collaborators.
#[derive(Args, Debug, Clone)]
pub struct ServiceArgs {
    /// Redis URL for the result store
    #[arg(long, global = true, env = "REDIS_URL", default_value = "redis://127.0.0.1:6379")]
    pub redis_url: String,

    /// Key namespace for stored results
    #[arg(long, global = true, env = "SENTIMENT_TABLE", default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Base URL of the sentiment classifier
    #[arg(long, global = true, env = "SENTIMENT_CLASSIFIER_URL", default_value = sentiment_classifier::DEFAULT_CLASSIFIER_URL)]
    pub classifier_url: String,

    /// Language tag sent with every text
    #[arg(long, global = true, env = "SENTIMENT_LANGUAGE", default_value = DEFAULT_LANGUAGE_CODE)]
    pub language: String,
}

impl ServiceArgs {
    /// Connect to both collaborators and build the analyzer.
    pub async fn build_analyzer(&self) -> Result<SentimentAnalyzer> {
        let store = sentiment_redis::connect(&self.redis_url, &self.table)
            .await
            .with_context(|| format!("Failed to connect to Redis at {}", self.redis_url))?;
        let classifier = HttpClassifier::new(&self.classifier_url);

        info!(
            redis = %self.redis_url,
            table = %store.table(),
            classifier = %classifier.base_url(),
            language = %self.language,
            "Analyzer configured"
        );

        Ok(SentimentAnalyzer::new(
            Arc::new(classifier),
            Arc::new(store),
            AnalyzerConfig { language_code: self.language.clone() },
        ))
    }
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args, &self.services).await,
            Commands::Analyze(args) => analyze::execute(args, &self.services).await,
        }
    }
}
