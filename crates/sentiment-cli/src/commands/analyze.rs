//! One-shot analysis command.

use anyhow::Result;
use clap::Args;
use sentiment_core::RawRequest;

use super::ServiceArgs;
use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to analyze
    pub text: String,
}

pub async fn execute(args: AnalyzeArgs, services: &ServiceArgs) -> Result<()> {
    let analyzer = services.build_analyzer().await?;

    let body = serde_json::json!({ "text": args.text }).to_string();
    let response = analyzer.handle(&RawRequest::new(body)).await;

    output::print_response(&response);

    if !response.is_success() {
        anyhow::bail!("Analysis failed with status {}", response.status);
    }
    Ok(())
}
