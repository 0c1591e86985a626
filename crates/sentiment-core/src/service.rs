//! Service seams for the two external collaborators.
//!
//! Implementations are injected into [`crate::SentimentAnalyzer`] at
//! construction; they must be safe to share across concurrent requests.

use async_trait::async_trait;

use crate::model::{Classification, StoredResult};

/// External sentiment-classification capability.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify `text` written in `language_code`.
    async fn detect_sentiment(&self, text: &str, language_code: &str) -> anyhow::Result<Classification>;
}

/// Write-only store for analysis results.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Insert one item keyed by its id. Unconditional; no existence check.
    async fn put_result(&self, item: &StoredResult) -> anyhow::Result<()>;
}
