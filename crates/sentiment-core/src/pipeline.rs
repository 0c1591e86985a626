//! The analysis pipeline.
//!
//! `validate -> classify -> persist -> respond`. Each stage returns an
//! [`AnalysisResult`]; the first failure short-circuits the rest and is
//! turned into a response by [`format_outcome`].

use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::{AnalysisError, AnalysisResult};
use crate::model::{Classification, SentimentResult, StoredResult};
use crate::response::{format_outcome, FormattedResponse};
use crate::service::{Classifier, ResultStore};
use crate::validate::{validate_request, RawRequest};

/// Language tag sent to the classifier when none is configured.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Pipeline settings.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub language_code: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
        }
    }
}

/// Runs one request through the pipeline.
///
/// Holds shared, read-only handles to the classifier and the store, so a
/// single analyzer can serve any number of concurrent requests.
#[derive(Clone)]
pub struct SentimentAnalyzer {
    classifier: Arc<dyn Classifier>,
    store: Arc<dyn ResultStore>,
    config: AnalyzerConfig,
}

impl SentimentAnalyzer {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        store: Arc<dyn ResultStore>,
        config: AnalyzerConfig,
    ) -> Self {
        Self { classifier, store, config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Handle a request end to end, always producing a formatted response.
    pub async fn handle(&self, raw: &RawRequest) -> FormattedResponse {
        let outcome = self.analyze(raw).await;

        match &outcome {
            Ok(result) => info!(id = %result.id, sentiment = %result.sentiment, "Sentiment analysis stored"),
            Err(err) if err.is_client_error() => warn!(error = %err, "Rejected analysis request"),
            Err(AnalysisError::Upstream(e)) => error!(error = %format!("{:#}", e), "Sentiment classification failed"),
            Err(AnalysisError::Persistence(e)) => error!(error = %format!("{:#}", e), "Result persistence failed"),
            Err(err) => error!(error = %err, "Analysis request failed"),
        }

        format_outcome(&outcome)
    }

    /// Validate, classify and persist. Nothing is retried.
    pub async fn analyze(&self, raw: &RawRequest) -> AnalysisResult<SentimentResult> {
        let request = validate_request(raw)?;
        debug!(chars = request.text.chars().count(), "Request validated");

        let classification = self.classify(&request.text).await?;
        debug!(sentiment = %classification.sentiment, "Text classified");

        let result = SentimentResult {
            id: Uuid::new_v4(),
            text: request.text,
            sentiment: classification.sentiment,
            confidence_scores: classification.scores,
        };

        self.persist(&result).await?;
        debug!(id = %result.id, "Result persisted");

        Ok(result)
    }

    async fn classify(&self, text: &str) -> AnalysisResult<Classification> {
        let classification = self
            .classifier
            .detect_sentiment(text, &self.config.language_code)
            .await
            .map_err(AnalysisError::Upstream)?;

        classification.scores.validate()?;
        Ok(classification)
    }

    async fn persist(&self, result: &SentimentResult) -> AnalysisResult<()> {
        let item = StoredResult::from_result(result)?;
        self.store
            .put_result(&item)
            .await
            .map_err(AnalysisError::Persistence)
    }
}
