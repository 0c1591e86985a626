//! HTTP client for sentiment classification.
//!
//! Posts `{"Text", "LanguageCode"}` to `{base_url}/detect-sentiment` and
//! reads back the overall label plus the four per-class scores.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use sentiment_core::{Classification, Classifier, ConfidenceScores, Sentiment};

/// Default classifier API URL.
pub const DEFAULT_CLASSIFIER_URL: &str = "http://localhost:8090";

/// Sentiment classification client.
#[derive(Clone)]
pub struct HttpClassifier {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct DetectSentimentRequest<'a> {
    text: &'a str,
    language_code: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DetectSentimentResponse {
    sentiment: String,
    sentiment_score: SentimentScore,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SentimentScore {
    positive: f64,
    negative: f64,
    neutral: f64,
    mixed: f64,
}

impl DetectSentimentResponse {
    fn into_classification(self) -> Result<Classification> {
        let sentiment = Sentiment::from_label(&self.sentiment)
            .with_context(|| format!("Unknown sentiment label: {}", self.sentiment))?;

        let score = self.sentiment_score;
        Ok(Classification {
            sentiment,
            scores: ConfidenceScores {
                positive: score.positive,
                negative: score.negative,
                neutral: score.neutral,
                mixed: score.mixed,
            },
        })
    }
}

impl HttpClassifier {
    /// Create a client for the service at `base_url`.
    ///
    /// Uses the HTTP client's default timeouts.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client pointing at localhost.
    pub fn default_client() -> Self {
        Self::new(DEFAULT_CLASSIFIER_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Classify one text.
    pub async fn classify(&self, text: &str, language_code: &str) -> Result<Classification> {
        let request = DetectSentimentRequest { text, language_code };

        let response = self.client
            .post(format!("{}/detect-sentiment", self.base_url))
            .json(&request)
            .send()
            .await
            .context("Failed to connect to sentiment classifier")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Sentiment classifier error ({}): {}", status, body);
        }

        let result: DetectSentimentResponse = response
            .json()
            .await
            .context("Failed to parse sentiment classifier response")?;

        let classification = result.into_classification()?;
        debug!(sentiment = %classification.sentiment, "Classified text");

        Ok(classification)
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn detect_sentiment(&self, text: &str, language_code: &str) -> Result<Classification> {
        self.classify(text, language_code).await
    }
}
