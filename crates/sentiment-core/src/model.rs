//! Sentiment domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::decimal::DecimalScores;
use crate::error::{AnalysisError, AnalysisResult};

/// Overall sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl Sentiment {
    /// Parse a label, ignoring case.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_uppercase().as_str() {
            "POSITIVE" => Some(Self::Positive),
            "NEGATIVE" => Some(Self::Negative),
            "NEUTRAL" => Some(Self::Neutral),
            "MIXED" => Some(Self::Mixed),
            _ => None,
        }
    }

    /// Wire form of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
            Self::Mixed => "MIXED",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-class confidence scores, as reported by the classifier.
///
/// Values are probabilities but are not required to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceScores {
    #[serde(rename = "POSITIVE")]
    pub positive: f64,
    #[serde(rename = "NEGATIVE")]
    pub negative: f64,
    #[serde(rename = "NEUTRAL")]
    pub neutral: f64,
    #[serde(rename = "MIXED")]
    pub mixed: f64,
}

impl ConfidenceScores {
    /// Scores paired with their label, in wire order.
    pub fn entries(&self) -> [(Sentiment, f64); 4] {
        [
            (Sentiment::Positive, self.positive),
            (Sentiment::Negative, self.negative),
            (Sentiment::Neutral, self.neutral),
            (Sentiment::Mixed, self.mixed),
        ]
    }

    /// Check every score is a finite probability in [0, 1].
    pub fn validate(&self) -> AnalysisResult<()> {
        for (label, value) in self.entries() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AnalysisError::upstream(format!(
                    "classifier returned out-of-range {} score: {}",
                    label, value
                )));
            }
        }
        Ok(())
    }
}

/// Output of the classifier for one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub sentiment: Sentiment,
    pub scores: ConfidenceScores,
}

/// A validated analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub text: String,
}

/// A successful classification of one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    pub id: Uuid,
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence_scores: ConfidenceScores,
}

/// The persisted form of a [`SentimentResult`], with exact-decimal scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResult {
    pub id: Uuid,
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence_scores: DecimalScores,
}

impl StoredResult {
    /// Build the store item, converting scores to exact decimals.
    pub fn from_result(result: &SentimentResult) -> AnalysisResult<Self> {
        let confidence_scores = DecimalScores::from_scores(&result.confidence_scores)?;

        Ok(Self {
            id: result.id,
            text: result.text.clone(),
            sentiment: result.sentiment,
            confidence_scores,
        })
    }
}
