//! Response formatting.
//!
//! Every outcome of the pipeline becomes a status code, a fixed header set
//! and a JSON object body. Success responses advertise the full CORS header
//! set for a cross-origin POST; failures only carry the content type and
//! allowed origin.

use serde::Serialize;
use tracing::error;

use crate::error::{AnalysisError, AnalysisResult};
use crate::model::{ConfidenceScores, Sentiment, SentimentResult};

pub const SUCCESS_MESSAGE: &str = "Sentiment analysis successful!";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred during sentiment analysis.";

const CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");
const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");
const ALLOW_HEADERS: (&str, &str) = ("Access-Control-Allow-Headers", "Content-Type");
const ALLOW_METHODS: (&str, &str) = ("Access-Control-Allow-Methods", "OPTIONS,POST");

const SUCCESS_HEADERS: [(&str, &str); 4] = [CONTENT_TYPE, ALLOW_ORIGIN, ALLOW_HEADERS, ALLOW_METHODS];
const FAILURE_HEADERS: [(&str, &str); 2] = [CONTENT_TYPE, ALLOW_ORIGIN];

/// JSON body of a response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    Success {
        id: String,
        message: String,
        text: String,
        sentiment: Sentiment,
        confidence_scores: ConfidenceScores,
    },
    Failure {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl ResponsePayload {
    pub fn success(result: &SentimentResult) -> Self {
        Self::Success {
            id: result.id.to_string(),
            message: SUCCESS_MESSAGE.to_string(),
            text: result.text.clone(),
            sentiment: result.sentiment,
            confidence_scores: result.confidence_scores,
        }
    }

    pub fn client_error(err: &AnalysisError) -> Self {
        Self::Failure { error: err.to_string(), message: None }
    }

    pub fn internal_error(err: &AnalysisError) -> Self {
        Self::Failure {
            error: INTERNAL_ERROR_MESSAGE.to_string(),
            message: Some(err.detail()),
        }
    }
}

/// A transport-independent HTTP-style response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: String,
}

impl FormattedResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Look up a header by name, ignoring case.
    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

/// Map a pipeline outcome to its response.
pub fn format_outcome(outcome: &AnalysisResult<SentimentResult>) -> FormattedResponse {
    match outcome {
        Ok(result) => respond(200, &SUCCESS_HEADERS, &ResponsePayload::success(result)),
        Err(err @ (AnalysisError::MissingBody | AnalysisError::MissingText)) => {
            respond(400, &FAILURE_HEADERS, &ResponsePayload::client_error(err))
        }
        Err(
            err @ (AnalysisError::MalformedBody(_)
            | AnalysisError::Upstream(_)
            | AnalysisError::Persistence(_)),
        ) => respond(500, &FAILURE_HEADERS, &ResponsePayload::internal_error(err)),
    }
}

/// Answer to a CORS preflight for the analysis endpoint.
pub fn preflight() -> FormattedResponse {
    FormattedResponse {
        status: 204,
        headers: SUCCESS_HEADERS.to_vec(),
        body: String::new(),
    }
}

fn respond(
    status: u16,
    headers: &[(&'static str, &'static str)],
    payload: &ResponsePayload,
) -> FormattedResponse {
    match serde_json::to_string(payload) {
        Ok(body) => FormattedResponse { status, headers: headers.to_vec(), body },
        Err(e) => {
            error!(error = %e, "Failed to serialize response body");
            let fallback = serde_json::json!({
                "error": INTERNAL_ERROR_MESSAGE,
                "message": e.to_string(),
            });
            FormattedResponse {
                status: 500,
                headers: FAILURE_HEADERS.to_vec(),
                body: fallback.to_string(),
            }
        }
    }
}
