//! Error taxonomy for the analysis pipeline.

use thiserror::Error;

/// Failure of a single pipeline stage.
///
/// Client errors carry fixed messages that are safe to show verbatim.
/// Everything else is collapsed into the generic internal-error response
/// by the formatter, with [`AnalysisError::detail`] as the message.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No request body provided.")]
    MissingBody,

    #[error("No text provided for analysis.")]
    MissingText,

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Sentiment classification failed: {0:#}")]
    Upstream(anyhow::Error),

    #[error("Failed to persist analysis result: {0:#}")]
    Persistence(anyhow::Error),
}

/// Result type for pipeline stages.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

impl AnalysisError {
    /// Create an upstream (classifier) error from a message.
    pub fn upstream(msg: impl std::fmt::Display) -> Self {
        Self::Upstream(anyhow::anyhow!("{}", msg))
    }

    /// Whether the caller is at fault (400-class response).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingBody | Self::MissingText)
    }

    /// Stringified cause, used as the `message` of internal-error responses.
    pub fn detail(&self) -> String {
        match self {
            Self::Upstream(err) | Self::Persistence(err) => format!("{:#}", err),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_client_errors() {
        assert!(AnalysisError::MissingBody.is_client_error());
        assert!(AnalysisError::MissingText.is_client_error());
        assert!(!AnalysisError::MalformedBody("x".into()).is_client_error());
        assert!(!AnalysisError::upstream("boom").is_client_error());
    }

    #[test]
    fn test_detail_includes_cause_chain() {
        let err: anyhow::Result<()> = Err(anyhow::anyhow!("connection refused"));
        let err = err.context("Failed to write item").unwrap_err();
        let detail = AnalysisError::Persistence(err).detail();
        assert_eq!(detail, "Failed to write item: connection refused");
    }

    #[test]
    fn test_detail_of_client_error_is_fixed_message() {
        assert_eq!(AnalysisError::MissingText.detail(), "No text provided for analysis.");
    }
}
