//! Sentiment Core Library
//!
//! Domain model and request pipeline for the sentiment analysis service:
//! request validation, classification, persistence of the result and the
//! uniform response shape returned to callers.

pub mod decimal;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod response;
pub mod service;
pub mod validate;

pub use decimal::{to_exact_decimal, DecimalScores};
pub use error::{AnalysisError, AnalysisResult};
pub use model::{AnalysisRequest, Classification, ConfidenceScores, Sentiment, SentimentResult, StoredResult};
pub use pipeline::{AnalyzerConfig, SentimentAnalyzer, DEFAULT_LANGUAGE_CODE};
pub use response::{format_outcome, preflight, FormattedResponse, ResponsePayload};
pub use service::{Classifier, ResultStore};
pub use validate::{validate_request, RawRequest};
