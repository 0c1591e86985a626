//! # Sentiment Classifier
//!
//! HTTP client for a DetectSentiment-style text-analysis endpoint.

pub mod client;

pub use client::{HttpClassifier, DEFAULT_CLASSIFIER_URL};
