//! Application state.

use sentiment_core::SentimentAnalyzer;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<SentimentAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: Arc<SentimentAnalyzer>) -> Self {
        Self { analyzer }
    }
}
