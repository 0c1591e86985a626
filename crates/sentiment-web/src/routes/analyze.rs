//! Sentiment analysis route handlers.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use sentiment_core::{format_outcome, AnalysisError, FormattedResponse, RawRequest};
use tracing::warn;

use crate::state::AppState;

/// Analyze the `text` field of a JSON body.
///
/// The body is taken raw so that missing or malformed bodies reach the
/// validator and get the uniform error shape. Bodies that cannot be read at
/// all (over the size limit, broken stream) are formatted the same way.
pub async fn analyze(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!(status = %rejection.status(), error = %rejection.body_text(), "Failed to read request body");
            let outcome = Err(AnalysisError::MalformedBody(rejection.body_text()));
            return into_response(format_outcome(&outcome));
        }
    };

    let raw = if body.is_empty() {
        RawRequest::without_body()
    } else {
        match String::from_utf8(body.to_vec()) {
            Ok(text) => RawRequest::new(text),
            Err(e) => {
                warn!(error = %e, "Request body is not UTF-8");
                let outcome = Err(AnalysisError::MalformedBody(e.to_string()));
                return into_response(format_outcome(&outcome));
            }
        }
    };

    into_response(state.analyzer.handle(&raw).await)
}

/// CORS preflight for the analysis endpoint.
pub async fn preflight() -> Response {
    into_response(sentiment_core::preflight())
}

fn into_response(formatted: FormattedResponse) -> Response {
    let status = StatusCode::from_u16(formatted.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut headers = HeaderMap::new();
    for (name, value) in formatted.headers {
        if let Ok(name) = HeaderName::from_bytes(name.as_bytes()) {
            headers.insert(name, HeaderValue::from_static(value));
        }
    }

    (status, headers, formatted.body).into_response()
}

#[cfg(test)]
mod tests {
    use crate::{create_router, state::AppState};
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        Router,
    };
    use sentiment_core::{
        AnalyzerConfig, Classification, Classifier, ConfidenceScores, ResultStore, Sentiment,
        SentimentAnalyzer, StoredResult,
    };
    use serde_json::Value;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    struct StubClassifier;

    #[async_trait]
    impl Classifier for StubClassifier {
        async fn detect_sentiment(&self, _text: &str, _language_code: &str) -> anyhow::Result<Classification> {
            Ok(Classification {
                sentiment: Sentiment::Mixed,
                scores: ConfidenceScores { positive: 0.4, negative: 0.3, neutral: 0.1, mixed: 0.55 },
            })
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        items: Mutex<Vec<StoredResult>>,
    }

    #[async_trait]
    impl ResultStore for MemoryStore {
        async fn put_result(&self, item: &StoredResult) -> anyhow::Result<()> {
            self.items.lock().unwrap().push(item.clone());
            Ok(())
        }
    }

    fn app(store: Arc<MemoryStore>) -> Router {
        let analyzer = SentimentAnalyzer::new(Arc::new(StubClassifier), store, AnalyzerConfig::default());
        create_router(AppState::new(Arc::new(analyzer)))
    }

    fn post(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_success() {
        let store = Arc::new(MemoryStore::default());
        let response = app(store.clone())
            .oneshot(post("/analyze", r#"{"text": "It was fine, I guess"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers().clone();
        assert_eq!(headers["content-type"], "application/json");
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-headers"], "Content-Type");
        assert_eq!(headers["access-control-allow-methods"], "OPTIONS,POST");

        let json = json_body(response).await;
        assert_eq!(json["sentiment"], "MIXED");
        assert_eq!(json["message"], "Sentiment analysis successful!");
        assert_eq!(json["confidence_scores"]["MIXED"], 0.55);
        assert!(uuid::Uuid::parse_str(json["id"].as_str().unwrap()).is_ok());
        assert_eq!(store.items.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_root_path_accepts_posts() {
        let response = app(Arc::new(MemoryStore::default()))
            .oneshot(post("/", r#"{"text": "hi"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_empty_body_is_missing_body() {
        let response = app(Arc::new(MemoryStore::default()))
            .oneshot(post("/analyze", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert!(response.headers().get("access-control-allow-methods").is_none());
        assert_eq!(json_body(response).await, serde_json::json!({"error": "No request body provided."}));
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected() {
        let store = Arc::new(MemoryStore::default());
        let response = app(store.clone())
            .oneshot(post("/analyze", r#"{"text": ""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, serde_json::json!({"error": "No text provided for analysis."}));
        assert!(store.items.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_is_internal_error() {
        let response = app(Arc::new(MemoryStore::default()))
            .oneshot(post("/analyze", "{text:"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(response).await;
        assert_eq!(json["error"], "An internal error occurred during sentiment analysis.");
        assert!(!json["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_body_is_formatted() {
        let body = format!(r#"{{"text": "{}"}}"#, "a".repeat(3 * 1024 * 1024));
        let request = Request::builder()
            .method(Method::POST)
            .uri("/analyze")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let store = Arc::new(MemoryStore::default());
        let response = app(store.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        let json = json_body(response).await;
        assert_eq!(json["error"], "An internal error occurred during sentiment analysis.");
        assert!(json["message"].as_str().unwrap().contains("length limit exceeded"));
        assert!(store.items.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_falsy_text_values_are_rejected() {
        for body in [r#"{"text": false}"#, r#"{"text": 0}"#, r#"{"text": []}"#] {
            let response = app(Arc::new(MemoryStore::default()))
                .oneshot(post("/analyze", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(json_body(response).await, serde_json::json!({"error": "No text provided for analysis."}));
        }
    }

    #[tokio::test]
    async fn test_preflight() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/analyze")
            .body(Body::empty())
            .unwrap();
        let response = app(Arc::new(MemoryStore::default())).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.headers()["access-control-allow-methods"], "OPTIONS,POST");
    }
}
