//! Request validation.

use serde_json::Value;

use crate::error::{AnalysisError, AnalysisResult};
use crate::model::AnalysisRequest;

/// An inbound request as seen by the handler, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRequest {
    pub body: Option<String>,
}

impl RawRequest {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: Some(body.into()) }
    }

    /// A request carrying no body at all.
    pub fn without_body() -> Self {
        Self { body: None }
    }
}

/// Extract the text to analyze from a raw request.
///
/// The text is returned exactly as sent. Empty values of any JSON type
/// (`""`, `null`, `false`, `0`, `[]`, `{}`) count as missing; other
/// non-string values are malformed.
pub fn validate_request(raw: &RawRequest) -> AnalysisResult<AnalysisRequest> {
    let body = match raw.body.as_deref() {
        Some(body) if !body.is_empty() => body,
        _ => return Err(AnalysisError::MissingBody),
    };

    let value: Value = serde_json::from_str(body)
        .map_err(|e| AnalysisError::MalformedBody(e.to_string()))?;

    let fields = value
        .as_object()
        .ok_or_else(|| AnalysisError::MalformedBody("expected a JSON object".to_string()))?;

    match fields.get("text") {
        None => Err(AnalysisError::MissingText),
        Some(value) if is_empty_value(value) => Err(AnalysisError::MissingText),
        Some(Value::String(text)) => Ok(AnalysisRequest { text: text.clone() }),
        Some(other) => Err(AnalysisError::MalformedBody(format!(
            "field `text` must be a string, got {}",
            json_kind(other)
        ))),
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
