//! Error bodies returned by the proxy.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error reported by the proxy's admin API.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message
    pub message: String,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new error response with message and details.
    #[must_use]
    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Extracts an error from a proxy response body.
    ///
    /// The proxy answers failures in one of three shapes:
    /// `{"error": {"message": .., "type": ..}}` for gateway errors,
    /// `{"detail": ..}` for request validation, or a bare text body.
    /// Returns `None` for an empty body.
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return None;
        }

        let Ok(json) = serde_json::from_str::<Value>(trimmed) else {
            return Some(Self::new(trimmed));
        };

        if let Some(error) = json.get("error") {
            let message = error
                .get("message")
                .map_or_else(|| error.to_string(), value_text);
            return Some(match error.get("type").and_then(Value::as_str) {
                Some(kind) => Self::with_details(message, kind),
                None => Self::new(message),
            });
        }
        if let Some(detail) = json.get("detail") {
            return Some(Self::new(value_text(detail)));
        }
        if let Ok(parsed) = serde_json::from_value::<Self>(json.clone()) {
            return Some(parsed);
        }
        Some(Self::new(json.to_string()))
    }

    /// Checks if this error response has details.
    #[must_use]
    pub const fn has_details(&self) -> bool {
        self.details.is_some()
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}
