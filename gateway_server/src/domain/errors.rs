use axum::http::StatusCode;
use contracts::{Contract, ErrorResponse, SchemaError, ValidationIssue};
use serde_json::Value;
use thiserror::Error;

pub const GENERIC_BACKEND_FAILURE: &str = "Backend request failed";
pub const CONNECT_FAILURE: &str = "Failed to connect to backend";
pub const VALIDATION_FAILURE: &str = "Response validation failed";
pub const MALFORMED_JSON: &str = "Backend returned malformed JSON";

// Failure modes when talking to the backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("backend returned {status}: {}", .body.message)]
    Upstream {
        status: StatusCode,
        body: ErrorResponse,
    },
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("backend response decode error: {0}")]
    Decode(String),
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),
}

impl BackendError {
    // Client-facing status for each failure mode.
    pub fn status_code(&self) -> StatusCode {
        match self {
            BackendError::Unreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
            BackendError::Upstream { status, .. } => *status,
            BackendError::Schema(_) | BackendError::Decode(_) => StatusCode::BAD_GATEWAY,
            BackendError::InvalidUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Human-readable message safe to show to callers.
    pub fn client_message(&self) -> String {
        match self {
            BackendError::Unreachable(_) => CONNECT_FAILURE.to_string(),
            BackendError::Upstream { body, .. } => body.message.clone(),
            BackendError::Schema(_) => VALIDATION_FAILURE.to_string(),
            BackendError::Decode(_) => MALFORMED_JSON.to_string(),
            BackendError::InvalidUrl(_) => GENERIC_BACKEND_FAILURE.to_string(),
        }
    }

    pub fn into_error_response(self) -> ErrorResponse {
        let message = self.client_message();
        match self {
            BackendError::Upstream { body, .. } => body,
            BackendError::Schema(err) => ErrorResponse::with_issues(message, err.into_issues()),
            _ => ErrorResponse::new(message),
        }
    }
}

/// Normalizes a JSON error body from the backend.
///
/// Accepts the shared error envelope as-is, maps FastAPI-style `detail`
/// (string or list of `{loc, msg, type}`), and falls back to a generic
/// message for anything else.
pub fn normalize_error_json(payload: &Value) -> ErrorResponse {
    if let Ok(parsed) = ErrorResponse::parse(payload.clone()) {
        return parsed;
    }

    if let Some(message) = payload.get("message").and_then(Value::as_str) {
        return ErrorResponse::new(message);
    }

    match payload.get("detail") {
        Some(Value::String(detail)) => ErrorResponse::new(detail.as_str()),
        Some(Value::Array(items)) => {
            let issues: Vec<ValidationIssue> = items.iter().map(detail_issue).collect();
            let message = issues
                .first()
                .map(|issue| issue.message.clone())
                .unwrap_or_else(|| GENERIC_BACKEND_FAILURE.to_string());
            ErrorResponse::with_issues(message, issues)
        }
        _ => ErrorResponse::new(GENERIC_BACKEND_FAILURE),
    }
}

// Non-JSON error bodies carry their text as the message.
pub fn normalize_error_text(text: &str) -> ErrorResponse {
    let text = text.trim();
    if text.is_empty() {
        ErrorResponse::new(GENERIC_BACKEND_FAILURE)
    } else {
        ErrorResponse::new(text)
    }
}

fn detail_issue(item: &Value) -> ValidationIssue {
    let path = item
        .get("loc")
        .and_then(Value::as_array)
        .map(|loc| {
            loc.iter()
                .map(|segment| match segment {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();
    let message = item
        .get("msg")
        .and_then(Value::as_str)
        .unwrap_or(GENERIC_BACKEND_FAILURE);
    let code = item
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or(contracts::schema::CUSTOM);

    ValidationIssue {
        code: code.to_string(),
        path,
        message: message.to_string(),
        expected: None,
        received: None,
    }
}
