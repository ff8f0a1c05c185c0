use crate::schema::{Contract, Field, FieldKind, ObjectSchema, ValidationIssue};
use serde::{Deserialize, Serialize};

pub const HEALTHY: &str = "healthy";
pub const UNHEALTHY: &str = "unhealthy";

// Greeting payload produced by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Contract for MessageResponse {
    const SCHEMA: ObjectSchema = ObjectSchema {
        fields: &[Field::required("message", FieldKind::String)],
    };
}

// Health payload; any status string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: HEALTHY.to_string(),
        }
    }
}

impl Contract for HealthResponse {
    const SCHEMA: ObjectSchema = ObjectSchema {
        fields: &[Field::required("status", FieldKind::String)],
    };
}

// Normalized error envelope returned to callers on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<ValidationIssue>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            issues: None,
        }
    }

    pub fn with_issues(message: impl Into<String>, issues: Vec<ValidationIssue>) -> Self {
        Self {
            message: message.into(),
            issues: Some(issues),
        }
    }
}

impl Contract for ErrorResponse {
    const SCHEMA: ObjectSchema = ObjectSchema {
        fields: &[
            Field::required("message", FieldKind::String),
            Field::optional("issues", FieldKind::Array),
        ],
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn when_message_payload_is_well_formed_then_it_round_trips_unchanged() {
        let payload = json!({ "message": "Hello, test" });

        let validated = MessageResponse::validate(payload.clone()).unwrap();

        assert_eq!(validated, payload);
    }

    #[test]
    fn when_message_is_missing_then_validation_fails() {
        let err = MessageResponse::parse(json!({ "text": "nope" })).unwrap_err();

        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].path, vec!["message".to_string()]);
        assert_eq!(err.issues()[0].message, "Required");
    }

    #[test]
    fn when_message_has_extra_keys_then_they_are_stripped() {
        let validated =
            MessageResponse::validate(json!({ "message": "hi", "extra": true })).unwrap();
        assert_eq!(validated, json!({ "message": "hi" }));
    }

    #[test]
    fn when_health_status_is_custom_then_it_is_accepted() {
        for status in [HEALTHY, UNHEALTHY, "degraded", ""] {
            let parsed = HealthResponse::parse(json!({ "status": status })).unwrap();
            assert_eq!(parsed.status, status);
        }
    }

    #[test]
    fn when_health_status_is_not_a_string_then_validation_fails() {
        let err = HealthResponse::parse(json!({ "status": 200 })).unwrap_err();
        assert_eq!(err.issues()[0].message, "Expected string, received number");
    }

    #[test]
    fn error_response_without_issues_omits_the_field() {
        let value = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(value, json!({ "message": "boom" }));
    }

    #[test]
    fn error_response_parses_issue_lists() {
        let parsed = ErrorResponse::parse(json!({
            "message": "Response validation failed",
            "issues": [{ "code": "invalid_type", "path": ["message"], "message": "Required" }]
        }))
        .unwrap();

        let issues = parsed.issues.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "invalid_type");
        assert_eq!(issues[0].expected, None);
    }

    #[test]
    fn when_error_issue_items_are_malformed_then_parse_reports_custom_issue() {
        let err = ErrorResponse::parse(json!({ "message": "x", "issues": [42] })).unwrap_err();
        assert_eq!(err.issues()[0].code, "custom");
    }
}
