use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "World";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreetingStatus {
    Success,
    Error,
}

// Outcome of the server-side greeting action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingState {
    pub status: GreetingStatus,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl GreetingState {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: GreetingStatus::Success,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            status: GreetingStatus::Error,
            message: None,
            error: Some(error.into()),
        }
    }
}

// Missing or empty names fall back to the default; others are sent as typed.
pub fn greeting_name(raw: Option<&str>) -> &str {
    match raw {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_NAME,
    }
}
