use crate::domain::{BackendApi, GreetingState, fetch_json, greeting_name, hello_path};
use contracts::MessageResponse;

// Server-side greeting action with the backend injected.
pub struct GreetingUseCase<'a> {
    pub backend: &'a dyn BackendApi,
}

impl GreetingUseCase<'_> {
    // Greets the submitted name; an empty name becomes the default.
    pub async fn execute(&self, name: Option<&str>) -> GreetingState {
        let path = hello_path(Some(greeting_name(name)));
        self.fetch(&path).await
    }

    // Greeting shown before any name is submitted; the backend picks the name.
    pub async fn initial(&self) -> GreetingState {
        self.fetch(&hello_path(None)).await
    }

    async fn fetch(&self, path: &str) -> GreetingState {
        match fetch_json::<MessageResponse, _>(self.backend, path).await {
            Ok(response) => GreetingState::success(response.message),
            Err(err) => {
                tracing::warn!(error = %err, "greeting request failed");
                GreetingState::failure(err.client_message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BackendError, CONNECT_FAILURE, GreetingStatus, VALIDATION_FAILURE};
    use crate::use_cases::test_support::FakeBackend;
    use axum::http::StatusCode;
    use contracts::ErrorResponse;
    use serde_json::json;

    #[tokio::test]
    async fn when_backend_greets_then_returns_success_state() {
        let backend = FakeBackend::with_json(json!({ "message": "Hello, Ada from Axum!" }));
        let use_case = GreetingUseCase { backend: &backend };

        let state = use_case.execute(Some("Ada")).await;

        assert_eq!(state, GreetingState::success("Hello, Ada from Axum!"));
        assert_eq!(backend.requested_paths(), vec!["/api/v1/hello?name=Ada"]);
    }

    #[tokio::test]
    async fn when_name_is_empty_then_world_is_requested() {
        let backend = FakeBackend::with_json(json!({ "message": "hi" }));
        let use_case = GreetingUseCase { backend: &backend };

        use_case.execute(Some("")).await;

        assert_eq!(backend.requested_paths(), vec!["/api/v1/hello?name=World"]);
    }

    #[tokio::test]
    async fn initial_greeting_sends_no_name() {
        let backend = FakeBackend::with_json(json!({ "message": "hi" }));
        let use_case = GreetingUseCase { backend: &backend };

        let state = use_case.initial().await;

        assert_eq!(state.status, GreetingStatus::Success);
        assert_eq!(backend.requested_paths(), vec!["/api/v1/hello"]);
    }

    #[tokio::test]
    async fn when_payload_is_malformed_then_returns_validation_error_state() {
        let backend = FakeBackend::with_json(json!({ "text": "nope" }));
        let use_case = GreetingUseCase { backend: &backend };

        let state = use_case.execute(Some("Ada")).await;

        assert_eq!(state, GreetingState::failure(VALIDATION_FAILURE));
    }

    #[tokio::test]
    async fn when_backend_is_unreachable_then_returns_connect_error_state() {
        let backend = FakeBackend::with_error(BackendError::Unreachable("refused".into()));
        let use_case = GreetingUseCase { backend: &backend };

        let state = use_case.execute(None).await;

        assert_eq!(state.error.as_deref(), Some(CONNECT_FAILURE));
        assert_eq!(state.message, None);
    }

    #[tokio::test]
    async fn when_backend_rejects_then_upstream_message_is_shown() {
        let backend = FakeBackend::with_error(BackendError::Upstream {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorResponse::new("boom"),
        });
        let use_case = GreetingUseCase { backend: &backend };

        let state = use_case.execute(Some("Ada")).await;

        assert_eq!(state, GreetingState::failure("boom"));
    }
}
