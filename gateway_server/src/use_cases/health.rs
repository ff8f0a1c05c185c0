use crate::domain::{BackendApi, BackendError, HEALTH_PATH, fetch_json};
use contracts::HealthResponse;

// Backend health lookup used by the status endpoint.
pub struct HealthUseCase<'a> {
    pub backend: &'a dyn BackendApi,
}

impl HealthUseCase<'_> {
    pub async fn execute(&self) -> Result<HealthResponse, BackendError> {
        fetch_json::<HealthResponse, _>(self.backend, HEALTH_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::FakeBackend;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn when_backend_reports_custom_status_then_it_is_returned() {
        let backend = FakeBackend::with_json(json!({ "status": "degraded" }));

        let health = HealthUseCase { backend: &backend }.execute().await.unwrap();

        assert_eq!(health.status, "degraded");
        assert_eq!(backend.requested_paths(), vec![HEALTH_PATH]);
    }

    #[tokio::test]
    async fn when_status_is_missing_then_returns_schema_error() {
        let backend = FakeBackend::with_json(json!({ "ok": true }));

        let err = HealthUseCase { backend: &backend }.execute().await.unwrap_err();

        assert!(matches!(err, BackendError::Schema(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
