use crate::domain::{greeting_message, root_message};
use crate::interface_adapters::protocol::{
    ErrorResponse, HealthResponse, HelloParams, MessageResponse,
};
use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
    http::StatusCode,
};

// Handler for the API root greeting.
pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse::new(root_message()))
}

// Handler for the greeting endpoint; `name` is optional.
#[tracing::instrument(name = "hello", skip_all)]
pub async fn hello(
    params: Result<Query<HelloParams>, QueryRejection>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Query(params) = params.map_err(|rejection| {
        tracing::warn!(error = %rejection, "rejected hello query");
        error_response(StatusCode::UNPROCESSABLE_ENTITY, &rejection.body_text())
    })?;

    tracing::debug!(name = ?params.name, "greeting requested");
    Ok(Json(MessageResponse::new(greeting_message(
        params.name.as_deref(),
    ))))
}

// Health check for monitoring and load balancers.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

// Fallback for unknown API routes, keeping the error envelope consistent.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    error_response(StatusCode::NOT_FOUND, "not found")
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse::new(message)))
}
