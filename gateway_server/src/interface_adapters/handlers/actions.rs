// Server-side actions that call the backend and shape the result for the page.

use crate::domain::CONNECT_FAILURE;
use crate::interface_adapters::protocol::{
    ErrorResponse, GreetingForm, GreetingState, HealthResponse,
};
use crate::interface_adapters::proxy::map_backend_error;
use crate::interface_adapters::state::AppState;
use crate::use_cases::{GreetingUseCase, HealthUseCase};
use axum::{Form, Json, extract::State, http::StatusCode};
use std::sync::Arc;

#[tracing::instrument(name = "request_greeting", skip_all, fields(name = ?form.name))]
pub async fn request_greeting(
    State(state): State<Arc<AppState>>,
    Form(form): Form<GreetingForm>,
) -> Json<GreetingState> {
    let use_case = GreetingUseCase {
        backend: state.backend.as_ref(),
    };
    Json(use_case.execute(form.name.as_deref()).await)
}

pub async fn initial_greeting(State(state): State<Arc<AppState>>) -> Json<GreetingState> {
    let use_case = GreetingUseCase {
        backend: state.backend.as_ref(),
    };
    Json(use_case.initial().await)
}

pub async fn fetch_health(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = HealthUseCase {
        backend: state.backend.as_ref(),
    };

    use_case.execute().await.map(Json).map_err(|err| {
        tracing::error!(error = %err, "health lookup failed");
        map_backend_error(err, CONNECT_FAILURE)
    })
}
