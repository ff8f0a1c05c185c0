use crate::interface_adapters::handlers::actions::{
    fetch_health, initial_greeting, request_greeting,
};
use crate::interface_adapters::handlers::api::{health, hello};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/api/hello", get(hello))
        .route("/api/health", get(health))
        .route("/actions/greeting", get(initial_greeting).post(request_greeting))
        .route("/actions/health", get(fetch_health))
        .with_state(state)
}
