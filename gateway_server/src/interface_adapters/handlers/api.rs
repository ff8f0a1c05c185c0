// Public API routes that proxy straight to the backend.

use crate::domain::{HEALTH_PATH, hello_path};
use crate::interface_adapters::proxy::{ProxyRoute, QueryPairs, proxy_request};
use crate::interface_adapters::state::AppState;
use axum::extract::{Request, State};
use axum::response::Response;
use contracts::{Contract, HealthResponse, MessageResponse};
use std::sync::Arc;

// Only `name` is carried over; other inbound query keys are not forwarded.
fn hello_backend_path(query: &QueryPairs) -> String {
    let name = query
        .iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty());
    hello_path(name)
}

pub fn hello_route() -> ProxyRoute {
    ProxyRoute::derived(hello_backend_path)
        .validated(MessageResponse::validate)
        .without_query()
}

pub fn health_route() -> ProxyRoute {
    ProxyRoute::fixed(HEALTH_PATH)
        .validated(HealthResponse::validate)
        .without_query()
}

#[tracing::instrument(name = "proxy_hello", skip_all, fields(query = ?request.uri().query()))]
pub async fn hello(State(state): State<Arc<AppState>>, request: Request) -> Response {
    proxy_request(state.backend.as_ref(), &hello_route(), request).await
}

#[tracing::instrument(name = "proxy_health", skip_all)]
pub async fn health(State(state): State<Arc<AppState>>, request: Request) -> Response {
    proxy_request(state.backend.as_ref(), &health_route(), request).await
}
