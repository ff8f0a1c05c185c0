use crate::interface_adapters::handlers::{health_check, hello, not_found, read_root};
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub const API_V1_PREFIX: &str = "/api/v1";

pub fn app(cors: CorsLayer) -> Router {
    // Versioned API namespace; new versions get their own prefix.
    Router::new()
        .route(&format!("{API_V1_PREFIX}/"), get(read_root))
        .route(&format!("{API_V1_PREFIX}/hello"), get(hello))
        .route(&format!("{API_V1_PREFIX}/health"), get(health_check))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
