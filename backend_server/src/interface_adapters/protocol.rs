use serde::Deserialize;

// Response payloads are the shared contracts.
pub use contracts::{ErrorResponse, HealthResponse, MessageResponse};

// Query string accepted by the hello endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct HelloParams {
    pub name: Option<String>,
}
