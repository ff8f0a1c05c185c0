use serde::Deserialize;

pub use crate::domain::GreetingState;
pub use contracts::{ErrorResponse, HealthResponse};

// Form payload submitted to the greeting action.
#[derive(Debug, Default, Deserialize)]
pub struct GreetingForm {
    pub name: Option<String>,
}
