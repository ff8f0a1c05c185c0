// Shared API contracts between the backend and the gateway.

pub mod payloads;
pub mod schema;

pub use payloads::{ErrorResponse, HEALTHY, HealthResponse, MessageResponse, UNHEALTHY};
pub use schema::{
    Contract, Field, FieldKind, ObjectSchema, SchemaError, ValidationIssue, Validator,
};
