mod backend;
mod errors;
mod greeting;

// Re-export the domain boundary types and ports.
pub use backend::{
    BackendApi, BackendReply, ForwardRequest, HEALTH_PATH, HELLO_PATH, fetch_json, hello_path,
    merge_query,
};
pub use errors::{
    BackendError, CONNECT_FAILURE, GENERIC_BACKEND_FAILURE, MALFORMED_JSON, VALIDATION_FAILURE,
    normalize_error_json, normalize_error_text,
};
pub use greeting::{DEFAULT_NAME, GreetingState, GreetingStatus, greeting_name};
