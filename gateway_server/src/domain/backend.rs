use crate::domain::errors::BackendError;
use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode, header};
use contracts::Contract;
use serde_json::Value;

// Backend API paths the gateway knows about.
pub const HELLO_PATH: &str = "/api/v1/hello";
pub const HEALTH_PATH: &str = "/api/v1/health";

// Greeting path with the name query-encoded; no name lets the backend pick its default.
pub fn hello_path(name: Option<&str>) -> String {
    match name {
        Some(name) => {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("name", name)
                .finish();
            format!("{HELLO_PATH}?{query}")
        }
        None => HELLO_PATH.to_string(),
    }
}

/// Appends `extra` query pairs to `path_and_query`, skipping keys the path
/// already sets.
pub fn merge_query(path_and_query: &str, extra: &[(String, String)]) -> String {
    let (path, existing) = match path_and_query.split_once('?') {
        Some((path, query)) => (path, query),
        None => (path_and_query, ""),
    };

    let mut pairs: Vec<(String, String)> = url::form_urlencoded::parse(existing.as_bytes())
        .into_owned()
        .collect();
    for (key, value) in extra {
        if !pairs.iter().any(|(existing_key, _)| existing_key == key) {
            pairs.push((key.clone(), value.clone()));
        }
    }

    if pairs.is_empty() {
        return path.to_string();
    }

    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("{path}?{query}")
}

// Raw request forwarded to the backend by the proxy.
#[derive(Debug, Clone)]
pub struct ForwardRequest {
    pub method: Method,
    pub path_and_query: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

// Raw backend reply before any normalization.
#[derive(Debug, Clone)]
pub struct BackendReply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl BackendReply {
    pub fn is_json(&self) -> bool {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"))
    }
}

// Handlers and use cases depend on this trait, not the reqwest client.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// GETs `path_and_query` and returns the decoded JSON body of a 2xx reply.
    /// Non-2xx replies become `BackendError::Upstream` with a normalized body.
    async fn get_json(&self, path_and_query: &str) -> Result<Value, BackendError>;

    /// Single round trip with no interpretation of the reply.
    async fn forward(&self, request: ForwardRequest) -> Result<BackendReply, BackendError>;
}

/// Fetches `path_and_query` and validates the payload against `T`.
pub async fn fetch_json<T, B>(backend: &B, path_and_query: &str) -> Result<T, BackendError>
where
    T: Contract,
    B: BackendApi + ?Sized,
{
    let payload = backend.get_json(path_and_query).await?;
    T::parse(payload).map_err(BackendError::Schema)
}
