// Forwards public requests to the backend and relays normalized responses.

use crate::domain::{
    BackendApi, BackendError, BackendReply, CONNECT_FAILURE, ForwardRequest, MALFORMED_JSON,
    VALIDATION_FAILURE, merge_query,
};
use crate::interface_adapters::clients::backend::normalize_error_bytes;
use axum::Json;
use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use contracts::{ErrorResponse, Validator};
use serde::Serialize;
use serde_json::Value;

// Inbound headers that reach the backend; everything else is dropped.
pub const FORWARDED_HEADERS: [HeaderName; 4] = [
    header::AUTHORIZATION,
    header::CONTENT_TYPE,
    header::ACCEPT,
    header::COOKIE,
];

// Backend headers that describe the hop rather than the payload.
const HOP_HEADERS: [HeaderName; 5] = [
    header::CONNECTION,
    header::TRANSFER_ENCODING,
    header::CONTENT_LENGTH,
    header::UPGRADE,
    header::TE,
];

pub const MAX_FORWARD_BODY_BYTES: usize = 2 * 1024 * 1024;

pub type QueryPairs = [(String, String)];

// Where a public route sends its request.
#[derive(Clone, Copy)]
pub enum BackendPath {
    Static(&'static str),
    Derived(fn(&QueryPairs) -> String),
}

impl BackendPath {
    fn resolve(&self, query: &QueryPairs) -> String {
        match self {
            BackendPath::Static(path) => (*path).to_string(),
            BackendPath::Derived(derive) => derive(query),
        }
    }
}

/// Per-route proxy behavior.
///
/// Query forwarding is on by default; the fallback message is what callers
/// see when the backend cannot be reached.
#[derive(Clone, Copy)]
pub struct ProxyRoute {
    pub backend_path: BackendPath,
    pub schema: Option<Validator>,
    pub forward_query: bool,
    pub fallback_message: &'static str,
}

impl ProxyRoute {
    pub fn fixed(path: &'static str) -> Self {
        Self::new(BackendPath::Static(path))
    }

    pub fn derived(derive: fn(&QueryPairs) -> String) -> Self {
        Self::new(BackendPath::Derived(derive))
    }

    fn new(backend_path: BackendPath) -> Self {
        Self {
            backend_path,
            schema: None,
            forward_query: true,
            fallback_message: CONNECT_FAILURE,
        }
    }

    pub fn validated(mut self, schema: Validator) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn without_query(mut self) -> Self {
        self.forward_query = false;
        self
    }

    pub fn with_fallback(mut self, message: &'static str) -> Self {
        self.fallback_message = message;
        self
    }
}

pub fn query_pairs(uri: &Uri) -> Vec<(String, String)> {
    uri.query()
        .map(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}

pub fn forwarded_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for name in FORWARDED_HEADERS {
        if let Some(value) = inbound.get(&name) {
            headers.insert(name, value.clone());
        }
    }
    headers
}

/// Proxies `request` to the backend according to `route`.
///
/// Never fails: every error is turned into a JSON response.
pub async fn proxy_request(
    backend: &dyn BackendApi,
    route: &ProxyRoute,
    request: Request,
) -> Response {
    let (parts, body) = request.into_parts();
    let query = query_pairs(&parts.uri);

    let mut path_and_query = route.backend_path.resolve(&query);
    if route.forward_query {
        path_and_query = merge_query(&path_and_query, &query);
    }

    let body = if parts.method == Method::GET || parts.method == Method::HEAD {
        None
    } else {
        match to_bytes(body, MAX_FORWARD_BODY_BYTES).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read inbound body");
                return json_reply(
                    StatusCode::BAD_REQUEST,
                    &ErrorResponse::new("Failed to read request body"),
                );
            }
        }
    };

    let method = parts.method.clone();
    let forward = ForwardRequest {
        method: parts.method,
        path_and_query,
        headers: forwarded_headers(&parts.headers),
        body,
    };
    tracing::debug!(
        method = %forward.method,
        path = %forward.path_and_query,
        "proxying request"
    );

    match backend.forward(forward).await {
        Ok(reply) => relay(route, &method, reply),
        Err(err) => {
            tracing::error!(error = %err, "backend proxy error");
            let (status, Json(body)) = map_backend_error(err, route.fallback_message);
            json_reply(status, &body)
        }
    }
}

/// Maps a backend failure to the status and body the caller sees.
///
/// `fallback` replaces the message when the backend could not be reached.
pub fn map_backend_error(
    err: BackendError,
    fallback: &'static str,
) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        BackendError::Unreachable(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::new(fallback)),
        ),
        err => (err.status_code(), Json(err.into_error_response())),
    }
}

fn relay(route: &ProxyRoute, method: &Method, reply: BackendReply) -> Response {
    let is_json = reply.is_json();

    if !reply.status.is_success() {
        let body = normalize_error_bytes(is_json, &reply.body);
        tracing::warn!(status = %reply.status, message = %body.message, "backend returned error");
        return json_reply(reply.status, &body);
    }

    // HEAD replies carry headers only; there is no payload to validate.
    if !is_json || *method == Method::HEAD {
        return passthrough(reply);
    }

    let payload: Value = match serde_json::from_slice(&reply.body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!(error = %e, "backend sent malformed json");
            return json_reply(StatusCode::BAD_GATEWAY, &ErrorResponse::new(MALFORMED_JSON));
        }
    };

    let Some(validate) = route.schema else {
        return json_reply(reply.status, &payload);
    };

    match validate(payload) {
        Ok(validated) => json_reply(reply.status, &validated),
        Err(err) => {
            tracing::error!(error = %err, "backend response failed validation");
            json_reply(
                StatusCode::BAD_GATEWAY,
                &ErrorResponse::with_issues(VALIDATION_FAILURE, err.into_issues()),
            )
        }
    }
}

// Non-JSON success bodies are relayed byte for byte.
fn passthrough(reply: BackendReply) -> Response {
    let mut headers = reply.headers;
    for name in HOP_HEADERS {
        headers.remove(name);
    }
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    (reply.status, headers, Body::from(reply.body)).into_response()
}

fn json_reply<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(body),
    )
        .into_response()
}
