use crate::domain::{
    BackendApi, BackendError, BackendReply, ForwardRequest, normalize_error_json,
    normalize_error_text,
};
use async_trait::async_trait;
use axum::body::Bytes;
use contracts::Contract;
use reqwest::{Client, header};
use serde_json::Value;
use url::Url;

// Thin wrapper around reqwest for calls to the internal backend API.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let base_url =
            Url::parse(base_url).map_err(|e| BackendError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // Resolve a backend path (with optional query) against the base URL.
    pub fn build_url(&self, path_and_query: &str) -> Result<Url, BackendError> {
        self.base_url
            .join(path_and_query)
            .map_err(|e| BackendError::InvalidUrl(format!("{path_and_query}: {e}")))
    }

    /// Fetches `path_and_query` and validates the payload against `T`.
    pub async fn fetch_json<T: Contract>(&self, path_and_query: &str) -> Result<T, BackendError> {
        crate::domain::fetch_json(self, path_and_query).await
    }
}

#[async_trait]
impl BackendApi for BackendClient {
    async fn get_json(&self, path_and_query: &str) -> Result<Value, BackendError> {
        let url = self.build_url(path_and_query)?;
        tracing::debug!(%url, "backend GET");

        let res = self
            .http
            .get(url)
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;
        let status = res.status();

        // Keep upstream status and a normalized message so handlers can
        // preserve the backend's error semantics.
        if !status.is_success() {
            let is_json = content_type_is_json(res.headers());
            let body = res.bytes().await.unwrap_or_default();
            return Err(BackendError::Upstream {
                status,
                body: normalize_error_bytes(is_json, &body),
            });
        }

        res.json::<Value>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn forward(&self, request: ForwardRequest) -> Result<BackendReply, BackendError> {
        let url = self.build_url(&request.path_and_query)?;
        tracing::debug!(method = %request.method, %url, "backend forward");

        let mut builder = self
            .http
            .request(request.method, url)
            .headers(request.headers)
            .header(header::CACHE_CONTROL, "no-store");
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let res = builder
            .send()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;
        let status = res.status();
        let headers = res.headers().clone();
        // A body cut off mid-stream is treated like a failed connection.
        let body: Bytes = res
            .bytes()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        Ok(BackendReply {
            status,
            headers,
            body,
        })
    }
}

fn content_type_is_json(headers: &header::HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/json"))
}

// Shared by the client and the proxy for non-2xx bodies.
pub(crate) fn normalize_error_bytes(is_json: bool, body: &[u8]) -> contracts::ErrorResponse {
    if is_json {
        if let Ok(payload) = serde_json::from_slice::<Value>(body) {
            return normalize_error_json(&payload);
        }
    }
    normalize_error_text(&String::from_utf8_lossy(body))
}
