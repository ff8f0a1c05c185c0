// Shared helpers for gateway integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, Bytes, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use gateway_server::{AppState, BackendClient, app};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

// Serve `router` on an ephemeral port and return its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral backend port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("fake backend failed");
    });
    format!("http://{addr}")
}

// A URL nothing listens on: bind, note the port, then release it.
pub async fn unreachable_backend_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn backend_client(backend_url: &str) -> BackendClient {
    BackendClient::new(backend_url).expect("valid backend url")
}

pub fn gateway(backend_url: &str) -> Router {
    app(Arc::new(AppState {
        backend: Arc::new(backend_client(backend_url)),
    }))
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("expected json body")
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Reply {
    let response = app.oneshot(request).await.expect("gateway responded");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("expected response body");
    Reply {
        status,
        headers,
        body,
    }
}

pub async fn get(app: Router, uri: &str) -> Reply {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("expected request to build");
    send(app, request).await
}
