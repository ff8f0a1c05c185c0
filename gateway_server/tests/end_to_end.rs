mod support;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;

// Real backend API behind the gateway.
async fn spawn_backend_api() -> String {
    let settings = backend_server::Settings::from_lookup(|_| None).expect("default settings");
    let cors = settings.cors_layer().expect("default cors layer");
    support::spawn_backend(backend_server::app(cors)).await
}

#[tokio::test]
async fn hello_is_proxied_through_to_the_backend_api() {
    let base_url = spawn_backend_api().await;

    let reply = support::get(support::gateway(&base_url), "/api/hello?name=Ada").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json(), json!({ "message": "Hello, Ada from Axum!" }));
}

#[tokio::test]
async fn hello_without_name_uses_the_backend_default() {
    let base_url = spawn_backend_api().await;

    let reply = support::get(support::gateway(&base_url), "/api/hello").await;

    assert_eq!(reply.json(), json!({ "message": "Hello, World from Axum!" }));
}

#[tokio::test]
async fn health_is_proxied_through_to_the_backend_api() {
    let base_url = spawn_backend_api().await;

    let reply = support::get(support::gateway(&base_url), "/api/health").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json(), json!({ "status": "healthy" }));
}

#[tokio::test]
async fn greeting_action_round_trips_through_the_backend_api() {
    let base_url = spawn_backend_api().await;

    let request = Request::builder()
        .method("POST")
        .uri("/actions/greeting")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("name=Grace+Hopper"))
        .expect("expected request to build");

    let reply = support::send(support::gateway(&base_url), request).await;

    assert_eq!(
        reply.json(),
        json!({
            "status": "success",
            "message": "Hello, Grace Hopper from Axum!",
            "error": null
        })
    );
}
