use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use crm_api_rust::app::{router, AppState};

/// Fresh application over the in-memory store.
pub fn app() -> Router {
    router(AppState::in_memory())
}

/// Drive one request through the router and decode the JSON reply.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, value)
}

/// Unwrap the `{"success": true, "data": ...}` envelope.
pub fn data(body: &Value) -> &Value {
    assert_eq!(body["success"], Value::Bool(true), "envelope: {}", body);
    &body["data"]
}
