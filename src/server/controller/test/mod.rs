use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{
    builder::TestBuilder,
    context::TestContext,
    factory::{self, helpers::SeededNews},
};
use tower::ServiceExt;

use crate::server::{router, state::AppState};

mod comment;

/// A router over a freshly seeded in-memory database.
///
/// The context is returned so the connection outlives the test body.
async fn seeded_app() -> (Router, SeededNews, TestContext) {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::helpers::seed_news(db).await.unwrap();
    let app = router::app(AppState::new(db.clone()));

    (app, seeded, test)
}

/// Sends a request and returns the status with the parsed JSON body (`Null` when empty).
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: Method, uri: &str, body: Value) -> Request<Body> {
    with_raw_json(method, uri, body.to_string())
}

fn with_raw_json(method: Method, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (app, _, _test) = seeded_app().await;

    let (status, body) = send(&app, get("/api/not-a-route")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "404: Route not found" }));
}
