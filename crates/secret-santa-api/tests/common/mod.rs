//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use secret_santa_test_support::FixedSeedSource;
use tower::ServiceExt;
use url::Url;

use secret_santa_api::state::AppState;

/// Base URL that every generated link in the tests starts with.
pub const BASE_URL: &str = "https://santa.example/";

/// Build the full app router with a fixed seed source. Uses the same route
/// structure as `main.rs`.
pub fn build_test_app() -> Router {
    build_test_app_with_seed(7)
}

/// Build the full app router whose seed source always yields `seed`.
pub fn build_test_app_with_seed(seed: u32) -> Router {
    let app_state = AppState::new(
        Arc::new(FixedSeedSource(seed)),
        Url::parse(BASE_URL).unwrap(),
    );
    secret_santa_api::app(app_state)
}

/// The query string of a generated link, for feeding back into
/// `/api/v1/links/resolve`.
pub fn query_of(link: &serde_json::Value) -> String {
    let url = Url::parse(link.as_str().unwrap()).unwrap();
    url.query().unwrap_or("").to_owned()
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
