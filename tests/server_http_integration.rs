//! HTTP-level integration tests for the resolver adapter.
//!
//! Drives the axum router directly with `oneshot`; lookups come from a
//! static table so no network access is needed.

#![cfg(feature = "server")]

use std::sync::Arc;

use axum::body::Body;
use http_body_util::BodyExt;
use hyper::{Request, StatusCode};
use sidebyside::server::{build_router, AppState};
use sidebyside::{EntityResolver, ResolverOptions, StaticLookup};
use tower::ServiceExt;

// ── Test app builder ───────────────────────────────────────────

fn build_test_app() -> axum::Router {
    let lookup = Arc::new(
        StaticLookup::new()
            .with_entry("Michael Jordan", "Michael Jordan", "mj.jpg")
            .with_entry("lebron_james", "LeBron James", "lj.jpg")
            .with_entry("drake", "Drake (musician)", "drake.jpg"),
    );
    let resolver = EntityResolver::new(lookup, ResolverOptions::default());
    build_router(AppState::new(resolver))
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).to_string()
}

// ── Tests ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_health() {
    let app = build_test_app();
    let resp = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_post_query_tokens() {
    let app = build_test_app();
    let body = serde_json::json!({
        "queryTokens": ["\"Michael", "Jordan\"", "lebron", "james"]
    });

    let resp = app
        .oneshot(
            Request::post("/sidebyside")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    // Key order is discovery order
    assert_eq!(
        body_text(resp).await,
        r#"{"Michael Jordan":{"imageURL":"mj.jpg"},"LeBron James":{"imageURL":"lj.jpg"}}"#
    );
}

#[tokio::test]
async fn test_post_with_nothing_resolvable() {
    let app = build_test_app();
    let resp = app
        .oneshot(
            Request::post("/sidebyside")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"queryTokens": ["who", "wins"]}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "{}");
}

#[tokio::test]
async fn test_post_rejects_missing_tokens() {
    let app = build_test_app();
    let resp = app
        .oneshot(
            Request::post("/sidebyside")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"tokens": ["drake"]}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn test_get_with_trigger_phrase() {
    let app = build_test_app();
    let resp = app
        .oneshot(
            Request::get("/sidebyside?q=Side%20by%20side%20drake%20lebron%20james")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_text(resp).await,
        r#"{"Drake (musician)":{"imageURL":"drake.jpg"},"LeBron James":{"imageURL":"lj.jpg"}}"#
    );
}

#[tokio::test]
async fn test_get_without_trigger_phrase() {
    let app = build_test_app();
    let resp = app
        .oneshot(
            Request::get("/sidebyside?q=drake%20lebron")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert!(json["error"].as_str().unwrap().contains("side by side"));
}
