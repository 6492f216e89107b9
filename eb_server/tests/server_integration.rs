//! Integration tests for the bracket HTTP API.
//!
//! Requests are driven through the router with `oneshot`, no socket needed.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use eb_server::api::request_id::REQUEST_ID_HEADER;
use eb_server::api::{AppState, create_router};
use eb_server::config::BracketConfig;
use elimination_bracket::PairingStrategy;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For `oneshot` method

/// Helper to create a router with the given bracket configuration
fn create_test_server(config: BracketConfig) -> axum::Router {
    create_router(AppState::new(config))
}

/// Helper to POST a JSON body and decode the JSON response
async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = create_test_server(BracketConfig::default());

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = create_test_server(BracketConfig::default());

    let request = Request::builder()
        .uri("/health")
        .header(REQUEST_ID_HEADER, "load-test-42")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "load-test-42");
}

// ============================================================================
// Bracket Generation Tests
// ============================================================================

#[tokio::test]
async fn test_generate_bracket_from_bare_ids() {
    let app = create_test_server(BracketConfig::default());

    let (status, body) = post_json(
        app,
        "/api/v1/brackets",
        json!({ "participants": ["athlete-1", "athlete-2", "athlete-3", "athlete-4"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bracketSize"], 4);
    assert_eq!(body["matchCount"], 2);
    assert_eq!(body["byeCount"], 0);
    assert_eq!(
        body["matches"][0],
        json!({ "id": "M1", "round": 1, "red": "athlete-1", "blue": "athlete-2", "isBye": false })
    );
}

#[tokio::test]
async fn test_generate_bracket_with_seeds_and_byes() {
    let app = create_test_server(BracketConfig::default());

    let (status, body) = post_json(
        app,
        "/api/v1/brackets",
        json!({
            "participants": [
                { "id": "athlete-1", "seed": 1 },
                { "id": "athlete-2", "seed": 4 },
                { "id": "athlete-3", "seed": 2, "club": "North" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["byeCount"], 1);
    assert_eq!(body["pairing"], "adjacent");
    assert_eq!(
        body["matches"],
        json!([
            { "id": "M1", "round": 1, "red": "athlete-1", "blue": "athlete-3", "isBye": false },
            { "id": "M2", "round": 1, "red": "athlete-2", "blue": "bye-4", "isBye": true }
        ])
    );
}

#[tokio::test]
async fn test_pairing_override() {
    let app = create_test_server(BracketConfig::default());

    let (status, body) = post_json(
        app,
        "/api/v1/brackets",
        json!({ "participants": ["a", "b", "c"], "pairing": "topSeedByes" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pairing"], "topSeedByes");
    assert_eq!(body["matches"][0]["red"], "a");
    assert_eq!(body["matches"][0]["blue"], "bye-4");
    assert_eq!(body["matches"][1]["red"], "b");
    assert_eq!(body["matches"][1]["blue"], "c");
}

#[tokio::test]
async fn test_configured_default_pairing() {
    let app = create_test_server(BracketConfig {
        default_pairing: PairingStrategy::TopSeedByes,
        ..BracketConfig::default()
    });

    let body = json!({ "participants": ["a", "b", "c"] });
    let (_, body) = post_json(app, "/api/v1/brackets", body).await;
    assert_eq!(body["pairing"], "topSeedByes");
    assert_eq!(body["byeCount"], 1);
    assert_eq!(body["matches"][0]["blue"], "bye-4");
}

#[tokio::test]
async fn test_single_participant_omits_blue() {
    let app = create_test_server(BracketConfig::default());

    let body = json!({ "participants": ["solo"] });
    let (status, body) = post_json(app, "/api/v1/brackets", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["matches"],
        json!([{ "id": "M1", "round": 1, "red": "solo", "isBye": true }])
    );
}

#[tokio::test]
async fn test_empty_field() {
    let app = create_test_server(BracketConfig::default());

    let (status, body) = post_json(app, "/api/v1/brackets", json!({ "participants": [] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matchCount"], 0);
    assert_eq!(body["matches"], json!([]));
}

#[tokio::test]
async fn test_legacy_route() {
    let app = create_test_server(BracketConfig::default());

    let body = json!({ "participants": ["a", "b"] });
    let (status, body) = post_json(app, "/api/brackets", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matchCount"], 1);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
async fn test_duplicate_ids_rejected() {
    let app = create_test_server(BracketConfig::default());

    let body = json!({ "participants": ["a", "a"] });
    let (status, body) = post_json(app, "/api/v1/brackets", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("Duplicate"));
}

#[tokio::test]
async fn test_duplicate_ids_allowed_without_strict_validation() {
    let app = create_test_server(BracketConfig {
        strict_validation: false,
        ..BracketConfig::default()
    });

    let body = json!({ "participants": ["a", "a"] });
    let (status, body) = post_json(app, "/api/v1/brackets", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matches"][0]["red"], "a");
    assert_eq!(body["matches"][0]["blue"], "a");
}

#[tokio::test]
async fn test_zero_seed_rejected() {
    let app = create_test_server(BracketConfig::default());

    let (status, _) = post_json(
        app,
        "/api/v1/brackets",
        json!({ "participants": [{ "id": "a", "seed": 0 }] }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_field_too_large() {
    let app = create_test_server(BracketConfig {
        max_participants: 2,
        ..BracketConfig::default()
    });

    let body = json!({ "participants": ["a", "b", "c"] });
    let (status, body) = post_json(app, "/api/v1/brackets", body).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"].as_str().unwrap().contains("max 2"));
}

#[tokio::test]
async fn test_negative_seed_rejected_with_error_body() {
    let app = create_test_server(BracketConfig::default());

    let (status, body) = post_json(
        app,
        "/api/v1/brackets",
        json!({ "participants": [{ "id": "a", "seed": -3 }] }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_malformed_json_rejected_with_error_body() {
    let app = create_test_server(BracketConfig::default());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/brackets")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].as_str().is_some_and(|error| !error.is_empty()));
}

#[tokio::test]
async fn test_missing_content_type_rejected_with_error_body() {
    let app = create_test_server(BracketConfig::default());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/brackets")
        .body(Body::from(r#"{"participants": ["a"]}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

// ============================================================================
// Routing Tests
// ============================================================================

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = create_test_server(BracketConfig::default());

    let request = Request::builder()
        .uri("/wp-admin/setup-config.php")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}
