//! Request metrics labelling.
//!
//! Installs a process-wide Prometheus recorder, so it lives in its own test
//! binary.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use eb_server::api::request_id::UNMATCHED_PATH;
use eb_server::api::{AppState, create_router};
use eb_server::config::BracketConfig;
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;

#[tokio::test]
async fn test_request_metrics_are_labelled_by_route() {
    let handle = PrometheusBuilder::new().install_recorder().unwrap();
    let app = create_router(AppState::new(BracketConfig::default()));

    for uri in ["/health", "/scan/aaaa-1111", "/scan/bbbb-2222"] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let expected = if uri == "/health" {
            StatusCode::OK
        } else {
            StatusCode::NOT_FOUND
        };
        assert_eq!(response.status(), expected);
    }

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/brackets")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"participants": ["a", "b"]}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let rendered = handle.render();
    assert!(rendered.contains(r#"path="/health""#));
    assert!(rendered.contains(r#"path="/api/v1/brackets""#));
    assert!(rendered.contains(&format!(r#"path="{UNMATCHED_PATH}""#)));
    assert!(!rendered.contains("/scan/"));
}
