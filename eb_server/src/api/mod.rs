//! HTTP API for the bracket server.
//!
//! # Architecture
//!
//! The API is built with:
//! - **Axum**: Async web framework for HTTP
//! - **Tower**: Middleware for CORS and request ids
//!
//! # Modules
//!
//! - [`brackets`]: First-round bracket generation
//! - [`errors`]: JSON error responses
//! - [`request_id`]: Request correlation middleware
//!
//! # Endpoints Overview
//!
//! - `GET /health` - Server health status
//! - `POST /api/v1/brackets` - Generate a first round
//! - `POST /api/brackets` - Legacy alias of the above
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use eb_server::api::{AppState, create_router};
//! use eb_server::config::BracketConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_router(AppState::new(BracketConfig::default()));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CORS
//!
//! CORS is configured permissively for development. In production, configure
//! appropriate origins, methods, and headers.

pub mod brackets;
pub mod errors;
pub mod request_id;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::BracketConfig;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; the configuration sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub bracket: Arc<BracketConfig>,
}

impl AppState {
    pub fn new(bracket: BracketConfig) -> Self {
        Self {
            bracket: Arc::new(bracket),
        }
    }
}

/// Create the complete API router with all endpoints and middleware.
///
/// # Endpoint Summary
///
/// ```text
/// GET  /health                         - Health check
/// POST /api/v1/brackets                - Generate first round
/// POST /api/brackets                   - Use /api/v1/brackets
/// ```
pub fn create_router(state: AppState) -> Router {
    let v1_routes = Router::new().route("/brackets", post(brackets::generate_bracket));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", v1_routes)
        // Legacy route (deprecated)
        .route("/api/brackets", post(brackets::generate_bracket))
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint for monitoring and load balancers.
///
/// Bracket generation holds no external resources, so a running server is a
/// healthy one.
///
/// ```bash
/// curl http://localhost:6969/health
/// # {"status":"healthy","version":"1.0.0","timestamp":"2026-10-16T10:30:00Z"}
/// ```
async fn health_check() -> impl IntoResponse {
    let response = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}
