//! HTTP host for first-round bracket generation.
//!
//! Wraps the `elimination_bracket` library in a small JSON API with
//! environment-driven configuration, structured logging and Prometheus
//! metrics.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
