//! Bracket generation server.
//!
//! Loads configuration from the environment (and an optional `.env` file),
//! then serves the bracket API until interrupted.

use std::net::SocketAddr;

use anyhow::Error;
use eb_server::{
    api::{self, AppState},
    config::ServerConfig,
    logging, metrics,
};
use pico_args::Arguments;
use tracing::info;

const HELP: &str = "\
Run a single-elimination bracket server

USAGE:
  eb_server [OPTIONS]

OPTIONS:
  --bind          IP:PORT  Server socket bind address
                           [default: env SERVER_BIND or 127.0.0.1:6969]
  --metrics-bind  IP:PORT  Prometheus exporter address
                           [default: env METRICS_BIND, disabled if unset]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND                  Server bind address (e.g., 0.0.0.0:8080)
  METRICS_BIND                 Prometheus exporter bind address
  BRACKET_MAX_PARTICIPANTS     Largest field accepted per request [default: 1024]
  BRACKET_STRICT_VALIDATION    Reject duplicate/blank ids and zero seeds [default: true]
  BRACKET_PAIRING              adjacent or top_seed_byes [default: adjacent]
  RUST_LOG                     Log filter [default: info]
";

struct Args {
    bind: Option<SocketAddr>,
    metrics_bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        bind: pargs.opt_value_from_str("--bind")?,
        metrics_bind: pargs.opt_value_from_str("--metrics-bind")?,
    };

    logging::init();

    let config = ServerConfig::from_env(args.bind, args.metrics_bind)?;
    config.validate()?;

    info!(
        max_participants = config.bracket.max_participants,
        strict_validation = config.bracket.strict_validation,
        default_pairing = ?config.bracket.default_pairing,
        "Configuration loaded"
    );

    if let Some(addr) = config.metrics_bind {
        metrics::init_metrics(addr).map_err(Error::msg)?;
        info!("Prometheus metrics exposed at http://{}/metrics", addr);
    }

    let app = api::create_router(AppState::new(config.bracket));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
}
