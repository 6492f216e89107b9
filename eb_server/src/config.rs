//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use elimination_bracket::PairingStrategy;
use std::net::SocketAddr;

/// Default server bind address
pub const DEFAULT_BIND: &str = "127.0.0.1:6969";

/// Default maximum field size accepted per request
pub const DEFAULT_MAX_PARTICIPANTS: usize = 1024;

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Prometheus exporter bind address (exporter disabled when None)
    pub metrics_bind: Option<SocketAddr>,
    /// Bracket request handling
    pub bracket: BracketConfig,
}

/// Bracket request handling configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketConfig {
    /// Largest field accepted in one request
    pub max_participants: usize,
    /// Reject duplicate ids, blank ids and zero seeds
    pub strict_validation: bool,
    /// Pairing used when a request does not pick one
    pub default_pairing: PairingStrategy,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            max_participants: DEFAULT_MAX_PARTICIPANTS,
            strict_validation: true,
            default_pairing: PairingStrategy::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `metrics_bind_override` - Optional metrics address override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is present but cannot be parsed
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        metrics_bind_override: Option<SocketAddr>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup(
            |key| std::env::var(key).ok(),
            bind_override,
            metrics_bind_override,
        )
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(
        lookup: F,
        bind_override: Option<SocketAddr>,
        metrics_bind_override: Option<SocketAddr>,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = match bind_override {
            Some(bind) => bind,
            None => parse_addr(
                "SERVER_BIND",
                &lookup("SERVER_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            )?,
        };

        let metrics_bind = match metrics_bind_override {
            Some(addr) => Some(addr),
            None => lookup("METRICS_BIND")
                .map(|value| parse_addr("METRICS_BIND", &value))
                .transpose()?,
        };

        let default_pairing = match lookup("BRACKET_PAIRING") {
            None => PairingStrategy::default(),
            Some(value) => match value.to_lowercase().as_str() {
                "top_seed_byes" => PairingStrategy::TopSeedByes,
                "adjacent" => PairingStrategy::Adjacent,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "BRACKET_PAIRING".to_string(),
                        reason: format!("Expected adjacent or top_seed_byes, got {value:?}"),
                    });
                }
            },
        };

        let bracket = BracketConfig {
            max_participants: parse_or(
                &lookup,
                "BRACKET_MAX_PARTICIPANTS",
                DEFAULT_MAX_PARTICIPANTS,
            ),
            strict_validation: parse_or(&lookup, "BRACKET_STRICT_VALIDATION", true),
            default_pairing,
        };

        Ok(ServerConfig {
            bind,
            metrics_bind,
            bracket,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bracket.max_participants == 0 {
            return Err(ConfigError::Invalid {
                var: "BRACKET_MAX_PARTICIPANTS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.metrics_bind == Some(self.bind) {
            return Err(ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("Must differ from the server bind address ({})", self.bind),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

fn parse_addr(var: &str, value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        var: var.to_string(),
        reason: format!("Expected IP:PORT, got {value:?}"),
    })
}

/// Helper to parse a variable with default fallback
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
