//! Server configuration from environment variables

use chrono::Duration;
use drill_core::Tolerance;

const DEFAULT_SESSION_TTL_MINUTES: u32 = 120;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Tolerance used when a request does not supply one
    pub default_tolerance: Tolerance,
    /// Sessions idle for longer than this are dropped
    pub session_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_tolerance: Tolerance::default(),
            session_ttl: Duration::minutes(i64::from(DEFAULT_SESSION_TTL_MINUTES)),
        }
    }
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Recognized vars: HOST, PORT, DEFAULT_TOLERANCE, SESSION_TTL_MINUTES.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            default_tolerance: Tolerance::new(parse_or(
                "DEFAULT_TOLERANCE",
                lookup("DEFAULT_TOLERANCE"),
                defaults.default_tolerance.value(),
            )),
            session_ttl: Duration::minutes(i64::from(parse_or(
                "SESSION_TTL_MINUTES",
                lookup("SESSION_TTL_MINUTES"),
                DEFAULT_SESSION_TTL_MINUTES,
            ))),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr + std::fmt::Display>(
    key: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {}={:?}, using {}", key, value, default);
            default
        }),
        None => default,
    }
}
