//! # Service Configuration
//!
//! Read from the environment at startup. Every variable is optional; an
//! unparsable value is a startup error rather than a silent default.
//!
//! | Variable        | Default   | Meaning                                  |
//! |-----------------|-----------|------------------------------------------|
//! | `PORT`          | `8080`    | TCP port to listen on                    |
//! | `BIND_ADDR`     | `0.0.0.0` | Interface to bind                        |
//! | `SHOWCASE_SEED` | `true`    | Start with the demo projects             |
//! | `LOG_FORMAT`    | `text`    | `text` or `json` log lines               |
//! | `MAX_SESSIONS`  | `10000`   | Sessions kept before the oldest is evicted |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Log line format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// A configuration variable held a value that could not be parsed.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid value for {var}: \"{value}\" ({expected})")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Seed the store with the demo projects.
    pub seed_demo: bool,
    pub log_format: LogFormat,
    /// Upper bound on live sessions.
    pub max_sessions: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            seed_demo: true,
            log_format: LogFormat::Text,
            max_sessions: 10_000,
        }
    }
}

impl AppConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            bind_addr: parse_var(&lookup, "BIND_ADDR", "an IP address", defaults.bind_addr, |v| {
                v.parse().ok()
            })?,
            port: parse_var(&lookup, "PORT", "a port number", defaults.port, |v| v.parse().ok())?,
            seed_demo: parse_var(&lookup, "SHOWCASE_SEED", "true or false", defaults.seed_demo, parse_bool)?,
            log_format: parse_var(&lookup, "LOG_FORMAT", "text or json", defaults.log_format, |v| {
                match v.to_ascii_lowercase().as_str() {
                    "text" => Some(LogFormat::Text),
                    "json" => Some(LogFormat::Json),
                    _ => None,
                }
            })?,
            max_sessions: parse_var(
                &lookup,
                "MAX_SESSIONS",
                "a positive integer",
                defaults.max_sessions,
                |v| v.parse().ok().filter(|n: &usize| *n > 0),
            )?,
        })
    }

    /// The socket address to listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
    default: T,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => parse(raw.trim()).ok_or(ConfigError {
            var,
            value: raw,
            expected,
        }),
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
