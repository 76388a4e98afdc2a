use std::env;
use std::net::SocketAddr;

use serde::Serialize;
use tracing::warn;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:4000";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub const ENV_BIND_ADDR: &str = "FASTTRACK_API_ADDR";
pub const ENV_ALLOWED_ORIGIN: &str = "FASTTRACK_ALLOWED_ORIGIN";
pub const ENV_LOG_JSON: &str = "FASTTRACK_LOG_JSON";

#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// The only origin granted cross-origin access.
    pub allowed_origin: String,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            log_json: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env_socket_addr(ENV_BIND_ADDR, defaults.bind_addr),
            allowed_origin: env_string(ENV_ALLOWED_ORIGIN, &defaults.allowed_origin),
            log_json: env_bool(ENV_LOG_JSON, defaults.log_json),
        }
    }

    pub fn with_allowed_origin(mut self, origin: impl Into<String>) -> Self {
        self.allowed_origin = origin.into();
        self
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 4000))
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| parse_bool(&v))
        .unwrap_or(default)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

fn env_socket_addr(name: &str, default: SocketAddr) -> SocketAddr {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(env = name, value = %raw, fallback = %default, "invalid socket address");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.allowed_origin, DEFAULT_ALLOWED_ORIGIN);
        assert!(!cfg.log_json);
    }

    #[test]
    fn bool_parsing_accepts_common_spellings() {
        assert_eq!(parse_bool("yes"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
