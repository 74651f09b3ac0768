// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `AUTH_SECRET` | HS256 token signing secret (>= 32 bytes) | Required |
//! | `AUTH_ISSUER` | Issuer written to and expected in tokens | `account-gate` |
//! | `AUTH_LEEWAY_SECS` | Clock skew tolerance for `exp`/`nbf` | `60` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::SocketAddr;

use crate::auth::token::DEFAULT_LEEWAY_SECS;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const AUTH_SECRET_ENV: &str = "AUTH_SECRET";
pub const AUTH_ISSUER_ENV: &str = "AUTH_ISSUER";
pub const AUTH_LEEWAY_ENV: &str = "AUTH_LEEWAY_SECS";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ISSUER: &str = "account-gate";
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Shortest accepted signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub auth_secret: Vec<u8>,
    pub auth_issuer: String,
    pub auth_leeway_secs: u64,
    pub log_format: LogFormat,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print the secret
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("auth_issuer", &self.auth_issuer)
            .field("auth_leeway_secs", &self.auth_leeway_secs)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(PORT_ENV) {
            Some(v) => v.parse::<u16>().map_err(|_| ConfigError::Invalid(PORT_ENV))?,
            None => DEFAULT_PORT,
        };
        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|_| ConfigError::Invalid(HOST_ENV))?;

        let auth_secret = lookup(AUTH_SECRET_ENV)
            .ok_or(ConfigError::Missing(AUTH_SECRET_ENV))?
            .into_bytes();
        if auth_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid(AUTH_SECRET_ENV));
        }

        let auth_issuer = lookup(AUTH_ISSUER_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ISSUER.to_string());

        let auth_leeway_secs = match lookup(AUTH_LEEWAY_ENV) {
            Some(v) => v
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid(AUTH_LEEWAY_ENV))?,
            None => DEFAULT_LEEWAY_SECS,
        };

        let log_format = match lookup(LOG_FORMAT_ENV).as_deref() {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            addr,
            auth_secret,
            auth_issuer,
            auth_leeway_secs,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = load(&[(AUTH_SECRET_ENV, SECRET)]).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.auth_issuer, DEFAULT_ISSUER);
        assert_eq!(config.auth_leeway_secs, DEFAULT_LEEWAY_SECS);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn secret_is_required() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::Missing(AUTH_SECRET_ENV));
    }

    #[test]
    fn short_secret_is_rejected() {
        assert_eq!(
            load(&[(AUTH_SECRET_ENV, "short")]).unwrap_err(),
            ConfigError::Invalid(AUTH_SECRET_ENV)
        );
    }

    #[test]
    fn overrides_are_read() {
        let config = load(&[
            (AUTH_SECRET_ENV, SECRET),
            (HOST_ENV, "127.0.0.1"),
            (PORT_ENV, "9000"),
            (AUTH_ISSUER_ENV, "bookmarks"),
            (AUTH_LEEWAY_ENV, "0"),
            (LOG_FORMAT_ENV, "JSON"),
        ])
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.auth_issuer, "bookmarks");
        assert_eq!(config.auth_leeway_secs, 0);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn bad_port_is_rejected() {
        assert_eq!(
            load(&[(AUTH_SECRET_ENV, SECRET), (PORT_ENV, "http")]).unwrap_err(),
            ConfigError::Invalid(PORT_ENV)
        );
    }

    #[test]
    fn debug_hides_secret() {
        let config = load(&[(AUTH_SECRET_ENV, SECRET)]).unwrap();
        assert!(!format!("{config:?}").contains(SECRET));
    }
}
