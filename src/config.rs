//! Process-wide configuration
//!
//! All settings come from environment variables with documented defaults.
//! `Config::from_env` is called exactly once at startup; the resulting value
//! is immutable for the process lifetime and passed explicitly into
//! [`crate::state::AppState`].

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ENVIRONMENT: &str = "development";

/// Immutable process configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen interface (`HOST`, default `0.0.0.0`)
    pub host: String,

    /// Listen port (`PORT`, default `8080`)
    pub port: u16,

    /// Cross-origin policy (`CORS_ORIGIN`, default wildcard)
    pub cors: CorsPolicy,

    /// Deployment environment label, echoed verbatim by the health route
    /// (`NODE_ENV`, default `development`)
    pub environment: String,
}

/// Which origins receive the permissive cross-origin header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin is permitted (wildcard header)
    AllowAny,

    /// Only origins exactly matching a list entry are permitted
    AllowList(Vec<HeaderValue>),
}

impl CorsPolicy {
    /// Parse the raw `CORS_ORIGIN` value.
    ///
    /// `*` (or an empty value) means any origin. Anything else is a
    /// comma-separated allow-list; entries are trimmed and empty entries
    /// discarded. An entry that is not a valid header value is an error.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" {
            return Ok(Self::AllowAny);
        }

        let mut origins = Vec::new();
        for entry in raw.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let origin = HeaderValue::from_str(entry)
                .with_context(|| format!("invalid CORS_ORIGIN entry {entry:?}"))?;
            origins.push(origin);
        }

        Ok(Self::AllowList(origins))
    }
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        let cors = match env::var("CORS_ORIGIN") {
            Ok(raw) => CorsPolicy::parse(&raw)?,
            Err(_) => CorsPolicy::AllowAny,
        };

        let environment =
            env::var("NODE_ENV").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        Ok(Self {
            host,
            port,
            cors,
            environment,
        })
    }

    /// Address string the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse()
        .with_context(|| format!("invalid PORT value {raw:?}"))
}
