//! Remote store configuration
//!
//! Scripts and clients read two required values from the environment (a
//! `.env` file is honored by the binaries): the Supabase project URL and its
//! anon/public key. Missing values are fatal for the CLI.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::util::{is_http_url, normalize_text_option};

/// Supabase project URL
pub const SUPABASE_URL_ENV: &str = "SUPABASE_URL";
/// Supabase anon/public key
pub const SUPABASE_ANON_KEY_ENV: &str = "SUPABASE_ANON_KEY";
/// Optional per-request timeout in seconds
pub const HTTP_TIMEOUT_ENV: &str = "CIRCLE_HTTP_TIMEOUT_SECS";
/// Optional local database path override
pub const DB_PATH_ENV: &str = "CIRCLE_DB_PATH";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set. Add it to the environment or a .env file.")]
    Missing(&'static str),
    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Connection settings for the hosted data store
#[derive(Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Project base URL without trailing slash
    pub url: String,
    pub anon_key: String,
    pub timeout: Duration,
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RemoteConfig")
            .field("url", &self.url)
            .field("anon_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl RemoteConfig {
    /// Validate and build a configuration
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self, ConfigError> {
        let url = normalize_text_option(Some(url.into()))
            .ok_or(ConfigError::Missing(SUPABASE_URL_ENV))?;
        if !is_http_url(&url) {
            return Err(ConfigError::Invalid {
                var: SUPABASE_URL_ENV,
                reason: "must include http:// or https://".to_string(),
            });
        }
        let anon_key = normalize_text_option(Some(anon_key.into()))
            .ok_or(ConfigError::Missing(SUPABASE_ANON_KEY_ENV))?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        })
    }

    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = normalize_text_option(lookup(SUPABASE_URL_ENV))
            .ok_or(ConfigError::Missing(SUPABASE_URL_ENV))?;
        let anon_key = normalize_text_option(lookup(SUPABASE_ANON_KEY_ENV))
            .ok_or(ConfigError::Missing(SUPABASE_ANON_KEY_ENV))?;
        let mut config = Self::new(url, anon_key)?;

        if let Some(raw) = normalize_text_option(lookup(HTTP_TIMEOUT_ENV)) {
            let secs = raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                var: HTTP_TIMEOUT_ENV,
                reason: format!("expected whole seconds, got '{raw}'"),
            })?;
            config.timeout = Duration::from_secs(secs.max(1));
        }

        Ok(config)
    }
}
