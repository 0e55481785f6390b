// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Request timeout used when none is configured, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "BLOOD_BANK_API_URL";

/// Environment variable overriding the timeout in milliseconds.
pub const TIMEOUT_ENV: &str = "BLOOD_BANK_API_TIMEOUT_MS";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL is not an absolute http(s) URL.
    #[error("invalid API base URL '{value}': {reason}")]
    InvalidBaseUrl {
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The timeout is not a positive number of milliseconds.
    #[error("invalid API timeout '{value}': expected a positive number of milliseconds")]
    InvalidTimeout {
        /// The rejected value.
        value: String,
    },
}

/// Where the API lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Validates and builds a configuration.
    ///
    /// Trailing slashes on the base URL are dropped so that endpoint paths
    /// (which start with `/`) can be appended directly.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http or https URL
    /// or the timeout is zero.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let url: Url = Url::parse(base_url.trim()).map_err(|e| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                value: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                value: String::from("0"),
            });
        }

        Ok(Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults
    /// for unset or blank variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url: String = present(BASE_URL_ENV).unwrap_or_else(|| String::from(DEFAULT_BASE_URL));
        let timeout_ms: u64 = match present(TIMEOUT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ConfigError::InvalidTimeout { value: raw })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        Self::new(&base_url, Duration::from_millis(timeout_ms))
    }

    /// The base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}
