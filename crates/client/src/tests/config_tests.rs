// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BASE_URL_ENV, ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, TIMEOUT_ENV,
};
use std::collections::HashMap;
use std::time::Duration;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| values.get(key).cloned()
}

#[test]
fn test_defaults_when_nothing_is_set() {
    let config: ClientConfig = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    assert_eq!(config.timeout(), Duration::from_millis(DEFAULT_TIMEOUT_MS));
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config: ClientConfig =
        ClientConfig::from_lookup(lookup_from(&[(BASE_URL_ENV, "  "), (TIMEOUT_ENV, "")])).unwrap();
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
}

#[test]
fn test_overrides_are_applied_and_trailing_slash_dropped() {
    let config: ClientConfig = ClientConfig::from_lookup(lookup_from(&[
        (BASE_URL_ENV, "https://bank.example.org/api/"),
        (TIMEOUT_ENV, "2500"),
    ]))
    .unwrap();
    assert_eq!(config.base_url(), "https://bank.example.org/api");
    assert_eq!(config.timeout(), Duration::from_millis(2500));
}

#[test]
fn test_non_numeric_timeout_is_rejected() {
    let result: Result<ClientConfig, ConfigError> =
        ClientConfig::from_lookup(lookup_from(&[(TIMEOUT_ENV, "soon")]));
    assert_eq!(
        result,
        Err(ConfigError::InvalidTimeout {
            value: String::from("soon")
        })
    );
}

#[test]
fn test_zero_timeout_is_rejected() {
    let result: Result<ClientConfig, ConfigError> =
        ClientConfig::from_lookup(lookup_from(&[(TIMEOUT_ENV, "0")]));
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_non_http_base_url_is_rejected() {
    let result: Result<ClientConfig, ConfigError> =
        ClientConfig::new("ftp://bank.example.org", Duration::from_secs(1));
    assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));

    let result: Result<ClientConfig, ConfigError> =
        ClientConfig::new("not a url", Duration::from_secs(1));
    assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
}
