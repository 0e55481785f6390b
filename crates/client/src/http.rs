// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The single HTTP entry point for every service call.
//!
//! The wrapper attaches the stored bearer token, turns responses into the
//! [`ApiError`] taxonomy, and handles 401 answers globally: stored
//! credentials are cleared and a [`SessionEvent::Invalidated`] is emitted
//! before the caller sees [`ApiError::Unauthorized`].

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::events::{SessionEvent, SessionEvents};
use crate::storage::{ClientStorage, TOKEN_KEY, clear_session};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Builds the `Authorization` header value for a stored token.
///
/// Returns `None` when there is no token or the token is empty.
#[must_use]
pub fn authorization_header(token: Option<&str>) -> Option<String> {
    token
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {token}"))
}

/// HTTP client for the blood bank API.
///
/// Cloning is cheap and shares the connection pool, storage and event channel.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    storage: Arc<dyn ClientStorage>,
    events: SessionEvents,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL and timeout
    /// * `storage` - Where the bearer token is read from
    /// * `events` - Channel receiving session-invalidated events
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if the HTTP client cannot be built.
    pub fn new(
        config: &ClientConfig,
        storage: Arc<dyn ClientStorage>,
        events: SessionEvents,
    ) -> Result<Self, ApiError> {
        let http: reqwest::Client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::InvalidRequest(format!("could not build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            storage,
            events,
        })
    }

    /// The storage this client reads its token from.
    #[must_use]
    pub fn storage(&self) -> &Arc<dyn ClientStorage> {
        &self.storage
    }

    /// The event channel this client reports invalidated sessions on.
    #[must_use]
    pub const fn events(&self) -> &SessionEvents {
        &self.events
    }

    /// Sends a request and decodes the JSON response into `T`.
    ///
    /// An empty success body decodes as JSON `null`; a body that is not
    /// JSON decodes as a JSON string.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - Endpoint path relative to the base URL, starting with `/`
    /// * `query` - Query parameters
    /// * `body` - Optional JSON body
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] matching the failure.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let text: String = self.send(method, path, query, body).await?;
        decode(&text)
    }

    /// `GET path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<T, Value>(Method::GET, path, &[], None).await
    }

    /// `GET path?query`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request::<T, Value>(Method::GET, path, query, None).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    /// `DELETE path`, ignoring any response body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send::<Value>(Method::DELETE, path, &[], None)
            .await
            .map(|_| ())
    }

    /// Sends a body-less action (e.g. `POST /confirm`) and returns the
    /// server's confirmation message.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn action(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<String, ApiError> {
        let value: Value = self.request::<Value, Value>(method, path, query, None).await?;
        Ok(match value {
            Value::String(message) => message,
            Value::Null => String::new(),
            other => other.to_string(),
        })
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<String, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url: String = format!("{}{}", self.base_url, path);
        let token: Option<String> = self.storage.get(TOKEN_KEY)?;
        let header: Option<String> = authorization_header(token.as_deref());

        debug!(
            method = %method,
            path,
            authenticated = header.is_some(),
            "Sending API request"
        );

        let mut builder: reqwest::RequestBuilder = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response: reqwest::Response = builder.send().await.map_err(|e| {
            error!(method = %method, path, error = %e, "API request failed");
            if e.is_builder() {
                ApiError::InvalidRequest(e.to_string())
            } else {
                ApiError::Network(e.to_string())
            }
        })?;

        let status: StatusCode = response.status();
        debug!(method = %method, path, status = status.as_u16(), "Received API response");

        if status == StatusCode::UNAUTHORIZED {
            self.invalidate(path);
            return Err(ApiError::Unauthorized);
        }

        let text: String = response.text().await.map_err(|e| {
            error!(method = %method, path, error = %e, "Failed to read API response");
            ApiError::Network(e.to_string())
        })?;

        if status.is_server_error() {
            warn!(method = %method, path, status = status.as_u16(), "API server error");
            return Err(ApiError::Server {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(rejection(status, &text));
        }

        Ok(text)
    }

    fn invalidate(&self, path: &str) {
        warn!(path, "Session rejected by server, clearing stored credentials");
        if let Err(e) = clear_session(self.storage.as_ref()) {
            error!(path, error = %e, "Failed to clear stored credentials");
        }
        self.events.emit(SessionEvent::Invalidated {
            path: path.to_string(),
        });
    }
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_value(parse_body(text)).map_err(|e| ApiError::Decode(e.to_string()))
}

fn rejection(status: StatusCode, text: &str) -> ApiError {
    let payload: Value = parse_body(text);
    let message: String = match &payload {
        Value::Object(fields) => fields
            .get("message")
            .or_else(|| fields.get("error"))
            .and_then(Value::as_str)
            .map_or_else(|| text.to_string(), String::from),
        Value::String(message) => message.clone(),
        Value::Null => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
        _ => text.to_string(),
    };

    ApiError::Rejected {
        status: status.as_u16(),
        message,
        payload,
    }
}
