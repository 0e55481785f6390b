// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::http::ApiClient;
use blood_bank_domain::{AuthResponse, Credentials, SignUp, User};
use reqwest::Method;
use serde_json::Value;

/// A freshly created account.
///
/// Some deployments log the new user in immediately and return a token;
/// others only return the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    /// The new user.
    pub user: User,
    /// The bearer token, when the server issued one.
    pub token: Option<String>,
}

/// `POST /auth/register`.
///
/// # Errors
///
/// Returns an error if the request fails or the response holds no user.
pub async fn register(client: &ApiClient, sign_up: &SignUp) -> Result<Registered, ApiError> {
    let payload: Value = client.post("/auth/register", sign_up).await?;
    let (user, token) = split_auth_payload(payload)?;
    Ok(Registered { user, token })
}

/// `POST /auth/login`.
///
/// # Errors
///
/// Returns an error if the request fails, the credentials are rejected,
/// or the response holds no user or no token.
pub async fn login(client: &ApiClient, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
    let payload: Value = client.post("/auth/login", credentials).await?;
    let (user, token) = split_auth_payload(payload)?;
    let token: String =
        token.ok_or_else(|| ApiError::Decode(String::from("login response carried no token")))?;
    Ok(AuthResponse { user, token })
}

/// `POST /auth/logout`, returning the server's confirmation message.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn logout(client: &ApiClient) -> Result<String, ApiError> {
    client.action(Method::POST, "/auth/logout", &[]).await
}

/// Extracts the user and optional token from an authentication payload.
///
/// Accepted shapes: `{ "user": {...}, "token": "..." }`, a bare user object
/// with an optional `token` field, and either of those with the user
/// wrapped in a one-element array. `accessToken` is accepted for `token`.
pub(crate) fn split_auth_payload(payload: Value) -> Result<(User, Option<String>), ApiError> {
    let token_of = |value: &Value| -> Option<String> {
        value
            .get("token")
            .or_else(|| value.get("accessToken"))
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .map(String::from)
    };

    let (user_value, token): (Value, Option<String>) = match payload {
        Value::Object(ref fields) if fields.contains_key("user") => {
            let token: Option<String> = token_of(&payload);
            let user_value: Value = fields.get("user").cloned().unwrap_or(Value::Null);
            let user_value: Value = first_if_array(user_value);
            let token: Option<String> = token.or_else(|| token_of(&user_value));
            (user_value, token)
        }
        other => {
            let user_value: Value = first_if_array(other);
            let token: Option<String> = token_of(&user_value);
            (user_value, token)
        }
    };

    let user: User = serde_json::from_value(user_value)
        .map_err(|e| ApiError::Decode(format!("authentication response has no user: {e}")))?;
    Ok((user, token))
}

fn first_if_array(value: Value) -> Value {
    match value {
        Value::Array(items) => items.into_iter().next().unwrap_or(Value::Null),
        other => other,
    }
}
