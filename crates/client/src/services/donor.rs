// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Donor self-service endpoints under `/donor`.

use crate::error::ApiError;
use crate::http::ApiClient;
use blood_bank_domain::{
    Disease, DonationApplication, DonationRegistration, Location, PasswordChange, ProfileUpdate,
    User,
};
use reqwest::Method;
use serde_json::Value;

/// `POST /donor/register?userId=`. Negative measurements are sent as zero.
///
/// # Errors
///
/// Returns an error if the request fails or the donor is not eligible.
pub async fn register_donation(
    client: &ApiClient,
    user_id: i64,
    application: DonationApplication,
) -> Result<DonationRegistration, ApiError> {
    client
        .request(
            Method::POST,
            "/donor/register",
            &[("userId", user_id.to_string())],
            Some(&application.clamped()),
        )
        .await
}

/// `GET /donor/history?userId=`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_donation_history(
    client: &ApiClient,
    user_id: i64,
) -> Result<Vec<DonationRegistration>, ApiError> {
    client
        .get_with_query("/donor/history", &[("userId", user_id.to_string())])
        .await
}

/// `GET /donor/profile?email=`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_profile(client: &ApiClient, email: &str) -> Result<User, ApiError> {
    client
        .get_with_query("/donor/profile", &[("email", email.to_string())])
        .await
}

/// `PUT /donor/profile`, returning the updated user.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_profile(client: &ApiClient, profile: &ProfileUpdate) -> Result<User, ApiError> {
    client.put("/donor/profile", profile).await
}

/// `PUT /donor/password`, returning the server's confirmation message.
///
/// # Errors
///
/// Returns an error if the request fails or the current password is wrong.
pub async fn update_password(
    client: &ApiClient,
    change: &PasswordChange,
) -> Result<String, ApiError> {
    let value: Value = client.put("/donor/password", change).await?;
    Ok(match value {
        Value::String(message) => message,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// `GET /donor/locations`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_locations(client: &ApiClient) -> Result<Vec<Location>, ApiError> {
    client.get("/donor/locations").await
}

/// `GET /donor/diseases`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_diseases(client: &ApiClient) -> Result<Vec<Disease>, ApiError> {
    client.get("/donor/diseases").await
}
