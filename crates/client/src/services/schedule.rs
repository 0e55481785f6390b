// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Donation schedule browsing and sign-up.

use crate::error::ApiError;
use crate::http::ApiClient;
use blood_bank_domain::{DonationRegistration, Location, Schedule, ScheduleSignUp};
use reqwest::Method;
use time::Date;

/// `GET /staff/schedules`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_all_schedules(client: &ApiClient) -> Result<Vec<Schedule>, ApiError> {
    client.get("/staff/schedules").await
}

/// `GET /staff/schedules?startDate=&endDate=`, both bounds inclusive.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_schedules_by_date_range(
    client: &ApiClient,
    start: Date,
    end: Date,
) -> Result<Vec<Schedule>, ApiError> {
    client
        .get_with_query(
            "/staff/schedules",
            &[("startDate", start.to_string()), ("endDate", end.to_string())],
        )
        .await
}

/// `GET /staff/schedules/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_schedule_by_id(client: &ApiClient, id: i64) -> Result<Schedule, ApiError> {
    client.get(&format!("/staff/schedules/{id}")).await
}

/// `GET /staff/locations`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_all_locations(client: &ApiClient) -> Result<Vec<Location>, ApiError> {
    client.get("/staff/locations").await
}

/// `GET /staff/locations/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_location_by_id(client: &ApiClient, id: i64) -> Result<Location, ApiError> {
    client.get(&format!("/staff/locations/{id}")).await
}

/// `POST /staff/registrations`.
///
/// # Errors
///
/// Returns an error if the request fails or the schedule is full.
pub async fn register_for_schedule(
    client: &ApiClient,
    sign_up: &ScheduleSignUp,
) -> Result<DonationRegistration, ApiError> {
    client.post("/staff/registrations", sign_up).await
}

/// `GET /staff/registrations/user/{userId}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_my_registrations(
    client: &ApiClient,
    user_id: i64,
) -> Result<Vec<DonationRegistration>, ApiError> {
    client
        .get(&format!("/staff/registrations/user/{user_id}"))
        .await
}

/// `POST /staff/registrations/{id}/cancel`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn cancel_registration(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    client
        .action(
            Method::POST,
            &format!("/staff/registrations/{id}/cancel"),
            &[],
        )
        .await
}
