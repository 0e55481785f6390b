// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Medical center endpoints under `/medicalcenter`.
//!
//! Listings are scoped to one medical center by its user id. Creation
//! passes the same id as a query parameter so the server can attach the
//! new record to its owner.

use crate::error::ApiError;
use crate::http::ApiClient;
use blood_bank_domain::{BloodRequest, BloodRequestDraft, Receiver, ReceiverDraft, User};
use reqwest::Method;
use serde_json::Value;

const CENTER_ID_PARAM: &str = "medicalCenterId";

/// `GET /medicalcenter/recipients?medicalCenterId=`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_all_receivers(
    client: &ApiClient,
    medical_center_id: i64,
) -> Result<Vec<Receiver>, ApiError> {
    client
        .get_with_query(
            "/medicalcenter/recipients",
            &[(CENTER_ID_PARAM, medical_center_id.to_string())],
        )
        .await
}

/// `GET /medicalcenter/recipients/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_receiver_by_id(client: &ApiClient, id: i64) -> Result<Receiver, ApiError> {
    client.get(&format!("/medicalcenter/recipients/{id}")).await
}

/// `POST /medicalcenter/recipients?medicalCenterId=`. Negative measurements
/// are sent as zero.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_receiver(
    client: &ApiClient,
    medical_center_id: i64,
    receiver: ReceiverDraft,
) -> Result<Receiver, ApiError> {
    client
        .request(
            Method::POST,
            "/medicalcenter/recipients",
            &[(CENTER_ID_PARAM, medical_center_id.to_string())],
            Some(&receiver.clamped()),
        )
        .await
}

/// `PUT /medicalcenter/recipients/{id}`. Negative measurements are sent as zero.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_receiver(
    client: &ApiClient,
    id: i64,
    receiver: ReceiverDraft,
) -> Result<Receiver, ApiError> {
    client
        .put(&format!("/medicalcenter/recipients/{id}"), &receiver.clamped())
        .await
}

/// `DELETE /medicalcenter/recipients/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_receiver(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/medicalcenter/recipients/{id}")).await
}

/// `GET /medicalcenter/blood-requests?medicalCenterId=`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_all_blood_requests(
    client: &ApiClient,
    medical_center_id: i64,
) -> Result<Vec<BloodRequest>, ApiError> {
    client
        .get_with_query(
            "/medicalcenter/blood-requests",
            &[(CENTER_ID_PARAM, medical_center_id.to_string())],
        )
        .await
}

/// `GET /medicalcenter/blood-requests/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_blood_request_by_id(
    client: &ApiClient,
    id: i64,
) -> Result<BloodRequest, ApiError> {
    client
        .get(&format!("/medicalcenter/blood-requests/{id}"))
        .await
}

/// `POST /medicalcenter/blood-requests?medicalCenterId=`. A negative amount
/// is sent as zero.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_blood_request(
    client: &ApiClient,
    medical_center_id: i64,
    request: BloodRequestDraft,
) -> Result<BloodRequest, ApiError> {
    client
        .request(
            Method::POST,
            "/medicalcenter/blood-requests",
            &[(CENTER_ID_PARAM, medical_center_id.to_string())],
            Some(&request.clamped()),
        )
        .await
}

/// `PUT /medicalcenter/blood-requests/{id}`. A negative amount is sent as zero.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_blood_request(
    client: &ApiClient,
    id: i64,
    request: BloodRequestDraft,
) -> Result<BloodRequest, ApiError> {
    client
        .put(
            &format!("/medicalcenter/blood-requests/{id}"),
            &request.clamped(),
        )
        .await
}

/// `DELETE /medicalcenter/blood-requests/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_blood_request(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client
        .delete(&format!("/medicalcenter/blood-requests/{id}"))
        .await
}

/// `GET /medicalcenter/dashboard/stats`.
///
/// The payload shape is server-defined and returned as-is.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_dashboard_stats(client: &ApiClient) -> Result<Value, ApiError> {
    client.get("/medicalcenter/dashboard/stats").await
}

/// `GET /medicalcenter/dashboard/recent-requests`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_recent_requests(client: &ApiClient) -> Result<Vec<BloodRequest>, ApiError> {
    client.get("/medicalcenter/dashboard/recent-requests").await
}

/// `GET /medicalcenter/dashboard/recent-donors`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_recent_donors(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.get("/medicalcenter/dashboard/recent-donors").await
}
