// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff endpoints under `/staff`.

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::services::blood_type_segment;
use blood_bank_domain::{
    BloodCompatibility, BloodRequest, BloodType, Disease, DonationRegistration, InventoryItem,
    InventoryUpdate, Location, LocationDraft, Schedule, ScheduleDraft, User, UserDraft,
};
use reqwest::Method;

/// `GET /staff/locations`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_all_locations(client: &ApiClient) -> Result<Vec<Location>, ApiError> {
    client.get("/staff/locations").await
}

/// `POST /staff/locations`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_location(
    client: &ApiClient,
    location: &LocationDraft,
) -> Result<Location, ApiError> {
    client.post("/staff/locations", location).await
}

/// `PUT /staff/locations/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_location(
    client: &ApiClient,
    id: i64,
    location: &LocationDraft,
) -> Result<Location, ApiError> {
    client.put(&format!("/staff/locations/{id}"), location).await
}

/// `GET /staff/schedules`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_all_schedules(client: &ApiClient) -> Result<Vec<Schedule>, ApiError> {
    client.get("/staff/schedules").await
}

/// `POST /staff/schedules`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_schedule(
    client: &ApiClient,
    schedule: &ScheduleDraft,
) -> Result<Schedule, ApiError> {
    client.post("/staff/schedules", schedule).await
}

/// `PUT /staff/schedules/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_schedule(
    client: &ApiClient,
    id: i64,
    schedule: &ScheduleDraft,
) -> Result<Schedule, ApiError> {
    client.put(&format!("/staff/schedules/{id}"), schedule).await
}

/// `DELETE /staff/schedules/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_schedule(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/staff/schedules/{id}")).await
}

/// `GET /staff/registrations/pending`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_pending_registrations(
    client: &ApiClient,
) -> Result<Vec<DonationRegistration>, ApiError> {
    client.get("/staff/registrations/pending").await
}

/// `POST /staff/registrations/{id}/confirm?staffId=`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn confirm_registration(
    client: &ApiClient,
    id: i64,
    staff_id: i64,
) -> Result<String, ApiError> {
    client
        .action(
            Method::POST,
            &format!("/staff/registrations/{id}/confirm"),
            &[("staffId", staff_id.to_string())],
        )
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

/// `GET /staff/inventory`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_blood_inventory(client: &ApiClient) -> Result<Vec<InventoryItem>, ApiError> {
    client.get("/staff/inventory").await
}

/// `PUT /staff/inventory/{id}`. A negative `quantity` is sent as zero.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_blood_inventory(
    client: &ApiClient,
    id: i64,
    blood_type: BloodType,
    quantity: i64,
) -> Result<InventoryItem, ApiError> {
    let update: InventoryUpdate = InventoryUpdate::new(blood_type, quantity);
    client.put(&format!("/staff/inventory/{id}"), &update).await
}

/// `GET /staff/users/donors`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_all_donors(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.get("/staff/users/donors").await
}

/// `GET /staff/users/donors/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_donor_by_id(client: &ApiClient, id: i64) -> Result<User, ApiError> {
    client.get(&format!("/staff/users/donors/{id}")).await
}

/// `POST /staff/users/donors`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_donor(client: &ApiClient, donor: &UserDraft) -> Result<User, ApiError> {
    client.post("/staff/users/donors", donor).await
}

/// `PUT /staff/users/donors/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_donor(
    client: &ApiClient,
    id: i64,
    donor: &UserDraft,
) -> Result<User, ApiError> {
    client.put(&format!("/staff/users/donors/{id}"), donor).await
}

/// `DELETE /staff/users/donors/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_donor(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/staff/users/donors/{id}")).await
}

/// `GET /staff/users/medicalcenters`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_all_medical_centers(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.get("/staff/users/medicalcenters").await
}

/// `GET /staff/users/medicalcenters/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_medical_center_by_id(client: &ApiClient, id: i64) -> Result<User, ApiError> {
    client.get(&format!("/staff/users/medicalcenters/{id}")).await
}

/// `GET /staff/blood-requests`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_all_blood_requests(client: &ApiClient) -> Result<Vec<BloodRequest>, ApiError> {
    client.get("/staff/blood-requests").await
}

async fn request_action(client: &ApiClient, id: i64, action: &str) -> Result<String, ApiError> {
    client
        .action(
            Method::POST,
            &format!("/staff/blood-requests/{id}/{action}"),
            &[],
        )
        .await
}

/// `POST /staff/blood-requests/{id}/confirm`.
///
/// # Errors
///
/// Returns an error if the request fails or stock is insufficient.
pub async fn confirm_blood_request(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    request_action(client, id, "confirm").await
}

/// `POST /staff/blood-requests/{id}/mark-priority`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn mark_priority(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    request_action(client, id, "mark-priority").await
}

/// `POST /staff/blood-requests/{id}/mark-out-of-stock`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn mark_out_of_stock(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    request_action(client, id, "mark-out-of-stock").await
}

/// `GET /staff/blood-compatibility/{bloodType}?requestedAmount=`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn blood_compatibility(
    client: &ApiClient,
    blood_type: BloodType,
    requested_amount: i64,
) -> Result<BloodCompatibility, ApiError> {
    client
        .get_with_query(
            &format!(
                "/staff/blood-compatibility/{}",
                blood_type_segment(blood_type)
            ),
            &[("requestedAmount", requested_amount.max(1).to_string())],
        )
        .await
}

/// `GET /staff/donors/by-schedule/{scheduleId}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn donors_by_schedule(client: &ApiClient, schedule_id: i64) -> Result<Vec<User>, ApiError> {
    client
        .get(&format!("/staff/donors/by-schedule/{schedule_id}"))
        .await
}

/// `GET /staff/diseases`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_diseases(client: &ApiClient) -> Result<Vec<Disease>, ApiError> {
    client.get("/staff/diseases").await
}
