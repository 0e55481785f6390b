// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Administrator endpoints under `/admin`.

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::services::blood_type_segment;
use blood_bank_domain::{
    BloodCompatibility, BloodRequest, BloodRequestDraft, BloodType, Disease, DonationRegistration,
    InventoryItem, InventoryUpdate, Location, LocationDraft, Schedule, ScheduleDraft, User,
    UserDraft,
};
use reqwest::Method;

/// `GET /admin/users/admins`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_admins(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.get("/admin/users/admins").await
}

/// `GET /admin/users/donors`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_donors(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.get("/admin/users/donors").await
}

/// `GET /admin/users/staff`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_staffs(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.get("/admin/users/staff").await
}

/// `GET /admin/users/medicalcenters`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_medical_centers(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.get("/admin/users/medicalcenters").await
}

/// `GET /admin/users/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_user_by_id(client: &ApiClient, id: i64) -> Result<User, ApiError> {
    client.get(&format!("/admin/users/{id}")).await
}

/// `GET /admin/users/medicalcenters/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_medical_center_by_id(client: &ApiClient, id: i64) -> Result<User, ApiError> {
    client.get(&format!("/admin/users/medicalcenters/{id}")).await
}

/// `GET /admin/users`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_all_users(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.get("/admin/users").await
}

/// `POST /admin/users`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_user(client: &ApiClient, user: &UserDraft) -> Result<User, ApiError> {
    client.post("/admin/users", user).await
}

/// `PUT /admin/users/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_user(client: &ApiClient, id: i64, user: &UserDraft) -> Result<User, ApiError> {
    client.put(&format!("/admin/users/{id}"), user).await
}

/// `DELETE /admin/users/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_user(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/admin/users/{id}")).await
}

/// `POST /admin/schedules`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_schedule(
    client: &ApiClient,
    schedule: &ScheduleDraft,
) -> Result<Schedule, ApiError> {
    client.post("/admin/schedules", schedule).await
}

/// `PUT /admin/schedules/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_schedule(
    client: &ApiClient,
    id: i64,
    schedule: &ScheduleDraft,
) -> Result<Schedule, ApiError> {
    client.put(&format!("/admin/schedules/{id}"), schedule).await
}

/// `DELETE /admin/schedules/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_schedule(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/admin/schedules/{id}")).await
}

/// `GET /admin/schedules`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_all_schedules(client: &ApiClient) -> Result<Vec<Schedule>, ApiError> {
    client.get("/admin/schedules").await
}

/// `POST /admin/locations`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_location(
    client: &ApiClient,
    location: &LocationDraft,
) -> Result<Location, ApiError> {
    client.post("/admin/locations", location).await
}

/// `GET /admin/locations`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_all_locations(client: &ApiClient) -> Result<Vec<Location>, ApiError> {
    client.get("/admin/locations").await
}

/// `PUT /admin/locations/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_location(
    client: &ApiClient,
    id: i64,
    location: &LocationDraft,
) -> Result<Location, ApiError> {
    client.put(&format!("/admin/locations/{id}"), location).await
}

/// `DELETE /admin/locations/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_location(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/admin/locations/{id}")).await
}

/// `POST /admin/medical-centers`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_medical_center(
    client: &ApiClient,
    center: &UserDraft,
) -> Result<User, ApiError> {
    client.post("/admin/medical-centers", center).await
}

/// `PUT /admin/medical-centers/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_medical_center(
    client: &ApiClient,
    id: i64,
    center: &UserDraft,
) -> Result<User, ApiError> {
    client.put(&format!("/admin/medical-centers/{id}"), center).await
}

/// `DELETE /admin/medical-centers/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_medical_center(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/admin/medical-centers/{id}")).await
}

/// `GET /admin/inventory`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_blood_inventory(client: &ApiClient) -> Result<Vec<InventoryItem>, ApiError> {
    client.get("/admin/inventory").await
}

/// `PUT /admin/inventory/{id}`. A negative `quantity` is sent as zero.
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
    client.put(&format!("/admin/inventory/{id}"), &update).await
}

/// `DELETE /admin/inventory/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_blood_inventory(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/admin/inventory/{id}")).await
}

/// `GET /admin/blood-requests`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_all_blood_requests(client: &ApiClient) -> Result<Vec<BloodRequest>, ApiError> {
    client.get("/admin/blood-requests").await
}

/// `POST /admin/blood-requests/{id}/confirm`, deducting stock on the server.
///
/// # Errors
///
/// Returns an error if the request fails or stock is insufficient.
pub async fn confirm_blood_request(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    client
        .action(Method::POST, &format!("/admin/blood-requests/{id}/confirm"), &[])
        .await
}

/// `PUT /admin/blood-requests/{id}`. A negative amount is sent as zero.
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
        .put(&format!("/admin/blood-requests/{id}"), &request.clamped())
        .await
}

/// `DELETE /admin/blood-requests/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_blood_request(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/admin/blood-requests/{id}")).await
}

/// `POST /admin/blood-requests/{id}/mark-priority`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn mark_priority(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    client
        .action(
            Method::POST,
            &format!("/admin/blood-requests/{id}/mark-priority"),
            &[],
        )
        .await
}

/// `POST /admin/blood-requests/{id}/mark-out-of-stock-admin`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn mark_out_of_stock(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    client
        .action(
            Method::POST,
            &format!("/admin/blood-requests/{id}/mark-out-of-stock-admin"),
            &[],
        )
        .await
}

/// `GET /admin/diseases`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_diseases(client: &ApiClient) -> Result<Vec<Disease>, ApiError> {
    client.get("/admin/diseases").await
}

/// `GET /admin/registrations/pending`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_pending_registrations(
    client: &ApiClient,
) -> Result<Vec<DonationRegistration>, ApiError> {
    client.get("/admin/registrations/pending").await
}

/// `POST /admin/registrations/{id}/confirm?adminId=`, adding the donation
/// to inventory on the server.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn confirm_registration(
    client: &ApiClient,
    id: i64,
    admin_id: i64,
) -> Result<String, ApiError> {
    client
        .action(
            Method::POST,
            &format!("/admin/registrations/{id}/confirm"),
            &[("adminId", admin_id.to_string())],
        )
        .await
}

/// `POST /admin/registrations/{id}/cancel`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn cancel_registration(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    client
        .action(
            Method::POST,
            &format!("/admin/registrations/{id}/cancel"),
            &[],
        )
        .await
}

/// `GET /admin/blood-compatibility/{bloodType}?requestedAmount=`.
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
                "/admin/blood-compatibility/{}",
                blood_type_segment(blood_type)
            ),
            &[("requestedAmount", requested_amount.max(1).to_string())],
        )
        .await
}

/// `POST /admin/blood-requests/{id}/confirm-with-compatibility`, optionally
/// serving the request from a compatible `alternative` blood type.
///
/// # Errors
///
/// Returns an error if the request fails or the alternative is incompatible.
pub async fn confirm_with_compatibility(
    client: &ApiClient,
    id: i64,
    alternative: Option<BloodType>,
) -> Result<String, ApiError> {
    let query: Vec<(&str, String)> = alternative
        .map(|blood_type| ("alternativeBloodType", blood_type.as_str().to_string()))
        .into_iter()
        .collect();
    client
        .action(
            Method::POST,
            &format!("/admin/blood-requests/{id}/confirm-with-compatibility"),
            &query,
        )
        .await
}

/// `GET /admin/donors/by-schedule/{scheduleId}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn donors_by_schedule(client: &ApiClient, schedule_id: i64) -> Result<Vec<User>, ApiError> {
    client
        .get(&format!("/admin/donors/by-schedule/{schedule_id}"))
        .await
}
