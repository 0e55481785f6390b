// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BloodCompatibility, BloodRequest, BloodRequestDraft, BloodType, DonationRegistration, Location,
    RegistrationStatus, RequestStatus, Role, Schedule, UrgencyLevel, User,
};

#[test]
fn test_user_deserializes_with_missing_optionals() {
    let user: User =
        serde_json::from_str(r#"{"id": 3, "fullName": "Ann", "email": "ann@x.org", "role": "DONOR"}"#)
            .unwrap();
    assert_eq!(user.role, Role::Donor);
    assert_eq!(user.blood_type, None);
    assert_eq!(user.phone, None);
}

#[test]
fn test_user_tolerates_unknown_blood_type() {
    let user: User = serde_json::from_str(
        r#"{"id": 3, "fullName": "Ann", "email": "a@x", "role": "DONOR", "bloodType": "?"}"#,
    )
    .unwrap();
    assert_eq!(user.blood_type, None);
}

#[test]
fn test_user_rejects_unknown_role() {
    let result: Result<User, serde_json::Error> =
        serde_json::from_str(r#"{"id": 3, "role": "GUEST"}"#);
    assert!(result.is_err());
}

#[test]
fn test_blood_request_reads_canonical_fields() {
    let request: BloodRequest = serde_json::from_str(
        r#"{
            "id": 11,
            "recipientName": "Bo",
            "recipientBloodType": "O-",
            "requestedAmount": 4,
            "status": "PRIORITY",
            "urgencyLevel": "HIGH",
            "requestDate": "2026-02-01"
        }"#,
    )
    .unwrap();
    assert_eq!(request.recipient_name, "Bo");
    assert_eq!(request.recipient_blood_type, Some(BloodType::ONegative));
    assert_eq!(request.requested_amount, 4);
    assert_eq!(request.status, RequestStatus::Priority);
    assert_eq!(request.urgency_level, Some(UrgencyLevel::High));
    assert_eq!(request.request_date.as_deref(), Some("2026-02-01"));
}

#[test]
fn test_blood_request_accepts_deprecated_aliases() {
    let request: BloodRequest = serde_json::from_str(
        r#"{"id": 12, "patient": "Cy", "bloodType": "B+", "units": 2, "date": "2026-01-05"}"#,
    )
    .unwrap();
    assert_eq!(request.recipient_name, "Cy");
    assert_eq!(request.recipient_blood_type, Some(BloodType::BPositive));
    assert_eq!(request.requested_amount, 2);
    assert_eq!(request.request_date.as_deref(), Some("2026-01-05"));
    assert_eq!(request.status, RequestStatus::Pending);
}

#[test]
fn test_blood_request_serializes_canonical_names_only() {
    let request: BloodRequest =
        serde_json::from_str(r#"{"id": 12, "patient": "Cy", "units": 2}"#).unwrap();
    let json: serde_json::Value = serde_json::to_value(&request).unwrap();
    assert_eq!(json["recipientName"], "Cy");
    assert_eq!(json["requestedAmount"], 2);
    assert!(json.get("patient").is_none());
    assert!(json.get("units").is_none());
}

#[test]
fn test_blood_request_draft_wire_shape() {
    let draft: BloodRequestDraft = BloodRequestDraft {
        recipient_name: String::from("Dee"),
        recipient_blood_type: BloodType::AbPositive,
        requested_amount: 3,
        urgency_level: Some(UrgencyLevel::Critical),
        status: None,
    };
    let json: serde_json::Value = serde_json::to_value(&draft).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "recipientName": "Dee",
            "recipientBloodType": "AB+",
            "requestedAmount": 3,
            "urgencyLevel": "CRITICAL"
        })
    );
}

#[test]
fn test_schedule_defaults_registration_count() {
    let schedule: Schedule = serde_json::from_str(
        r#"{"id": 1, "date": "2026-04-02", "time": "09:00", "location": {"id": 2, "name": "Hall", "address": "1 Main"}}"#,
    )
    .unwrap();
    assert_eq!(schedule.registration_count, 0);
    assert_eq!(schedule.location.unwrap().name, "Hall");
}

#[test]
fn test_donation_registration_reads_nested_records() {
    let registration: DonationRegistration = serde_json::from_str(
        r#"{
            "id": 5,
            "bloodType": "A-",
            "weight": 70.5,
            "height": 180.0,
            "bmi": 21.8,
            "amount": 450,
            "status": "CONFIRMED",
            "user": {"id": 9, "fullName": "Eve", "email": "e@x", "role": "DONOR"},
            "diseases": [{"id": 1, "name": "Hepatitis"}]
        }"#,
    )
    .unwrap();
    assert_eq!(registration.status, RegistrationStatus::Confirmed);
    assert_eq!(registration.user.unwrap().id, 9);
    assert_eq!(registration.diseases.len(), 1);
    assert_eq!(registration.amount, Some(450));
}

#[test]
fn test_blood_compatibility_reads_type_keyed_map() {
    let compatibility: BloodCompatibility = serde_json::from_str(
        r#"{
            "requestedBloodType": "A+",
            "isAvailable": false,
            "availableQuantity": 0,
            "allCompatibleTypes": ["A+", "A-", "O+", "O-"],
            "availableCompatibleTypes": {"O-": 4, "A-": 2},
            "message": "Compatible stock available"
        }"#,
    )
    .unwrap();
    assert!(!compatibility.is_available);
    assert_eq!(compatibility.all_compatible_types.len(), 4);
    assert_eq!(
        compatibility
            .available_compatible_types
            .get(&BloodType::ONegative),
        Some(&4)
    );
}

#[test]
fn test_blood_request_list_tolerates_null_fields() {
    let requests: Vec<BloodRequest> = serde_json::from_str(
        r#"[
            {"id": 1, "recipientName": "Ann", "requestedAmount": 2, "status": "PENDING"},
            {"id": 2, "recipientName": null, "requestedAmount": null, "status": null}
        ]"#,
    )
    .unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].recipient_name, "");
    assert_eq!(requests[1].requested_amount, 0);
    assert_eq!(requests[1].status, RequestStatus::default());
}

#[test]
fn test_user_tolerates_null_name_and_email() {
    let user: User = serde_json::from_str(
        r#"{"id": 4, "fullName": null, "email": null, "role": "STAFF", "phone": null}"#,
    )
    .unwrap();
    assert_eq!(user.full_name, "");
    assert_eq!(user.email, "");
    assert_eq!(user.role, Role::Staff);
}

#[test]
fn test_location_and_schedule_tolerate_null_fields() {
    let location: Location =
        serde_json::from_str(r#"{"id": 5, "name": null, "address": null}"#).unwrap();
    assert_eq!(location.name, "");
    assert_eq!(location.address, "");

    let schedule: Schedule = serde_json::from_str(
        r#"{"id": 6, "date": null, "time": null, "location": null, "registrationCount": null}"#,
    )
    .unwrap();
    assert_eq!(schedule.date, "");
    assert_eq!(schedule.time, "");
    assert_eq!(schedule.location, None);
    assert_eq!(schedule.registration_count, 0);
}
