// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Server-owned records as the client sees them, plus the request bodies
//! the client sends.
//!
//! Every record here is a transient copy of server state. Optional fields
//! default instead of failing so a partially populated payload still renders.

use crate::types::{BloodType, RegistrationStatus, RequestStatus, Role, UrgencyLevel, lenient};
use serde::{Deserialize, Serialize};

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier.
    pub id: i64,
    /// Display name.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub full_name: String,
    /// Login email.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub email: String,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Account role.
    pub role: Role,
    /// Blood type, when known.
    #[serde(
        default,
        deserialize_with = "lenient::blood_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub blood_type: Option<BloodType>,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Date of birth (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    /// Gender as recorded by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// The user and bearer token returned by a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated user.
    pub user: User,
    /// Opaque bearer token.
    pub token: String,
}

/// Login credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Login email.
    pub email: String,
    /// Plain-text password, sent only over the login call.
    pub password: String,
}

/// Self-service account registration body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUp {
    /// Display name.
    pub full_name: String,
    /// Login email.
    pub email: String,
    /// Password.
    pub password: String,
    /// Contact phone number.
    pub phone: String,
    /// Date of birth (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Gender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Body for creating or updating a user from the administration pages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Login email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Password (only sent when set).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Account role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Blood type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<BloodType>,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Date of birth (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    /// Gender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Body for a donor editing their own profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// Email identifying the profile being edited.
    pub email: String,
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// New phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// New date of birth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    /// New blood type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<BloodType>,
}

/// Body for a password change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    /// Email identifying the account.
    pub email: String,
    /// The current password.
    pub current_password: String,
    /// The replacement password.
    pub new_password: String,
}

/// A blood request filed by a medical center.
///
/// The canonical field names are `recipientName`, `recipientBloodType`,
/// `requestedAmount` and `requestDate`. The older `patient`, `bloodType`,
/// `units` and `date` names are still accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequest {
    /// Server-assigned identifier.
    pub id: i64,
    /// Name of the patient receiving blood.
    #[serde(default, deserialize_with = "lenient::or_default", alias = "patient")]
    pub recipient_name: String,
    /// Blood type the patient needs.
    #[serde(
        default,
        alias = "bloodType",
        deserialize_with = "lenient::blood_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub recipient_blood_type: Option<BloodType>,
    /// Units requested.
    #[serde(default, deserialize_with = "lenient::or_default", alias = "units")]
    pub requested_amount: u32,
    /// Current processing status.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: RequestStatus,
    /// Severity classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_level: Option<UrgencyLevel>,
    /// Date the request was filed (ISO 8601).
    #[serde(default, alias = "date", skip_serializing_if = "Option::is_none")]
    pub request_date: Option<String>,
    /// The medical center that filed the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_center: Option<User>,
}

/// Body for creating or editing a blood request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequestDraft {
    /// Name of the patient receiving blood.
    pub recipient_name: String,
    /// Blood type the patient needs.
    pub recipient_blood_type: BloodType,
    /// Units requested; never negative once sent.
    pub requested_amount: i64,
    /// Severity classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_level: Option<UrgencyLevel>,
    /// Status override (administrators only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
}

impl BloodRequestDraft {
    /// Floors the requested amount at zero.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.requested_amount = self.requested_amount.max(0);
        self
    }
}

/// A physical donation site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Server-assigned identifier.
    pub id: i64,
    /// Site name.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    /// Street address.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub address: String,
}

/// Body for creating or editing a donation site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDraft {
    /// Site name.
    pub name: String,
    /// Street address.
    pub address: String,
}

/// A donation session at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Server-assigned identifier.
    pub id: i64,
    /// Session date (ISO 8601).
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub date: String,
    /// Session start time (`HH:MM` or `HH:MM:SS`).
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub time: String,
    /// Where the session takes place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Number of donors registered so far.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub registration_count: u32,
}

/// Body for creating or editing a donation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDraft {
    /// Session date (ISO 8601).
    pub date: String,
    /// Session start time.
    pub time: String,
    /// Identifier of the hosting location.
    pub location_id: i64,
}

/// Body for signing a user up to a donation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSignUp {
    /// The registering user.
    pub user_id: i64,
    /// The chosen session.
    pub schedule_id: i64,
}

/// A disease that excludes a donor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    /// Server-assigned identifier.
    pub id: i64,
    /// Disease name.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A patient profile kept by a medical center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receiver {
    /// Server-assigned identifier.
    pub id: i64,
    /// Patient name.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    /// Age in years.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub age: u32,
    /// Blood type, when known.
    #[serde(
        default,
        deserialize_with = "lenient::blood_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub blood_type: Option<BloodType>,
    /// Gender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Height in centimetres.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub height: f64,
    /// Weight in kilograms.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub weight: f64,
}

/// Body for creating or editing a patient profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverDraft {
    /// Patient name.
    pub name: String,
    /// Age in years; never negative once sent.
    pub age: i64,
    /// Blood type.
    pub blood_type: BloodType,
    /// Gender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Height in centimetres.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
}

impl ReceiverDraft {
    /// Floors age, height and weight at zero.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.age = self.age.max(0);
        self.height = self.height.max(0.0);
        self.weight = self.weight.max(0.0);
        self
    }
}

/// A donor's registration for a donation, with the medical screening data
/// captured at sign-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRegistration {
    /// Server-assigned identifier.
    pub id: i64,
    /// Declared blood type.
    #[serde(
        default,
        deserialize_with = "lenient::blood_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub blood_type: Option<BloodType>,
    /// Date of the donor's previous donation (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_donation_date: Option<String>,
    /// Weight in kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Height in centimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Body mass index computed by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    /// Millilitres offered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,
    /// When the registration was filed (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<String>,
    /// Confirmation status.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: RegistrationStatus,
    /// The registering donor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// The chosen donation site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Declared excluding diseases.
    #[serde(default, deserialize_with = "lenient::or_default", alias = "prohibitedDiseases")]
    pub diseases: Vec<Disease>,
}

/// Body a donor submits to register for a donation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationApplication {
    /// Declared blood type.
    pub blood_type: BloodType,
    /// Date of the previous donation (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_donation_date: Option<String>,
    /// Weight in kilograms.
    pub weight: f64,
    /// Height in centimetres.
    pub height: f64,
    /// Millilitres offered; never negative once sent.
    pub amount: i64,
    /// Chosen donation site.
    pub location_id: i64,
    /// Declared excluding diseases.
    #[serde(default)]
    pub disease_ids: Vec<i64>,
}

impl DonationApplication {
    /// Floors amount, height and weight at zero.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.amount = self.amount.max(0);
        self.height = self.height.max(0.0);
        self.weight = self.weight.max(0.0);
        self
    }
}

/// The server's answer to "can this blood type be served from stock?".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodCompatibility {
    /// The blood type that was asked about.
    pub requested_blood_type: BloodType,
    /// Whether enough of the exact type is in stock.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_available: bool,
    /// Units of the exact type in stock.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub available_quantity: u32,
    /// Every donor type the requested type can receive.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub all_compatible_types: Vec<BloodType>,
    /// Compatible donor types currently in stock, with their quantities.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub available_compatible_types: std::collections::BTreeMap<BloodType, u32>,
    /// Human-readable summary.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub message: String,
}
