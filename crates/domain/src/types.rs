// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Implements string-based serde for an enumeration that already provides
/// `as_str` and `FromStr`, so the wire format and the parser never drift.
macro_rules! serde_via_str {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw: String = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

/// Account roles known to the blood bank API.
///
/// Roles gate which dashboards and management pages a user may open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// System administrators: manage users, staff, inventory, requests and schedules.
    Admin,
    /// Blood bank staff: manage donors, requests, inventory and schedules.
    Staff,
    /// Registered donors.
    Donor,
    /// Hospitals and clinics that file blood requests for their receivers.
    MedicalCenter,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "STAFF" => Ok(Self::Staff),
            "DONOR" => Ok(Self::Donor),
            "MEDICALCENTER" | "MEDICAL_CENTER" => Ok(Self::MedicalCenter),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

serde_via_str!(Role);

impl Role {
    /// All roles, in the order the administration pages list them.
    pub const ALL: [Self; 4] = [Self::Admin, Self::Staff, Self::Donor, Self::MedicalCenter];

    /// Converts this role to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Staff => "STAFF",
            Self::Donor => "DONOR",
            Self::MedicalCenter => "MEDICALCENTER",
        }
    }

    /// The dashboard a user with this role lands on after logging in.
    #[must_use]
    pub const fn home_path(&self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::Staff => "/staff/dashboard",
            Self::Donor => "/donor/dashboard",
            Self::MedicalCenter => "/medical-center/dashboard",
        }
    }
}

/// One of the eight ABO/Rh blood groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BloodType {
    /// A positive.
    APositive,
    /// A negative.
    ANegative,
    /// B positive.
    BPositive,
    /// B negative.
    BNegative,
    /// AB positive.
    AbPositive,
    /// AB negative.
    AbNegative,
    /// O positive.
    OPositive,
    /// O negative.
    ONegative,
}

impl FromStr for BloodType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A+" => Ok(Self::APositive),
            "A-" => Ok(Self::ANegative),
            "B+" => Ok(Self::BPositive),
            "B-" => Ok(Self::BNegative),
            "AB+" => Ok(Self::AbPositive),
            "AB-" => Ok(Self::AbNegative),
            "O+" => Ok(Self::OPositive),
            "O-" => Ok(Self::ONegative),
            _ => Err(DomainError::InvalidBloodType(s.to_string())),
        }
    }
}

serde_via_str!(BloodType);

impl BloodType {
    /// All blood types in the order the inventory pages display them.
    pub const ALL: [Self; 8] = [
        Self::APositive,
        Self::ANegative,
        Self::BPositive,
        Self::BNegative,
        Self::AbPositive,
        Self::AbNegative,
        Self::OPositive,
        Self::ONegative,
    ];

    /// Converts this blood type to its wire representation (e.g. `"AB-"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
        }
    }
}

/// Processing status of a blood request.
///
/// Transitions are decided by the server; the client only dispatches
/// intents (confirm, mark priority, mark out of stock).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestStatus {
    /// Filed and not yet looked at.
    #[default]
    Pending,
    /// Being processed by staff.
    Waiting,
    /// Escalated by staff.
    Priority,
    /// Cannot currently be served from inventory.
    OutOfStock,
    /// Fulfilled and confirmed.
    Confirm,
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "WAITING" => Ok(Self::Waiting),
            "PRIORITY" => Ok(Self::Priority),
            "OUT_OF_STOCK" => Ok(Self::OutOfStock),
            "CONFIRM" => Ok(Self::Confirm),
            _ => Err(DomainError::InvalidRequestStatus(s.to_string())),
        }
    }
}

serde_via_str!(RequestStatus);

impl RequestStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Waiting => "WAITING",
            Self::Priority => "PRIORITY",
            Self::OutOfStock => "OUT_OF_STOCK",
            Self::Confirm => "CONFIRM",
        }
    }

    /// Returns whether the request still needs attention.
    ///
    /// Every status except `Confirm` is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Confirm)
    }
}

/// Severity classification of a blood request.
///
/// Ordering follows display priority: `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UrgencyLevel {
    /// Routine.
    Low,
    /// Elevated.
    Medium,
    /// Urgent.
    High,
    /// Life threatening.
    Critical,
}

impl FromStr for UrgencyLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(DomainError::InvalidUrgencyLevel(s.to_string())),
        }
    }
}

serde_via_str!(UrgencyLevel);

impl UrgencyLevel {
    /// All urgency levels from least to most severe.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Converts this urgency level to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }

    /// Numeric display priority, `0` for `Low` up to `3` for `Critical`.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
            Self::Critical => 3,
        }
    }
}

/// Status of a donor's registration for a donation schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegistrationStatus {
    /// Awaiting staff confirmation.
    #[default]
    Pending,
    /// Confirmed by staff.
    Confirmed,
    /// Cancelled by the donor or staff.
    Cancelled,
}

impl FromStr for RegistrationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidRegistrationStatus(s.to_string())),
        }
    }
}

serde_via_str!(RegistrationStatus);

impl RegistrationStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// Lenient deserializers for server-owned fields the client should not
/// reject a whole payload over.
pub(crate) mod lenient {
    use super::BloodType;
    use serde::{Deserialize, Deserializer};

    /// Reads an optional blood type, mapping `null`, blanks and unknown
    /// values to `None`.
    pub fn blood_type<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BloodType>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(|value| value.parse().ok()))
    }

    /// Reads a value, treating an explicit `null` like a missing key.
    pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
