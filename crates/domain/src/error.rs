// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while interpreting domain values received from,
/// or destined for, the blood bank API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A role string did not name a known role.
    InvalidRole(String),
    /// A blood type string was not one of the eight ABO/Rh combinations.
    InvalidBloodType(String),
    /// A blood request status string was not recognized.
    InvalidRequestStatus(String),
    /// An urgency level string was not recognized.
    InvalidUrgencyLevel(String),
    /// A donation registration status string was not recognized.
    InvalidRegistrationStatus(String),
    /// A date string could not be parsed.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRole(value) => write!(f, "Invalid role: '{value}'"),
            Self::InvalidBloodType(value) => {
                write!(
                    f,
                    "Invalid blood type: '{value}'. Must be one of A+, A-, B+, B-, AB+, AB-, O+, O-"
                )
            }
            Self::InvalidRequestStatus(value) => {
                write!(f, "Invalid blood request status: '{value}'")
            }
            Self::InvalidUrgencyLevel(value) => write!(f, "Invalid urgency level: '{value}'"),
            Self::InvalidRegistrationStatus(value) => {
                write!(f, "Invalid registration status: '{value}'")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
