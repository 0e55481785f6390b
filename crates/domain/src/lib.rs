// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod dates;
mod error;
mod inventory;
mod records;
mod types;

#[cfg(test)]
mod tests;

pub use dates::parse_iso_date;
pub use error::DomainError;
pub use inventory::{
    CRITICAL_STOCK_THRESHOLD, InventoryItem, InventoryUpdate, LOW_STOCK_THRESHOLD, StockLevel,
    clamp_quantity,
};
pub use records::{
    AuthResponse, BloodCompatibility, BloodRequest, BloodRequestDraft, Credentials, Disease,
    DonationApplication, DonationRegistration, Location, LocationDraft, PasswordChange,
    ProfileUpdate, Receiver, ReceiverDraft, Schedule, ScheduleDraft, ScheduleSignUp, SignUp, User,
    UserDraft,
};
pub use types::{BloodType, RegistrationStatus, RequestStatus, Role, UrgencyLevel};
