// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field descriptions for the management list pages.

use crate::list::field::{Comparator, FieldValue, ListItem};
use crate::list::spec::ListSpec;
use blood_bank_domain::{
    BloodRequest, BloodType, DonationRegistration, InventoryItem, Location, Receiver, Schedule,
    StockLevel, User,
};

fn blood_type(value: Option<BloodType>) -> FieldValue<'static> {
    value.map_or(FieldValue::Missing, |blood_type| {
        FieldValue::text(blood_type.as_str())
    })
}

/// Fields of a user row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    /// Identifier.
    Id,
    /// Display name.
    FullName,
    /// Email.
    Email,
    /// Phone.
    Phone,
    /// Role.
    Role,
    /// Blood type.
    BloodType,
    /// Address.
    Address,
}

impl ListItem for User {
    type Field = UserField;

    fn field_value(&self, field: UserField) -> FieldValue<'_> {
        match field {
            UserField::Id => FieldValue::integer(self.id),
            UserField::FullName => FieldValue::text(&self.full_name),
            UserField::Email => FieldValue::text(&self.email),
            UserField::Phone => FieldValue::optional_text(self.phone.as_deref()),
            UserField::Role => FieldValue::text(self.role.as_str()),
            UserField::BloodType => blood_type(self.blood_type),
            UserField::Address => FieldValue::optional_text(self.address.as_deref()),
        }
    }
}

/// The users page: search by name, email, phone or id; filter by role.
#[must_use]
pub fn users_spec() -> ListSpec<UserField> {
    ListSpec::new()
        .searchable(&[
            UserField::FullName,
            UserField::Email,
            UserField::Phone,
            UserField::Id,
        ])
        .category(UserField::Role)
        .sortable(UserField::Id, Comparator::Numeric)
        .sortable(UserField::FullName, Comparator::Text)
        .sortable(UserField::Email, Comparator::Text)
        .sortable(UserField::Role, Comparator::Text)
}

/// The medical centers page: users with the medical center role, no category.
#[must_use]
pub fn medical_centers_spec() -> ListSpec<UserField> {
    ListSpec::new()
        .searchable(&[
            UserField::FullName,
            UserField::Email,
            UserField::Phone,
            UserField::Address,
        ])
        .sortable(UserField::Id, Comparator::Numeric)
        .sortable(UserField::FullName, Comparator::Text)
        .sortable(UserField::Email, Comparator::Text)
}

/// Fields of a blood request row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestField {
    /// Identifier.
    Id,
    /// Patient name.
    RecipientName,
    /// Patient blood type.
    RecipientBloodType,
    /// Units requested.
    RequestedAmount,
    /// Processing status.
    Status,
    /// Urgency, sorted by severity.
    UrgencyLevel,
    /// Filing date.
    RequestDate,
    /// Name of the filing medical center.
    MedicalCenter,
}

impl ListItem for BloodRequest {
    type Field = RequestField;

    fn field_value(&self, field: RequestField) -> FieldValue<'_> {
        match field {
            RequestField::Id => FieldValue::integer(self.id),
            RequestField::RecipientName => FieldValue::text(&self.recipient_name),
            RequestField::RecipientBloodType => blood_type(self.recipient_blood_type),
            RequestField::RequestedAmount => FieldValue::Number(f64::from(self.requested_amount)),
            RequestField::Status => FieldValue::text(self.status.as_str()),
            RequestField::UrgencyLevel => self
                .urgency_level
                .map_or(FieldValue::Missing, |urgency| {
                    FieldValue::Ranked(urgency.as_str(), f64::from(urgency.rank()))
                }),
            RequestField::RequestDate => FieldValue::optional_text(self.request_date.as_deref()),
            RequestField::MedicalCenter => FieldValue::optional_text(
                self.medical_center
                    .as_ref()
                    .map(|center| center.full_name.as_str()),
            ),
        }
    }
}

/// The blood requests page: search by patient, id or center; filter by status.
#[must_use]
pub fn requests_spec() -> ListSpec<RequestField> {
    ListSpec::new()
        .searchable(&[
            RequestField::RecipientName,
            RequestField::Id,
            RequestField::MedicalCenter,
            RequestField::RecipientBloodType,
        ])
        .category(RequestField::Status)
        .sortable(RequestField::RequestDate, Comparator::Date)
        .sortable(RequestField::RequestedAmount, Comparator::Numeric)
        .sortable(RequestField::UrgencyLevel, Comparator::Numeric)
        .sortable(RequestField::RecipientName, Comparator::Text)
        .sortable(RequestField::Status, Comparator::Text)
}

/// Fields of a donor registration row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    /// Identifier.
    Id,
    /// Donor name.
    DonorName,
    /// Donor email.
    Email,
    /// Declared blood type.
    BloodType,
    /// Confirmation status.
    Status,
    /// Filing timestamp.
    RegisteredAt,
    /// Previous donation date.
    LastDonationDate,
    /// Millilitres offered.
    Amount,
    /// Donation site name.
    Location,
}

impl ListItem for DonationRegistration {
    type Field = RegistrationField;

    fn field_value(&self, field: RegistrationField) -> FieldValue<'_> {
        match field {
            RegistrationField::Id => FieldValue::integer(self.id),
            RegistrationField::DonorName => {
                FieldValue::optional_text(self.user.as_ref().map(|user| user.full_name.as_str()))
            }
            RegistrationField::Email => {
                FieldValue::optional_text(self.user.as_ref().map(|user| user.email.as_str()))
            }
            RegistrationField::BloodType => blood_type(self.blood_type),
            RegistrationField::Status => FieldValue::text(self.status.as_str()),
            RegistrationField::RegisteredAt => {
                FieldValue::optional_text(self.registered_at.as_deref())
            }
            RegistrationField::LastDonationDate => {
                FieldValue::optional_text(self.last_donation_date.as_deref())
            }
            RegistrationField::Amount => self
                .amount
                .map_or(FieldValue::Missing, |amount| {
                    FieldValue::Number(f64::from(amount))
                }),
            RegistrationField::Location => FieldValue::optional_text(
                self.location.as_ref().map(|location| location.name.as_str()),
            ),
        }
    }
}

/// The donors page: search by name, email or id; filter by blood type.
#[must_use]
pub fn donors_spec() -> ListSpec<RegistrationField> {
    ListSpec::new()
        .searchable(&[
            RegistrationField::DonorName,
            RegistrationField::Email,
            RegistrationField::Id,
            RegistrationField::Location,
        ])
        .category(RegistrationField::BloodType)
        .sortable(RegistrationField::DonorName, Comparator::Text)
        .sortable(RegistrationField::RegisteredAt, Comparator::Date)
        .sortable(RegistrationField::LastDonationDate, Comparator::Date)
        .sortable(RegistrationField::Amount, Comparator::Numeric)
        .sortable(RegistrationField::Status, Comparator::Text)
}

/// Fields of a schedule row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleField {
    /// Identifier.
    Id,
    /// Session date.
    Date,
    /// Session start time.
    Time,
    /// Location name.
    Location,
    /// Location address.
    Address,
    /// Registered donors.
    RegistrationCount,
}

impl ListItem for Schedule {
    type Field = ScheduleField;

    fn field_value(&self, field: ScheduleField) -> FieldValue<'_> {
        match field {
            ScheduleField::Id => FieldValue::integer(self.id),
            ScheduleField::Date => FieldValue::text(&self.date),
            ScheduleField::Time => FieldValue::text(&self.time),
            ScheduleField::Location => FieldValue::optional_text(
                self.location.as_ref().map(|location| location.name.as_str()),
            ),
            ScheduleField::Address => FieldValue::optional_text(
                self.location
                    .as_ref()
                    .map(|location| location.address.as_str()),
            ),
            ScheduleField::RegistrationCount => {
                FieldValue::Number(f64::from(self.registration_count))
            }
        }
    }
}

/// The schedules page: search by location or date; filter by location.
#[must_use]
pub fn schedules_spec() -> ListSpec<ScheduleField> {
    ListSpec::new()
        .searchable(&[
            ScheduleField::Location,
            ScheduleField::Address,
            ScheduleField::Date,
        ])
        .category(ScheduleField::Location)
        .sortable(ScheduleField::Date, Comparator::Date)
        .sortable(ScheduleField::Time, Comparator::Text)
        .sortable(ScheduleField::Location, Comparator::Text)
        .sortable(ScheduleField::RegistrationCount, Comparator::Numeric)
}

/// Fields of a receiver row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceiverField {
    /// Identifier.
    Id,
    /// Patient name.
    Name,
    /// Age.
    Age,
    /// Blood type.
    BloodType,
    /// Gender.
    Gender,
    /// Height.
    Height,
    /// Weight.
    Weight,
}

impl ListItem for Receiver {
    type Field = ReceiverField;

    fn field_value(&self, field: ReceiverField) -> FieldValue<'_> {
        match field {
            ReceiverField::Id => FieldValue::integer(self.id),
            ReceiverField::Name => FieldValue::text(&self.name),
            ReceiverField::Age => FieldValue::Number(f64::from(self.age)),
            ReceiverField::BloodType => blood_type(self.blood_type),
            ReceiverField::Gender => FieldValue::optional_text(self.gender.as_deref()),
            ReceiverField::Height => FieldValue::Number(self.height),
            ReceiverField::Weight => FieldValue::Number(self.weight),
        }
    }
}

/// The receivers page: search by name, gender or id; filter by blood type.
#[must_use]
pub fn receivers_spec() -> ListSpec<ReceiverField> {
    ListSpec::new()
        .searchable(&[ReceiverField::Name, ReceiverField::Gender, ReceiverField::Id])
        .category(ReceiverField::BloodType)
        .sortable(ReceiverField::Name, Comparator::Text)
        .sortable(ReceiverField::Age, Comparator::Numeric)
        .sortable(ReceiverField::Height, Comparator::Numeric)
        .sortable(ReceiverField::Weight, Comparator::Numeric)
}

/// Fields of a location row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationField {
    /// Identifier.
    Id,
    /// Site name.
    Name,
    /// Street address.
    Address,
}

impl ListItem for Location {
    type Field = LocationField;

    fn field_value(&self, field: LocationField) -> FieldValue<'_> {
        match field {
            LocationField::Id => FieldValue::integer(self.id),
            LocationField::Name => FieldValue::text(&self.name),
            LocationField::Address => FieldValue::text(&self.address),
        }
    }
}

/// The locations page.
#[must_use]
pub fn locations_spec() -> ListSpec<LocationField> {
    ListSpec::new()
        .searchable(&[LocationField::Name, LocationField::Address])
        .sortable(LocationField::Name, Comparator::Text)
        .sortable(LocationField::Address, Comparator::Text)
}

/// Fields of an inventory row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryField {
    /// Identifier.
    Id,
    /// Blood type.
    BloodType,
    /// Units on hand.
    Quantity,
    /// Derived stock health.
    StockLevel,
}

impl ListItem for InventoryItem {
    type Field = InventoryField;

    fn field_value(&self, field: InventoryField) -> FieldValue<'_> {
        match field {
            InventoryField::Id => FieldValue::integer(self.id),
            InventoryField::BloodType => FieldValue::text(self.blood_type.as_str()),
            InventoryField::Quantity => FieldValue::Number(f64::from(self.quantity)),
            InventoryField::StockLevel => {
                let level: StockLevel = self.stock_level();
                FieldValue::Ranked(level.as_str(), f64::from(level as u8))
            }
        }
    }
}

/// The inventory page: search by blood type; filter by stock level.
#[must_use]
pub fn inventory_spec() -> ListSpec<InventoryField> {
    ListSpec::new()
        .searchable(&[InventoryField::BloodType])
        .category(InventoryField::StockLevel)
        .sortable(InventoryField::BloodType, Comparator::Text)
        .sortable(InventoryField::Quantity, Comparator::Numeric)
        .sortable(InventoryField::StockLevel, Comparator::Numeric)
}
