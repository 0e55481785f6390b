// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Session, SessionCommand, apply};
use blood_bank_domain::{
    BloodRequest, BloodType, InventoryItem, RequestStatus, Role, UrgencyLevel, User,
};

pub fn create_test_user(id: i64, name: &str, role: Role) -> User {
    User {
        id,
        full_name: String::from(name),
        email: format!("{}@bloodbank.test", name.to_lowercase().replace(' ', ".")),
        phone: Some(format!("555-01{id:02}")),
        role,
        blood_type: Some(BloodType::OPositive),
        address: None,
        dob: None,
        gender: None,
    }
}

pub fn create_test_request(
    id: i64,
    recipient: &str,
    status: RequestStatus,
    urgency: Option<UrgencyLevel>,
    date: Option<&str>,
) -> BloodRequest {
    BloodRequest {
        id,
        recipient_name: String::from(recipient),
        recipient_blood_type: Some(BloodType::APositive),
        requested_amount: 2,
        status,
        urgency_level: urgency,
        request_date: date.map(String::from),
        medical_center: None,
    }
}

pub fn create_test_inventory(id: i64, blood_type: BloodType, quantity: u32) -> InventoryItem {
    InventoryItem {
        id,
        blood_type,
        quantity,
    }
}

pub fn create_authenticated_session(role: Role) -> Session {
    apply(
        &Session::anonymous(),
        SessionCommand::LoginSuccess {
            user: create_test_user(1, "Test User", role),
            token: String::from("token-abc"),
        },
    )
    .new_session
}
