// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_inventory, create_test_request, create_test_user};
use crate::DashboardStats;
use blood_bank_domain::{
    BloodRequest, BloodType, InventoryItem, RequestStatus, Role, UrgencyLevel, User,
};

#[test]
fn test_empty_inputs_give_zeroes() {
    assert_eq!(DashboardStats::compute(&[], &[], &[]), DashboardStats::default());
}

#[test]
fn test_compute_counts() {
    let donors: Vec<User> = vec![
        create_test_user(1, "A", Role::Donor),
        create_test_user(2, "B", Role::Donor),
    ];
    let requests: Vec<BloodRequest> = vec![
        create_test_request(1, "P", RequestStatus::Pending, Some(UrgencyLevel::High), None),
        create_test_request(2, "Q", RequestStatus::Priority, Some(UrgencyLevel::High), None),
        create_test_request(3, "R", RequestStatus::Confirm, Some(UrgencyLevel::Critical), None),
        create_test_request(4, "S", RequestStatus::Pending, None, None),
    ];
    let inventory: Vec<InventoryItem> = vec![
        create_test_inventory(1, BloodType::APositive, 40),
        create_test_inventory(2, BloodType::ANegative, 10),
        create_test_inventory(3, BloodType::ONegative, 5),
    ];

    let stats: DashboardStats = DashboardStats::compute(&donors, &requests, &inventory);

    assert_eq!(stats.total_donors, 2);
    assert_eq!(stats.total_requests, 4);
    assert_eq!(stats.pending_requests, 2);
    assert_eq!(stats.open_requests, 3);
    assert_eq!(stats.total_units, 55);
    assert_eq!(stats.low_stock, 2);
    assert_eq!(stats.critical_stock, 1);
    assert_eq!(stats.open_by_urgency.get(&UrgencyLevel::High), Some(&2));
    assert_eq!(stats.open_by_urgency.get(&UrgencyLevel::Critical), None);
}
