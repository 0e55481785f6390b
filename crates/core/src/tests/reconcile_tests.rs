// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_inventory, create_test_request};
use crate::{ConfirmedMutation, reconcile, reconcile_status};
use blood_bank_domain::{BloodRequest, BloodType, InventoryItem, RequestStatus};

fn create_test_requests() -> Vec<BloodRequest> {
    vec![
        create_test_request(1, "A", RequestStatus::Pending, None, None),
        create_test_request(2, "B", RequestStatus::Waiting, None, None),
    ]
}

#[test]
fn test_reconcile_status_changes_only_target() {
    let requests: Vec<BloodRequest> = create_test_requests();
    let next: Vec<BloodRequest> = reconcile_status(&requests, 2, RequestStatus::Confirm);

    assert_eq!(next[0], requests[0]);
    assert_eq!(next[1].status, RequestStatus::Confirm);
    assert_eq!(next[1].recipient_name, "B");
    assert_eq!(requests[1].status, RequestStatus::Waiting);
}

#[test]
fn test_reconcile_status_unknown_id_is_noop() {
    let requests: Vec<BloodRequest> = create_test_requests();
    assert_eq!(
        reconcile_status(&requests, 99, RequestStatus::Priority),
        requests
    );
}

#[test]
fn test_replaced_swaps_row_in_place() {
    let inventory: Vec<InventoryItem> = vec![
        create_test_inventory(1, BloodType::APositive, 10),
        create_test_inventory(2, BloodType::ONegative, 3),
    ];
    let next: Vec<InventoryItem> = reconcile(
        &inventory,
        ConfirmedMutation::Replaced(create_test_inventory(1, BloodType::APositive, 0)),
    );
    assert_eq!(next.len(), 2);
    assert_eq!(next[0].quantity, 0);
    assert_eq!(next[1], inventory[1]);
}

#[test]
fn test_created_with_existing_id_replaces() {
    let inventory: Vec<InventoryItem> = vec![create_test_inventory(1, BloodType::APositive, 10)];
    let next: Vec<InventoryItem> = reconcile(
        &inventory,
        ConfirmedMutation::Created(create_test_inventory(1, BloodType::APositive, 12)),
    );
    assert_eq!(next, vec![create_test_inventory(1, BloodType::APositive, 12)]);
}

#[test]
fn test_replaced_missing_row_is_appended() {
    let inventory: Vec<InventoryItem> = Vec::new();
    let next: Vec<InventoryItem> = reconcile(
        &inventory,
        ConfirmedMutation::Replaced(create_test_inventory(5, BloodType::BNegative, 1)),
    );
    assert_eq!(next.len(), 1);
}

#[test]
fn test_removed_drops_row() {
    let requests: Vec<BloodRequest> = create_test_requests();
    let next: Vec<BloodRequest> = reconcile(&requests, ConfirmedMutation::Removed(1));
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].id, 2);
}
