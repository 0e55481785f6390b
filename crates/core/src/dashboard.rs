// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use blood_bank_domain::{
    BloodRequest, InventoryItem, RequestStatus, StockLevel, UrgencyLevel, User,
};
use std::collections::BTreeMap;

/// Headline numbers for the staff and administrator dashboards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardStats {
    /// Number of donors.
    pub total_donors: usize,
    /// Number of blood requests.
    pub total_requests: usize,
    /// Requests still in the `PENDING` status.
    pub pending_requests: usize,
    /// Requests in any status other than `CONFIRM`.
    pub open_requests: usize,
    /// Units on hand across every blood type.
    pub total_units: u64,
    /// Inventory rows at or below the low-stock threshold (critical rows included).
    pub low_stock: usize,
    /// Inventory rows at or below the critical threshold.
    pub critical_stock: usize,
    /// Open requests per urgency level; requests without a level are not counted.
    pub open_by_urgency: BTreeMap<UrgencyLevel, usize>,
}

impl DashboardStats {
    /// Computes the dashboard numbers from freshly loaded lists.
    ///
    /// # Arguments
    ///
    /// * `donors` - Users listed as donors
    /// * `requests` - All blood requests
    /// * `inventory` - All inventory rows
    #[must_use]
    pub fn compute(donors: &[User], requests: &[BloodRequest], inventory: &[InventoryItem]) -> Self {
        let mut open_by_urgency: BTreeMap<UrgencyLevel, usize> = BTreeMap::new();
        for request in requests.iter().filter(|request| request.status.is_open()) {
            if let Some(urgency) = request.urgency_level {
                *open_by_urgency.entry(urgency).or_insert(0) += 1;
            }
        }

        Self {
            total_donors: donors.len(),
            total_requests: requests.len(),
            pending_requests: requests
                .iter()
                .filter(|request| request.status == RequestStatus::Pending)
                .count(),
            open_requests: requests
                .iter()
                .filter(|request| request.status.is_open())
                .count(),
            total_units: inventory.iter().map(|item| u64::from(item.quantity)).sum(),
            low_stock: inventory.iter().filter(|item| item.is_low()).count(),
            critical_stock: inventory
                .iter()
                .filter(|item| item.stock_level() == StockLevel::Critical)
                .count(),
            open_by_urgency,
        }
    }
}
