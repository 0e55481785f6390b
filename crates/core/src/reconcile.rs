// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use blood_bank_domain::{
    BloodRequest, DonationRegistration, InventoryItem, Location, Receiver, RequestStatus,
    Schedule, User,
};

/// A record with a server-assigned identifier.
pub trait Identified {
    /// The record's identifier.
    fn id(&self) -> i64;
}

macro_rules! identified_by_id {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> i64 {
                    self.id
                }
            }
        )*
    };
}

identified_by_id!(
    User,
    BloodRequest,
    InventoryItem,
    Schedule,
    Location,
    Receiver,
    DonationRegistration,
);

/// A mutation the server has confirmed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmedMutation<T> {
    /// A new record was created.
    Created(T),
    /// An existing record was replaced by the server's copy.
    Replaced(T),
    /// The record with this identifier was deleted.
    Removed(i64),
}

/// Applies a confirmed mutation to a loaded list.
///
/// A created record whose id is already present replaces that row, and a
/// replaced record that is not present is appended, so the list converges
/// on the server's state either way. Row order is otherwise preserved.
#[must_use]
pub fn reconcile<T: Identified + Clone>(items: &[T], mutation: ConfirmedMutation<T>) -> Vec<T> {
    match mutation {
        ConfirmedMutation::Created(record) | ConfirmedMutation::Replaced(record) => {
            let mut next: Vec<T> = items.to_vec();
            match next.iter_mut().find(|item| item.id() == record.id()) {
                Some(slot) => *slot = record,
                None => next.push(record),
            }
            next
        }
        ConfirmedMutation::Removed(id) => {
            items.iter().filter(|item| item.id() != id).cloned().collect()
        }
    }
}

/// Applies a server-confirmed status change to one blood request.
///
/// Requests with other ids are left untouched; an unknown id is a no-op.
#[must_use]
pub fn reconcile_status(
    requests: &[BloodRequest],
    id: i64,
    status: RequestStatus,
) -> Vec<BloodRequest> {
    requests
        .iter()
        .map(|request| {
            if request.id == id {
                BloodRequest {
                    status,
                    ..request.clone()
                }
            } else {
                request.clone()
            }
        })
        .collect()
}
