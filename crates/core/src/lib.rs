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

mod apply;
mod command;
mod dashboard;
mod guard;
mod list;
mod reconcile;
mod routes;
mod session;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::SessionCommand;
pub use dashboard::DashboardStats;
pub use guard::{GuardDecision, guard, guard_session};
pub use list::{
    CategoryFilter, Comparator, FieldValue, InventoryField, ListController, ListControls,
    ListItem, ListSpec, LoadState, LocationField, ReceiverField, RegistrationField, RequestField,
    ScheduleField, SortOrder, SortState, UserField, derive_view, donors_spec, inventory_spec,
    locations_spec, medical_centers_spec, receivers_spec, requests_spec, schedules_spec,
    users_spec,
};
pub use reconcile::{ConfirmedMutation, Identified, reconcile, reconcile_status};
pub use routes::{Access, Route, RouteTable};
pub use session::{Session, SessionEffect, SessionTransition};
