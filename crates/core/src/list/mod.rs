// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Search, category filter and sort for management list pages.
//!
//! A page describes its entity once with a [`ListSpec`] (which fields are
//! searchable, which one is the category, how each sortable field compares)
//! and keeps user input in [`ListControls`]. [`derive_view`] turns the two
//! into the rows to display.

mod controller;
mod controls;
mod field;
mod pages;
mod spec;
mod view;

pub use controller::{ListController, LoadState};
pub use controls::{CategoryFilter, ListControls, SortOrder, SortState};
pub use field::{Comparator, FieldValue, ListItem};
pub use pages::{
    InventoryField, LocationField, RegistrationField, ReceiverField, RequestField, ScheduleField,
    UserField, donors_spec, inventory_spec, locations_spec, medical_centers_spec, receivers_spec,
    requests_spec, schedules_spec, users_spec,
};
pub use spec::ListSpec;
pub use view::derive_view;
