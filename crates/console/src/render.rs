// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text tables for list pages.

use crate::cli::ListArgs;
use blood_bank::{
    CategoryFilter, InventoryField, ListControls, ListItem, ListSpec, LocationField,
    ReceiverField, RegistrationField, RequestField, ScheduleField, SortOrder, UserField,
};
use std::fmt::Write as _;

/// A displayed column and the name `--sort` refers to it by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<F> {
    pub name: &'static str,
    pub field: F,
}

const fn column<F>(name: &'static str, field: F) -> Column<F> {
    Column { name, field }
}

pub const USER_COLUMNS: [Column<UserField>; 5] = [
    column("id", UserField::Id),
    column("name", UserField::FullName),
    column("email", UserField::Email),
    column("role", UserField::Role),
    column("blood", UserField::BloodType),
];

pub const REQUEST_COLUMNS: [Column<RequestField>; 8] = [
    column("id", RequestField::Id),
    column("patient", RequestField::RecipientName),
    column("blood", RequestField::RecipientBloodType),
    column("amount", RequestField::RequestedAmount),
    column("urgency", RequestField::UrgencyLevel),
    column("status", RequestField::Status),
    column("date", RequestField::RequestDate),
    column("center", RequestField::MedicalCenter),
];

pub const INVENTORY_COLUMNS: [Column<InventoryField>; 4] = [
    column("id", InventoryField::Id),
    column("blood", InventoryField::BloodType),
    column("quantity", InventoryField::Quantity),
    column("level", InventoryField::StockLevel),
];

pub const SCHEDULE_COLUMNS: [Column<ScheduleField>; 6] = [
    column("id", ScheduleField::Id),
    column("date", ScheduleField::Date),
    column("time", ScheduleField::Time),
    column("location", ScheduleField::Location),
    column("address", ScheduleField::Address),
    column("registered", ScheduleField::RegistrationCount),
];

pub const LOCATION_COLUMNS: [Column<LocationField>; 3] = [
    column("id", LocationField::Id),
    column("name", LocationField::Name),
    column("address", LocationField::Address),
];

pub const REGISTRATION_COLUMNS: [Column<RegistrationField>; 8] = [
    column("id", RegistrationField::Id),
    column("donor", RegistrationField::DonorName),
    column("email", RegistrationField::Email),
    column("blood", RegistrationField::BloodType),
    column("amount", RegistrationField::Amount),
    column("registered", RegistrationField::RegisteredAt),
    column("last", RegistrationField::LastDonationDate),
    column("status", RegistrationField::Status),
];

pub const RECEIVER_COLUMNS: [Column<ReceiverField>; 7] = [
    column("id", ReceiverField::Id),
    column("name", ReceiverField::Name),
    column("age", ReceiverField::Age),
    column("blood", ReceiverField::BloodType),
    column("gender", ReceiverField::Gender),
    column("height", ReceiverField::Height),
    column("weight", ReceiverField::Weight),
];

/// Turns list flags into controls for `spec`.
///
/// # Errors
///
/// Returns a message naming the sortable columns if `--sort` does not name
/// one of them.
pub fn controls_from<F: Copy + Eq>(
    args: &ListArgs,
    spec: &ListSpec<F>,
    columns: &[Column<F>],
) -> Result<ListControls<F>, String> {
    let mut controls: ListControls<F> = ListControls::new()
        .with_search(&args.search)
        .with_category(CategoryFilter::parse(&args.category));

    if let Some(name) = &args.sort {
        let sortable: Vec<&Column<F>> = columns
            .iter()
            .filter(|column| spec.sortable_fields().any(|field| field == column.field))
            .collect();
        let Some(column) = sortable
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name.trim()))
        else {
            let names: Vec<&str> = sortable.iter().map(|column| column.name).collect();
            return Err(format!(
                "cannot sort by '{name}'; choose one of: {}",
                names.join(", ")
            ));
        };
        let order: SortOrder = if args.desc {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        controls = controls.with_sort(column.field, order);
    }

    Ok(controls)
}

/// Renders rows as an aligned table with a header line.
pub fn render_table<T: ListItem>(rows: &[&T], columns: &[Column<T::Field>]) -> String {
    if rows.is_empty() {
        return String::from("No records found.\n");
    }

    let header: Vec<String> = columns
        .iter()
        .map(|column| column.name.to_uppercase())
        .collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| row.field_value(column.field).render().into_owned())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(index, title)| {
            cells
                .iter()
                .map(|line| line[index].chars().count())
                .chain(std::iter::once(title.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let mut out: String = String::new();
    for line in std::iter::once(&header).chain(cells.iter()) {
        let mut rendered: String = String::new();
        for (cell, width) in line.iter().zip(&widths) {
            let _ = write!(rendered, "{cell:<width$}  ");
        }
        out.push_str(rendered.trim_end());
        out.push('\n');
    }
    out
}
