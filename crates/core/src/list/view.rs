// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::list::controls::{CategoryFilter, ListControls, SortOrder, SortState};
use crate::list::field::{Comparator, ListItem};
use crate::list::spec::ListSpec;
use std::cmp::Ordering;

/// Computes the rows a list page displays.
///
/// Rows pass the category filter and the search filter (both must match),
/// then are sorted by the active key. The sort is stable in both
/// directions, so rows with equal keys keep their input order. `items` is
/// never modified and the same inputs always produce the same output.
///
/// # Arguments
///
/// * `items` - The loaded records
/// * `spec` - The page's field description
/// * `controls` - The user's search, filter and sort input
#[must_use]
pub fn derive_view<'a, T: ListItem>(
    items: &'a [T],
    spec: &ListSpec<T::Field>,
    controls: &ListControls<T::Field>,
) -> Vec<&'a T> {
    let needle: String = controls.search_term().trim().to_lowercase();

    let mut view: Vec<&'a T> = items
        .iter()
        .filter(|item| matches_category(*item, spec, controls.category()))
        .filter(|item| matches_search(*item, spec, &needle))
        .collect();

    if let Some(SortState { key, order }) = controls.sort() {
        let comparator: Comparator = spec.comparator_for(key);
        view.sort_by(|left, right| {
            let ordering: Ordering =
                comparator.compare(&left.field_value(key), &right.field_value(key));
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }

    view
}

fn matches_category<T: ListItem>(
    item: &T,
    spec: &ListSpec<T::Field>,
    category: &CategoryFilter,
) -> bool {
    match (category, spec.category_field()) {
        (CategoryFilter::All, _) | (_, None) => true,
        (CategoryFilter::Only(wanted), Some(field)) => {
            item.field_value(field).render() == wanted.as_str()
        }
    }
}

fn matches_search<T: ListItem>(item: &T, spec: &ListSpec<T::Field>, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    spec.searchable_fields().iter().any(|field| {
        item.field_value(*field)
            .render()
            .to_lowercase()
            .contains(needle)
    })
}
