// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::list::field::Comparator;

/// Declarative description of a list page's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSpec<F> {
    searchable: Vec<F>,
    category: Option<F>,
    sortable: Vec<(F, Comparator)>,
}

impl<F: Copy + Eq> ListSpec<F> {
    /// Creates a spec with no searchable, category or sortable fields.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            searchable: Vec::new(),
            category: None,
            sortable: Vec::new(),
        }
    }

    /// Adds fields the search term is matched against.
    #[must_use]
    pub fn searchable(mut self, fields: &[F]) -> Self {
        self.searchable.extend_from_slice(fields);
        self
    }

    /// Sets the field the category filter matches exactly.
    #[must_use]
    pub fn category(mut self, field: F) -> Self {
        self.category = Some(field);
        self
    }

    /// Declares a sortable field and its comparator.
    #[must_use]
    pub fn sortable(mut self, field: F, comparator: Comparator) -> Self {
        self.sortable.push((field, comparator));
        self
    }

    /// Fields the search term is matched against.
    #[must_use]
    pub fn searchable_fields(&self) -> &[F] {
        &self.searchable
    }

    /// The category field, if the page has one.
    #[must_use]
    pub const fn category_field(&self) -> Option<F> {
        self.category
    }

    /// Declared sortable fields in declaration order.
    pub fn sortable_fields(&self) -> impl Iterator<Item = F> + '_ {
        self.sortable.iter().map(|(field, _)| *field)
    }

    /// The comparator for `field`; undeclared fields sort as text.
    #[must_use]
    pub fn comparator_for(&self, field: F) -> Comparator {
        self.sortable
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map_or(Comparator::Text, |(_, comparator)| *comparator)
    }
}

impl<F: Copy + Eq> Default for ListSpec<F> {
    fn default() -> Self {
        Self::new()
    }
}
