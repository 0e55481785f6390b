// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// The active sort key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    /// Field to sort by.
    pub key: F,
    /// Direction.
    pub order: SortOrder,
}

/// The category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    All,
    /// Only rows whose category field renders exactly as this value.
    Only(String),
}

impl CategoryFilter {
    /// Parses user input, treating `ALL` (any case) and blanks as no filter.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("ALL") {
            Self::All
        } else {
            Self::Only(trimmed.to_string())
        }
    }
}

/// User input on a list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListControls<F> {
    search_term: String,
    category: CategoryFilter,
    sort: Option<SortState<F>>,
}

impl<F: Copy + Eq> ListControls<F> {
    /// No search, no filter, original order.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            search_term: String::new(),
            category: CategoryFilter::All,
            sort: None,
        }
    }

    /// Sets the search term.
    #[must_use]
    pub fn with_search(mut self, term: &str) -> Self {
        self.set_search(term);
        self
    }

    /// Sets the category filter.
    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Sets the sort key and direction.
    #[must_use]
    pub fn with_sort(mut self, key: F, order: SortOrder) -> Self {
        self.sort = Some(SortState { key, order });
        self
    }

    /// Replaces the search term.
    pub fn set_search(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Replaces the category filter.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Selects `key` for sorting.
    ///
    /// Selecting the active key flips the direction; selecting a new key
    /// sorts ascending.
    pub fn toggle_sort(&mut self, key: F) {
        self.sort = Some(match self.sort {
            Some(active) if active.key == key => SortState {
                key,
                order: active.order.flipped(),
            },
            _ => SortState {
                key,
                order: SortOrder::Ascending,
            },
        });
    }

    /// Restores the original order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// The search term as typed.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The category filter.
    #[must_use]
    pub const fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// The active sort, if any.
    #[must_use]
    pub const fn sort(&self) -> Option<SortState<F>> {
        self.sort
    }
}

impl<F: Copy + Eq> Default for ListControls<F> {
    fn default() -> Self {
        Self::new()
    }
}
