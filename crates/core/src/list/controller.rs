// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::list::controls::ListControls;
use crate::list::field::ListItem;
use crate::list::spec::ListSpec;
use crate::list::view::derive_view;
use crate::reconcile::{ConfirmedMutation, Identified, reconcile};

/// Progress of the page's most recent load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The items reflect the last successful load.
    Ready,
    /// The last load failed; the banner shows this message.
    Failed(String),
}

/// State of one list page: loaded items, user controls and load progress.
#[derive(Debug, Clone)]
pub struct ListController<T: ListItem> {
    items: Vec<T>,
    spec: ListSpec<T::Field>,
    controls: ListControls<T::Field>,
    state: LoadState,
}

impl<T: ListItem> ListController<T> {
    /// Creates an empty, idle controller for a page described by `spec`.
    #[must_use]
    pub const fn new(spec: ListSpec<T::Field>) -> Self {
        Self {
            items: Vec::new(),
            spec,
            controls: ListControls::new(),
            state: LoadState::Idle,
        }
    }

    /// Marks a load as in flight.
    pub fn begin_load(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Records the outcome of a load.
    ///
    /// On failure the previously loaded items stay in place.
    pub fn finish_load(&mut self, outcome: Result<Vec<T>, String>) {
        match outcome {
            Ok(items) => {
                self.items = items;
                self.state = LoadState::Ready;
            }
            Err(message) => self.state = LoadState::Failed(message),
        }
    }

    /// Hides the error banner.
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, LoadState::Failed(_)) {
            self.state = LoadState::Ready;
        }
    }

    /// The current error message, if the last load failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The load progress.
    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// All loaded items in server order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The user controls.
    #[must_use]
    pub const fn controls(&self) -> &ListControls<T::Field> {
        &self.controls
    }

    /// Mutable access to the user controls.
    pub const fn controls_mut(&mut self) -> &mut ListControls<T::Field> {
        &mut self.controls
    }

    /// The rows to display.
    #[must_use]
    pub fn view(&self) -> Vec<&T> {
        derive_view(&self.items, &self.spec, &self.controls)
    }
}

impl<T: ListItem + Identified + Clone> ListController<T> {
    /// Applies a mutation the server has confirmed.
    pub fn apply(&mut self, mutation: ConfirmedMutation<T>) {
        self.items = reconcile(&self.items, mutation);
    }
}
