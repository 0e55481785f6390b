// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::session::Session;
use blood_bank_domain::Role;

/// What a protected view should do for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// A session transition is in flight; render a neutral placeholder.
    Pending,
    /// Nobody is logged in; go to the login view and come back afterwards.
    RedirectToLogin {
        /// The destination to return to after logging in.
        return_to: String,
    },
    /// The user is logged in but lacks a required role.
    RedirectToHome,
    /// Render the protected content.
    Allow,
}

impl GuardDecision {
    /// Returns whether the protected content may render.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decides whether protected content renders or redirects.
///
/// Rules are checked in order: loading wins over everything, then
/// authentication, then role membership. An empty `required_roles` admits
/// any authenticated user.
///
/// # Arguments
///
/// * `is_authenticated` - Whether a user and token are held
/// * `role` - The current user's role, if any
/// * `required_roles` - Roles allowed to see the content
/// * `loading` - Whether a session transition is in flight
/// * `destination` - The path being guarded, preserved for the login redirect
#[must_use]
pub fn guard(
    is_authenticated: bool,
    role: Option<Role>,
    required_roles: &[Role],
    loading: bool,
    destination: &str,
) -> GuardDecision {
    if loading {
        return GuardDecision::Pending;
    }

    if !is_authenticated {
        return GuardDecision::RedirectToLogin {
            return_to: destination.to_string(),
        };
    }

    if !required_roles.is_empty() && !role.is_some_and(|role| required_roles.contains(&role)) {
        return GuardDecision::RedirectToHome;
    }

    GuardDecision::Allow
}

/// Runs [`guard`] against a [`Session`].
#[must_use]
pub fn guard_session(session: &Session, required_roles: &[Role], destination: &str) -> GuardDecision {
    guard(
        session.is_authenticated(),
        session.role(),
        required_roles,
        session.is_loading(),
        destination,
    )
}
