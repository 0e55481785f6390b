// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use blood_bank_domain::{Role, User};

/// The client-side view of the current login.
///
/// A session is authenticated exactly when both a user and a token are
/// held. The fields are private so that the only way to reach an
/// authenticated session is through [`crate::apply`] or [`Session::restore`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    user: Option<User>,
    token: Option<String>,
    loading: bool,
    error: Option<String>,
}

impl Session {
    /// Creates an anonymous session with no pending work.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            user: None,
            token: None,
            loading: false,
            error: None,
        }
    }

    /// Rebuilds the start-up session from persisted client state.
    ///
    /// A half-persisted session (token without user, or user without
    /// token) is discarded and yields an anonymous session.
    ///
    /// # Arguments
    ///
    /// * `token` - The persisted bearer token, if any
    /// * `user` - The persisted user, if any
    #[must_use]
    pub fn restore(token: Option<String>, user: Option<User>) -> Self {
        match (token, user) {
            (Some(token), Some(user)) if !token.is_empty() => Self {
                user: Some(user),
                token: Some(token),
                loading: false,
                error: None,
            },
            _ => Self::anonymous(),
        }
    }

    /// Returns whether both a user and a token are held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// The logged-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The role of the logged-in user, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    /// The bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns whether a login, registration or profile edit is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last error message, if one has not been cleared.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn authenticated(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            loading: false,
            error: None,
        }
    }

    pub(crate) fn failed(message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::anonymous()
        }
    }

    pub(crate) const fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub(crate) fn with_error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    pub(crate) fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }
}

/// A side effect a session transition asks its executor to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Write the token to client storage.
    PersistToken(String),
    /// Write the user to client storage.
    PersistUser(User),
    /// Remove the token and user from client storage.
    ClearPersisted,
    /// Send the user back to the login view.
    RedirectToLogin,
}

/// The result of applying a [`crate::SessionCommand`].
///
/// Effects are listed in the order they should be performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTransition {
    /// The session after the transition.
    pub new_session: Session,
    /// The side effects to perform.
    pub effects: Vec<SessionEffect>,
}

impl SessionTransition {
    pub(crate) const fn quiet(new_session: Session) -> Self {
        Self {
            new_session,
            effects: Vec::new(),
        }
    }
}
