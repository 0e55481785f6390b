// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use blood_bank_domain::User;

/// A named session transition.
///
/// Commands are the only way to change a [`crate::Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// A login request was sent.
    LoginStart,
    /// The server accepted the credentials.
    LoginSuccess {
        /// The authenticated user.
        user: User,
        /// The issued bearer token.
        token: String,
    },
    /// The login request failed.
    LoginFailure {
        /// Message to display.
        message: String,
    },
    /// A registration request was sent.
    RegisterStart,
    /// The account was created and logged in.
    RegisterSuccess {
        /// The new user.
        user: User,
        /// The issued bearer token.
        token: String,
    },
    /// The registration request failed.
    RegisterFailure {
        /// Message to display.
        message: String,
    },
    /// The user logged out.
    Logout,
    /// A profile edit was sent.
    UpdateProfileStart,
    /// The server accepted the profile edit.
    UpdateProfileSuccess {
        /// The updated user.
        user: User,
    },
    /// The profile edit failed.
    UpdateProfileFailure {
        /// Message to display.
        message: String,
    },
    /// The displayed error was dismissed.
    ClearError,
    /// The server rejected the token.
    Invalidate,
}

impl SessionCommand {
    /// Short name used in log lines.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LoginStart => "login_start",
            Self::LoginSuccess { .. } => "login_success",
            Self::LoginFailure { .. } => "login_failure",
            Self::RegisterStart => "register_start",
            Self::RegisterSuccess { .. } => "register_success",
            Self::RegisterFailure { .. } => "register_failure",
            Self::Logout => "logout",
            Self::UpdateProfileStart => "update_profile_start",
            Self::UpdateProfileSuccess { .. } => "update_profile_success",
            Self::UpdateProfileFailure { .. } => "update_profile_failure",
            Self::ClearError => "clear_error",
            Self::Invalidate => "invalidate",
        }
    }
}
