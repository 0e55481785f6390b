// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::SessionCommand;
use crate::session::{Session, SessionEffect, SessionTransition};

/// Applies a command to a session, producing the next session and the
/// effects to perform.
///
/// This function is pure: it never touches storage or the network.
/// Concurrent dispatches are not serialized; the last applied transition wins.
///
/// # Arguments
///
/// * `session` - The current session (immutable)
/// * `command` - The transition to apply
///
/// # Returns
///
/// The new session together with its ordered side effects.
#[must_use]
pub fn apply(session: &Session, command: SessionCommand) -> SessionTransition {
    match command {
        SessionCommand::LoginStart
        | SessionCommand::RegisterStart
        | SessionCommand::UpdateProfileStart => {
            SessionTransition::quiet(session.clone().with_loading(true).with_error(None))
        }
        SessionCommand::LoginSuccess { user, token }
        | SessionCommand::RegisterSuccess { user, token } => SessionTransition {
            new_session: Session::authenticated(user.clone(), token.clone()),
            effects: vec![
                SessionEffect::PersistToken(token),
                SessionEffect::PersistUser(user),
            ],
        },
        SessionCommand::LoginFailure { message } | SessionCommand::RegisterFailure { message } => {
            SessionTransition {
                new_session: Session::failed(message),
                effects: vec![SessionEffect::ClearPersisted],
            }
        }
        SessionCommand::Logout | SessionCommand::Invalidate => SessionTransition {
            new_session: Session::anonymous(),
            effects: vec![
                SessionEffect::ClearPersisted,
                SessionEffect::RedirectToLogin,
            ],
        },
        SessionCommand::UpdateProfileSuccess { user } => {
            let settled: Session = session.clone().with_loading(false).with_error(None);
            // Only an authenticated session owns a profile to replace.
            if session.is_authenticated() {
                SessionTransition {
                    new_session: settled.with_user(user.clone()),
                    effects: vec![SessionEffect::PersistUser(user)],
                }
            } else {
                SessionTransition::quiet(settled)
            }
        }
        SessionCommand::UpdateProfileFailure { message } => SessionTransition::quiet(
            session
                .clone()
                .with_loading(false)
                .with_error(Some(message)),
        ),
        SessionCommand::ClearError => SessionTransition::quiet(session.clone().with_error(None)),
    }
}
