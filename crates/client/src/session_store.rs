// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The application-wide session.
//!
//! [`SessionStore`] owns the one live [`Session`]. It drives the pure
//! transitions from `blood_bank::apply` with the results of API calls and
//! performs the effects each transition asks for against client storage.

use crate::error::ApiError;
use crate::events::SessionEvent;
use crate::http::ApiClient;
use crate::services::{auth, donor};
use crate::storage::{ClientStorage, TOKEN_KEY, clear_session, load_user, store_user};
use blood_bank::{Session, SessionCommand, SessionEffect, SessionTransition, apply};
use blood_bank_domain::{Credentials, ProfileUpdate, SignUp, User};
use tracing::{debug, info, warn};

/// Message shown when the server refuses a login.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Path the shell navigates to after a logout or an invalidated session.
pub const LOGIN_PATH: &str = "/login";

/// Owner of the current session.
#[derive(Debug)]
pub struct SessionStore {
    session: Session,
    client: ApiClient,
    pending_redirect: Option<&'static str>,
}

impl SessionStore {
    /// Builds a store from whatever the client's storage holds.
    ///
    /// A stored token without a readable user, or the reverse, yields an
    /// anonymous session.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn restore(client: ApiClient) -> Result<Self, ApiError> {
        let token: Option<String> = client.storage().get(TOKEN_KEY)?;
        let user: Option<User> = load_user(client.storage().as_ref())?;
        let session: Session = Session::restore(token, user);

        debug!(
            authenticated = session.is_authenticated(),
            "Restored session from storage"
        );

        Ok(Self {
            session,
            client,
            pending_redirect: None,
        })
    }

    /// The current session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The API client this store authenticates.
    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Returns and clears the navigation requested by the last transition.
    pub const fn take_redirect(&mut self) -> Option<&'static str> {
        self.pending_redirect.take()
    }

    /// Applies a command and performs its effects.
    ///
    /// # Errors
    ///
    /// Returns an error if a storage effect fails. The session has already
    /// moved to its new state by then.
    pub fn dispatch(&mut self, command: SessionCommand) -> Result<(), ApiError> {
        let name: &'static str = command.name();
        let transition: SessionTransition = apply(&self.session, command);
        self.session = transition.new_session;

        debug!(
            command = name,
            authenticated = self.session.is_authenticated(),
            effects = transition.effects.len(),
            "Applied session command"
        );

        for effect in transition.effects {
            self.perform(effect)?;
        }
        Ok(())
    }

    fn perform(&mut self, effect: SessionEffect) -> Result<(), ApiError> {
        let storage = self.client.storage();
        match effect {
            SessionEffect::PersistToken(token) => storage.set(TOKEN_KEY, &token)?,
            SessionEffect::PersistUser(user) => store_user(storage.as_ref(), &user)?,
            SessionEffect::ClearPersisted => clear_session(storage.as_ref())?,
            SessionEffect::RedirectToLogin => self.pending_redirect = Some(LOGIN_PATH),
        }
        Ok(())
    }

    /// Logs in.
    ///
    /// On failure the session is anonymous and carries the message to show.
    ///
    /// # Errors
    ///
    /// Returns the API error that made the login fail, or a storage error.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<User, ApiError> {
        self.dispatch(SessionCommand::LoginStart)?;

        match auth::login(&self.client, credentials).await {
            Ok(response) => {
                let user: User = response.user.clone();
                self.dispatch(SessionCommand::LoginSuccess {
                    user: response.user,
                    token: response.token,
                })?;
                self.announce_login(&user);
                Ok(user)
            }
            Err(e) => {
                let message: String = match &e {
                    ApiError::Unauthorized => String::from(INVALID_CREDENTIALS_MESSAGE),
                    other => other.user_message(),
                };
                warn!(email = %credentials.email, error = %e, "Login failed");
                self.dispatch(SessionCommand::LoginFailure { message })?;
                Err(e)
            }
        }
    }

    /// Creates an account and logs it in.
    ///
    /// When the server does not issue a token on registration, the same
    /// credentials are used to log in.
    ///
    /// # Errors
    ///
    /// Returns the API error that made the registration fail, or a storage error.
    pub async fn register(&mut self, sign_up: &SignUp) -> Result<User, ApiError> {
        self.dispatch(SessionCommand::RegisterStart)?;

        match self.register_and_authenticate(sign_up).await {
            Ok((user, token)) => {
                self.dispatch(SessionCommand::RegisterSuccess {
                    user: user.clone(),
                    token,
                })?;
                self.announce_login(&user);
                Ok(user)
            }
            Err(e) => {
                warn!(email = %sign_up.email, error = %e, "Registration failed");
                self.dispatch(SessionCommand::RegisterFailure {
                    message: e.user_message(),
                })?;
                Err(e)
            }
        }
    }

    async fn register_and_authenticate(
        &self,
        sign_up: &SignUp,
    ) -> Result<(User, String), ApiError> {
        let registered: auth::Registered = auth::register(&self.client, sign_up).await?;
        if let Some(token) = registered.token {
            return Ok((registered.user, token));
        }

        debug!(email = %sign_up.email, "Registration issued no token, logging in");
        let credentials: Credentials = Credentials {
            email: sign_up.email.clone(),
            password: sign_up.password.clone(),
        };
        let response = auth::login(&self.client, &credentials).await?;
        Ok((response.user, response.token))
    }

    /// Logs out.
    ///
    /// The server is told first when a session exists, but local state is
    /// cleared even if that call fails.
    ///
    /// # Errors
    ///
    /// Returns an error only if storage cannot be cleared.
    pub async fn logout(&mut self) -> Result<(), ApiError> {
        if self.session.is_authenticated() {
            if let Err(e) = auth::logout(&self.client).await {
                warn!(error = %e, "Server logout failed, clearing local session anyway");
            }
        }

        self.dispatch(SessionCommand::Logout)?;
        info!("User logged out");
        self.client.events().emit(SessionEvent::LoggedOut);
        Ok(())
    }

    /// Saves profile edits for the logged-in donor.
    ///
    /// # Errors
    ///
    /// Returns the API error that made the update fail, or a storage error.
    pub async fn update_profile(&mut self, profile: &ProfileUpdate) -> Result<User, ApiError> {
        self.dispatch(SessionCommand::UpdateProfileStart)?;

        match donor::update_profile(&self.client, profile).await {
            Ok(user) => {
                self.dispatch(SessionCommand::UpdateProfileSuccess { user: user.clone() })?;
                Ok(user)
            }
            Err(e) => {
                self.dispatch(SessionCommand::UpdateProfileFailure {
                    message: e.user_message(),
                })?;
                Err(e)
            }
        }
    }

    /// Dismisses the displayed error.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::dispatch`].
    pub fn clear_error(&mut self) -> Result<(), ApiError> {
        self.dispatch(SessionCommand::ClearError)
    }

    /// Reacts to an event from the client's event channel.
    ///
    /// An invalidation ends a live session. It is ignored when nobody is
    /// logged in, so a refused login keeps its error message.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be cleared.
    pub fn handle_event(&mut self, event: &SessionEvent) -> Result<(), ApiError> {
        match event {
            SessionEvent::Invalidated { path } if self.session.is_authenticated() => {
                info!(path = %path, "Session invalidated by server");
                self.dispatch(SessionCommand::Invalidate)
            }
            _ => Ok(()),
        }
    }

    fn announce_login(&self, user: &User) {
        info!(user_id = user.id, role = %user.role, "User logged in");
        self.client.events().emit(SessionEvent::LoggedIn {
            user_id: user.id,
            role: user.role,
        });
    }
}
