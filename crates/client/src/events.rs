// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use blood_bank_domain::Role;
use tokio::sync::broadcast;
use tracing::debug;

/// Maximum number of events buffered per subscriber.
/// Subscribers that fall further behind lose the oldest events.
const EVENT_BUFFER_SIZE: usize = 100;

/// A change in session validity that the application shell reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A user logged in or registered.
    LoggedIn {
        /// The user's id.
        user_id: i64,
        /// The user's role.
        role: Role,
    },
    /// The user logged out.
    LoggedOut,
    /// The server rejected the stored token while serving `path`.
    Invalidated {
        /// The endpoint that answered 401.
        path: String,
    },
}

/// Broadcaster for session events.
///
/// Cloning yields another handle to the same channel.
#[derive(Debug, Clone)]
pub struct SessionEvents {
    tx: broadcast::Sender<SessionEvent>,
}

impl SessionEvents {
    /// Creates a channel with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Sends an event to every current subscriber.
    ///
    /// Never blocks; with no subscribers the event is dropped.
    pub fn emit(&self, event: SessionEvent) {
        match self.tx.send(event) {
            Ok(count) => debug!(receivers = count, "Emitted session event"),
            Err(broadcast::error::SendError(event)) => {
                debug!(?event, "No receivers for session event");
            }
        }
    }

    /// Subscribes to events emitted from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new()
    }
}
