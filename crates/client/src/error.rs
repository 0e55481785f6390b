// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::Value;
use thiserror::Error;

/// Message shown for transport failures and server faults alike.
pub const GENERIC_ERROR_MESSAGE: &str = "Network error. Please try again later.";

/// Message shown after the server rejected the session token.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Errors reading or writing persisted client state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file or directory could not be accessed.
    #[error("storage I/O failed for key '{key}': {source}")]
    Io {
        /// The key being accessed.
        key: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A value could not be encoded for storage.
    #[error("could not encode value for key '{key}': {reason}")]
    Encode {
        /// The key being written.
        key: String,
        /// The encoder's message.
        reason: String,
    },
    /// Another thread panicked while holding the storage lock.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Errors returned by every API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received (connection refused, DNS, timeout).
    #[error("network error: {0}")]
    Network(String),
    /// The server rejected the bearer token. Stored credentials have
    /// already been cleared and a session-invalidated event emitted.
    #[error("unauthorized")]
    Unauthorized,
    /// The server refused the request with a 4xx status.
    #[error("request rejected with status {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Human-readable message extracted from the payload.
        message: String,
        /// The error payload as sent by the server.
        payload: Value,
    },
    /// The server failed with a 5xx status.
    #[error("server error with status {status}")]
    Server {
        /// HTTP status code.
        status: u16,
    },
    /// The response body did not match the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),
    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// Persisted client state could not be accessed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// The text a page displays for this error.
    ///
    /// Rejections show the server's own message; transport failures and
    /// server faults share one generic message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::Server { .. } => String::from(GENERIC_ERROR_MESSAGE),
            Self::Unauthorized => String::from(SESSION_EXPIRED_MESSAGE),
            Self::Rejected { message, .. } => message.clone(),
            Self::Decode(_) => String::from("Unexpected response from the server."),
            Self::InvalidRequest(reason) => reason.clone(),
            Self::Storage(_) => String::from("Could not access saved session data."),
        }
    }

    /// The HTTP status, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Rejected { status, .. } | Self::Server { status } => Some(*status),
            _ => None,
        }
    }
}
