// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod config;
mod error;
mod events;
mod http;
pub mod services;
mod session_store;
mod storage;

#[cfg(test)]
mod tests;

pub use config::{
    BASE_URL_ENV, ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, TIMEOUT_ENV,
};
pub use error::{ApiError, GENERIC_ERROR_MESSAGE, SESSION_EXPIRED_MESSAGE, StorageError};
pub use events::{SessionEvent, SessionEvents};
pub use http::{ApiClient, authorization_header};
pub use session_store::{INVALID_CREDENTIALS_MESSAGE, LOGIN_PATH, SessionStore};
pub use storage::{
    ClientStorage, FileStorage, MemoryStorage, TOKEN_KEY, USER_KEY, clear_session, load_user,
    store_user,
};
