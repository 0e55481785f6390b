// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::fake_backend::{FakeBackend, spawn_fake_backend};
use super::helpers::{create_test_client, create_test_user};
use crate::{
    ApiClient, ApiError, ClientConfig, ClientStorage, GENERIC_ERROR_MESSAGE, MemoryStorage,
    SessionEvent, SessionEvents, StorageError, TOKEN_KEY, USER_KEY, store_user,
};
use blood_bank_domain::{Role, User};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::broadcast;

/// Storage that reads normally but cannot delete anything.
#[derive(Debug, Default)]
struct ReadOnlyStorage {
    inner: MemoryStorage,
}

impl ClientStorage for ReadOnlyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Io {
            key: key.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

/// Answers one request with a 401 whose body ends early.
async fn spawn_truncated_unauthorized() -> String {
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buffer: [u8; 4096] = [0; 4096];
        let _ = socket.read(&mut buffer).await.unwrap();
        socket
            .write_all(b"HTTP/1.1 401 Unauthorized\r\nContent-Length: 64\r\n\r\nshort")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });
    format!("http://{addr}/api")
}

#[tokio::test]
async fn test_no_token_sends_no_authorization_header() {
    let backend: FakeBackend = spawn_fake_backend().await;
    let (client, _storage): (ApiClient, Arc<MemoryStorage>) = create_test_client(&backend.base_url);

    let users: Vec<User> = client.get("/admin/users").await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(
        backend.state.seen(),
        vec![(String::from("/admin/users"), None)]
    );
}

#[tokio::test]
async fn test_stored_token_is_sent_as_bearer() {
    let backend: FakeBackend = spawn_fake_backend().await;
    let (client, storage): (ApiClient, Arc<MemoryStorage>) = create_test_client(&backend.base_url);
    storage.set(TOKEN_KEY, "abc123").unwrap();

    let _: Vec<User> = client.get("/admin/users").await.unwrap();

    assert_eq!(
        backend.state.authorization_for("/admin/users").as_deref(),
        Some("Bearer abc123")
    );
}

#[tokio::test]
async fn test_token_is_read_fresh_for_every_request() {
    let backend: FakeBackend = spawn_fake_backend().await;
    let (client, storage): (ApiClient, Arc<MemoryStorage>) = create_test_client(&backend.base_url);

    storage.set(TOKEN_KEY, "first").unwrap();
    let _: Vec<User> = client.get("/admin/users").await.unwrap();
    storage.set(TOKEN_KEY, "").unwrap();
    let _: Vec<User> = client.get("/admin/users").await.unwrap();

    let headers: Vec<Option<String>> = backend
        .state
        .seen()
        .into_iter()
        .map(|(_, header)| header)
        .collect();
    assert_eq!(headers, vec![Some(String::from("Bearer first")), None]);
}

#[tokio::test]
async fn test_unauthorized_clears_storage_and_emits_event() {
    let backend: FakeBackend = spawn_fake_backend().await;
    let (client, storage): (ApiClient, Arc<MemoryStorage>) = create_test_client(&backend.base_url);
    storage.set(TOKEN_KEY, "stale").unwrap();
    store_user(storage.as_ref(), &create_test_user(1, "Ada Admin", Role::Admin)).unwrap();
    let mut events: broadcast::Receiver<SessionEvent> = client.events().subscribe();

    let result: Result<Value, ApiError> = client.get("/expired").await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(storage.get(USER_KEY).unwrap(), None);
    assert_eq!(
        events.try_recv().unwrap(),
        SessionEvent::Invalidated {
            path: String::from("/expired")
        }
    );
}

#[tokio::test]
async fn test_json_rejection_is_passed_through() {
    let backend: FakeBackend = spawn_fake_backend().await;
    let (client, _storage): (ApiClient, Arc<MemoryStorage>) = create_test_client(&backend.base_url);

    let error: ApiError = client.get::<Value>("/insufficient").await.unwrap_err();

    match &error {
        ApiError::Rejected {
            status,
            message,
            payload,
        } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "Insufficient stock");
            assert_eq!(payload["available"], 3);
        }
        other => panic!("expected a rejection, got {other:?}"),
    }
    assert_eq!(error.user_message(), "Insufficient stock");
    assert_eq!(error.status(), Some(400));
}

#[tokio::test]
async fn test_text_rejection_message_is_the_body() {
    let backend: FakeBackend = spawn_fake_backend().await;
    let (client, _storage): (ApiClient, Arc<MemoryStorage>) = create_test_client(&backend.base_url);

    let error: ApiError = client.get::<Value>("/full").await.unwrap_err();

    assert_eq!(error.status(), Some(409));
    assert_eq!(error.user_message(), "Schedule is full");
}

#[tokio::test]
async fn test_server_error_shows_generic_message() {
    let backend: FakeBackend = spawn_fake_backend().await;
    let (client, _storage): (ApiClient, Arc<MemoryStorage>) = create_test_client(&backend.base_url);

    let error: ApiError = client.get::<Value>("/boom").await.unwrap_err();

    assert!(matches!(error, ApiError::Server { status: 500 }));
    assert_eq!(error.user_message(), GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_unreachable_server_shows_generic_message() {
    let (client, _storage): (ApiClient, Arc<MemoryStorage>) =
        create_test_client("http://127.0.0.1:1/api");

    let error: ApiError = client.get::<Value>("/admin/users").await.unwrap_err();

    assert!(matches!(error, ApiError::Network(_)));
    assert_eq!(error.user_message(), GENERIC_ERROR_MESSAGE);
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn test_unexpected_shape_is_a_decode_error() {
    let backend: FakeBackend = spawn_fake_backend().await;
    let (client, _storage): (ApiClient, Arc<MemoryStorage>) = create_test_client(&backend.base_url);

    let result: Result<User, ApiError> = client.get("/admin/users").await;

    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_unauthorized_emits_event_even_when_storage_cannot_be_cleared() {
    let backend: FakeBackend = spawn_fake_backend().await;
    let config: ClientConfig = ClientConfig::new(&backend.base_url, Duration::from_secs(5)).unwrap();
    let storage: Arc<ReadOnlyStorage> = Arc::new(ReadOnlyStorage::default());
    storage.set(TOKEN_KEY, "stale").unwrap();
    let client: ApiClient = ApiClient::new(&config, storage, SessionEvents::new()).unwrap();
    let mut events: broadcast::Receiver<SessionEvent> = client.events().subscribe();

    let result: Result<Value, ApiError> = client.get("/expired").await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
    assert_eq!(
        events.try_recv().unwrap(),
        SessionEvent::Invalidated {
            path: String::from("/expired")
        }
    );
}

#[tokio::test]
async fn test_unauthorized_with_unreadable_body_still_invalidates() {
    let base_url: String = spawn_truncated_unauthorized().await;
    let (client, storage): (ApiClient, Arc<MemoryStorage>) = create_test_client(&base_url);
    storage.set(TOKEN_KEY, "stale").unwrap();
    let mut events: broadcast::Receiver<SessionEvent> = client.events().subscribe();

    let result: Result<Value, ApiError> = client.get("/admin/users").await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(
        events.try_recv().unwrap(),
        SessionEvent::Invalidated {
            path: String::from("/admin/users")
        }
    );
}
