// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::fake_backend::{FakeBackend, spawn_fake_backend};
use super::helpers::{create_test_client, create_test_sign_up, create_test_user};
use crate::{
    ApiClient, ApiError, ClientStorage, INVALID_CREDENTIALS_MESSAGE, LOGIN_PATH, MemoryStorage,
    SessionEvent, SessionStore, TOKEN_KEY, USER_KEY, load_user, store_user,
};
use blood_bank::{GuardDecision, RouteTable};
use blood_bank_domain::{Credentials, ProfileUpdate, Role, User};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::broadcast;

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: String::from(email),
        password: String::from(password),
    }
}

#[tokio::test]
async fn test_admin_login_then_logout_round_trip() {
    let backend: FakeBackend = spawn_fake_backend().await;
    let (client, storage): (ApiClient, Arc<MemoryStorage>) = create_test_client(&backend.base_url);
    let mut store: SessionStore = SessionStore::restore(client).unwrap();
    let routes: RouteTable = RouteTable::standard();

    let user: User = store
        .login(&credentials("admin@bloodbank.test", "pw"))
        .await
        .unwrap();

    assert_eq!(user.role, Role::Admin);
    assert_eq!(store.session().token(), Some("admin-token"));
    assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("admin-token"));
    assert_eq!(load_user(storage.as_ref()).unwrap(), Some(user));
    assert_eq!(
        routes.decide("/admin/users", store.session()),
        Some(GuardDecision::Allow)
    );

    store.logout().await.unwrap();

    assert_eq!(
        backend.state.authorization_for("/auth/logout").as_deref(),
        Some("Bearer admin-token")
    );
    assert!(!store.session().is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(storage.get(USER_KEY).unwrap(), None);
    assert_eq!(store.take_redirect(), Some(LOGIN_PATH));
    assert_eq!(store.take_redirect(), None);
    assert_eq!(
        routes.decide("/admin/users", store.session()),
        Some(GuardDecision::RedirectToLogin {
            return_to: String::from("/admin/users")
        })
    );
}

#[tokio::test]
async fn test_login_emits_logged_in_event() {
    let backend: FakeBackend = spawn_fake_backend().await;
    let (client, _storage): (ApiClient, Arc<MemoryStorage>) = create_test_client(&backend.base_url);
    let mut events: broadcast::Receiver<SessionEvent> = client.events().subscribe();
    let mut store: SessionStore = SessionStore::restore(client).unwrap();

    store
        .login(&credentials("dana@bloodbank.test", "pw"))
        .await
        .unwrap();

    assert_eq!(
        events.try_recv().unwrap(),
        SessionEvent::LoggedIn {
            user_id: 7,
            role: Role::Donor
        }
    );
}

#[tokio::test]
async fn test_refused_login_shows_invalid_credentials() {
    let backend: FakeBackend = spawn_fake_backend().await;
    let (client, storage): (ApiClient, Arc<MemoryStorage>) = create_test_client(&backend.base_url);
    let mut events: broadcast::Receiver<SessionEvent> = client.events().subscribe();
    let mut store: SessionStore = SessionStore::restore(client).unwrap();

    let result: Result<User, ApiError> = store
        .login(&credentials("dana@bloodbank.test", "wrong"))
        .await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
    assert!(!store.session().is_authenticated());
    assert!(!store.session().is_loading());
    assert_eq!(store.session().error(), Some(INVALID_CREDENTIALS_MESSAGE));
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);

    let event: SessionEvent = events.try_recv().unwrap();
    store.handle_event(&event).unwrap();
    assert_eq!(store.session().error(), Some(INVALID_CREDENTIALS_MESSAGE));
    assert_eq!(store.take_redirect(), None);

    store.clear_error().unwrap();
    assert_eq!(store.session().error(), None);
}

#[tokio::test]
async fn test_registration_without_token_logs_in() {
    let backend: FakeBackend = spawn_fake_backend().await;
    let (client, storage): (ApiClient, Arc<MemoryStorage>) = create_test_client(&backend.base_url);
    let mut store: SessionStore = SessionStore::restore(client).unwrap();

    let user: User = store
        .register(&create_test_sign_up("nina@bloodbank.test"))
        .await
        .unwrap();

    assert_eq!(user.role, Role::Donor);
    assert!(store.session().is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("donor-token"));
    let paths: Vec<String> = backend
        .state
        .seen()
        .into_iter()
        .map(|(path, _)| path)
        .collect();
    assert_eq!(paths, vec![String::from("/auth/register"), String::from("/auth/login")]);
}

#[tokio::test]
async fn test_rejected_registration_keeps_server_message() {
    let backend: FakeBackend = spawn_fake_backend().await;
    let (client, _storage): (ApiClient, Arc<MemoryStorage>) = create_test_client(&backend.base_url);
    let mut store: SessionStore = SessionStore::restore(client).unwrap();

    let result: Result<User, ApiError> = store
        .register(&create_test_sign_up("taken@bloodbank.test"))
        .await;

    assert!(result.is_err());
    assert!(!store.session().is_authenticated());
    assert_eq!(store.session().error(), Some("Email already in use"));
}

#[tokio::test]
async fn test_server_invalidation_ends_live_session() {
    let backend: FakeBackend = spawn_fake_backend().await;
    let (client, storage): (ApiClient, Arc<MemoryStorage>) = create_test_client(&backend.base_url);
    let mut store: SessionStore = SessionStore::restore(client).unwrap();
    store
        .login(&credentials("admin@bloodbank.test", "pw"))
        .await
        .unwrap();
    let mut events: broadcast::Receiver<SessionEvent> = store.client().events().subscribe();

    let result: Result<Value, ApiError> = store.client().get("/expired").await;
    assert!(matches!(result, Err(ApiError::Unauthorized)));
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);

    let event: SessionEvent = events.try_recv().unwrap();
    store.handle_event(&event).unwrap();

    assert!(!store.session().is_authenticated());
    assert_eq!(store.take_redirect(), Some(LOGIN_PATH));
}

#[tokio::test]
async fn test_profile_update_replaces_cached_user() {
    let backend: FakeBackend = spawn_fake_backend().await;
    let (client, storage): (ApiClient, Arc<MemoryStorage>) = create_test_client(&backend.base_url);
    let mut store: SessionStore = SessionStore::restore(client).unwrap();
    store
        .login(&credentials("dana@bloodbank.test", "pw"))
        .await
        .unwrap();
    let profile: ProfileUpdate = ProfileUpdate {
        email: String::from("dana@bloodbank.test"),
        full_name: Some(String::from("Dana Renamed")),
        ..ProfileUpdate::default()
    };

    let user: User = store.update_profile(&profile).await.unwrap();

    assert_eq!(user.full_name, "Dana Renamed");
    assert_eq!(store.session().user().map(|u| u.full_name.as_str()), Some("Dana Renamed"));
    assert_eq!(
        load_user(storage.as_ref()).unwrap().map(|u| u.full_name),
        Some(String::from("Dana Renamed"))
    );
    assert_eq!(store.session().token(), Some("donor-token"));
}

#[test]
fn test_restore_uses_complete_persisted_session() {
    let (client, storage): (ApiClient, Arc<MemoryStorage>) =
        create_test_client("http://127.0.0.1:1/api");
    storage.set(TOKEN_KEY, "kept").unwrap();
    store_user(storage.as_ref(), &create_test_user(2, "Sam Staff", Role::Staff)).unwrap();

    let store: SessionStore = SessionStore::restore(client).unwrap();

    assert!(store.session().is_authenticated());
    assert_eq!(store.session().role(), Some(Role::Staff));
}

#[test]
fn test_restore_discards_half_persisted_session() {
    let (client, storage): (ApiClient, Arc<MemoryStorage>) =
        create_test_client("http://127.0.0.1:1/api");
    storage.set(TOKEN_KEY, "orphan").unwrap();

    let store: SessionStore = SessionStore::restore(client).unwrap();

    assert!(!store.session().is_authenticated());
}
