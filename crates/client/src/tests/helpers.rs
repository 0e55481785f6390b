// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiClient, ClientConfig, MemoryStorage, SessionEvents};
use blood_bank_domain::{Role, SignUp, User};
use std::sync::Arc;
use std::time::Duration;

pub fn create_test_client(base_url: &str) -> (ApiClient, Arc<MemoryStorage>) {
    let config: ClientConfig = ClientConfig::new(base_url, Duration::from_secs(5)).unwrap();
    let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::new());
    let client: ApiClient = ApiClient::new(&config, storage.clone(), SessionEvents::new()).unwrap();
    (client, storage)
}

pub fn create_test_user(id: i64, name: &str, role: Role) -> User {
    User {
        id,
        full_name: String::from(name),
        email: format!("{}@bloodbank.test", name.to_lowercase().replace(' ', ".")),
        phone: None,
        role,
        blood_type: None,
        address: None,
        dob: None,
        gender: None,
    }
}

pub fn create_test_sign_up(email: &str) -> SignUp {
    SignUp {
        full_name: String::from("Nina New"),
        email: String::from(email),
        password: String::from("secret"),
        phone: String::from("555-0100"),
        dob: None,
        address: None,
        gender: None,
    }
}
