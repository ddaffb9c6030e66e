// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use carshare::auth::{AuthUser, StaticAuthProvider};
use carshare::clock::ManualClock;
use carshare::config::Config;
use carshare::db::SessionStore;
use carshare::services::{StationIndex, VehicleCatalog};
use carshare::AppState;
use std::sync::Arc;

/// Fixed start instant for the manual test clock.
#[allow(dead_code)]
pub const START_EPOCH: i64 = 1_700_000_000;

#[allow(dead_code)]
pub fn test_user() -> AuthUser {
    AuthUser {
        id: "uid-test".to_string(),
        display_name: "Test Testesen".to_string(),
        email: "test@example.com".to_string(),
        phone: None,
    }
}

/// Create a test app with a signed-in user, the demo fleet, an empty
/// station index and a manual clock.
#[allow(dead_code)]
pub fn create_test_app() -> (Arc<AppState>, Arc<ManualClock>, Arc<SessionStore>) {
    let clock = Arc::new(ManualClock::new(START_EPOCH));
    let store = Arc::new(SessionStore::new());
    let auth = Arc::new(StaticAuthProvider::signed_in(test_user()));

    let state = AppState::new(
        Config::default(),
        store.clone(),
        auth,
        VehicleCatalog::demo_fleet(),
        StationIndex::default(),
        clock.clone(),
    );

    (state, clock, store)
}

/// Same as `create_test_app` but with nobody signed in.
#[allow(dead_code)]
pub fn create_signed_out_app() -> (Arc<AppState>, Arc<ManualClock>, Arc<SessionStore>) {
    let clock = Arc::new(ManualClock::new(START_EPOCH));
    let store = Arc::new(SessionStore::new());
    let auth = Arc::new(StaticAuthProvider::new(test_user()));

    let state = AppState::new(
        Config::default(),
        store.clone(),
        auth,
        VehicleCatalog::demo_fleet(),
        StationIndex::default(),
        clock.clone(),
    );

    (state, clock, store)
}
