// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

mod common;

use carshare::db::AccountStore;
use carshare::hooks;
use carshare::models::{CardInput, CardKind};
use chrono::{NaiveDateTime, Timelike};

fn local_time_after(seconds: i64) -> NaiveDateTime {
    chrono::DateTime::from_timestamp(common::START_EPOCH + seconds, 0)
        .unwrap()
        .naive_utc()
}

fn card_input(number: &str) -> CardInput {
    CardInput {
        holder_name: "Test Testesen".to_string(),
        number: number.to_string(),
        expire_month: 5,
        expire_year: 27,
        cvv: "123".to_string(),
        kind: CardKind::Visa,
    }
}

#[tokio::test]
async fn test_account_round_trips_with_order_preserved() {
    let (state, clock, store) = common::create_test_app();

    // Build up a well-used account: two cards, one completed ride, one
    // open reservation.
    hooks::on_add_card_clicked(&state, card_input("4571111122223333")).unwrap();
    hooks::on_add_card_clicked(&state, card_input("5156444455556666")).unwrap();
    hooks::on_rent_clicked(&state, "car1").unwrap();
    clock.advance(120);
    hooks::on_end_ride_clicked(&state).unwrap();
    let slot = local_time_after(3600);
    hooks::on_reserve_clicked(&state, "car2", slot.date(), slot.hour(), slot.minute()).unwrap();

    let original = store.get("uid-test").unwrap().unwrap();

    // Serialize and read back through a second store.
    let other = carshare::db::SessionStore::new();
    other.put("uid-test", &original).unwrap();
    let restored = other.get("uid-test").unwrap().unwrap();

    assert_eq!(restored, original);
    // Most-recent-first orders survive.
    assert_eq!(restored.cards[0].number, "5156444455556666");
    assert_eq!(restored.cards[1].number, "4571111122223333");
    assert_eq!(restored.history.len(), 1);
    assert_eq!(restored.reservations.len(), 1);
}

#[tokio::test]
async fn test_corrupted_record_reinitializes_fresh() {
    let (state, _clock, store) = common::create_test_app();

    store.put_raw("uid-test", "{\"user_id\": 42, nonsense");

    let profile = hooks::on_auth_state_changed(&state).unwrap().unwrap();
    assert_eq!(profile.balance, 0);
    assert_eq!(profile.display_name, "Test Testesen");

    // The fresh record replaced the corrupted one.
    let account = store.get("uid-test").unwrap().unwrap();
    assert!(account.history.is_empty());
    assert!(account.cards.is_empty());
}

#[tokio::test]
async fn test_first_sign_in_creates_account_lazily() {
    let (state, _clock, store) = common::create_signed_out_app();

    assert!(store.get("uid-test").unwrap().is_none());
    assert!(hooks::on_auth_state_changed(&state).unwrap().is_none());
    assert!(store.get("uid-test").unwrap().is_none());

    state.auth.sign_in().unwrap();
    let profile = hooks::on_auth_state_changed(&state).unwrap().unwrap();

    assert_eq!(profile.display_name, "Test Testesen");
    assert_eq!(profile.phone, "12345678"); // provider had no phone on file
    let account = store.get("uid-test").unwrap().unwrap();
    assert_eq!(account.balance, 0);
}

#[tokio::test]
async fn test_second_sign_in_keeps_existing_record() {
    let (state, _clock, store) = common::create_test_app();

    hooks::on_balance_update_confirmed(&state, "100").unwrap();

    state.auth.sign_out();
    hooks::on_auth_state_changed(&state).unwrap();
    state.auth.sign_in().unwrap();
    let profile = hooks::on_auth_state_changed(&state).unwrap().unwrap();

    assert_eq!(profile.balance, 100);
    assert_eq!(store.get("uid-test").unwrap().unwrap().balance, 100);
}
