// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

mod common;

use carshare::error::AppError;
use carshare::hooks;

#[tokio::test]
async fn test_rent_requires_sign_in() {
    let (state, _clock, _store) = common::create_signed_out_app();

    let err = hooks::on_rent_clicked(&state, "car1").unwrap_err();
    assert!(matches!(err, AppError::NotSignedIn));
    assert_eq!(err.user_message(), "Please sign in!");
}

#[tokio::test]
async fn test_rent_unknown_vehicle_is_not_found() {
    let (state, _clock, _store) = common::create_test_app();

    let err = hooks::on_rent_clicked(&state, "car99").unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_rent_starts_ride_and_persists() {
    let (state, _clock, store) = common::create_test_app();

    let snapshot = hooks::on_rent_clicked(&state, "car1").unwrap();
    assert_eq!(snapshot.brand, "Renault Zoe");
    assert_eq!(snapshot.elapsed_seconds, 0);
    assert_eq!(snapshot.running_total, 4);

    use carshare::db::AccountStore;
    let account = store.get("uid-test").unwrap().unwrap();
    assert!(account.has_active_ride());
}

#[tokio::test]
async fn test_second_rent_conflicts_and_keeps_first_ride() {
    let (state, clock, store) = common::create_test_app();

    hooks::on_rent_clicked(&state, "car1").unwrap();
    clock.advance(120);
    let err = hooks::on_rent_clicked(&state, "car2").unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(
        err.user_message(),
        "Please end your current ride before starting a new"
    );

    use carshare::db::AccountStore;
    let account = store.get("uid-test").unwrap().unwrap();
    assert_eq!(account.current_ride.unwrap().vehicle.id, "car1");
}

#[tokio::test]
async fn test_end_ride_while_idle_is_noop() {
    let (state, _clock, store) = common::create_test_app();

    let receipt = hooks::on_end_ride_clicked(&state).unwrap();
    assert!(receipt.is_none());

    use carshare::db::AccountStore;
    let account = store.get("uid-test").unwrap().unwrap();
    assert_eq!(account.balance, 0);
    assert!(account.history.is_empty());
}

#[tokio::test]
async fn test_ten_minute_ride_debits_44() {
    let (state, clock, _store) = common::create_test_app();

    hooks::on_rent_clicked(&state, "car1").unwrap();
    clock.advance(10 * 60);
    let receipt = hooks::on_end_ride_clicked(&state).unwrap().unwrap();

    assert_eq!(receipt.total, 44);
    assert_eq!(receipt.total_display, "Total: 44kr.-");
    assert_eq!(receipt.elapsed_display, "00:10:00");

    let profile = hooks::profile(&state).unwrap();
    assert_eq!(profile.balance, -44);
    assert_eq!(profile.balance_display, "Current balance: -44kr.-");

    let history = hooks::ride_history(&state).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].total, 44);
}

#[tokio::test]
async fn test_each_ride_prepends_one_receipt() {
    let (state, clock, _store) = common::create_test_app();

    hooks::on_rent_clicked(&state, "car1").unwrap();
    clock.advance(60);
    hooks::on_end_ride_clicked(&state).unwrap();

    hooks::on_rent_clicked(&state, "car2").unwrap();
    clock.advance(180);
    hooks::on_end_ride_clicked(&state).unwrap();

    let history = hooks::ride_history(&state).unwrap();
    assert_eq!(history.len(), 2);
    // Most recent first: the VW ride ended last.
    assert_eq!(history[0].brand, "VW e-Up");
    assert_eq!(history[1].brand, "Renault Zoe");
}

#[tokio::test]
async fn test_current_ride_reports_running_cost() {
    let (state, clock, _store) = common::create_test_app();

    assert!(hooks::current_ride(&state).unwrap().is_none());

    hooks::on_rent_clicked(&state, "car1").unwrap();
    clock.advance(2 * 60 + 30);

    let snapshot = hooks::current_ride(&state).unwrap().unwrap();
    assert_eq!(snapshot.elapsed_display, "Time: 00:02:30");
    assert_eq!(snapshot.running_total, 2 * 4 + 4);
    assert_eq!(snapshot.total_display, "Total: 12kr.-");
}

#[tokio::test]
async fn test_receipt_carries_user_and_vehicle_snapshot() {
    let (state, clock, _store) = common::create_test_app();

    hooks::on_rent_clicked(&state, "car3").unwrap();
    clock.advance(60);
    let receipt = hooks::on_end_ride_clicked(&state).unwrap().unwrap();

    assert_eq!(receipt.user_display_name, "Test Testesen");
    assert_eq!(receipt.brand, "Toyota Aygo");
    assert_eq!(receipt.plate, "EF 98765");
}
