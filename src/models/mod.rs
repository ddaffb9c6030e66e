// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod account;
pub mod card;
pub mod reservation;
pub mod ride;
pub mod station;
pub mod vehicle;

pub use account::Account;
pub use card::{CardInput, CardKind, CardSnapshot, PaymentCard};
pub use reservation::{Reservation, ReservationSnapshot};
pub use ride::{Receipt, ReceiptSnapshot, Ride, RideSnapshot};
pub use station::{Station, StationKind};
pub use vehicle::{FuelKind, Vehicle};
