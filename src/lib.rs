// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Carshare: ride sessions, reservations and billing for a car-sharing
//! frontend.
//!
//! This crate is the state engine behind the UI: it owns the per-user
//! account record (balance, cards, active ride, reservations, history),
//! the ride state machine with its elapsed-time billing, and the
//! reservation countdowns. Identity and persistence are seams
//! ([`auth::AuthProvider`], [`db::AccountStore`]); rendering consumes
//! snapshot structs and the [`services::UiEvent`] stream.

pub mod auth;
pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod time_utils;

use std::sync::Arc;
use tokio::sync::broadcast;

use auth::AuthProvider;
use clock::Clock;
use config::Config;
use db::AccountStore;
use models::StationKind;
use services::scheduler::UiEvent;
use services::{StationIndex, TimerRegistry, VehicleCatalog};

/// Ticks and countdowns queued per observer before old events drop off.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn AccountStore>,
    pub auth: Arc<dyn AuthProvider>,
    pub catalog: VehicleCatalog,
    pub stations: StationIndex,
    pub clock: Arc<dyn Clock>,
    pub timers: TimerRegistry,
    events: broadcast::Sender<UiEvent>,
}

impl AppState {
    /// Build state from configuration: the fleet and station layers come
    /// from the configured files; without them the demo fleet and an
    /// empty station index are used.
    pub fn from_config(
        config: Config,
        store: Arc<dyn AccountStore>,
        auth: Arc<dyn AuthProvider>,
        clock: Arc<dyn Clock>,
    ) -> error::Result<Arc<Self>> {
        let catalog = match &config.fleet_path {
            Some(path) => VehicleCatalog::load_from_file(path)
                .map_err(|e| error::AppError::Internal(e.into()))?,
            None => VehicleCatalog::demo_fleet(),
        };

        let mut stations = StationIndex::default();
        let layers = [
            (StationKind::ParkingGarage, &config.parking_garages_path),
            (StationKind::ParkingSpot, &config.parking_spots_path),
            (StationKind::Charging, &config.charging_path),
        ];
        for (kind, path) in layers {
            if let Some(path) = path {
                stations
                    .load_from_file(kind, path)
                    .map_err(|e| error::AppError::Internal(e.into()))?;
            }
        }

        Ok(Self::new(config, store, auth, catalog, stations, clock))
    }

    pub fn new(
        config: Config,
        store: Arc<dyn AccountStore>,
        auth: Arc<dyn AuthProvider>,
        catalog: VehicleCatalog,
        stations: StationIndex,
        clock: Arc<dyn Clock>,
    ) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Arc::new(Self {
            config,
            store,
            auth,
            catalog,
            stations,
            clock,
            timers: TimerRegistry::default(),
            events,
        })
    }

    /// Subscribe to ride ticks, countdown ticks and expiry events.
    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.events.subscribe()
    }

    /// Push an event to all observers. Nobody listening is fine.
    pub(crate) fn emit(&self, event: UiEvent) {
        let _ = self.events.send(event);
    }
}
