// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Parking and charging station model, loaded from municipal GeoJSON.

use serde::{Deserialize, Serialize};

/// A fixed parking or charging location shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// What kind of facility this is
    pub kind: StationKind,
    /// Street address (street name plus house number where present)
    pub address: String,
    /// Number of spaces or charging outlets, when published
    pub spaces: Option<u32>,
    /// Free-form remark from the source data
    pub note: Option<String>,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
}

impl Station {
    pub fn position(&self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }
}

/// Facility kind; each gets its own map marker and popup layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationKind {
    ParkingGarage,
    ParkingSpot,
    Charging,
}
