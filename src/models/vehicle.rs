// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Shared vehicle model for the fleet, rides and reservations.

use serde::{Deserialize, Serialize};

/// A vehicle in the fleet.
///
/// Rides and reservations embed a snapshot of this record, so a receipt
/// keeps showing the vehicle as it was when the ride happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Fleet identifier (e.g. "car1")
    pub id: String,
    /// Brand and model (e.g. "Renault Zoe")
    pub brand: String,
    /// License plate
    pub plate: String,
    /// Rental price per started minute (minor units)
    pub price_per_minute: i64,
    /// Power source
    pub fuel: FuelKind,
    /// Remaining charge or fuel, display form (e.g. "54% battery")
    pub charge_level: String,
    /// Picture shown on markers and cards
    pub picture_url: String,
    /// Latitude of the parked position
    pub lat: f64,
    /// Longitude of the parked position
    pub lon: f64,
}

impl Vehicle {
    /// Parked position as a geo point (x = lon, y = lat).
    pub fn position(&self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }

    /// Price display, e.g. "4 kr.-/min".
    pub fn price_display(&self, currency: &str) -> String {
        format!("{} {}/min", self.price_per_minute, currency)
    }
}

/// Power source of a vehicle. Electric cars get their own marker color on
/// the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelKind {
    Electric,
    Petrol,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display() {
        let vehicle = Vehicle {
            id: "car1".to_string(),
            brand: "Renault Zoe".to_string(),
            plate: "AB 12345".to_string(),
            price_per_minute: 4,
            fuel: FuelKind::Electric,
            charge_level: "54% battery".to_string(),
            picture_url: "images/carPhoto.jpeg".to_string(),
            lat: 55.66,
            lon: 12.59,
        };
        assert_eq!(vehicle.price_display("kr.-"), "4 kr.-/min");
    }
}
