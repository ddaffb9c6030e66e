// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Vehicle fleet catalog and proximity queries.

use geo::{Distance, Haversine};
use std::fs;
use std::path::Path;

use crate::models::{FuelKind, Vehicle};

/// The available fleet, with position-based lookups for the map view.
#[derive(Debug, Default, Clone)]
pub struct VehicleCatalog {
    vehicles: Vec<Vehicle>,
}

impl VehicleCatalog {
    /// Load the fleet from a JSON file (an array of vehicles).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load the fleet from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let vehicles: Vec<Vehicle> =
            serde_json::from_str(json_data).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        tracing::info!(count = vehicles.len(), "Loaded vehicle fleet");
        Ok(Self { vehicles })
    }

    /// Built-in demo fleet around central Copenhagen.
    pub fn demo_fleet() -> Self {
        let vehicles = vec![
            Vehicle {
                id: "car1".to_string(),
                brand: "Renault Zoe".to_string(),
                plate: "AB 12345".to_string(),
                price_per_minute: 4,
                fuel: FuelKind::Electric,
                charge_level: "54% battery".to_string(),
                picture_url: "images/carPhoto.jpeg".to_string(),
                lat: 55.66006357924885,
                lon: 12.591008245588563,
            },
            Vehicle {
                id: "car2".to_string(),
                brand: "VW e-Up".to_string(),
                plate: "CD 54321".to_string(),
                price_per_minute: 3,
                fuel: FuelKind::Electric,
                charge_level: "81% battery".to_string(),
                picture_url: "images/carPhoto2.jpeg".to_string(),
                lat: 55.6652,
                lon: 12.5867,
            },
            Vehicle {
                id: "car3".to_string(),
                brand: "Toyota Aygo".to_string(),
                plate: "EF 98765".to_string(),
                price_per_minute: 5,
                fuel: FuelKind::Petrol,
                charge_level: "32l fuel".to_string(),
                picture_url: "images/carPhoto3.jpeg".to_string(),
                lat: 55.6558,
                lon: 12.5971,
            },
        ];
        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Vehicles ordered by distance from `(lat, lon)`, closest first.
    pub fn nearby(&self, lat: f64, lon: f64) -> Vec<&Vehicle> {
        let origin = geo::Point::new(lon, lat);
        let mut with_distance: Vec<(f64, &Vehicle)> = self
            .vehicles
            .iter()
            .map(|v| (Haversine.distance(origin, v.position()), v))
            .collect();
        with_distance.sort_by(|a, b| a.0.total_cmp(&b.0));
        with_distance.into_iter().map(|(_, v)| v).collect()
    }
}

/// Errors from fleet loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse fleet JSON: {0}")]
    ParseError(String),
}
