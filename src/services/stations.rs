// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Parking and charging station loading and proximity queries.
//!
//! The source data is the municipality's open GeoJSON (point features
//! with Danish property names), one file per facility kind.

use geo::{Distance, Haversine};
use geojson::GeoJson;
use std::fs;
use std::path::Path;

use crate::models::{Station, StationKind};

/// Index over fixed parking/charging locations.
#[derive(Debug, Default, Clone)]
pub struct StationIndex {
    stations: Vec<Station>,
}

impl StationIndex {
    /// Load stations of `kind` from a GeoJSON file, appending to the
    /// index.
    pub fn load_from_file<P: AsRef<Path>>(
        &mut self,
        kind: StationKind,
        path: P,
    ) -> Result<usize, StationError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| StationError::IoError(e.to_string()))?;
        self.load_from_json(kind, &json_data)
    }

    /// Load stations of `kind` from a GeoJSON string, appending to the
    /// index. Returns how many stations were added.
    pub fn load_from_json(&mut self, kind: StationKind, json_data: &str) -> Result<usize, StationError> {
        let geojson: GeoJson = json_data
            .parse()
            .map_err(|e: geojson::Error| StationError::ParseError(e.to_string()))?;

        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(StationError::NotAFeatureCollection);
        };

        let mut added = 0;
        for feature in collection.features {
            let Some(geometry) = &feature.geometry else {
                continue;
            };
            let geojson::Value::Point(coords) = &geometry.value else {
                // Only point features carry a marker position.
                continue;
            };
            if coords.len() < 2 {
                continue;
            }

            let street = feature
                .property("vejnavn")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown")
                .to_string();
            let house_number = feature.property("husnr").and_then(|v| v.as_str());
            let address = match house_number {
                Some(nr) => format!("{} {}", street, nr),
                None => street,
            };

            let spaces = feature
                .property("antal_pladser")
                .or_else(|| feature.property("antal_udtag"))
                .and_then(|v| v.as_u64())
                .map(|n| n as u32);

            let note = feature
                .property("bemaerkning")
                .and_then(|v| v.as_str())
                .map(String::from);

            self.stations.push(Station {
                kind,
                address,
                spaces,
                note,
                lon: coords[0],
                lat: coords[1],
            });
            added += 1;
        }

        tracing::info!(?kind, count = added, "Loaded stations");
        Ok(added)
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Stations within `radius_m` meters of `(lat, lon)`, closest first.
    pub fn nearby(&self, lat: f64, lon: f64, radius_m: f64) -> Vec<&Station> {
        let origin = geo::Point::new(lon, lat);
        let mut with_distance: Vec<(f64, &Station)> = self
            .stations
            .iter()
            .map(|s| (Haversine.distance(origin, s.position()), s))
            .filter(|(d, _)| *d <= radius_m)
            .collect();
        with_distance.sort_by(|a, b| a.0.total_cmp(&b.0));
        with_distance.into_iter().map(|(_, s)| s).collect()
    }
}

/// Errors from station loading.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse GeoJSON: {0}")]
    ParseError(String),

    #[error("Expected a GeoJSON FeatureCollection")]
    NotAFeatureCollection,
}
