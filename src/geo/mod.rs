use consts::{
    DEGREES_PER_KILOMETER, DEGREES_PER_MILE, EARTH_RADIUS, METERS_PER_KILOMETER, METERS_PER_MILE,
};
use models::LatLng;
use serde::{Deserialize, Serialize};

pub mod consts;
pub mod handlers;
pub mod models;
pub mod regions;
pub mod responses;
#[cfg(test)]
pub mod tests;

/// Great-circle (haversine) distance between two points, in meters.
pub fn distance_meters(from: LatLng, to: LatLng) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS * c
}

pub fn distance_km(from: LatLng, to: LatLng) -> f64 {
    distance_meters(from, to) / METERS_PER_KILOMETER
}

/// Distances are shown with two decimals.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DistanceUnit {
    #[default]
    Km,
    Miles,
}

impl DistanceUnit {
    pub fn to_degrees(self, distance: f64) -> f64 {
        match self {
            DistanceUnit::Km => distance * DEGREES_PER_KILOMETER,
            DistanceUnit::Miles => distance * DEGREES_PER_MILE,
        }
    }

    pub fn from_meters(self, meters: f64) -> f64 {
        match self {
            DistanceUnit::Km => meters / METERS_PER_KILOMETER,
            DistanceUnit::Miles => meters / METERS_PER_MILE,
        }
    }
}
