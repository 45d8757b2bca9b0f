use crate::scoring::ScoringProfile;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const ORIGIN: LatLng = LatLng { lat: 0.0, lng: 0.0 };

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

#[derive(Debug, PartialEq)]
pub enum RegionBoundsError {
    LatitudeOutOfRange,
    LongitudeOutOfRange,
    EmptyRange,
}

/// Sampling domain for random candidate points.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoRegion {
    lat_range: RangeInclusive<f64>,
    lng_range: RangeInclusive<f64>,
    profile: ScoringProfile,
}

impl GeoRegion {
    pub fn new(
        lat_range: RangeInclusive<f64>,
        lng_range: RangeInclusive<f64>,
        profile: ScoringProfile,
    ) -> Result<Self, RegionBoundsError> {
        if lat_range.start() > lat_range.end() || lng_range.start() > lng_range.end() {
            return Err(RegionBoundsError::EmptyRange);
        }
        if *lat_range.start() < -90.0 || *lat_range.end() > 90.0 {
            return Err(RegionBoundsError::LatitudeOutOfRange);
        }
        if *lng_range.start() < -180.0 || *lng_range.end() > 180.0 {
            return Err(RegionBoundsError::LongitudeOutOfRange);
        }
        Ok(Self {
            lat_range,
            lng_range,
            profile,
        })
    }

    pub fn lat_range(&self) -> &RangeInclusive<f64> {
        &self.lat_range
    }

    pub fn lng_range(&self) -> &RangeInclusive<f64> {
        &self.lng_range
    }

    pub fn profile(&self) -> ScoringProfile {
        self.profile
    }

    #[cfg(test)]
    pub fn contains(&self, point: LatLng) -> bool {
        self.lat_range.contains(&point.lat) && self.lng_range.contains(&point.lng)
    }

    /// Draws a candidate point uniformly from the region.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> LatLng {
        LatLng {
            lat: rng.gen_range(self.lat_range.clone()),
            lng: rng.gen_range(self.lng_range.clone()),
        }
    }
}

/// Bounding box sent to the occurrence API for a single query.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchWindow {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl SearchWindow {
    /// Box of `half_width` degrees on each side of `center`, clamped to valid coordinates.
    pub fn around(center: LatLng, half_width: f64) -> Self {
        let half_width = half_width.abs();
        Self {
            lat_min: (center.lat - half_width).max(-90.0),
            lat_max: (center.lat + half_width).min(90.0),
            lng_min: (center.lng - half_width).max(-180.0),
            lng_max: (center.lng + half_width).min(180.0),
        }
    }

    #[cfg(test)]
    pub fn center(&self) -> LatLng {
        LatLng {
            lat: (self.lat_min + self.lat_max) / 2.0,
            lng: (self.lng_min + self.lng_max) / 2.0,
        }
    }
}
