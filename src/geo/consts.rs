/// Mean Earth radius in meters used for great-circle distances.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const METERS_PER_MILE: f64 = 1609.34;

/// Rough degrees-per-unit factors for turning a search radius into a bounding box. They ignore
/// the shrinking of longitude degrees towards the poles.
pub const DEGREES_PER_MILE: f64 = 0.014;
pub const DEGREES_PER_KILOMETER: f64 = 0.008;
