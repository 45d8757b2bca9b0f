pub const DEFAULT_DISTANCE: f64 = 10.0;
pub const DEFAULT_RESULTS: u32 = 10;
/// Largest page the occurrence API serves.
pub const MAX_RESULTS: u32 = 300;
pub const DEFAULT_YEAR_FROM: i32 = 2018;
pub const DEFAULT_YEAR_TO: i32 = 2024;
pub const LOCALITY_NOT_AVAILABLE: &str = "Locality not available";
