use crate::browse::consts::{DEFAULT_DISTANCE, DEFAULT_RESULTS};
use crate::geo::DistanceUnit;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query string of a nearby search. A missing `lat` or `lng` means the client could not
/// determine its position.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrencesQueryParams {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(default = "default_distance")]
    pub distance: f64,
    #[serde(default)]
    pub unit: DistanceUnit,
    #[serde(default = "default_results")]
    pub results: u32,
    pub kingdom: Option<String>,
    pub locality: Option<String>,
    pub month_from: Option<u32>,
    pub month_to: Option<u32>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
}

impl Default for OccurrencesQueryParams {
    fn default() -> Self {
        Self {
            lat: None,
            lng: None,
            distance: DEFAULT_DISTANCE,
            unit: DistanceUnit::default(),
            results: DEFAULT_RESULTS,
            kingdom: None,
            locality: None,
            month_from: None,
            month_to: None,
            date_from: None,
            date_to: None,
            year_from: None,
            year_to: None,
        }
    }
}

fn default_distance() -> f64 {
    DEFAULT_DISTANCE
}

fn default_results() -> u32 {
    DEFAULT_RESULTS
}
