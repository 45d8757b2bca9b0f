use crate::geo::regions::RegionId;
use crate::scoring::ScoringProfile;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionsResponse {
    pub error: bool,
    pub regions: Vec<RegionInfo>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionInfo {
    pub id: RegionId,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
    pub profile: ScoringProfile,
    pub max_scoring_distance_km: f64,
}
