use crate::geo::models::GeoRegion;
use crate::scoring::ScoringProfile;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegionId {
    Global,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Africa,
    Asia,
    Oceania,
}

impl RegionId {
    pub const ALL: [RegionId; 7] = [
        RegionId::Global,
        RegionId::Europe,
        RegionId::NorthAmerica,
        RegionId::SouthAmerica,
        RegionId::Africa,
        RegionId::Asia,
        RegionId::Oceania,
    ];

    pub fn region(self) -> GeoRegion {
        let (lat_range, lng_range, profile) = match self {
            // Polar latitudes are left out: almost nothing there has photos.
            RegionId::Global => (-50.0..=60.0, -180.0..=180.0, ScoringProfile::Wide),
            RegionId::Europe => (37.0..=63.0, -10.0..=32.0, ScoringProfile::Narrow),
            RegionId::NorthAmerica => (15.0..=60.0, -130.0..=-60.0, ScoringProfile::Narrow),
            RegionId::SouthAmerica => (-50.0..=10.0, -80.0..=-35.0, ScoringProfile::Narrow),
            RegionId::Africa => (-35.0..=35.0, -17.0..=50.0, ScoringProfile::Narrow),
            RegionId::Asia => (5.0..=55.0, 60.0..=145.0, ScoringProfile::Narrow),
            RegionId::Oceania => (-45.0..=-10.0, 110.0..=180.0, ScoringProfile::Narrow),
        };
        match GeoRegion::new(lat_range, lng_range, profile) {
            Ok(region) => region,
            Err(err) => unreachable!("predefined region {self:?} has invalid bounds: {err:?}"),
        }
    }
}
