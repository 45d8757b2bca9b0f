use crate::geo::regions::RegionId;
use crate::geo::responses::{RegionInfo, RegionsResponse};
use axum::response::Json;

#[axum::debug_handler]
pub async fn regions() -> Json<RegionsResponse> {
    let regions = RegionId::ALL
        .into_iter()
        .map(|id| {
            let region = id.region();
            RegionInfo {
                id,
                lat_min: *region.lat_range().start(),
                lat_max: *region.lat_range().end(),
                lng_min: *region.lng_range().start(),
                lng_max: *region.lng_range().end(),
                profile: region.profile(),
                max_scoring_distance_km: region.profile().max_distance_km(),
            }
        })
        .collect();
    Json(RegionsResponse {
        error: false,
        regions,
    })
}
