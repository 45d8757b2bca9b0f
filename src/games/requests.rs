use crate::geo::regions::RegionId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameRequest {
    #[serde(default = "default_region")]
    pub region: RegionId,
}

fn default_region() -> RegionId {
    RegionId::Global
}
