use crate::browse::consts::LOCALITY_NOT_AVAILABLE;
use crate::geo::models::LatLng;
use crate::geo::{round_to_hundredths, DistanceUnit};
use crate::search::enrichment::EnrichedOccurrence;
use crate::search::errors::SearchError;
use crate::wikipedia::models::EncyclopediaEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrowserResponse {
    pub error: bool,
    pub browser_id: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrowseErrorCode {
    BrowserNotFound,
    InvalidQuery,
    SearchSuperseded,
    NoResultsFound,
    SearchTimedOut,
    TransportError,
}

impl From<&SearchError> for BrowseErrorCode {
    fn from(error: &SearchError) -> Self {
        match error {
            SearchError::NoResultsFound => BrowseErrorCode::NoResultsFound,
            SearchError::Timeout(_) => BrowseErrorCode::SearchTimedOut,
            SearchError::Transport(_) => BrowseErrorCode::TransportError,
        }
    }
}

/// Non-fatal conditions the client should tell the user about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrowseNotice {
    /// No position was supplied; the search ran around (0, 0).
    GeolocationUnavailable,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrencesResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<BrowseErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<BrowseNotice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<Vec<OccurrenceView>>,
}

impl OccurrencesResponse {
    pub fn failed(error_code: impl Into<BrowseErrorCode>, notice: Option<BrowseNotice>) -> Self {
        Self {
            error: true,
            error_code: Some(error_code.into()),
            notice,
            center: None,
            occurrences: None,
        }
    }
}

/// One list entry of the nearby browser.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<u64>,
    pub common_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    pub kingdom: String,
    pub locality: String,
    pub distance_km: f64,
    pub distance_miles: f64,
    pub location: LatLng,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encyclopedia: Option<EncyclopediaEntry>,
}

impl From<EnrichedOccurrence> for OccurrenceView {
    fn from(enriched: EnrichedOccurrence) -> Self {
        let occurrence = enriched.occurrence;
        let meters = occurrence.distance.unwrap_or_default();
        Self {
            key: occurrence.key,
            common_name: enriched.common_name,
            image_url: occurrence.first_image().map(str::to_string),
            observed_on: occurrence.observed_on(),
            scientific_name: occurrence.scientific_name,
            kingdom: enriched.kingdom,
            locality: occurrence
                .locality
                .unwrap_or_else(|| String::from(LOCALITY_NOT_AVAILABLE)),
            distance_km: round_to_hundredths(DistanceUnit::Km.from_meters(meters)),
            distance_miles: round_to_hundredths(DistanceUnit::Miles.from_meters(meters)),
            location: occurrence.location,
            encyclopedia: enriched.encyclopedia,
        }
    }
}
