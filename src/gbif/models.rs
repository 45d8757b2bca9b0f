use crate::geo::models::{LatLng, SearchWindow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parameters of one `/occurrence/search` request.
#[derive(Clone, Debug, PartialEq)]
pub struct OccurrenceQuery {
    pub window: SearchWindow,
    pub years: Option<(i32, i32)>,
    pub limit: u32,
    pub offset: u64,
}

impl OccurrenceQuery {
    pub fn new(window: SearchWindow, limit: u32) -> Self {
        Self {
            window,
            years: None,
            limit,
            offset: 0,
        }
    }

    pub fn with_years(mut self, years: Option<(i32, i32)>) -> Self {
        self.years = years;
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn as_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            (
                "decimalLatitude",
                format!("{},{}", self.window.lat_min, self.window.lat_max),
            ),
            (
                "decimalLongitude",
                format!("{},{}", self.window.lng_min, self.window.lng_max),
            ),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some((from, to)) = self.years {
            params.push(("year", format!("{from},{to}")));
        }
        params
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceSearchResponse {
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub end_of_records: bool,
    #[serde(default)]
    pub results: Vec<OccurrenceRecord>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceRecord {
    pub key: Option<u64>,
    pub taxon_key: Option<u64>,
    pub decimal_latitude: Option<f64>,
    pub decimal_longitude: Option<f64>,
    #[serde(default)]
    pub media: Vec<MediaRecord>,
    pub verbatim_locality: Option<String>,
    pub locality: Option<String>,
    pub scientific_name: Option<String>,
    pub kingdom: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRecord {
    pub identifier: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesRecord {
    pub kingdom: Option<String>,
    pub canonical_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct VernacularNamesResponse {
    #[serde(default)]
    pub results: Vec<VernacularName>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VernacularName {
    pub vernacular_name: Option<String>,
    pub language: Option<String>,
}

/// An occurrence with usable coordinates, as consumed by the search engine.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub key: Option<u64>,
    pub taxon_key: Option<u64>,
    pub location: LatLng,
    pub media: Vec<String>,
    pub locality: Option<String>,
    pub scientific_name: Option<String>,
    pub kingdom: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    /// Meters from the reference point of the search that produced this occurrence.
    pub distance: Option<f64>,
}

impl Occurrence {
    /// Records without coordinates can't be placed on a map and are dropped.
    pub fn from_record(record: OccurrenceRecord) -> Option<Self> {
        let location = LatLng {
            lat: record.decimal_latitude?,
            lng: record.decimal_longitude?,
        };
        if !location.is_valid() {
            return None;
        }
        let media = record
            .media
            .into_iter()
            .filter_map(|media| media.identifier)
            .filter(|identifier| !identifier.trim().is_empty())
            .collect();
        let locality = record
            .verbatim_locality
            .filter(|locality| !locality.trim().is_empty())
            .or(record.locality.filter(|locality| !locality.trim().is_empty()));
        Some(Self {
            key: record.key,
            taxon_key: record.taxon_key,
            location,
            media,
            locality,
            scientific_name: record.scientific_name,
            kingdom: record.kingdom,
            year: record.year,
            month: record.month,
            day: record.day,
            distance: None,
        })
    }

    pub fn has_media(&self) -> bool {
        !self.media.is_empty()
    }

    pub fn first_image(&self) -> Option<&str> {
        self.media.first().map(String::as_str)
    }

    pub fn observed_on(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year?, self.month?, self.day?)
    }
}
