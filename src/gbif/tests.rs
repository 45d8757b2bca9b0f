use crate::gbif::errors::GbifError;
use crate::gbif::models::{
    MediaRecord, Occurrence, OccurrenceQuery, OccurrenceRecord, OccurrenceSearchResponse,
    SpeciesRecord, VernacularName,
};
use crate::gbif::OccurrenceApi;
use crate::geo::models::{LatLng, SearchWindow};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Scripted occurrence API. Pages are served in order; once the script runs out every search
/// gets an empty page.
#[derive(Default)]
pub struct FakeGbif {
    pages: Mutex<VecDeque<Result<OccurrenceSearchResponse, GbifError>>>,
    queries: Mutex<Vec<OccurrenceQuery>>,
    species: HashMap<u64, SpeciesRecord>,
    vernacular_names: HashMap<u64, Vec<VernacularName>>,
    gate: Mutex<Option<Arc<SearchGate>>>,
}

/// Holds the next search until released, so tests can interleave requests.
#[derive(Default)]
pub struct SearchGate {
    pub entered: Notify,
    pub release: Notify,
}

impl FakeGbif {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, page: OccurrenceSearchResponse) -> Self {
        self.pages.lock().unwrap().push_back(Ok(page));
        self
    }

    pub fn with_error(self, error: GbifError) -> Self {
        self.pages.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn with_species(mut self, taxon_key: u64, kingdom: &str) -> Self {
        self.species.insert(
            taxon_key,
            SpeciesRecord {
                kingdom: Some(kingdom.to_string()),
                ..Default::default()
            },
        );
        self
    }

    pub fn with_vernacular_name(mut self, taxon_key: u64, language: &str, name: &str) -> Self {
        self.vernacular_names
            .entry(taxon_key)
            .or_default()
            .push(VernacularName {
                vernacular_name: Some(name.to_string()),
                language: Some(language.to_string()),
            });
        self
    }

    /// Parks the next search on `gate` before it takes a page from the script.
    pub fn with_gate(self, gate: Arc<SearchGate>) -> Self {
        *self.gate.lock().unwrap() = Some(gate);
        self
    }

    pub fn search_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn queries(&self) -> Vec<OccurrenceQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl OccurrenceApi for FakeGbif {
    async fn search_occurrences(
        &self,
        query: &OccurrenceQuery,
    ) -> Result<OccurrenceSearchResponse, GbifError> {
        self.queries.lock().unwrap().push(query.clone());
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        let next = self.pages.lock().unwrap().pop_front();
        next.unwrap_or_else(|| {
            Ok(OccurrenceSearchResponse {
                offset: query.offset,
                limit: query.limit as u64,
                ..Default::default()
            })
        })
    }

    async fn species(&self, taxon_key: u64) -> Result<SpeciesRecord, GbifError> {
        self.species
            .get(&taxon_key)
            .cloned()
            .ok_or_else(|| GbifError::Api {
                status: 404,
                message: format!("no species {taxon_key}"),
            })
    }

    async fn vernacular_names(&self, taxon_key: u64) -> Result<Vec<VernacularName>, GbifError> {
        Ok(self
            .vernacular_names
            .get(&taxon_key)
            .cloned()
            .unwrap_or_default())
    }
}

pub fn record(key: u64, lat: f64, lng: f64, with_media: bool) -> OccurrenceRecord {
    OccurrenceRecord {
        key: Some(key),
        taxon_key: Some(key * 10),
        decimal_latitude: Some(lat),
        decimal_longitude: Some(lng),
        media: if with_media {
            vec![MediaRecord {
                identifier: Some(format!("https://images.example/{key}.jpg")),
            }]
        } else {
            vec![]
        },
        scientific_name: Some(format!("Species {key}")),
        kingdom: Some(String::from("Animalia")),
        ..Default::default()
    }
}

pub fn page(offset: u64, limit: u64, results: Vec<OccurrenceRecord>) -> OccurrenceSearchResponse {
    OccurrenceSearchResponse {
        offset,
        limit,
        end_of_records: false,
        results,
    }
}

#[test]
fn test_decode_occurrence_search_response() {
    let raw = r#"{
        "offset": 20,
        "limit": 20,
        "endOfRecords": false,
        "count": 1532,
        "results": [
            {
                "key": 4011711520,
                "taxonKey": 5219404,
                "decimalLatitude": 51.5,
                "decimalLongitude": -0.12,
                "scientificName": "Vulpes vulpes (Linnaeus, 1758)",
                "kingdom": "Animalia",
                "verbatimLocality": "Regent's Park",
                "year": 2021,
                "month": 6,
                "day": 14,
                "media": [{"type": "StillImage", "identifier": "https://img.example/fox.jpg"}]
            },
            {"key": 2, "scientificName": "No coordinates"}
        ]
    }"#;

    let response: OccurrenceSearchResponse = serde_json::from_str(raw).unwrap();

    assert_eq!(response.offset, 20);
    assert_eq!(response.limit, 20);
    let occurrences = response
        .results
        .into_iter()
        .filter_map(Occurrence::from_record)
        .collect::<Vec<_>>();
    assert_eq!(occurrences.len(), 1);
    let fox = &occurrences[0];
    assert_eq!(fox.taxon_key, Some(5219404));
    assert_eq!(fox.first_image(), Some("https://img.example/fox.jpg"));
    assert_eq!(fox.locality.as_deref(), Some("Regent's Park"));
    assert_eq!(
        fox.observed_on(),
        chrono::NaiveDate::from_ymd_opt(2021, 6, 14)
    );
}

#[test]
fn test_locality_falls_back_to_interpreted_value() {
    let mut raw = record(1, 10.0, 10.0, false);
    raw.verbatim_locality = Some(String::from("  "));
    raw.locality = Some(String::from("Kruger NP"));
    let occurrence = Occurrence::from_record(raw).unwrap();
    assert_eq!(occurrence.locality.as_deref(), Some("Kruger NP"));
    assert!(!occurrence.has_media());
}

#[test]
fn test_query_params() {
    let window = SearchWindow::around(LatLng { lat: 10.0, lng: 20.0 }, 0.5);
    let query = OccurrenceQuery::new(window, 25)
        .with_years(Some((2018, 2024)))
        .with_offset(50);

    let params = query.as_query_params();

    assert!(params.contains(&("decimalLatitude", String::from("9.5,10.5"))));
    assert!(params.contains(&("decimalLongitude", String::from("19.5,20.5"))));
    assert!(params.contains(&("limit", String::from("25"))));
    assert!(params.contains(&("offset", String::from("50"))));
    assert!(params.contains(&("year", String::from("2018,2024"))));
}
