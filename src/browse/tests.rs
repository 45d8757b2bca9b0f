use crate::browse::consts::LOCALITY_NOT_AVAILABLE;
use crate::browse::responses::{
    BrowseErrorCode, BrowseNotice, CreateBrowserResponse, OccurrencesResponse,
};
use crate::gbif::errors::GbifError;
use crate::gbif::models::OccurrenceSearchResponse;
use crate::gbif::tests::{page, record, FakeGbif, SearchGate};
use crate::geo::models::LatLng;
use crate::geo::{distance_km, round_to_hundredths};
use crate::http::tests::{test_server, test_server_with};
use crate::personal_best::tests::InMemoryPersonalBest;
use crate::personal_best::PersonalBest;
use crate::search::enrichment::NO_COMMON_NAME;
use crate::wikipedia::tests::FakeEncyclopedia;
use axum_test::TestServer;
use std::sync::Arc;

fn server_with(gbif: Arc<FakeGbif>, encyclopedia: FakeEncyclopedia) -> TestServer {
    test_server_with(
        gbif,
        Arc::new(encyclopedia),
        PersonalBest::new(Arc::new(InMemoryPersonalBest::default()), 0),
    )
}

async fn create_browser(server: &TestServer) -> String {
    let response = server.post("/browsers").await;
    response.assert_status_ok();
    let body = response.json::<CreateBrowserResponse>();
    assert!(!body.error);
    body.browser_id
}

#[tokio::test]
async fn test_nearest_occurrences_are_enriched_and_sorted() {
    let gbif = Arc::new(
        FakeGbif::new()
            .with_page(page(
                0,
                4,
                vec![
                    record(1, 0.05, 0.05, true),
                    record(2, 0.01, 0.01, true),
                    record(4, 0.0, 0.0, false),
                    record(3, 0.03, 0.0, true),
                ],
            ))
            .with_species(20, "Plantae")
            .with_vernacular_name(20, "deu", "Gänseblümchen")
            .with_vernacular_name(20, "eng", "Daisy"),
    );
    let server = server_with(
        gbif.clone(),
        FakeEncyclopedia::new().with_entry("Species 2", "A small flower", 42),
    );
    let browser_id = create_browser(&server).await;

    let response = server
        .get(&format!("/browsers/{browser_id}/occurrences"))
        .add_query_param("lat", 0.0)
        .add_query_param("lng", 0.0)
        .add_query_param("distance", 10)
        .add_query_param("unit", "km")
        .add_query_param("results", 3)
        .await;

    response.assert_status_ok();
    let body = response.json::<OccurrencesResponse>();
    assert!(!body.error);
    assert_eq!(body.notice, None);
    let occurrences = body.occurrences.unwrap();
    let keys = occurrences
        .iter()
        .map(|occurrence| occurrence.key.unwrap())
        .collect::<Vec<_>>();
    assert_eq!(keys, vec![2, 3, 1]);

    let nearest = &occurrences[0];
    assert_eq!(nearest.common_name, "Daisy");
    assert_eq!(nearest.kingdom, "Plantae");
    assert_eq!(nearest.scientific_name.as_deref(), Some("Species 2"));
    assert_eq!(nearest.locality, LOCALITY_NOT_AVAILABLE);
    assert_eq!(
        nearest.image_url.as_deref(),
        Some("https://images.example/2.jpg")
    );
    assert_eq!(
        nearest.distance_km,
        round_to_hundredths(distance_km(
            LatLng::ORIGIN,
            LatLng {
                lat: 0.01,
                lng: 0.01
            }
        ))
    );
    assert!(nearest.distance_miles < nearest.distance_km);
    let entry = nearest.encyclopedia.as_ref().unwrap();
    assert_eq!(entry.snippet, "A small flower");
    assert_eq!(entry.url, "https://en.wikipedia.org/?curid=42");

    let farthest = &occurrences[2];
    assert_eq!(farthest.common_name, NO_COMMON_NAME);
    assert_eq!(farthest.kingdom, "Animalia");
    assert_eq!(
        farthest.image_url.as_deref(),
        Some("https://images.example/1.jpg")
    );
    assert_eq!(farthest.encyclopedia, None);

    let queries = gbif.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].limit, 3);
    assert_eq!(queries[0].years, Some((2018, 2024)));
    assert!((queries[0].window.lat_max - 0.08).abs() < 1e-9);
}

#[tokio::test]
async fn test_missing_position_falls_back_to_origin() {
    let gbif = Arc::new(FakeGbif::new().with_page(page(0, 10, vec![record(1, 0.0, 0.0, true)])));
    let server = server_with(gbif, FakeEncyclopedia::new());
    let browser_id = create_browser(&server).await;

    let body = server
        .get(&format!("/browsers/{browser_id}/occurrences"))
        .add_query_param("lat", 51.5)
        .await
        .json::<OccurrencesResponse>();

    assert!(!body.error);
    assert_eq!(body.notice, Some(BrowseNotice::GeolocationUnavailable));
    assert_eq!(body.center, Some(LatLng::ORIGIN));
    assert_eq!(body.occurrences.unwrap().len(), 1);
}

#[tokio::test]
async fn test_kingdom_filter_can_exclude_everything() {
    let gbif = Arc::new(FakeGbif::new().with_page(OccurrenceSearchResponse {
        end_of_records: true,
        ..page(0, 10, vec![record(1, 0.0, 0.0, true), record(2, 0.0, 0.0, true)])
    }));
    let server = server_with(gbif, FakeEncyclopedia::new());
    let browser_id = create_browser(&server).await;

    let body = server
        .get(&format!("/browsers/{browser_id}/occurrences"))
        .add_query_param("lat", 0.0)
        .add_query_param("lng", 0.0)
        .add_query_param("kingdom", "Plantae")
        .await
        .json::<OccurrencesResponse>();

    assert_eq!(body.error_code, Some(BrowseErrorCode::NoResultsFound));
    assert_eq!(body.occurrences, None);
}

#[tokio::test]
async fn test_occurrences_without_media_are_not_shown() {
    let gbif = Arc::new(FakeGbif::new().with_page(OccurrenceSearchResponse {
        end_of_records: true,
        ..page(0, 2, vec![record(1, 0.0, 0.0, false), record(2, 0.0, 0.0, false)])
    }));
    let server = server_with(gbif, FakeEncyclopedia::new());
    let browser_id = create_browser(&server).await;

    let body = server
        .get(&format!("/browsers/{browser_id}/occurrences"))
        .add_query_param("lat", 0.0)
        .add_query_param("lng", 0.0)
        .add_query_param("results", 2)
        .await
        .json::<OccurrencesResponse>();

    assert_eq!(body.error_code, Some(BrowseErrorCode::NoResultsFound));
    assert_eq!(body.occurrences, None);
}

#[tokio::test]
async fn test_newer_search_supersedes_older_one() {
    let gate = Arc::new(SearchGate::default());
    let gbif = Arc::new(
        FakeGbif::new()
            .with_gate(gate.clone())
            .with_page(page(0, 1, vec![record(1, 0.0, 0.0, true)]))
            .with_page(page(0, 1, vec![record(2, 0.0, 0.0, true)])),
    );
    let server = server_with(gbif.clone(), FakeEncyclopedia::new());
    let browser_id = create_browser(&server).await;
    let path = format!("/browsers/{browser_id}/occurrences");

    let older = server
        .get(&path)
        .add_query_param("lat", 0.0)
        .add_query_param("lng", 0.0)
        .add_query_param("results", 1);
    let newer = async {
        gate.entered.notified().await;
        let response = server
            .get(&path)
            .add_query_param("lat", 0.0)
            .add_query_param("lng", 0.0)
            .add_query_param("results", 1)
            .await;
        gate.release.notify_one();
        response
    };
    let (older, newer) = tokio::join!(older, newer);

    let older = older.json::<OccurrencesResponse>();
    assert_eq!(older.error_code, Some(BrowseErrorCode::SearchSuperseded));
    assert_eq!(older.occurrences, None);
    let newer = newer.json::<OccurrencesResponse>();
    assert!(!newer.error);
    let keys = newer
        .occurrences
        .unwrap()
        .iter()
        .map(|occurrence| occurrence.key.unwrap())
        .collect::<Vec<_>>();
    assert_eq!(keys, vec![1]);
    assert_eq!(gbif.search_count(), 2);
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    let gbif = Arc::new(FakeGbif::new().with_error(GbifError::Api {
        status: 503,
        message: String::from("unavailable"),
    }));
    let server = server_with(gbif, FakeEncyclopedia::new());
    let browser_id = create_browser(&server).await;

    let body = server
        .get(&format!("/browsers/{browser_id}/occurrences"))
        .add_query_param("lat", 0.0)
        .add_query_param("lng", 0.0)
        .await
        .json::<OccurrencesResponse>();

    assert_eq!(body.error_code, Some(BrowseErrorCode::TransportError));
}

#[tokio::test]
async fn test_invalid_queries_are_rejected_before_searching() {
    let gbif = Arc::new(FakeGbif::new());
    let server = server_with(gbif.clone(), FakeEncyclopedia::new());
    let browser_id = create_browser(&server).await;
    let path = format!("/browsers/{browser_id}/occurrences");

    let cases = [
        ("results", "0"),
        ("results", "301"),
        ("distance", "-5"),
        ("monthFrom", "13"),
        ("yearFrom", "2030"),
        ("dateFrom", "2024-05-02"),
    ];
    for (name, value) in cases {
        let body = server
            .get(&path)
            .add_query_param("lat", 0.0)
            .add_query_param("lng", 0.0)
            .add_query_param("dateTo", "2024-05-01")
            .add_query_param(name, value)
            .await
            .json::<OccurrencesResponse>();
        assert_eq!(
            body.error_code,
            Some(BrowseErrorCode::InvalidQuery),
            "{name}={value}"
        );
    }
    assert_eq!(gbif.search_count(), 0);
}

#[tokio::test]
async fn test_unknown_browser() {
    let server = test_server();

    let response = server.get("/browsers/missing/occurrences").await;

    response.assert_json(&OccurrencesResponse {
        error: true,
        error_code: Some(BrowseErrorCode::BrowserNotFound),
        notice: None,
        center: None,
        occurrences: None,
    });
}
