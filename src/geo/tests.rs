use crate::geo::models::{GeoRegion, LatLng, RegionBoundsError, SearchWindow};
use crate::geo::regions::RegionId;
use crate::geo::{distance_km, distance_meters, DistanceUnit};
use crate::http::tests::test_server;
use crate::scoring::ScoringProfile;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_distance_between_same_points_is_zero() {
    let point = LatLng {
        lat: 48.8566,
        lng: 2.3522,
    };
    assert_eq!(distance_meters(point, point), 0.0);
}

#[test]
fn test_distance_paris_london() {
    let paris = LatLng {
        lat: 48.8566,
        lng: 2.3522,
    };
    let london = LatLng {
        lat: 51.5074,
        lng: -0.1278,
    };
    let km = distance_km(paris, london);
    assert!((km - 343.5).abs() < 2.0, "got {km} km");
}

#[test]
fn test_distance_quarter_meridian() {
    let equator = LatLng { lat: 0.0, lng: 0.0 };
    let pole = LatLng { lat: 90.0, lng: 0.0 };
    let km = distance_km(equator, pole);
    assert!((km - 10_007.5).abs() < 1.0, "got {km} km");
}

#[test]
fn test_region_rejects_invalid_bounds() {
    assert_eq!(
        GeoRegion::new(-91.0..=10.0, 0.0..=10.0, ScoringProfile::Wide),
        Err(RegionBoundsError::LatitudeOutOfRange)
    );
    assert_eq!(
        GeoRegion::new(0.0..=10.0, -180.0..=181.0, ScoringProfile::Wide),
        Err(RegionBoundsError::LongitudeOutOfRange)
    );
    assert_eq!(
        GeoRegion::new(10.0..=0.0, 0.0..=10.0, ScoringProfile::Wide),
        Err(RegionBoundsError::EmptyRange)
    );
}

#[test]
fn test_predefined_regions_are_valid() {
    for id in RegionId::ALL {
        let region = id.region();
        assert!(region.lat_range().start() <= region.lat_range().end());
        assert!(region.lng_range().start() <= region.lng_range().end());
    }
    assert_eq!(RegionId::Global.region().profile(), ScoringProfile::Wide);
    assert_eq!(RegionId::Europe.region().profile(), ScoringProfile::Narrow);
}

#[test]
fn test_sampled_points_stay_inside_region() {
    let mut rng = StdRng::seed_from_u64(7);
    let region = RegionId::Europe.region();
    for _ in 0..1000 {
        assert!(region.contains(region.sample(&mut rng)));
    }
}

#[test]
fn test_same_seed_gives_same_candidates() {
    let region = RegionId::Global.region();
    let mut first = StdRng::seed_from_u64(42);
    let mut second = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        assert_eq!(region.sample(&mut first), region.sample(&mut second));
    }
}

#[test]
fn test_search_window_is_clamped() {
    let window = SearchWindow::around(
        LatLng {
            lat: 89.98,
            lng: -179.99,
        },
        0.05,
    );
    assert_eq!(window.lat_max, 90.0);
    assert_eq!(window.lng_min, -180.0);
    assert!((window.lat_min - 89.93).abs() < 1e-9);
    assert!((window.lng_max - -179.94).abs() < 1e-9);
}

#[test]
fn test_radius_to_degrees() {
    assert!((DistanceUnit::Km.to_degrees(10.0) - 0.08).abs() < 1e-12);
    assert!((DistanceUnit::Miles.to_degrees(10.0) - 0.14).abs() < 1e-12);
}

#[tokio::test]
async fn test_regions_endpoint_lists_all_regions() {
    let server = test_server();

    let response = server.get("/regions").await;

    response.assert_status_ok();
    let body = response.json::<crate::geo::responses::RegionsResponse>();
    assert!(!body.error);
    assert_eq!(body.regions.len(), RegionId::ALL.len());
    assert_eq!(body.regions[0].id, RegionId::Global);
    assert_eq!(body.regions[0].max_scoring_distance_km, 4000.0);
}
