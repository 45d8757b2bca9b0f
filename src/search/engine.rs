use crate::gbif::models::{Occurrence, OccurrenceQuery};
use crate::gbif::OccurrenceApi;
use crate::geo::models::{GeoRegion, LatLng, SearchWindow};
use crate::geo::{distance_meters, DistanceUnit};
use crate::search::errors::SearchError;
use crate::search::filters::OccurrenceFilter;
use crate::search::settings::SearchSettings;
use rand::Rng;
use std::collections::HashSet;
use std::future::Future;
use tokio::time::Instant;

/// Browser-mode request: the `count` nearest qualifying occurrences around `center`.
#[derive(Clone, Debug)]
pub struct NearbyQuery {
    pub center: LatLng,
    pub radius: f64,
    pub unit: DistanceUnit,
    pub count: u32,
    pub years: Option<(i32, i32)>,
    pub filter: OccurrenceFilter,
}

pub struct SearchEngine<'a> {
    api: &'a dyn OccurrenceApi,
    settings: &'a SearchSettings,
}

impl<'a> SearchEngine<'a> {
    pub fn new(api: &'a dyn OccurrenceApi, settings: &'a SearchSettings) -> Self {
        Self { api, settings }
    }

    /// Samples random windows inside `region` until one holds an occurrence passing `filter`.
    pub async fn find_one<R>(
        &self,
        region: &GeoRegion,
        filter: &OccurrenceFilter,
        rng: &mut R,
    ) -> Result<Occurrence, SearchError>
    where
        R: Rng + Send,
    {
        let start_time = Instant::now();
        let result = self
            .within_budget(self.find_one_unbounded(region, filter, rng))
            .await;
        tracing::info!(
            task = "occurrence_search",
            mode = "random",
            found = result.is_ok(),
            outcome = outcome_label(&result),
            processing_time_ms = start_time.elapsed().as_millis(),
        );
        result
    }

    /// Pages through the window around `query.center` until `query.count` occurrences pass the
    /// filter or the follow-up budget runs out. The result is sorted nearest first.
    pub async fn find_near(&self, query: &NearbyQuery) -> Result<Vec<Occurrence>, SearchError> {
        let start_time = Instant::now();
        let result = self.within_budget(self.find_near_unbounded(query)).await;
        tracing::info!(
            task = "occurrence_search",
            mode = "nearby",
            found = result.as_ref().map_or(0, Vec::len),
            outcome = outcome_label(&result),
            processing_time_ms = start_time.elapsed().as_millis(),
        );
        result
    }

    async fn within_budget<T>(
        &self,
        search: impl Future<Output = Result<T, SearchError>>,
    ) -> Result<T, SearchError> {
        tokio::time::timeout(self.settings.budget, search)
            .await
            .unwrap_or(Err(SearchError::Timeout(self.settings.budget)))
    }

    async fn find_one_unbounded<R>(
        &self,
        region: &GeoRegion,
        filter: &OccurrenceFilter,
        rng: &mut R,
    ) -> Result<Occurrence, SearchError>
    where
        R: Rng + Send,
    {
        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            let candidate = region.sample(rng);
            let window = SearchWindow::around(candidate, self.settings.game_window_half_width);
            let query = OccurrenceQuery::new(window, self.settings.game_page_size);
            let page = self.api.search_occurrences(&query).await?;
            let found = page
                .results
                .into_iter()
                .filter_map(Occurrence::from_record)
                .find(|occurrence| filter.matches(occurrence));
            if let Some(mut occurrence) = found {
                occurrence.distance = Some(distance_meters(candidate, occurrence.location));
                tracing::debug!(attempts, lat = candidate.lat, lng = candidate.lng, "Found occurrence");
                return Ok(occurrence);
            }
            if self
                .settings
                .max_attempts
                .is_some_and(|max_attempts| attempts >= max_attempts)
            {
                return Err(SearchError::NoResultsFound);
            }
            tracing::debug!(attempts, lat = candidate.lat, lng = candidate.lng, "Nothing usable, retrying");
            tokio::time::sleep(self.settings.retry_delay).await;
        }
    }

    async fn find_near_unbounded(&self, query: &NearbyQuery) -> Result<Vec<Occurrence>, SearchError> {
        let wanted = query.count.max(1);
        let window = SearchWindow::around(query.center, query.unit.to_degrees(query.radius));
        let mut request = OccurrenceQuery::new(window, wanted).with_years(query.years);
        let mut accumulated: Vec<Occurrence> = Vec::new();
        let mut seen_keys = HashSet::new();
        let mut follow_ups = 0;

        loop {
            let page = self.api.search_occurrences(&request).await?;
            let fetched = page.results.len();
            let qualifying = page
                .results
                .into_iter()
                .filter_map(Occurrence::from_record)
                .filter(|occurrence| query.filter.matches(occurrence));
            for occurrence in qualifying {
                // Keyless records can't be deduplicated and are kept.
                if occurrence.key.map_or(true, |key| seen_keys.insert(key)) {
                    accumulated.push(occurrence);
                }
            }
            let exhausted = page.end_of_records || fetched == 0;
            if accumulated.len() >= wanted as usize
                || exhausted
                || follow_ups >= self.settings.max_follow_ups
            {
                break;
            }
            follow_ups += 1;
            let page_size = if page.limit > 0 {
                page.limit
            } else {
                u64::from(request.limit)
            };
            request = request.with_offset(page.offset + page_size);
        }

        if accumulated.is_empty() {
            return Err(SearchError::NoResultsFound);
        }
        Ok(rank_by_distance(accumulated, query.center, wanted as usize))
    }
}

/// Stable nearest-first ordering, so equally distant occurrences keep their fetch order.
pub fn rank_by_distance(
    mut occurrences: Vec<Occurrence>,
    reference: LatLng,
    keep: usize,
) -> Vec<Occurrence> {
    for occurrence in occurrences.iter_mut() {
        occurrence.distance = Some(distance_meters(reference, occurrence.location));
    }
    occurrences.sort_by(|a, b| {
        a.distance
            .unwrap_or(f64::INFINITY)
            .total_cmp(&b.distance.unwrap_or(f64::INFINITY))
    });
    occurrences.truncate(keep);
    occurrences
}

fn outcome_label<T>(result: &Result<T, SearchError>) -> &'static str {
    match result {
        Ok(_) => "found",
        Err(SearchError::NoResultsFound) => "no_results",
        Err(SearchError::Timeout(_)) => "timeout",
        Err(SearchError::Transport(_)) => "transport_error",
    }
}
