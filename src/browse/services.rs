use crate::app_context::{AppContext, RequestContext};
use crate::browse::consts::{DEFAULT_YEAR_FROM, DEFAULT_YEAR_TO, MAX_RESULTS};
use crate::browse::requests::OccurrencesQueryParams;
use crate::browse::responses::{
    BrowseErrorCode, BrowseNotice, CreateBrowserResponse, OccurrenceView, OccurrencesResponse,
};
use crate::geo::models::LatLng;
use crate::search::engine::{NearbyQuery, SearchEngine};
use crate::search::enrichment::Enricher;
use crate::search::filters::{KingdomFilter, MonthRange, OccurrenceFilter};
use crate::storage::interface::IGameStorage;

pub struct CreateBrowserHttpHandler<GS: IGameStorage> {
    app_context: AppContext<GS>,
}

impl<GS> CreateBrowserHttpHandler<GS>
where
    GS: IGameStorage,
{
    pub fn new(app_context: AppContext<GS>) -> Self {
        Self { app_context }
    }

    pub async fn create(&self) -> CreateBrowserResponse {
        CreateBrowserResponse {
            error: false,
            browser_id: self.app_context.browsers.create().await,
        }
    }
}

pub struct BrowseHttpHandler<'a, GS: IGameStorage> {
    app_context: AppContext<GS>,
    request_context: &'a RequestContext,
}

impl<'a, GS> BrowseHttpHandler<'a, GS>
where
    GS: IGameStorage,
{
    pub fn new(app_context: AppContext<GS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    /// Nearest occurrences around the requested point, enriched with names and snippets.
    /// A newer search in the same browser session makes this one report `searchSuperseded`.
    pub async fn occurrences(&self, params: OccurrencesQueryParams) -> OccurrencesResponse {
        let Some(tracker) = self
            .app_context
            .browsers
            .tracker(&self.request_context.session_id)
            .await
        else {
            return OccurrencesResponse::failed(BrowseErrorCode::BrowserNotFound, None);
        };
        let (center, notice) = match (params.lat, params.lng) {
            (Some(lat), Some(lng)) => (LatLng { lat, lng }, None),
            _ => (LatLng::ORIGIN, Some(BrowseNotice::GeolocationUnavailable)),
        };
        let Some(query) = nearby_query(center, params) else {
            return OccurrencesResponse::failed(BrowseErrorCode::InvalidQuery, notice);
        };

        let ticket = tracker.begin();
        let settings = &self.app_context.settings;
        let result = SearchEngine::new(self.app_context.gbif.as_ref(), settings)
            .find_near(&query)
            .await;
        let occurrences = match result {
            Ok(occurrences) => occurrences,
            Err(_) if !tracker.is_current(ticket) => {
                return OccurrencesResponse::failed(BrowseErrorCode::SearchSuperseded, notice);
            }
            Err(err) => return OccurrencesResponse::failed(&err, notice),
        };
        let enriched = Enricher::new(
            self.app_context.gbif.as_ref(),
            self.app_context.encyclopedia.as_ref(),
            &settings.vernacular_language,
        )
        .enrich_all(occurrences)
        .await;
        if !tracker.is_current(ticket) {
            tracing::debug!(
                browser_id = self.request_context.session_id,
                "Dropping results of a superseded search",
            );
            return OccurrencesResponse::failed(BrowseErrorCode::SearchSuperseded, notice);
        }

        OccurrencesResponse {
            error: false,
            error_code: None,
            notice,
            center: Some(center),
            occurrences: Some(enriched.into_iter().map(OccurrenceView::from).collect()),
        }
    }
}

/// Validates the query string. `None` when a value is out of range.
fn nearby_query(center: LatLng, params: OccurrencesQueryParams) -> Option<NearbyQuery> {
    if !center.is_valid()
        || !params.distance.is_finite()
        || params.distance <= 0.0
        || !(1..=MAX_RESULTS).contains(&params.results)
    {
        return None;
    }
    let months = match (params.month_from, params.month_to) {
        (None, None) => None,
        (from, to) => Some(MonthRange::new(from.unwrap_or(1), to.unwrap_or(12))?),
    };
    let dates = match (params.date_from, params.date_to) {
        (None, None) => None,
        (Some(from), Some(to)) if from > to => return None,
        (from, to) => Some((
            from.unwrap_or(chrono::NaiveDate::MIN),
            to.unwrap_or(chrono::NaiveDate::MAX),
        )),
    };
    let years = (
        params.year_from.unwrap_or(DEFAULT_YEAR_FROM),
        params.year_to.unwrap_or(DEFAULT_YEAR_TO),
    );
    if years.0 > years.1 {
        return None;
    }
    let filter = OccurrenceFilter::with_media()
        .kingdom(KingdomFilter::parse(params.kingdom.as_deref()))
        .locality(params.locality)
        .months(months)
        .dates(dates);
    Some(NearbyQuery {
        center,
        radius: params.distance,
        unit: params.unit,
        count: params.results,
        years: Some(years),
        filter,
    })
}
