use crate::app_context::{AppContext, RequestContext};
use crate::browse::requests::OccurrencesQueryParams;
use crate::browse::responses::{CreateBrowserResponse, OccurrencesResponse};
use crate::browse::services::{BrowseHttpHandler, CreateBrowserHttpHandler};
use crate::storage::games::HashMapGameStorage;
use axum::extract::{Path, Query, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext<HashMapGameStorage>>,
) -> Json<CreateBrowserResponse> {
    let response = CreateBrowserHttpHandler::new(app_context).create().await;
    Json(response)
}

#[axum::debug_handler]
pub async fn occurrences(
    Path(browser_id): Path<String>,
    Query(params): Query<OccurrencesQueryParams>,
    State(app_context): State<AppContext<HashMapGameStorage>>,
) -> Json<OccurrencesResponse> {
    let request_context = RequestContext {
        session_id: browser_id,
    };
    let response = BrowseHttpHandler::new(app_context, &request_context)
        .occurrences(params)
        .await;
    Json(response)
}
