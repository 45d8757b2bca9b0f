use crate::app_context::{AppContext, RequestContext};
use crate::games::requests::StartGameRequest;
use crate::games::responses::{
    CreateGameResponse, GameStatusResponse, GuessResponse, RoundResponse,
};
use crate::games::services::{CreateGameHttpHandler, GameHttpHandler};
use crate::geo::models::LatLng;
use crate::storage::games::HashMapGameStorage;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext<HashMapGameStorage>>,
) -> Json<CreateGameResponse> {
    let response = CreateGameHttpHandler::new(app_context).create().await;
    Json(response)
}

#[axum::debug_handler]
pub async fn status(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<HashMapGameStorage>>,
) -> Json<GameStatusResponse> {
    let request_context = RequestContext {
        session_id: game_id,
    };
    let response = GameHttpHandler::new(app_context, &request_context)
        .status()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn start(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<HashMapGameStorage>>,
    Json(body): Json<StartGameRequest>,
) -> Json<RoundResponse> {
    let request_context = RequestContext {
        session_id: game_id,
    };
    let response = GameHttpHandler::new(app_context, &request_context)
        .start(body.region)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn next_round(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<HashMapGameStorage>>,
) -> Json<RoundResponse> {
    let request_context = RequestContext {
        session_id: game_id,
    };
    let response = GameHttpHandler::new(app_context, &request_context)
        .next_round()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn guess(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<HashMapGameStorage>>,
    Json(guess): Json<LatLng>,
) -> Json<GuessResponse> {
    let request_context = RequestContext {
        session_id: game_id,
    };
    let response = GameHttpHandler::new(app_context, &request_context)
        .guess(guess)
        .await;
    Json(response)
}
