use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::games::HashMapGameStorage;
use crate::{browse, games, geo, health, http::cors, personal_best};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<HashMapGameStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let scores_routes =
        Router::new().route("/personal-best", get(personal_best::handlers::personal_best));
    let games_routes = Router::new()
        .route("/", post(games::handlers::create))
        .route("/:game_id", get(games::handlers::status))
        .route("/:game_id/start", post(games::handlers::start))
        .route("/:game_id/next-round", post(games::handlers::next_round))
        .route("/:game_id/guess", post(games::handlers::guess));
    let browsers_routes = Router::new()
        .route("/", post(browse::handlers::create))
        .route("/:browser_id/occurrences", get(browse::handlers::occurrences));

    Router::new()
        .nest("/health", health_routes)
        .route("/regions", get(geo::handlers::regions))
        .nest("/scores", scores_routes)
        .nest("/games", games_routes)
        .nest("/browsers", browsers_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
