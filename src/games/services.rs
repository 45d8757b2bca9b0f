use crate::app_context::{AppContext, RequestContext};
use crate::games::consts::ROUNDS_PER_GAME;
use crate::games::models::GuessOutcome;
use crate::games::responses::{
    CreateGameResponse, GameErrorCode, GameStatusResponse, GameSummary, GameView, GuessResponse,
    GuessView, RoundResponse, RoundView,
};
use crate::geo::models::LatLng;
use crate::geo::regions::RegionId;
use crate::geo::round_to_hundredths;
use crate::search::engine::SearchEngine;
use crate::search::filters::OccurrenceFilter;
use crate::storage::interface::IGameStorage;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct CreateGameHttpHandler<GS: IGameStorage> {
    app_context: AppContext<GS>,
}

impl<GS> CreateGameHttpHandler<GS>
where
    GS: IGameStorage,
{
    pub fn new(app_context: AppContext<GS>) -> Self {
        Self { app_context }
    }

    pub async fn create(&self) -> CreateGameResponse {
        let game_id = self.app_context.games.create().await;
        tracing::info!(game_id, "Created a game session");
        CreateGameResponse {
            error: false,
            game_id,
        }
    }
}

pub struct GameHttpHandler<'a, GS: IGameStorage> {
    app_context: AppContext<GS>,
    request_context: &'a RequestContext,
}

impl<'a, GS> GameHttpHandler<'a, GS>
where
    GS: IGameStorage,
{
    pub fn new(app_context: AppContext<GS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    fn game_id(&self) -> &str {
        &self.request_context.session_id
    }

    pub async fn status(&self) -> GameStatusResponse {
        let Some(game) = self.app_context.games.snapshot(self.game_id()).await else {
            return GameStatusResponse {
                error: true,
                error_code: Some(GameErrorCode::GameNotFound),
                game: None,
            };
        };
        let personal_best = self.app_context.personal_best.get().await;
        GameStatusResponse {
            error: false,
            error_code: None,
            game: Some(GameView::new(&game, ROUNDS_PER_GAME, personal_best)),
        }
    }

    /// Resets the session's game and searches the first round.
    pub async fn start(&self, region: RegionId) -> RoundResponse {
        if let Err(err) = self.app_context.games.start(self.game_id(), region).await {
            return RoundResponse::failed(err);
        }
        tracing::info!(game_id = self.game_id(), ?region, "Game started");
        self.search_round().await
    }

    pub async fn next_round(&self) -> RoundResponse {
        self.search_round().await
    }

    async fn search_round(&self) -> RoundResponse {
        let games = &self.app_context.games;
        let ticket = match games.begin_round_search(self.game_id()).await {
            Ok(ticket) => ticket,
            Err(err) => return RoundResponse::failed(err),
        };
        // The session lock is not held while searching; the ticket settles the round later.
        let region = ticket.region.region();
        let filter = OccurrenceFilter::with_media();
        let mut rng = StdRng::from_entropy();
        let result = SearchEngine::new(self.app_context.gbif.as_ref(), &self.app_context.settings)
            .find_one(&region, &filter, &mut rng)
            .await;
        match result {
            Ok(target) => {
                let image_url = target.first_image().unwrap_or_default().to_string();
                if let Err(err) = games
                    .location_found(self.game_id(), ticket, target)
                    .await
                {
                    return RoundResponse::failed(err);
                }
                RoundResponse {
                    error: false,
                    error_code: None,
                    round: Some(RoundView {
                        round: ticket.round,
                        rounds_per_game: ROUNDS_PER_GAME,
                        region: ticket.region,
                        image_url,
                    }),
                }
            }
            Err(err) => {
                tracing::warn!(
                    game_id = self.game_id(),
                    round = ticket.round,
                    error = %err,
                    "Round search failed, the game is aborted",
                );
                games.search_failed(self.game_id(), ticket).await;
                RoundResponse::failed(&err)
            }
        }
    }

    pub async fn guess(&self, guess: LatLng) -> GuessResponse {
        if !guess.is_valid() {
            return GuessResponse::failed(GameErrorCode::InvalidGuess);
        }
        let outcome = match self
            .app_context
            .games
            .submit_guess(self.game_id(), guess)
            .await
        {
            Ok(outcome) => outcome,
            Err(err) => return GuessResponse::failed(err),
        };
        tracing::info!(
            task = "round_scored",
            game_id = self.game_id(),
            round = outcome.round_score.round,
            score = outcome.round_score.score,
            distance_km = outcome.round_score.distance_km,
            game_finished = outcome.game_finished,
        );
        let summary = if outcome.game_finished {
            Some(self.summary(&outcome).await)
        } else {
            None
        };
        GuessResponse {
            error: false,
            error_code: None,
            result: Some(GuessView {
                round: outcome.round_score.round,
                score: outcome.round_score.score,
                distance_km: round_to_hundredths(outcome.round_score.distance_km),
                guess: outcome.guess,
                correct_location: outcome.target.location,
                scientific_name: outcome.target.scientific_name.clone(),
                locality: outcome.target.locality.clone(),
                image_url: outcome.target.first_image().unwrap_or_default().to_string(),
                session_score: outcome.session_score,
                game_finished: outcome.game_finished,
                summary,
            }),
        }
    }

    async fn summary(&self, outcome: &GuessOutcome) -> GameSummary {
        let personal_best = &self.app_context.personal_best;
        let new_personal_best = match personal_best.submit(outcome.session_score).await {
            Ok(improved) => improved,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to persist the personal best");
                false
            }
        };
        GameSummary {
            session_score: outcome.session_score,
            round_scores: outcome
                .round_scores
                .iter()
                .map(|round| round.score)
                .collect(),
            session_best: outcome.session_best,
            personal_best: personal_best.get().await,
            new_personal_best,
        }
    }
}
