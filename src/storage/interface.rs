use crate::gbif::models::Occurrence;
use crate::games::models::{GameFlowError, GameSession, GuessOutcome, RoundTicket};
use crate::geo::models::LatLng;
use crate::geo::regions::RegionId;

pub trait IGameStorage: GameRepo + GameFlowHandler + Clone + Send + Sync + 'static {}

pub trait GameRepo {
    async fn create(&self) -> String;

    async fn snapshot(&self, game_id: &str) -> Option<GameSession>;
}

pub trait GameFlowHandler {
    async fn start(&self, game_id: &str, region: RegionId) -> Result<(), GameFlowError>;

    async fn begin_round_search(&self, game_id: &str) -> Result<RoundTicket, GameFlowError>;

    async fn location_found(
        &self,
        game_id: &str,
        ticket: RoundTicket,
        target: Occurrence,
    ) -> Result<(), GameFlowError>;

    async fn search_failed(&self, game_id: &str, ticket: RoundTicket);

    async fn submit_guess(&self, game_id: &str, guess: LatLng)
        -> Result<GuessOutcome, GameFlowError>;
}
