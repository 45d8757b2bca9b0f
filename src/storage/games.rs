use crate::gbif::models::Occurrence;
use crate::games::consts::GAME_ID_LENGTH;
use crate::games::models::{GameFlowError, GameSession, GuessOutcome, RoundTicket};
use crate::geo::models::LatLng;
use crate::geo::regions::RegionId;
use crate::storage::interface::{GameFlowHandler, GameRepo, IGameStorage};
use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct HashMapGameStorage {
    storage: Arc<RwLock<HashMap<String, GameSession>>>,
}

impl IGameStorage for HashMapGameStorage {}

impl HashMapGameStorage {
    async fn with_game<T>(
        &self,
        game_id: &str,
        action: impl FnOnce(&mut GameSession) -> Result<T, GameFlowError>,
    ) -> Result<T, GameFlowError> {
        let mut storage = self.storage.write().await;
        let game = storage
            .get_mut(game_id)
            .ok_or(GameFlowError::GameNotFound)?;
        action(game)
    }
}

impl GameRepo for HashMapGameStorage {
    async fn create(&self) -> String {
        let mut storage = self.storage.write().await;
        let game_id = loop {
            let candidate = generate_game_id();
            if !storage.contains_key(&candidate) {
                break candidate;
            }
        };
        storage.insert(game_id.clone(), GameSession::default());
        game_id
    }

    async fn snapshot(&self, game_id: &str) -> Option<GameSession> {
        self.storage.read().await.get(game_id).cloned()
    }
}

impl GameFlowHandler for HashMapGameStorage {
    async fn start(&self, game_id: &str, region: RegionId) -> Result<(), GameFlowError> {
        self.with_game(game_id, |game| game.start(region)).await
    }

    async fn begin_round_search(&self, game_id: &str) -> Result<RoundTicket, GameFlowError> {
        self.with_game(game_id, GameSession::begin_round_search)
            .await
    }

    async fn location_found(
        &self,
        game_id: &str,
        ticket: RoundTicket,
        target: Occurrence,
    ) -> Result<(), GameFlowError> {
        self.with_game(game_id, |game| game.location_found(ticket, target))
            .await
    }

    async fn search_failed(&self, game_id: &str, ticket: RoundTicket) {
        if let Some(game) = self.storage.write().await.get_mut(game_id) {
            game.search_failed(ticket);
        }
    }

    async fn submit_guess(
        &self,
        game_id: &str,
        guess: LatLng,
    ) -> Result<GuessOutcome, GameFlowError> {
        self.with_game(game_id, |game| game.submit_guess(guess))
            .await
    }
}

fn generate_game_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(GAME_ID_LENGTH)
        .map(char::from)
        .collect()
}
