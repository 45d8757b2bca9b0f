use crate::games::models::{GameFlowError, GameSession, GameStatus, RoundScore};
use crate::geo::models::LatLng;
use crate::geo::regions::RegionId;
use crate::search::errors::SearchError;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    pub error: bool,
    pub game_id: String,
}

/// All possible reasons why a game action may be refused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameErrorCode {
    GameNotFound,
    GameAlreadyInProgress,
    GameNotInProgress,
    RoundSearchInProgress,
    GuessPending,
    NotAwaitingGuess,
    SearchSuperseded,
    InvalidGuess,
    NoResultsFound,
    SearchTimedOut,
    TransportError,
}

impl From<GameFlowError> for GameErrorCode {
    fn from(error: GameFlowError) -> Self {
        match error {
            GameFlowError::GameNotFound => GameErrorCode::GameNotFound,
            GameFlowError::GameAlreadyInProgress => GameErrorCode::GameAlreadyInProgress,
            GameFlowError::GameNotInProgress => GameErrorCode::GameNotInProgress,
            GameFlowError::RoundSearchInProgress => GameErrorCode::RoundSearchInProgress,
            GameFlowError::GuessPending => GameErrorCode::GuessPending,
            GameFlowError::NotAwaitingGuess => GameErrorCode::NotAwaitingGuess,
            GameFlowError::SearchSuperseded => GameErrorCode::SearchSuperseded,
        }
    }
}

impl From<&SearchError> for GameErrorCode {
    fn from(error: &SearchError) -> Self {
        match error {
            SearchError::NoResultsFound => GameErrorCode::NoResultsFound,
            SearchError::Timeout(_) => GameErrorCode::SearchTimedOut,
            SearchError::Transport(_) => GameErrorCode::TransportError,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundView>,
}

impl RoundResponse {
    pub fn failed(error_code: impl Into<GameErrorCode>) -> Self {
        Self {
            error: true,
            error_code: Some(error_code.into()),
            round: None,
        }
    }
}

/// What the player sees while guessing. The location stays on the server until the guess.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub round: u32,
    pub rounds_per_game: u32,
    pub region: RegionId,
    pub image_url: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GuessView>,
}

impl GuessResponse {
    pub fn failed(error_code: impl Into<GameErrorCode>) -> Self {
        Self {
            error: true,
            error_code: Some(error_code.into()),
            result: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessView {
    pub round: u32,
    pub score: u64,
    pub distance_km: f64,
    pub guess: LatLng,
    pub correct_location: LatLng,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    pub image_url: String,
    pub session_score: u64,
    pub game_finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<GameSummary>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub session_score: u64,
    pub round_scores: Vec<u64>,
    pub session_best: u64,
    pub personal_best: u64,
    pub new_personal_best: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameState {
    Idle,
    Searching,
    RoundPending,
    AwaitingGuess,
    Finished,
}

impl From<&GameStatus> for GameState {
    fn from(status: &GameStatus) -> Self {
        match status {
            GameStatus::Idle => GameState::Idle,
            GameStatus::RoundInProgress {
                searching: true, ..
            } => GameState::Searching,
            GameStatus::RoundInProgress {
                searching: false, ..
            } => GameState::RoundPending,
            GameStatus::AwaitingGuess { .. } => GameState::AwaitingGuess,
            GameStatus::Finished => GameState::Finished,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatusResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<GameView>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub state: GameState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
    pub rounds_per_game: u32,
    pub region: RegionId,
    pub round_scores: Vec<RoundScore>,
    pub session_score: u64,
    pub session_best: u64,
    pub personal_best: u64,
}

impl GameView {
    pub fn new(game: &GameSession, rounds_per_game: u32, personal_best: u64) -> Self {
        Self {
            state: GameState::from(&game.status),
            round: game.current_round(),
            rounds_per_game,
            region: game.region,
            round_scores: game.round_scores.clone(),
            session_score: game.session_score,
            session_best: game.session_best,
            personal_best,
        }
    }
}
