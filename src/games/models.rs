use crate::games::consts::ROUNDS_PER_GAME;
use crate::gbif::models::Occurrence;
use crate::geo::models::LatLng;
use crate::geo::regions::RegionId;
use crate::geo;
use crate::scoring;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Idle,
    RoundInProgress { round: u32, searching: bool },
    AwaitingGuess { round: u32, target: Occurrence },
    Finished,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameFlowError {
    GameNotFound,
    GameAlreadyInProgress,
    GameNotInProgress,
    RoundSearchInProgress,
    GuessPending,
    NotAwaitingGuess,
    SearchSuperseded,
}

/// Identifies the one search allowed to settle the current round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundTicket {
    pub round: u32,
    pub region: RegionId,
    generation: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundScore {
    pub round: u32,
    pub score: u64,
    pub distance_km: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GuessOutcome {
    pub round_score: RoundScore,
    pub guess: LatLng,
    pub target: Occurrence,
    pub session_score: u64,
    /// Scores of every round played so far, including this one.
    pub round_scores: Vec<RoundScore>,
    pub session_best: u64,
    pub game_finished: bool,
}

#[derive(Clone, Debug)]
pub struct GameSession {
    pub status: GameStatus,
    pub region: RegionId,
    pub round_scores: Vec<RoundScore>,
    pub session_score: u64,
    /// Best finished game in this session. Lives as long as the session, unlike the
    /// personal best.
    pub session_best: u64,
    generation: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            status: GameStatus::Idle,
            region: RegionId::Global,
            round_scores: Vec::with_capacity(ROUNDS_PER_GAME as usize),
            session_score: 0,
            session_best: 0,
            generation: 0,
        }
    }
}

impl GameSession {
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self.status,
            GameStatus::RoundInProgress { .. } | GameStatus::AwaitingGuess { .. }
        )
    }

    pub fn current_round(&self) -> Option<u32> {
        match self.status {
            GameStatus::RoundInProgress { round, .. } | GameStatus::AwaitingGuess { round, .. } => {
                Some(round)
            }
            GameStatus::Idle | GameStatus::Finished => None,
        }
    }

    pub fn start(&mut self, region: RegionId) -> Result<(), GameFlowError> {
        if self.is_in_progress() {
            return Err(GameFlowError::GameAlreadyInProgress);
        }
        self.region = region;
        self.round_scores.clear();
        self.session_score = 0;
        self.status = GameStatus::RoundInProgress {
            round: 1,
            searching: false,
        };
        Ok(())
    }

    pub fn begin_round_search(&mut self) -> Result<RoundTicket, GameFlowError> {
        match &mut self.status {
            GameStatus::RoundInProgress { round, searching } => {
                if *searching {
                    return Err(GameFlowError::RoundSearchInProgress);
                }
                *searching = true;
                self.generation += 1;
                Ok(RoundTicket {
                    round: *round,
                    region: self.region,
                    generation: self.generation,
                })
            }
            GameStatus::AwaitingGuess { .. } => Err(GameFlowError::GuessPending),
            GameStatus::Idle | GameStatus::Finished => Err(GameFlowError::GameNotInProgress),
        }
    }

    fn holds(&self, ticket: RoundTicket) -> bool {
        ticket.generation == self.generation
            && self.status
                == GameStatus::RoundInProgress {
                    round: ticket.round,
                    searching: true,
                }
    }

    pub fn location_found(
        &mut self,
        ticket: RoundTicket,
        target: Occurrence,
    ) -> Result<(), GameFlowError> {
        if !self.holds(ticket) {
            return Err(GameFlowError::SearchSuperseded);
        }
        self.status = GameStatus::AwaitingGuess {
            round: ticket.round,
            target,
        };
        Ok(())
    }

    /// A failed search ends the game; scores of the session survive.
    pub fn search_failed(&mut self, ticket: RoundTicket) {
        if self.holds(ticket) {
            self.status = GameStatus::Idle;
        }
    }

    pub fn submit_guess(&mut self, guess: LatLng) -> Result<GuessOutcome, GameFlowError> {
        let (round, target) = match &self.status {
            GameStatus::AwaitingGuess { round, target } => (*round, target.clone()),
            _ => return Err(GameFlowError::NotAwaitingGuess),
        };
        let distance_km = geo::distance_km(guess, target.location);
        let score = scoring::score(distance_km, self.region.region().profile());
        let round_score = RoundScore {
            round,
            score,
            distance_km,
        };
        self.round_scores.push(round_score);
        self.session_score += score;

        let game_finished = round >= ROUNDS_PER_GAME;
        if game_finished {
            self.status = GameStatus::Finished;
            self.session_best = self.session_best.max(self.session_score);
        } else {
            self.status = GameStatus::RoundInProgress {
                round: round + 1,
                searching: false,
            };
        }
        Ok(GuessOutcome {
            round_score,
            guess,
            target,
            session_score: self.session_score,
            round_scores: self.round_scores.clone(),
            session_best: self.session_best,
            game_finished,
        })
    }
}
