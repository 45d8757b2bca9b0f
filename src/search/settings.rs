use crate::cli::Args;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct SearchSettings {
    /// Wall-clock budget of a single search invocation.
    pub budget: Duration,
    /// Pause between two game-mode attempts.
    pub retry_delay: Duration,
    /// `None` lets game-mode searches retry until the budget runs out.
    pub max_attempts: Option<u32>,
    pub max_follow_ups: u32,
    pub game_window_half_width: f64,
    pub game_page_size: u32,
    pub vernacular_language: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            budget: Duration::from_secs(100),
            retry_delay: Duration::from_secs(3),
            max_attempts: None,
            max_follow_ups: 10,
            game_window_half_width: 0.05,
            game_page_size: 20,
            vernacular_language: String::from("eng"),
        }
    }
}

impl From<&Args> for SearchSettings {
    fn from(args: &Args) -> Self {
        Self {
            budget: Duration::from_secs(args.search_budget_secs),
            retry_delay: Duration::from_millis(args.retry_delay_ms),
            max_attempts: args.max_attempts,
            max_follow_ups: args.max_follow_up_requests,
            game_page_size: args.game_page_size,
            vernacular_language: args.vernacular_language.clone(),
            ..Default::default()
        }
    }
}
