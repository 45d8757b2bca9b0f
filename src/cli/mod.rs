use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "http://127.0.0.1:7280")]
    pub quickwit_url: Url,
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Origin allowed by the CORS policy. Repeat the flag to allow several.
    #[arg(long = "allowed-origin")]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<String>,
    #[arg(long)]
    #[arg(default_value = "https://api.gbif.org/v1/")]
    pub gbif_api_url: Url,
    #[arg(long)]
    #[arg(default_value = "https://en.wikipedia.org/w/api.php")]
    pub wikipedia_api_url: Url,
    #[arg(long)]
    #[arg(default_value = "personal_best.json")]
    pub personal_best_file: PathBuf,
    /// Wall-clock budget of one occurrence search, in seconds.
    #[arg(long)]
    #[arg(default_value_t = 100)]
    pub search_budget_secs: u64,
    /// Pause between two attempts of a game-round search, in milliseconds.
    #[arg(long)]
    #[arg(default_value_t = 3000)]
    pub retry_delay_ms: u64,
    /// Upper bound on game-round search attempts. Unbounded unless set.
    #[arg(long)]
    pub max_attempts: Option<u32>,
    #[arg(long)]
    #[arg(default_value_t = 10)]
    pub max_follow_up_requests: u32,
    #[arg(long)]
    #[arg(default_value_t = 20)]
    pub game_page_size: u32,
    /// Language code used to pick common names.
    #[arg(long)]
    #[arg(default_value = "eng")]
    pub vernacular_language: String,
}
