use crate::wikipedia::models::EncyclopediaEntry;
use async_trait::async_trait;
use thiserror::Error;

pub mod client;
pub mod models;

#[derive(Debug, Error)]
pub enum EncyclopediaError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for EncyclopediaError {
    fn from(err: reqwest::Error) -> Self {
        EncyclopediaError::Network(err.to_string())
    }
}

/// Title search against an encyclopedia.
#[async_trait]
pub trait EncyclopediaApi: Send + Sync {
    /// Best match for `title`, if the encyclopedia has any.
    async fn best_match(&self, title: &str) -> Result<Option<EncyclopediaEntry>, EncyclopediaError>;
}
