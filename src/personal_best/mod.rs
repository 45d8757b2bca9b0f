use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

pub mod file;
pub mod handlers;
pub mod responses;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Error)]
pub enum PersonalBestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed personal best record: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Durable storage for the single personal best integer.
#[async_trait]
pub trait PersonalBestRepo: Send + Sync {
    async fn load(&self) -> Result<u64, PersonalBestError>;

    async fn store(&self, score: u64) -> Result<(), PersonalBestError>;
}

/// Cached personal best backed by a [`PersonalBestRepo`]. Never decreases.
#[derive(Clone)]
pub struct PersonalBest {
    repo: Arc<dyn PersonalBestRepo>,
    current: Arc<RwLock<u64>>,
}

impl PersonalBest {
    pub fn new(repo: Arc<dyn PersonalBestRepo>, current: u64) -> Self {
        Self {
            repo,
            current: Arc::new(RwLock::new(current)),
        }
    }

    /// Reads the stored value once. An unreadable record starts from zero.
    pub async fn load(repo: Arc<dyn PersonalBestRepo>) -> Self {
        let current = match repo.load().await {
            Ok(score) => score,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load the personal best, starting from 0");
                0
            }
        };
        Self::new(repo, current)
    }

    pub async fn get(&self) -> u64 {
        *self.current.read().await
    }

    /// Records `score` if it beats the current best. Returns whether it did.
    pub async fn submit(&self, score: u64) -> Result<bool, PersonalBestError> {
        let mut current = self.current.write().await;
        if score <= *current {
            return Ok(false);
        }
        self.repo.store(score).await?;
        *current = score;
        Ok(true)
    }
}
