use crate::personal_best::file::FilePersonalBest;
use crate::personal_best::responses::PersonalBestResponse;
use crate::personal_best::{PersonalBest, PersonalBestError, PersonalBestRepo};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryPersonalBest {
    score: RwLock<u64>,
}

impl InMemoryPersonalBest {
    pub fn new(score: u64) -> Self {
        Self {
            score: RwLock::new(score),
        }
    }
}

#[async_trait]
impl PersonalBestRepo for InMemoryPersonalBest {
    async fn load(&self) -> Result<u64, PersonalBestError> {
        Ok(*self.score.read().await)
    }

    async fn store(&self, score: u64) -> Result<(), PersonalBestError> {
        *self.score.write().await = score;
        Ok(())
    }
}

#[tokio::test]
async fn test_personal_best_never_decreases() {
    let repo = Arc::new(InMemoryPersonalBest::new(3000));
    let personal_best = PersonalBest::load(repo.clone()).await;

    assert_eq!(personal_best.get().await, 3000);
    assert!(!personal_best.submit(2500).await.unwrap());
    assert!(!personal_best.submit(3000).await.unwrap());
    assert_eq!(repo.load().await.unwrap(), 3000);

    assert!(personal_best.submit(4000).await.unwrap());
    assert_eq!(personal_best.get().await, 4000);
    assert_eq!(repo.load().await.unwrap(), 4000);
}

#[tokio::test]
async fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("personal_best.json");
    let repo = FilePersonalBest::new(path.clone());

    assert_eq!(repo.load().await.unwrap(), 0);
    repo.store(4210).await.unwrap();

    assert_eq!(repo.load().await.unwrap(), 4210);
    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw, r#"{"personalBest":4210}"#);
}

#[tokio::test]
async fn test_malformed_file_starts_from_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("personal_best.json");
    std::fs::write(&path, "not json").unwrap();
    let repo = Arc::new(FilePersonalBest::new(path));

    assert!(repo.load().await.is_err());
    let personal_best = PersonalBest::load(repo).await;
    assert_eq!(personal_best.get().await, 0);
}

#[tokio::test]
async fn test_personal_best_endpoint() {
    let server = crate::http::tests::test_server_with(
        Arc::new(crate::gbif::tests::FakeGbif::new()),
        Arc::new(crate::wikipedia::tests::FakeEncyclopedia::new()),
        PersonalBest::new(Arc::new(InMemoryPersonalBest::new(3100)), 3100),
    );

    let response = server.get("/scores/personal-best").await;

    response.assert_status_ok();
    response.assert_json(&PersonalBestResponse {
        error: false,
        personal_best: 3100,
    });
}
