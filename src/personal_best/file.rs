use crate::personal_best::{PersonalBestError, PersonalBestRepo};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonalBestRecord {
    personal_best: u64,
}

/// Keeps the personal best in a small JSON file: `{"personalBest": 4000}`.
pub struct FilePersonalBest {
    path: PathBuf,
}

impl FilePersonalBest {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl PersonalBestRepo for FilePersonalBest {
    async fn load(&self) -> Result<u64, PersonalBestError> {
        let contents = match tokio::fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(0),
            Err(err) => return Err(err.into()),
        };
        let record: PersonalBestRecord = serde_json::from_slice(&contents)?;
        Ok(record.personal_best)
    }

    async fn store(&self, score: u64) -> Result<(), PersonalBestError> {
        let contents = serde_json::to_vec(&PersonalBestRecord {
            personal_best: score,
        })?;
        // Write next to the target and rename, so a crash never leaves half a record.
        let mut tmp_path = self.path.clone().into_os_string();
        tmp_path.push(".tmp");
        tokio::fs::write(&tmp_path, contents).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}
