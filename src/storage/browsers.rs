use crate::search::tracker::SearchTracker;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// One search tracker per browser session, so a newer search in a session supersedes the
/// older one without affecting other sessions.
#[derive(Clone, Default)]
pub struct HashMapBrowserStorage {
    storage: Arc<RwLock<HashMap<String, SearchTracker>>>,
}

impl HashMapBrowserStorage {
    pub async fn create(&self) -> String {
        let browser_id = Uuid::new_v4().to_string();
        self.storage
            .write()
            .await
            .insert(browser_id.clone(), SearchTracker::default());
        browser_id
    }

    pub async fn tracker(&self, browser_id: &str) -> Option<SearchTracker> {
        self.storage.read().await.get(browser_id).cloned()
    }
}
