use crate::wikipedia::models::{strip_search_markup, EncyclopediaEntry, SearchResponse};
use crate::wikipedia::{EncyclopediaApi, EncyclopediaError};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

pub struct WikipediaClient {
    client: Client,
    api_url: Url,
}

impl WikipediaClient {
    pub fn new(client: Client, api_url: Url) -> Self {
        Self { client, api_url }
    }

    pub fn page_url(&self, page_id: u64) -> String {
        let mut url = self.api_url.clone();
        url.set_path("/");
        url.set_query(Some(&format!("curid={page_id}")));
        url.to_string()
    }
}

#[async_trait]
impl EncyclopediaApi for WikipediaClient {
    async fn best_match(&self, title: &str) -> Result<Option<EncyclopediaEntry>, EncyclopediaError> {
        let response = self
            .client
            .get(self.api_url.clone())
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", title),
                ("srlimit", "1"),
                ("format", "json"),
            ])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EncyclopediaError::Api {
                status: status.as_u16(),
                message,
            });
        }
        let response: SearchResponse = response.json().await?;
        Ok(response
            .query
            .search
            .into_iter()
            .next()
            .map(|hit| EncyclopediaEntry {
                url: self.page_url(hit.pageid),
                snippet: strip_search_markup(&hit.snippet),
                title: hit.title,
                page_id: hit.pageid,
            }))
    }
}
