use crate::gbif::errors::GbifError;
use crate::gbif::models::{
    OccurrenceQuery, OccurrenceSearchResponse, SpeciesRecord, VernacularName,
    VernacularNamesResponse,
};
use crate::gbif::OccurrenceApi;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

pub struct GbifClient {
    client: Client,
    base_url: Url,
}

impl GbifClient {
    pub fn new(client: Client, mut base_url: Url) -> Self {
        // `Url::join` drops the last path segment unless the base ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { client, base_url }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GbifError> {
        let url = self.base_url.join(path)?;
        let response = self.client.get(url).query(query).send().await?;
        let response = error_for_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl OccurrenceApi for GbifClient {
    async fn search_occurrences(
        &self,
        query: &OccurrenceQuery,
    ) -> Result<OccurrenceSearchResponse, GbifError> {
        self.get_json("occurrence/search", &query.as_query_params())
            .await
    }

    async fn species(&self, taxon_key: u64) -> Result<SpeciesRecord, GbifError> {
        self.get_json(&format!("species/{taxon_key}"), &[]).await
    }

    async fn vernacular_names(&self, taxon_key: u64) -> Result<Vec<VernacularName>, GbifError> {
        let response: VernacularNamesResponse = self
            .get_json(&format!("species/{taxon_key}/vernacularNames"), &[])
            .await?;
        Ok(response.results)
    }
}

async fn error_for_status(response: Response) -> Result<Response, GbifError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(GbifError::Api {
        status: status.as_u16(),
        message,
    })
}
