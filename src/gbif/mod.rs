use crate::gbif::errors::GbifError;
use crate::gbif::models::{
    OccurrenceQuery, OccurrenceSearchResponse, SpeciesRecord, VernacularName,
};
use async_trait::async_trait;

pub mod client;
pub mod errors;
pub mod models;
#[cfg(test)]
pub mod tests;

/// Remote occurrence and species-detail API.
#[async_trait]
pub trait OccurrenceApi: Send + Sync {
    async fn search_occurrences(
        &self,
        query: &OccurrenceQuery,
    ) -> Result<OccurrenceSearchResponse, GbifError>;

    async fn species(&self, taxon_key: u64) -> Result<SpeciesRecord, GbifError>;

    async fn vernacular_names(&self, taxon_key: u64) -> Result<Vec<VernacularName>, GbifError>;
}
