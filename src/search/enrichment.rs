use crate::gbif::models::Occurrence;
use crate::gbif::OccurrenceApi;
use crate::wikipedia::models::EncyclopediaEntry;
use crate::wikipedia::EncyclopediaApi;
use futures_util::future::join_all;
use serde::Serialize;

pub const NO_COMMON_NAME: &str = "No common name available";
pub const UNKNOWN_KINGDOM: &str = "Unknown";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedOccurrence {
    pub occurrence: Occurrence,
    pub common_name: String,
    pub kingdom: String,
    pub encyclopedia: Option<EncyclopediaEntry>,
}

/// Resolves common names, kingdoms and encyclopedia snippets for search results.
pub struct Enricher<'a> {
    gbif: &'a dyn OccurrenceApi,
    encyclopedia: &'a dyn EncyclopediaApi,
    language: &'a str,
}

impl<'a> Enricher<'a> {
    pub fn new(
        gbif: &'a dyn OccurrenceApi,
        encyclopedia: &'a dyn EncyclopediaApi,
        language: &'a str,
    ) -> Self {
        Self {
            gbif,
            encyclopedia,
            language,
        }
    }

    /// Looks up every occurrence concurrently and waits for all of them. The output keeps the
    /// input order.
    pub async fn enrich_all(&self, occurrences: Vec<Occurrence>) -> Vec<EnrichedOccurrence> {
        join_all(
            occurrences
                .into_iter()
                .map(|occurrence| self.enrich(occurrence)),
        )
        .await
    }

    pub async fn enrich(&self, occurrence: Occurrence) -> EnrichedOccurrence {
        let (common_name, species) = match occurrence.taxon_key {
            Some(taxon_key) => {
                futures_util::join!(self.common_name(taxon_key), self.species(taxon_key))
            }
            None => (None, None),
        };
        let (species_kingdom, canonical_name) = species.unwrap_or_default();
        let kingdom = species_kingdom
            .or_else(|| occurrence.kingdom.clone())
            .unwrap_or_else(|| String::from(UNKNOWN_KINGDOM));
        let title = canonical_name
            .or_else(|| occurrence.scientific_name.clone())
            .or_else(|| common_name.clone());
        let encyclopedia = match title {
            Some(title) => self.encyclopedia_entry(&title).await,
            None => None,
        };
        EnrichedOccurrence {
            occurrence,
            common_name: common_name.unwrap_or_else(|| String::from(NO_COMMON_NAME)),
            kingdom,
            encyclopedia,
        }
    }

    async fn common_name(&self, taxon_key: u64) -> Option<String> {
        match self.gbif.vernacular_names(taxon_key).await {
            Ok(names) => names
                .into_iter()
                .filter(|name| name.language.as_deref() == Some(self.language))
                .filter_map(|name| name.vernacular_name)
                .find(|name| !name.trim().is_empty()),
            Err(err) => {
                tracing::warn!(taxon_key, error = %err, "Failed to fetch vernacular names");
                None
            }
        }
    }

    async fn species(&self, taxon_key: u64) -> Option<(Option<String>, Option<String>)> {
        match self.gbif.species(taxon_key).await {
            Ok(species) => Some((species.kingdom, species.canonical_name)),
            Err(err) => {
                tracing::warn!(taxon_key, error = %err, "Failed to fetch species details");
                None
            }
        }
    }

    async fn encyclopedia_entry(&self, title: &str) -> Option<EncyclopediaEntry> {
        match self.encyclopedia.best_match(title).await {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(title, error = %err, "Failed to fetch encyclopedia entry");
                None
            }
        }
    }
}
