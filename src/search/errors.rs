use crate::gbif::errors::GbifError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no occurrence matched the filters within the search budget")]
    NoResultsFound,

    #[error("search did not finish within {0:?}")]
    Timeout(Duration),

    #[error("occurrence API request failed: {0}")]
    Transport(#[from] GbifError),
}
