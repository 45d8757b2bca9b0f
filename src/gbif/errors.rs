use thiserror::Error;

#[derive(Debug, Error)]
pub enum GbifError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for GbifError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GbifError::Parse(err.to_string())
        } else {
            GbifError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for GbifError {
    fn from(err: url::ParseError) -> Self {
        GbifError::Network(format!("invalid request URL: {err}"))
    }
}
