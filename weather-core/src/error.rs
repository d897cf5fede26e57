use std::path::PathBuf;
use thiserror::Error;

/// Configuration could not be assembled from the environment or `config.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Please set the API_KEY, CITY, and UNITS environment variables.")]
    Incomplete,

    #[error("{} must define non-empty \"apiKey\", \"city\" and \"units\" values", .path.display())]
    IncompleteFile { path: PathBuf },

    #[error("Invalid OPENWEATHER_ENDPOINT '{value}': {source}")]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Application-level error reported by the upstream API through `cod`.
///
/// The `Display` output is exactly what the CLI prints before exiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UpstreamError {
    #[error("City not found")]
    CityNotFound,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("ERROR")]
    Other(i64),
}

impl UpstreamError {
    /// Map a non-200 `cod` value to its error. Returns `None` for 200.
    pub fn from_status(cod: i64) -> Option<Self> {
        match cod {
            200 => None,
            404 => Some(UpstreamError::CityNotFound),
            401 => Some(UpstreamError::InvalidApiKey),
            other => Some(UpstreamError::Other(other)),
        }
    }
}
