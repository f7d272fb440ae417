//! Error types for request building and execution

/// Errors raised while encoding or dispatching a request
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Missing index: {0}")]
    MissingIndex(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error originated in the transport rather than in this crate
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}
