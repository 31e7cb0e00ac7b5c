//! Error types for labeler-github

/// Result type for labeler-github operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the label host
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Pagination link {url} is outside the API root")]
    ForeignPageLink { url: String },

    #[error("Invalid repository {0:?}, expected owner/name")]
    InvalidRepository(String),

    #[error("{operation} failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        operation: String,
        attempts: u32,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Rules(#[from] labeler_rules::Error),
}
