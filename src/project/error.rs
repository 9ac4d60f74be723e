//! Error types for project API calls

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectError {
    /// Connection, timeout or protocol failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with something that is not the expected JSON
    #[error("invalid response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for project API calls
pub type ProjectResult<T> = Result<T, ProjectError>;
