use std::path::PathBuf;

use thiserror::Error;

/// Startup errors for advisor
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("Invalid advice endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Could not read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not create HTTP client: {0}")]
    HttpClient(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
