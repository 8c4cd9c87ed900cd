//! Error types for faskes-core

use thiserror::Error;

/// Result type alias using faskes-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading province data
#[derive(Error, Debug)]
pub enum Error {
    /// Dataset parsed but violates a structural rule
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
