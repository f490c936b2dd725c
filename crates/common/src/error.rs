//! Error types for CarSales

use thiserror::Error;

/// Result type alias using CarSales Error
pub type Result<T> = std::result::Result<T, Error>;

/// CarSales error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Resource not found: {kind} with id {id}")]
    NotFound { kind: String, id: String },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl Error {
    /// Shorthand for the not-found case on a listing id.
    pub fn listing_not_found(id: u32) -> Self {
        Error::NotFound {
            kind: "listing".to_string(),
            id: id.to_string(),
        }
    }
}
