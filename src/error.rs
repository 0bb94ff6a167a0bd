//! Error types for the collaborators around the bucket-naming core.
//!
//! The core functions in [`crate::bucket`] never fail. Everything that touches
//! coordinates, files or configuration returns [`Result`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BucketError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Geohash precision must be between 1 and 12, got: {0}")]
    InvalidPrecision(usize),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Geohash error: {0}")]
    Geohash(#[from] geohash::GeohashError),
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BucketError>;
