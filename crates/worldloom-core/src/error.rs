//! Error types for Worldloom core operations
//!
//! The resolver and normalizer pipelines are total functions and never fail;
//! errors here come from the editing boundary (strict validation of free-form
//! user input) and from the storage seam.

use thiserror::Error;

/// Main error type for Worldloom core operations
#[derive(Error, Debug)]
pub enum WorldloomError {
    /// Hex color string failed strict validation
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    /// Preset id is not a recognized member of the preset vocabulary
    #[error("Unknown preset id: {0}")]
    UnknownPreset(String),

    /// No frame override is configured for the requested rank
    #[error("No override for rank: {0}")]
    RankNotFound(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error reported by a blob store implementation
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias using WorldloomError
pub type WorldloomResult<T> = Result<T, WorldloomError>;
