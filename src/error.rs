//! Error types for asset and audio loading.
//!
//! Neither is fatal to the game: callers log these and fall back to a
//! placeholder sprite or to silence.

use thiserror::Error;

/// Failure to load an image asset.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The file does not exist
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// The file exists but is not a decodable image
    #[error("Failed to decode image '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Failure to bring up sound output.
#[derive(Error, Debug)]
pub enum AudioError {
    /// No usable output device
    #[error("Audio device unavailable: {0}")]
    Device(String),

    /// A required sound file is missing
    #[error("Sound file not found: {0}")]
    NotFound(String),

    /// A sound file could not be read
    #[error("Failed to read sound '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A sound file is not in a supported format
    #[error("Failed to decode sound '{path}': {reason}")]
    Decode { path: String, reason: String },
}
