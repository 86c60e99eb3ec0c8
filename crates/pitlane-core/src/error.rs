//! Error handling for Pitlane
//!
//! Provides error types for the layers of the track designer:
//! - Track errors (record validation)
//! - Surface errors (raster lifecycle and export)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Track error type
///
/// Represents validation failures when building a track record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    /// Track name is empty or whitespace only
    #[error("Please enter a track name before saving.")]
    EmptyName,
}

/// Surface error type
///
/// Represents errors related to the drawing surface and its raster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// No drawing surface has been attached yet
    #[error("Drawing surface is not initialized")]
    Missing,

    /// Requested surface dimensions cannot be allocated
    #[error("Invalid surface size {width}x{height}")]
    InvalidSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Raster could not be encoded
    #[error("Failed to encode raster: {reason}")]
    Encode {
        /// The reason the encoding failed.
        reason: String,
    },
}

/// Main error type for Pitlane
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Track error
    #[error(transparent)]
    Track(#[from] TrackError),

    /// Surface error
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a validation failure the user can fix
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Track(TrackError::EmptyName))
    }

    /// Check if this error stems from a missing drawing surface
    pub fn is_missing_surface(&self) -> bool {
        matches!(self, Error::Surface(SurfaceError::Missing))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
