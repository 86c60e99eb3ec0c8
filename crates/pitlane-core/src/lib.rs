//! # Pitlane Core
//!
//! Core types shared by the Pitlane crates: error types, surface geometry,
//! track records with the host's track selection, and the advisory message
//! dispatcher.

pub mod error;
pub mod geometry;
pub mod message;
pub mod track;

pub use error::{Error, Result, SurfaceError, TrackError};
pub use geometry::{Point, SurfaceSize};
pub use message::{Message, MessageDispatcher, MessageLevel};
pub use track::{next_track_id, TrackKind, TrackRecord, TrackSelection, TrackSummary};
