//! Pitlane Settings Crate
//!
//! Handles the track designer's configuration: surface size, grid appearance
//! and stroke style, stored as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, DesignerConfig, GridSettings, HexColor, StrokeSettings};
pub use error::{SettingsError, SettingsResult};
