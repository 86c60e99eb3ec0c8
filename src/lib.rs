//! # Pitlane
//!
//! Track designer for an F1 racing configurator. Users sketch a circuit on a
//! canvas or start from a preset template, then save it as the active custom
//! track for the rest of the application.
//!
//! ## Architecture
//!
//! Pitlane is organized as a workspace with multiple crates:
//!
//! 1. **pitlane-core** - Errors, geometry, track records, track selection, advisory messages
//! 2. **pitlane-settings** - Designer configuration (JSON/TOML)
//! 3. **pitlane-designer** - Stroke tools, raster surface, templates, export
//! 4. **pitlane** - Host wiring and logging setup

pub mod app;

pub use app::RaceConfigurator;

pub use pitlane_core::{
    Error, Message, MessageDispatcher, MessageLevel, Point, Result, SurfaceError, SurfaceSize,
    TrackError, TrackKind, TrackRecord, TrackSelection, TrackSummary,
};
pub use pitlane_designer::{
    DrawingMode, DrawingSurface, RasterSurface, StrokeSession, StrokeStyle, TemplateShape,
    TrackDesigner,
};
pub use pitlane_settings::{DesignerConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("PITLANE_BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
