//! # Pitlane Designer
//!
//! Free-hand track drawing for the Pitlane configurator. Users sketch a
//! circuit with the pointer, erase parts of it, or start from a preset
//! template, then save the raster as a custom track.
//!
//! ## Core Components
//!
//! - **Designer**: pointer state machine (`idle` / `stroking`) and the
//!   clear, template and save operations
//! - **Session**: current tool, line width and last pointer position
//! - **Surface**: the `DrawingSurface` seam and its tiny-skia raster
//! - **Templates**: oval, figure-eight and street circuit outlines
//! - **Export**: PNG data URL encoding of the raster
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pitlane_designer::{TrackDesigner, TemplateShape};
//! use pitlane_core::Point;
//! use pitlane_settings::DesignerConfig;
//!
//! let mut designer = TrackDesigner::with_raster(&DesignerConfig::default())?;
//! designer.load_template(TemplateShape::Oval);
//! designer.pointer_down(Point::new(100.0, 100.0));
//! designer.pointer_move(Point::new(180.0, 140.0));
//! designer.pointer_up();
//! let record = designer.save("Monza Clone")?;
//! ```

pub mod designer;
pub mod export;
pub mod session;
pub mod surface;
pub mod templates;
pub mod tool;

pub use designer::TrackDesigner;
pub use export::{
    decode_png_data_url, encode_png_data_url, png_bytes_from_data_url, PNG_DATA_URL_PREFIX,
};
pub use session::{StrokePhase, StrokeSession};
pub use surface::{DrawingSurface, RasterSurface};
pub use templates::TemplateShape;
pub use tool::{DrawingMode, StrokeStyle};
