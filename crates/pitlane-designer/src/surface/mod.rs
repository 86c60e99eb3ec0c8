//! Drawing surfaces.
//!
//! [`DrawingSurface`] is the seam between the designer's pointer state machine
//! and whatever actually holds pixels. [`RasterSurface`] implements it over a
//! `tiny-skia` pixmap.

mod raster;

pub use raster::RasterSurface;

use crate::templates::TemplateShape;
use crate::tool::StrokeStyle;
use pitlane_core::{Point, SurfaceError, SurfaceSize};

/// A 2D raster the designer draws on.
pub trait DrawingSurface {
    /// Pixel dimensions of the surface.
    fn size(&self) -> SurfaceSize;

    /// Starts a new, disconnected path at `at` using `style`. Nothing is rendered yet.
    fn begin_stroke(&mut self, at: Point, style: &StrokeStyle);

    /// Extends the current path to `point` and renders the new segment.
    /// Does nothing when no path has been started.
    fn stroke_to(&mut self, point: Point);

    /// Drops the current path. Rendered content stays.
    fn end_stroke(&mut self);

    /// Removes every pixel within `radius` of `point`, revealing the background.
    fn erase_at(&mut self, point: Point, radius: f32);

    /// Wipes all content and redraws the background grid.
    fn clear_all(&mut self);

    /// Strokes `shape` centred on the surface over the existing content.
    fn draw_template(&mut self, shape: TemplateShape, style: &StrokeStyle);

    /// Encodes the current raster as an image data URL.
    fn export_raster(&self) -> Result<String, SurfaceError>;
}
