//! Raster drawing surface backed by tiny-skia.
//!
//! Features:
//! - Anti-aliased round-capped strokes rendered one segment at a time
//! - Destination-out erasing, so erased pixels become transparent
//! - Background grid redrawn on every clear

use super::DrawingSurface;
use crate::export;
use crate::templates::TemplateShape;
use crate::tool::StrokeStyle;
use pitlane_core::{Point, SurfaceError, SurfaceSize};
use pitlane_settings::{DesignerConfig, GridSettings, HexColor};
use tiny_skia::{
    BlendMode, Color, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke,
    Transform,
};
use tracing::warn;

fn solid(color: HexColor) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, 255)
}

fn round_stroke(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    }
}

/// Converts a lyon path into a tiny-skia path.
fn to_skia_path(path: &lyon::path::Path) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for event in path.iter() {
        match event {
            lyon::path::Event::Begin { at } => pb.move_to(at.x, at.y),
            lyon::path::Event::Line { to, .. } => pb.line_to(to.x, to.y),
            lyon::path::Event::Quadratic { ctrl, to, .. } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            lyon::path::Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y),
            lyon::path::Event::End { close, .. } => {
                if close {
                    pb.close();
                }
            }
        }
    }
    pb.finish()
}

/// The pen of the stroke in progress.
#[derive(Debug, Clone)]
struct Pen {
    last: Point,
    style: StrokeStyle,
}

/// Track canvas raster
#[derive(Debug, Clone)]
pub struct RasterSurface {
    pixmap: Pixmap,
    grid: GridSettings,
    pen: Option<Pen>,
}

impl RasterSurface {
    /// Creates a surface of `size` showing only the grid.
    pub fn new(size: SurfaceSize, grid: GridSettings) -> Result<Self, SurfaceError> {
        let pixmap = Pixmap::new(size.width, size.height).ok_or(SurfaceError::InvalidSize {
            width: size.width,
            height: size.height,
        })?;
        let mut surface = Self {
            pixmap,
            grid,
            pen: None,
        };
        surface.draw_grid();
        Ok(surface)
    }

    /// Creates a surface sized and styled from the designer config.
    pub fn from_config(config: &DesignerConfig) -> Result<Self, SurfaceError> {
        Self::new(
            SurfaceSize::new(config.canvas.width, config.canvas.height),
            config.grid.clone(),
        )
    }

    /// Read access to the underlying pixels.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha RGBA at `(x, y)`, or `None` outside the surface.
    pub fn rgba_at(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// True when the pixel at `(x, y)` holds any colour.
    pub fn is_painted(&self, x: u32, y: u32) -> bool {
        self.pixmap.pixel(x, y).is_some_and(|p| p.alpha() > 0)
    }

    fn draw_grid(&mut self) {
        let mut color = solid(self.grid.color);
        color.set_alpha(self.grid.opacity);
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        let stroke = Stroke {
            width: self.grid.line_width,
            ..Default::default()
        };

        let width = self.pixmap.width();
        let height = self.pixmap.height();
        let spacing = self.grid.spacing.max(1) as usize;

        // Each line is stroked on its own so crossings blend twice.
        let vertical = (0..=width).step_by(spacing).map(|x| {
            let x = x as f32;
            ((x, 0.0), (x, height as f32))
        });
        let horizontal = (0..=height).step_by(spacing).map(|y| {
            let y = y as f32;
            ((0.0, y), (width as f32, y))
        });
        for ((x0, y0), (x1, y1)) in vertical.chain(horizontal) {
            let mut pb = PathBuilder::new();
            pb.move_to(x0, y0);
            pb.line_to(x1, y1);
            if let Some(path) = pb.finish() {
                self.pixmap
                    .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }
    }

    fn stroke_paint(style: &StrokeStyle) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(solid(style.color));
        paint.anti_alias = true;
        paint
    }
}

impl DrawingSurface for RasterSurface {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.pixmap.width(), self.pixmap.height())
    }

    fn begin_stroke(&mut self, at: Point, style: &StrokeStyle) {
        self.pen = Some(Pen {
            last: at,
            style: *style,
        });
    }

    fn stroke_to(&mut self, point: Point) {
        let Some(pen) = self.pen.as_mut() else {
            return;
        };

        let mut pb = PathBuilder::new();
        pb.move_to(pen.last.x, pen.last.y);
        pb.line_to(point.x, point.y);
        if let Some(path) = pb.finish() {
            let paint = Self::stroke_paint(&pen.style);
            self.pixmap.stroke_path(
                &path,
                &paint,
                &round_stroke(pen.style.width),
                Transform::identity(),
                None,
            );
        }
        pen.last = point;
    }

    fn end_stroke(&mut self) {
        self.pen = None;
    }

    fn erase_at(&mut self, point: Point, radius: f32) {
        let Some(disc) = PathBuilder::from_circle(point.x, point.y, radius) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(Color::BLACK);
        paint.blend_mode = BlendMode::DestinationOut;
        paint.anti_alias = true;
        self.pixmap
            .fill_path(&disc, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn clear_all(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
        self.pen = None;
        self.draw_grid();
    }

    fn draw_template(&mut self, shape: TemplateShape, style: &StrokeStyle) {
        let outline = shape.outline(self.size().center());
        let Some(path) = to_skia_path(&outline) else {
            warn!(template = %shape, "Template outline produced an empty path");
            return;
        };
        let paint = Self::stroke_paint(style);
        self.pixmap.stroke_path(
            &path,
            &paint,
            &round_stroke(style.width),
            Transform::identity(),
            None,
        );
    }

    fn export_raster(&self) -> Result<String, SurfaceError> {
        export::encode_png_data_url(&self.pixmap)
    }
}
