//! # Track designer
//!
//! Pointer-driven state machine over a [`DrawingSurface`].
//!
//! ```text
//!            pointer_down (in bounds)
//!   Idle  ─────────────────────────────▶  Stroking ──┐ pointer_move
//!    ▲                                       │  ◀────┘ (draw / erase / select)
//!    └──── pointer_up / pointer_leave ───────┘
//! ```
//!
//! Every operation is synchronous. Failures never panic: they come back as
//! [`pitlane_core::Error`] values and are also published as advisory messages.
//! Operations other than `save` are silently ignored while no surface is
//! attached.

use crate::session::StrokeSession;
use crate::surface::{DrawingSurface, RasterSurface};
use crate::templates::TemplateShape;
use crate::tool::{DrawingMode, StrokeStyle};
use pitlane_core::{
    Error, Message, MessageDispatcher, Point, Result, SurfaceError, TrackError, TrackRecord,
};
use pitlane_settings::{DesignerConfig, StrokeSettings};
use tracing::{debug, info, warn};

pub const CLEARED_MESSAGE: &str = "Canvas cleared! Start designing your track.";
pub const SAVED_DESCRIPTION: &str = "Your custom track is ready for racing line optimization.";

/// Freehand track designer
#[derive(Debug)]
pub struct TrackDesigner<S = RasterSurface> {
    stroke: StrokeSettings,
    session: StrokeSession,
    surface: Option<S>,
    messages: MessageDispatcher,
}

impl TrackDesigner<RasterSurface> {
    /// Creates a designer with a raster surface built from `config`.
    ///
    /// The config is validated first.
    pub fn with_raster(config: &DesignerConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| Error::other(format!("Invalid designer config: {e}")))?;
        let surface = RasterSurface::from_config(config)?;
        Ok(Self::with_surface(config, surface))
    }
}

impl<S: DrawingSurface> TrackDesigner<S> {
    /// Creates a designer with no surface attached yet.
    pub fn new(config: &DesignerConfig) -> Self {
        let stroke = config.stroke.clone();
        let width = stroke.snap_width(stroke.default_width);
        Self {
            session: StrokeSession::new(DrawingMode::default(), width),
            stroke,
            surface: None,
            messages: MessageDispatcher::default(),
        }
    }

    /// Creates a designer drawing on `surface`.
    pub fn with_surface(config: &DesignerConfig, surface: S) -> Self {
        let mut designer = Self::new(config);
        designer.attach_surface(surface);
        designer
    }

    /// Replaces the message dispatcher, e.g. to share one with the host.
    pub fn set_dispatcher(&mut self, messages: MessageDispatcher) {
        self.messages = messages;
    }

    pub fn messages(&self) -> &MessageDispatcher {
        &self.messages
    }

    /// Adopts `surface`, wiping it down to the grid.
    pub fn attach_surface(&mut self, mut surface: S) {
        self.session.end();
        surface.clear_all();
        let size = surface.size();
        debug!(width = size.width, height = size.height, "Surface attached");
        self.surface = Some(surface);
    }

    /// Releases the surface. The designer ignores pointer input until a new one is attached.
    pub fn detach_surface(&mut self) -> Option<S> {
        self.session.end();
        let mut surface = self.surface.take()?;
        surface.end_stroke();
        Some(surface)
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn session(&self) -> &StrokeSession {
        &self.session
    }

    pub fn is_stroking(&self) -> bool {
        self.session.is_stroking()
    }

    pub fn tool(&self) -> DrawingMode {
        self.session.tool()
    }

    /// Switches tool. An active stroke ends first.
    pub fn set_tool(&mut self, tool: DrawingMode) {
        if tool == self.session.tool() {
            return;
        }
        if self.session.is_stroking() {
            self.end_stroke("tool change");
        }
        debug!(%tool, "Tool selected");
        self.session.set_tool(tool);
    }

    pub fn line_width(&self) -> u32 {
        self.session.width()
    }

    /// Sets the line width with slider semantics, returning the width applied.
    pub fn set_line_width(&mut self, width: u32) -> u32 {
        let applied = self.stroke.snap_width(width);
        self.session.set_width(applied);
        applied
    }

    /// Pen used for new strokes and templates.
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.stroke.color, self.session.width() as f32)
    }

    /// Starts a stroke at `at` when it lies on the surface.
    pub fn pointer_down(&mut self, at: Point) {
        let style = self.stroke_style();
        let tool = self.session.tool();
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if !surface.size().contains(at) {
            return;
        }

        surface.end_stroke();
        if tool == DrawingMode::Draw {
            surface.begin_stroke(at, &style);
        }
        self.session.begin(at);
        debug!(%tool, x = at.x, y = at.y, "Stroke started");
    }

    /// Applies the active tool at `to`. Leaving the surface ends the stroke.
    pub fn pointer_move(&mut self, to: Point) {
        if !self.session.is_stroking() {
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if !surface.size().contains(to) {
            self.end_stroke("left surface");
            return;
        }

        match self.session.tool() {
            DrawingMode::Draw => surface.stroke_to(to),
            DrawingMode::Erase => surface.erase_at(to, self.session.erase_radius()),
            DrawingMode::Select => {}
        }
        self.session.advance(to);
    }

    pub fn pointer_up(&mut self) {
        self.end_stroke("pointer up");
    }

    pub fn pointer_leave(&mut self) {
        self.end_stroke("pointer leave");
    }

    fn end_stroke(&mut self, reason: &str) {
        if let Some(surface) = self.surface.as_mut() {
            surface.end_stroke();
        }
        if let Some(last) = self.session.end() {
            debug!(reason, x = last.x, y = last.y, "Stroke ended");
        }
    }

    /// Wipes the drawing back to the bare grid.
    pub fn clear(&mut self) {
        if self.surface.is_none() {
            return;
        }
        self.end_stroke("clear");
        if let Some(surface) = self.surface.as_mut() {
            surface.clear_all();
        }
        info!("Canvas cleared");
        self.messages.publish(Message::info(CLEARED_MESSAGE));
    }

    /// Replaces the drawing with `shape`, stroked in the draw style at the current width.
    pub fn load_template(&mut self, shape: TemplateShape) {
        if self.surface.is_none() {
            return;
        }
        self.end_stroke("template");
        let style = self.stroke_style();
        if let Some(surface) = self.surface.as_mut() {
            surface.clear_all();
            surface.draw_template(shape, &style);
        }
        info!(template = %shape, width = style.width, "Template loaded");
        self.messages
            .publish(Message::info(format!("{} template loaded!", shape.name())));
    }

    /// Exports the raster into a new custom track record named `name`.
    ///
    /// Blank names and a missing surface are rejected without touching the surface.
    pub fn save(&mut self, name: &str) -> Result<TrackRecord> {
        match self.build_record(name) {
            Ok(record) => {
                info!(id = record.id(), name = record.name(), width = record.width(), "Track saved");
                self.messages.publish(
                    Message::success(format!("Track \"{}\" saved successfully!", record.name()))
                        .with_description(SAVED_DESCRIPTION),
                );
                Ok(record)
            }
            Err(err) => {
                warn!(error = %err, "Track not saved");
                self.messages.publish(Message::warning(err.to_string()));
                Err(err)
            }
        }
    }

    fn build_record(&self, name: &str) -> Result<TrackRecord> {
        if name.trim().is_empty() {
            return Err(TrackError::EmptyName.into());
        }
        let surface = self.surface.as_ref().ok_or(SurfaceError::Missing)?;
        let image_data = surface.export_raster()?;
        TrackRecord::new_custom(name, image_data, self.session.width()).map_err(Error::from)
    }
}
