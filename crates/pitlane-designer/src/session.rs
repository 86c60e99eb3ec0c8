//! Stroke session: the transient pointer state of the designer.
//!
//! The tool and width outlive individual strokes. The stroking flag and last
//! position are reset whenever a stroke ends.

use crate::tool::DrawingMode;
use pitlane_core::Point;

/// Pointer state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokePhase {
    Idle,
    Stroking,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeSession {
    tool: DrawingMode,
    width: u32,
    last_position: Option<Point>,
}

impl StrokeSession {
    pub fn new(tool: DrawingMode, width: u32) -> Self {
        Self {
            tool,
            width,
            last_position: None,
        }
    }

    pub fn tool(&self) -> DrawingMode {
        self.tool
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn phase(&self) -> StrokePhase {
        if self.last_position.is_some() {
            StrokePhase::Stroking
        } else {
            StrokePhase::Idle
        }
    }

    pub fn is_stroking(&self) -> bool {
        self.phase() == StrokePhase::Stroking
    }

    pub(crate) fn set_tool(&mut self, tool: DrawingMode) {
        self.tool = tool;
    }

    pub(crate) fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub(crate) fn begin(&mut self, at: Point) {
        self.last_position = Some(at);
    }

    pub(crate) fn advance(&mut self, to: Point) {
        self.last_position = Some(to);
    }

    /// Ends the stroke, returning where it stopped.
    pub(crate) fn end(&mut self) -> Option<Point> {
        self.last_position.take()
    }

    /// Erase radius for the current width.
    pub fn erase_radius(&self) -> f32 {
        self.width as f32 / 2.0
    }
}
