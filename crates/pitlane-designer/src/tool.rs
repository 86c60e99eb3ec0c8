//! Drawing tools and stroke style.

use pitlane_settings::HexColor;
use serde::{Deserialize, Serialize};

/// Drawing modes for the track canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingMode {
    /// Freehand track strokes.
    #[default]
    Draw,
    /// Cuts a disc out of the raster under the pointer.
    Erase,
    /// Reserved. Pointer input leaves the surface untouched.
    Select,
}

impl DrawingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawingMode::Draw => "draw",
            DrawingMode::Erase => "erase",
            DrawingMode::Select => "select",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draw" => Some(DrawingMode::Draw),
            "erase" => Some(DrawingMode::Erase),
            "select" => Some(DrawingMode::Select),
            _ => None,
        }
    }
}

impl std::fmt::Display for DrawingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pen used for freehand strokes and templates. Caps and joins are always round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: HexColor,
    pub width: f32,
}

impl StrokeStyle {
    pub fn new(color: HexColor, width: f32) -> Self {
        Self { color, width }
    }
}
