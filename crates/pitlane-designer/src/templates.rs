//! # Track templates
//!
//! Fixed track layouts that can be stamped onto the surface in one step.
//! Every template is centred on the surface and described as a `lyon` path so
//! any surface implementation can stroke it.

use lyon::math::{point, vector, Angle};
use lyon::path::{Path, Winding};
use pitlane_core::Point;
use serde::{Deserialize, Serialize};

/// Oval radii.
pub const OVAL_RADII: (f32, f32) = (200.0, 120.0);

/// Radii of each figure-eight loop.
pub const FIGURE8_RADII: (f32, f32) = (80.0, 60.0);

/// Horizontal offset of each figure-eight loop from the centre.
pub const FIGURE8_OFFSET: f32 = 80.0;

/// Street circuit corners relative to the centre, walked in order and closed.
pub const STREET_CIRCUIT: [(f32, f32); 6] = [
    (-150.0, -80.0),
    (150.0, -80.0),
    (150.0, 0.0),
    (100.0, 50.0),
    (-100.0, 50.0),
    (-150.0, 0.0),
];

/// Preset track shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateShape {
    Oval,
    Figure8,
    /// Closed six-corner street circuit.
    Monaco,
}

impl TemplateShape {
    pub const ALL: [TemplateShape; 3] = [
        TemplateShape::Oval,
        TemplateShape::Figure8,
        TemplateShape::Monaco,
    ];

    /// Identifier used in configs and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateShape::Oval => "oval",
            TemplateShape::Figure8 => "figure8",
            TemplateShape::Monaco => "monaco",
        }
    }

    /// Parse from string. `street` is accepted for the street circuit.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oval" => Some(TemplateShape::Oval),
            "figure8" | "figure-8" => Some(TemplateShape::Figure8),
            "monaco" | "street" => Some(TemplateShape::Monaco),
            _ => None,
        }
    }

    /// Capitalised name used in the "template loaded" notice
    pub fn name(&self) -> &'static str {
        match self {
            TemplateShape::Oval => "Oval",
            TemplateShape::Figure8 => "Figure8",
            TemplateShape::Monaco => "Monaco",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            TemplateShape::Oval => "Oval Track",
            TemplateShape::Figure8 => "Figure 8",
            TemplateShape::Monaco => "Street Circuit",
        }
    }

    /// Builds the template outline centred on `center`.
    pub fn outline(&self, center: Point) -> Path {
        let mut builder = Path::builder();
        match self {
            TemplateShape::Oval => {
                builder.add_ellipse(
                    point(center.x, center.y),
                    vector(OVAL_RADII.0, OVAL_RADII.1),
                    Angle::radians(0.0),
                    Winding::Positive,
                );
            }
            TemplateShape::Figure8 => {
                for dx in [-FIGURE8_OFFSET, FIGURE8_OFFSET] {
                    builder.add_ellipse(
                        point(center.x + dx, center.y),
                        vector(FIGURE8_RADII.0, FIGURE8_RADII.1),
                        Angle::radians(0.0),
                        Winding::Positive,
                    );
                }
            }
            TemplateShape::Monaco => {
                for (i, (dx, dy)) in STREET_CIRCUIT.iter().enumerate() {
                    let p = point(center.x + dx, center.y + dy);
                    if i == 0 {
                        builder.begin(p);
                    } else {
                        builder.line_to(p);
                    }
                }
                builder.close();
            }
        }
        builder.build()
    }
}

impl std::fmt::Display for TemplateShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
