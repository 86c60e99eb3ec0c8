//! Designer configuration
//!
//! Provides configuration file handling and validation for the track designer.
//! Supports JSON and TOML file formats; the default location is a
//! platform-specific config directory.
//!
//! Configuration is organized into sections:
//! - Canvas settings (surface dimensions)
//! - Grid settings (spacing, colour, opacity)
//! - Stroke settings (accent colour, width slider range)

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Application directory name under the platform config dir
pub const APP_DIR: &str = "pitlane";

/// Default config file name
pub const CONFIG_FILE: &str = "designer.toml";

/// An opaque RGB colour written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for HexColor {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| SettingsError::invalid("color", format!("'{s}' is not #rrggbb")))?;
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| SettingsError::invalid("color", e.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for HexColor {
    type Error = SettingsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Drawing surface dimensions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CanvasSettings {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
        }
    }
}

/// Background grid appearance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridSettings {
    /// Distance between grid lines
    pub spacing: u32,
    /// Grid line thickness
    pub line_width: f32,
    /// Grid line opacity in `0.0..=1.0`
    pub opacity: f32,
    pub color: HexColor,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            spacing: 50,
            line_width: 1.0,
            opacity: 0.3,
            color: HexColor::new(0x37, 0x41, 0x51),
        }
    }
}

/// Track stroke style and the width slider range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StrokeSettings {
    /// Accent colour used for freehand strokes and templates
    pub color: HexColor,
    pub default_width: u32,
    pub min_width: u32,
    pub max_width: u32,
    /// Slider increment
    pub step: u32,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self {
            color: HexColor::new(0x10, 0xb9, 0x81),
            default_width: 20,
            min_width: 10,
            max_width: 50,
            step: 5,
        }
    }
}

impl StrokeSettings {
    /// Clamps `requested` into the slider range and snaps it to the nearest step.
    ///
    /// An inverted range is read with its bounds swapped.
    pub fn snap_width(&self, requested: u32) -> u32 {
        let step = self.step.max(1);
        let min = self.min_width.min(self.max_width);
        let max = self.min_width.max(self.max_width);
        let clamped = requested.clamp(min, max);
        let steps = (clamped - min + step / 2) / step;
        (min + steps * step).min(max)
    }
}

/// Complete designer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DesignerConfig {
    pub canvas: CanvasSettings,
    pub grid: GridSettings,
    pub stroke: StrokeSettings,
}

impl DesignerConfig {
    /// Default config file location, e.g. `~/.config/pitlane/designer.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded designer config");
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(path = %path.display(), "No designer config found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SettingsError::invalid(
                "canvas",
                "surface dimensions must be > 0",
            ));
        }

        if self.grid.spacing == 0 {
            return Err(SettingsError::invalid("grid.spacing", "must be > 0"));
        }
        if !(self.grid.line_width > 0.0) {
            return Err(SettingsError::invalid("grid.line_width", "must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.grid.opacity) {
            return Err(SettingsError::invalid(
                "grid.opacity",
                "must be between 0.0 and 1.0",
            ));
        }

        let stroke = &self.stroke;
        if stroke.min_width == 0 {
            return Err(SettingsError::invalid("stroke.min_width", "must be > 0"));
        }
        if stroke.step == 0 {
            return Err(SettingsError::invalid("stroke.step", "must be > 0"));
        }
        if stroke.min_width > stroke.max_width {
            return Err(SettingsError::invalid(
                "stroke.max_width",
                "must not be below stroke.min_width",
            ));
        }
        if !(stroke.min_width..=stroke.max_width).contains(&stroke.default_width) {
            return Err(SettingsError::invalid(
                "stroke.default_width",
                format!(
                    "must be within {}..={}",
                    stroke.min_width, stroke.max_width
                ),
            ));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
