//! Raster export as PNG data URLs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, Rgba, RgbaImage};
use pitlane_core::SurfaceError;
use std::io::Cursor;
use tiny_skia::Pixmap;

/// Prefix of every exported raster.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Converts a premultiplied pixmap into a straight-alpha RGBA image.
pub fn pixmap_to_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let pixels = pixmap.pixels();
    RgbaImage::from_fn(width, pixmap.height(), |x, y| {
        let c = pixels[(y * width + x) as usize].demultiply();
        Rgba([c.red(), c.green(), c.blue(), c.alpha()])
    })
}

/// Encodes `pixmap` as `data:image/png;base64,...`.
pub fn encode_png_data_url(pixmap: &Pixmap) -> Result<String, SurfaceError> {
    let image = pixmap_to_image(pixmap);
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| SurfaceError::Encode {
            reason: e.to_string(),
        })?;
    Ok(format!("{PNG_DATA_URL_PREFIX}{}", STANDARD.encode(&bytes)))
}

/// Extracts the raw PNG file bytes from a data URL.
pub fn png_bytes_from_data_url(data_url: &str) -> Result<Vec<u8>, SurfaceError> {
    let encoded = data_url
        .strip_prefix(PNG_DATA_URL_PREFIX)
        .ok_or_else(|| SurfaceError::Encode {
            reason: "not a PNG data URL".to_string(),
        })?;
    STANDARD.decode(encoded).map_err(|e| SurfaceError::Encode {
        reason: e.to_string(),
    })
}

/// Decodes a PNG data URL produced by [`encode_png_data_url`].
pub fn decode_png_data_url(data_url: &str) -> Result<RgbaImage, SurfaceError> {
    let bytes = png_bytes_from_data_url(data_url)?;
    image::load_from_memory_with_format(&bytes, ImageFormat::Png)
        .map(|img| img.to_rgba8())
        .map_err(|e| SurfaceError::Encode {
            reason: e.to_string(),
        })
}
