use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{BadgeError, BadgeResult};

/// Decoded background artwork. Read-only once loaded; cheap to clone.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pixels: Arc<image::RgbaImage>,
}

impl SourceImage {
    /// Wrap an already-decoded straight-alpha RGBA image.
    pub fn from_rgba(pixels: image::RgbaImage) -> BadgeResult<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(BadgeError::background("background image has zero area"));
        }
        Ok(Self {
            pixels: Arc::new(pixels),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Straight-alpha pixels.
    pub fn pixels(&self) -> &image::RgbaImage {
        &self.pixels
    }
}

/// Decode encoded JPEG/PNG bytes into a [`SourceImage`].
pub fn decode_background(bytes: &[u8]) -> BadgeResult<SourceImage> {
    let dyn_img = image::load_from_memory(bytes)
        .context("decode image from memory")
        .map_err(|e| BadgeError::background(format!("{e:#}")))?;
    SourceImage::from_rgba(dyn_img.to_rgba8())
}

/// Read and decode background artwork from disk.
pub fn load_background(path: impl AsRef<Path>) -> BadgeResult<SourceImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        BadgeError::background(format!("failed to read '{}': {e}", path.display()))
    })?;
    decode_background(&bytes).map_err(|e| match e {
        BadgeError::Background(msg) => {
            BadgeError::background(format!("failed to load '{}': {msg}", path.display()))
        }
        other => other,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
