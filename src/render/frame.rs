use image::imageops::FilterType;

use crate::assets::decode::SourceImage;
use crate::foundation::core::{CanvasSize, Rgba8};
use crate::render::canvas::Canvas;

/// Region of the source image that survives aspect-fill cropping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    /// Left edge in source pixels.
    pub x: u32,
    /// Top edge in source pixels.
    pub y: u32,
    /// Width in source pixels.
    pub width: u32,
    /// Height in source pixels.
    pub height: u32,
}

/// Centered crop of a `src_w`×`src_h` source whose aspect ratio equals `target`'s.
///
/// Sources relatively wider than the target lose equal margins left and right and keep their
/// full height; taller sources lose equal margins top and bottom and keep their full width.
/// An exact aspect match returns the whole source.
pub fn aspect_fill_crop(src_w: u32, src_h: u32, target: CanvasSize) -> CropRect {
    let (sw, sh) = (u64::from(src_w), u64::from(src_h));
    let (tw, th) = (u64::from(target.width.max(1)), u64::from(target.height.max(1)));

    if sw * th >= tw * sh {
        let width = ((sh * tw) / th).clamp(1, sw.max(1)) as u32;
        CropRect {
            x: (src_w - width.min(src_w)) / 2,
            y: 0,
            width,
            height: src_h,
        }
    } else {
        let height = ((sw * th) / tw).clamp(1, sh.max(1)) as u32;
        CropRect {
            x: 0,
            y: (src_h - height.min(src_h)) / 2,
            width: src_w,
            height,
        }
    }
}

/// Cover the whole canvas with `src`: crop to the canvas aspect, then bilinear-scale.
#[tracing::instrument(skip_all, fields(src_w = src.width(), src_h = src.height()))]
pub fn frame_source(canvas: &mut Canvas, src: &SourceImage) -> CropRect {
    let size = canvas.size();
    let crop = aspect_fill_crop(src.width(), src.height(), size);

    let cropped =
        image::imageops::crop_imm(src.pixels(), crop.x, crop.y, crop.width, crop.height)
            .to_image();
    let scaled = image::imageops::resize(&cropped, size.width, size.height, FilterType::Triangle);

    for (dst, px) in canvas
        .data_mut()
        .chunks_exact_mut(4)
        .zip(scaled.pixels())
    {
        let [r, g, b, a] = px.0;
        dst.copy_from_slice(&Rgba8::rgba(r, g, b, a).to_premul());
    }

    tracing::debug!(?crop, "framed background");
    crop
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
