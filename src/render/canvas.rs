use std::io::Cursor;

use anyhow::Context;

use crate::assets::fonts::GlyphMask;
use crate::effects::composite::{PremulRgba8, over, over_span};
use crate::foundation::core::{CanvasSize, IRect, Rgba8};
use crate::foundation::error::{BadgeError, BadgeResult};
use crate::foundation::math::unpremul_u8;

/// Mutable pixel buffer a badge is composited into.
///
/// Pixels are premultiplied RGBA8, row-major, tightly packed. A canvas is owned by exactly one
/// render call and every drawing operation clips to its bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    size: CanvasSize,
    data: Vec<u8>,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            data: vec![0u8; size.pixel_count() * 4],
        }
    }

    /// Canvas dimensions.
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Premultiplied pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<PremulRgba8> {
        let idx = self.index(x, y)?;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.size.width || y as u32 >= self.size.height {
            return None;
        }
        Some(((y as usize) * (self.size.width as usize) + (x as usize)) * 4)
    }

    /// Clip `rect` to the canvas, returning `(x0, y0, x1, y1)` with exclusive ends.
    fn clip(&self, rect: IRect) -> Option<(usize, usize, usize, usize)> {
        if rect.is_empty() {
            return None;
        }
        let w = self.size.width as i64;
        let h = self.size.height as i64;
        let x0 = i64::from(rect.x).clamp(0, w);
        let y0 = i64::from(rect.y).clamp(0, h);
        let x1 = i64::from(rect.right()).clamp(0, w);
        let y1 = i64::from(rect.bottom()).clamp(0, h);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }

    /// Draw a solid rectangle over the canvas.
    pub fn fill_rect(&mut self, rect: IRect, color: Rgba8) {
        let src = color.to_premul();
        if src[3] == 0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        let stride = self.size.width as usize * 4;
        for y in y0..y1 {
            let row = &mut self.data[y * stride + x0 * 4..y * stride + x1 * 4];
            over_span(row, src);
        }
    }

    /// Blend one pixel over the canvas. Off-canvas coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba8) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        let d = [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ];
        let out = over(d, color.to_premul(), 255);
        self.data[idx..idx + 4].copy_from_slice(&out);
    }

    /// Blend `color` through a glyph coverage mask whose pen position is `(pen_x, pen_y)`.
    pub fn blend_mask(&mut self, mask: &GlyphMask, pen_x: i32, pen_y: i32, color: Rgba8) {
        let src = color.to_premul();
        if src[3] == 0 || mask.width == 0 || mask.height == 0 {
            return;
        }
        let left = pen_x.saturating_add(mask.origin_x);
        let top = pen_y.saturating_add(mask.origin_y);
        let Some((x0, y0, x1, y1)) = self.clip(IRect::new(
            left,
            top,
            mask.width as i32,
            mask.height as i32,
        )) else {
            return;
        };

        let stride = self.size.width as usize * 4;
        let mw = mask.width as usize;
        for y in y0..y1 {
            let my = (y as i64 - i64::from(top)) as usize;
            for x in x0..x1 {
                let mx = (x as i64 - i64::from(left)) as usize;
                let cov = mask.coverage[my * mw + mx];
                if cov == 0 {
                    continue;
                }
                let idx = y * stride + x * 4;
                let d = [
                    self.data[idx],
                    self.data[idx + 1],
                    self.data[idx + 2],
                    self.data[idx + 3],
                ];
                let out = over(d, src, cov);
                self.data[idx..idx + 4].copy_from_slice(&out);
            }
        }
    }

    /// Convert to a straight-alpha `image` buffer.
    pub fn to_rgba_image(&self) -> BadgeResult<image::RgbaImage> {
        let mut straight = self.data.clone();
        for px in straight.chunks_exact_mut(4) {
            let a = px[3];
            if a == 255 {
                continue;
            }
            px[0] = unpremul_u8(px[0], a);
            px[1] = unpremul_u8(px[1], a);
            px[2] = unpremul_u8(px[2], a);
        }
        image::RgbaImage::from_raw(self.size.width, self.size.height, straight)
            .ok_or_else(|| BadgeError::encode("canvas buffer does not match its dimensions"))
    }

    /// Encode the canvas as PNG bytes.
    pub fn encode_png(&self) -> BadgeResult<Vec<u8>> {
        let img = self.to_rgba_image()?;
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .context("encode canvas as png")
            .map_err(|e| BadgeError::encode(format!("{e:#}")))?;
        Ok(buf)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
