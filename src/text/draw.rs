use crate::assets::fonts::GlyphFace;
use crate::config::theme::Theme;
use crate::foundation::core::Rgba8;
use crate::render::canvas::Canvas;
use crate::text::passes::TextEffect;

/// Advance width of `text` with `face`.
pub fn measure_text(face: &mut dyn GlyphFace, text: &str) -> i32 {
    face.measure(text)
}

/// Width of `text` drawn one character at a time with `gap` extra pixels between characters.
pub fn measure_tracked(face: &mut dyn GlyphFace, text: &str, gap: i32) -> i32 {
    let mut buf = [0u8; 4];
    let mut width = 0i32;
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            width = width.saturating_add(gap);
        }
        width = width.saturating_add(face.measure(ch.encode_utf8(&mut buf)));
    }
    width
}

/// Draw `text` with its baseline-left anchor at `(x, y)`.
#[allow(clippy::too_many_arguments)]
pub fn draw_text(
    canvas: &mut Canvas,
    face: &mut dyn GlyphFace,
    text: &str,
    x: i32,
    y: i32,
    fill: Rgba8,
    effect: TextEffect,
    theme: &Theme,
) {
    if text.is_empty() {
        return;
    }
    let mask = face.rasterize(text);
    for pass in effect.passes(theme) {
        let color = pass.color.resolve(fill);
        let (px, py) = (x.saturating_add(pass.dx), y.saturating_add(pass.dy));
        canvas.blend_mask(&mask, px, py, color);
    }
}

/// Like [`draw_text`], but places each character separately and adds `gap` pixels after each.
///
/// Layering stays pass-major: every character gets its shadows before any character gets its
/// stroke, so strokes never cover a neighbour's fill.
#[allow(clippy::too_many_arguments)]
pub fn draw_text_tracked(
    canvas: &mut Canvas,
    face: &mut dyn GlyphFace,
    text: &str,
    x: i32,
    y: i32,
    gap: i32,
    fill: Rgba8,
    effect: TextEffect,
    theme: &Theme,
) {
    let mut buf = [0u8; 4];
    let glyphs: Vec<_> = text
        .chars()
        .map(|ch| {
            let s = ch.encode_utf8(&mut buf);
            (face.measure(s), face.rasterize(s))
        })
        .collect();
    if glyphs.is_empty() {
        return;
    }

    for pass in effect.passes(theme) {
        let color = pass.color.resolve(fill);
        let mut pen = x;
        for (advance, mask) in &glyphs {
            let (px, py) = (pen.saturating_add(pass.dx), y.saturating_add(pass.dy));
            canvas.blend_mask(mask, px, py, color);
            pen = pen.saturating_add(*advance).saturating_add(gap);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/draw.rs"]
mod tests;
