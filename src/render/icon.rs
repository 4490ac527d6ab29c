use crate::config::theme::Theme;
use crate::foundation::core::{IRect, Rgba8};
use crate::render::canvas::Canvas;

/// Fill a diamond centered at `(cx, cy)` with the given half extents, blending over the canvas.
///
/// Row `dy` spans `cx - span ..= cx + span` with `span = trunc(half_w * (1 - |dy| / half_h))`.
/// A zero `half_h` draws the center row only. Rows and columns off the canvas are skipped.
pub fn draw_diamond(
    canvas: &mut Canvas,
    cx: i32,
    cy: i32,
    half_w: i32,
    half_h: i32,
    color: Rgba8,
) {
    if half_w < 0 || half_h < 0 {
        return;
    }
    let (cx, cy) = (i64::from(cx), i64::from(cy));
    let (hw, hh) = (i64::from(half_w), i64::from(half_h));
    let width = i64::from(canvas.width());

    let first = (-hh).max(-cy);
    let last = hh.min(i64::from(canvas.height()) - 1 - cy);
    for dy in first..=last {
        let span = if hh == 0 {
            hw
        } else {
            let t = 1.0 - dy.abs() as f64 / hh as f64;
            (hw as f64 * t) as i64
        };
        let x0 = (cx - span).max(0);
        let x1 = (cx + span + 1).min(width);
        if x0 >= x1 {
            continue;
        }
        let row = IRect::new(x0 as i32, (cy + dy) as i32, (x1 - x0) as i32, 1);
        canvas.fill_rect(row, color);
    }
}

/// The layered score marker: drop shadow, black outline, then the gold body.
pub fn draw_diamond_icon(
    canvas: &mut Canvas,
    cx: i32,
    cy: i32,
    half_w: i32,
    half_h: i32,
    theme: &Theme,
) {
    let (sx, sy) = (cx.saturating_add(2), cy.saturating_add(2));
    let (shadow_w, shadow_h) = (half_w.saturating_add(1), half_h.saturating_add(1));
    let (outline_w, outline_h) = (half_w.saturating_add(2), half_h.saturating_add(2));
    draw_diamond(canvas, sx, sy, shadow_w, shadow_h, theme.shadow);
    draw_diamond(canvas, cx, cy, outline_w, outline_h, theme.stroke);
    draw_diamond(canvas, cx, cy, half_w, half_h, theme.score);
}

#[cfg(test)]
#[path = "../../tests/unit/render/icon.rs"]
mod tests;
