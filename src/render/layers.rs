use crate::config::theme::Theme;
use crate::foundation::core::{IRect, Rgba8};
use crate::layout::config::BadgeLayout;
use crate::render::canvas::Canvas;

/// Left-to-right gradient over `x0..x1`, rows `y..y+height`: alpha ramps linearly from 0 at
/// `x0` toward `end.a` at `x1`, one column at a time.
pub fn horizontal_gradient(canvas: &mut Canvas, x0: i32, x1: i32, y: i32, height: i32, end: Rgba8) {
    let span = x1 - x0;
    if span <= 0 {
        return;
    }
    for x in x0..x1 {
        let alpha = ramp_alpha(x - x0, span, end.a);
        canvas.fill_rect(IRect::new(x, y, 1, height), end.with_alpha(alpha));
    }
}

/// Top-to-bottom gradient over `y0..y1`, columns `x..x+width`.
pub fn vertical_gradient(canvas: &mut Canvas, x: i32, width: i32, y0: i32, y1: i32, end: Rgba8) {
    let span = y1 - y0;
    if span <= 0 {
        return;
    }
    for y in y0..y1 {
        let alpha = ramp_alpha(y - y0, span, end.a);
        canvas.fill_rect(IRect::new(x, y, width, 1), end.with_alpha(alpha));
    }
}

fn ramp_alpha(pos: i32, span: i32, max_alpha: u8) -> u8 {
    let progress = f64::from(pos) / f64::from(span);
    (progress * f64::from(max_alpha)) as u8
}

/// Frame the canvas with a `width`-pixel border.
pub fn border(canvas: &mut Canvas, width: i32, color: Rgba8) {
    if width <= 0 {
        return;
    }
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;
    canvas.fill_rect(IRect::new(0, 0, w, width), color);
    canvas.fill_rect(IRect::new(0, h - width, w, width), color);
    canvas.fill_rect(IRect::new(0, 0, width, h), color);
    canvas.fill_rect(IRect::new(w - width, 0, width, h), color);
}

/// Build the dark UI backdrop over the framed artwork.
///
/// Layer order: overlay, right-side gradient, vignette, stat bar with edge line, accent line
/// with glow, border.
#[tracing::instrument(skip_all)]
pub fn composite_backdrop(canvas: &mut Canvas, theme: &Theme, layout: &BadgeLayout) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;

    canvas.fill_rect(IRect::new(0, 0, w, h), theme.overlay);

    let gradient_x = (f64::from(w) * f64::from(layout.gradient_start)) as i32;
    horizontal_gradient(canvas, gradient_x, w, 0, h, theme.gradient);

    let bar_y = layout.stat_bar_top(canvas.height());
    if layout.vignette {
        vertical_gradient(canvas, 0, w, h / 2, bar_y, theme.vignette);
    }

    let bar = IRect::new(0, bar_y, w, layout.stat_bar_height);
    canvas.fill_rect(bar, theme.stat_bar);
    canvas.fill_rect(IRect::new(0, bar_y, w, 1), theme.stat_bar_edge);

    canvas.fill_rect(IRect::new(0, 0, w, layout.accent_height), theme.accent);
    if layout.accent_glow {
        canvas.fill_rect(IRect::new(0, layout.accent_height, w, 1), theme.accent_glow);
    }

    border(canvas, layout.border_width, theme.border);
    tracing::debug!(bar_y, gradient_x, "composited backdrop");
}

#[cfg(test)]
#[path = "../../tests/unit/render/layers.rs"]
mod tests;
