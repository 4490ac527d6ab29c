use crate::assets::fonts::{FaceRole, FontSet};
use crate::config::theme::Theme;
use crate::foundation::core::{CanvasSize, IRect, Rgba8};
use crate::layout::config::{BadgeLayout, StatArrangement};
use crate::render::canvas::Canvas;
use crate::render::icon::draw_diamond_icon;
use crate::stats::format::format_count;
use crate::stats::record::{StatKind, StatRecord};
use crate::text::draw::{draw_text, draw_text_tracked, measure_tracked};
use crate::text::passes::TextEffect;

/// Number of cells in the stat bar.
pub const STAT_CELLS: usize = 5;

/// A string pinned to a baseline-left anchor, drawn with the face for `role`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedText {
    /// Which face draws it; also selects effect and color.
    pub role: FaceRole,
    /// Text as drawn.
    pub text: String,
    /// Pen x.
    pub x: i32,
    /// Baseline y.
    pub y: i32,
    /// Extra pixels between characters; 0 draws the string in one piece.
    pub tracking: i32,
    /// Measured width, tracking included.
    pub width: i32,
}

/// Center and half extents of the score marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiamondPlacement {
    /// Center x.
    pub cx: i32,
    /// Center y.
    pub cy: i32,
    /// Half width of the gold body.
    pub half_w: i32,
    /// Half height of the gold body.
    pub half_h: i32,
}

/// One stat-bar cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCell {
    /// Counter shown.
    pub kind: StatKind,
    /// Left edge.
    pub x: i32,
    /// Width.
    pub width: i32,
    /// Formatted counter.
    pub value: PlacedText,
    /// Upper-case label.
    pub label: PlacedText,
}

/// Every position a badge's foreground needs, computed before any pixel is touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutPlan {
    /// Upper-cased display name, absent when the name is empty.
    pub name: Option<PlacedText>,
    /// Aggregate score.
    pub score: PlacedText,
    /// Marker left of the score.
    pub diamond: DiamondPlacement,
    /// Stat cells in stat-bar order.
    pub cells: Vec<StatCell>,
    /// Vertical dividers at the interior cell boundaries.
    pub dividers: Vec<IRect>,
}

/// Split `width` into five `(x, width)` cells. The last cell takes the remainder.
pub fn cell_bounds(width: u32) -> [(i32, i32); STAT_CELLS] {
    let w = width as i32;
    let cell = w / STAT_CELLS as i32;
    std::array::from_fn(|i| {
        let x = i as i32 * cell;
        if i == STAT_CELLS - 1 {
            (x, w - x)
        } else {
            (x, cell)
        }
    })
}

fn place(fonts: &mut FontSet, role: FaceRole, text: String, tracking: i32) -> PlacedText {
    let face = fonts.face_mut(role);
    let width = if tracking > 0 {
        measure_tracked(face, &text, tracking)
    } else {
        face.measure(&text)
    };
    PlacedText {
        role,
        text,
        x: 0,
        y: 0,
        tracking,
        width,
    }
}

/// Compute the foreground layout for `stats` on a canvas of `size`.
pub fn plan_layout(
    size: CanvasSize,
    stats: &StatRecord,
    fonts: &mut FontSet,
    layout: &BadgeLayout,
) -> LayoutPlan {
    let w = size.width as i32;
    let top = layout.accent_height.saturating_add(layout.margin_top);

    let name = (!stats.display_name.is_empty()).then(|| {
        let mut t = place(fonts, FaceRole::Name, stats.display_name.to_uppercase(), 0);
        t.x = layout.name_x;
        t.y = top.saturating_add(layout.name_baseline);
        t
    });

    let mut score = place(
        fonts,
        FaceRole::Score,
        stats.aggregate_score().to_string(),
        0,
    );
    let marker_w = layout
        .diamond_half_width
        .saturating_mul(2)
        .saturating_add(layout.diamond_gap);
    let group_x = w
        .saturating_sub(layout.margin_x)
        .saturating_sub(marker_w)
        .saturating_sub(score.width);
    score.x = group_x.saturating_add(marker_w);
    score.y = top.saturating_add(layout.score_baseline);
    let diamond = DiamondPlacement {
        cx: group_x.saturating_add(layout.diamond_half_width),
        cy: score.y.saturating_sub(layout.diamond_lift),
        half_w: layout.diamond_half_width,
        half_h: layout.diamond_half_height,
    };

    let bar_y = layout.stat_bar_top(size.height);
    let bounds = cell_bounds(size.width);
    let mut cells = Vec::with_capacity(STAT_CELLS);
    let mut dividers = Vec::with_capacity(STAT_CELLS - 1);
    for (i, ((kind, count), (x, width))) in stats.counters().into_iter().zip(bounds).enumerate() {
        if i > 0 {
            dividers.push(IRect::new(
                x,
                bar_y,
                layout.divider_width,
                layout.stat_bar_height,
            ));
        }

        let mut value = place(fonts, FaceRole::StatValue, format_count(count), 0);
        let mut label = place(
            fonts,
            FaceRole::StatLabel,
            kind.label().to_owned(),
            layout.label_tracking,
        );
        let center = x + width / 2;
        match layout.arrangement {
            StatArrangement::Stacked => {
                value.x = center - value.width / 2;
                value.y = bar_y.saturating_add(layout.value_baseline);
                label.x = center - label.width / 2;
                label.y = bar_y.saturating_add(layout.label_baseline);
            }
            StatArrangement::Inline => {
                let total = label
                    .width
                    .saturating_add(layout.inline_gap)
                    .saturating_add(value.width);
                label.x = center - total / 2;
                value.x = label
                    .x
                    .saturating_add(label.width)
                    .saturating_add(layout.inline_gap);
                label.y = bar_y.saturating_add(layout.inline_baseline);
                value.y = label.y;
            }
        }

        cells.push(StatCell {
            kind,
            x,
            width,
            value,
            label,
        });
    }

    LayoutPlan {
        name,
        score,
        diamond,
        cells,
        dividers,
    }
}

fn style(role: FaceRole, theme: &Theme) -> (TextEffect, Rgba8) {
    match role {
        FaceRole::Score => (TextEffect::Glow, theme.score),
        FaceRole::Name => (TextEffect::Subtle, theme.text),
        FaceRole::StatValue => (TextEffect::Outline, theme.text),
        FaceRole::StatLabel => (TextEffect::Outline, theme.dim_text),
    }
}

fn draw_placed(canvas: &mut Canvas, fonts: &mut FontSet, t: &PlacedText, theme: &Theme) {
    let (effect, color) = style(t.role, theme);
    let face = fonts.face_mut(t.role);
    if t.tracking > 0 {
        draw_text_tracked(
            canvas,
            face,
            &t.text,
            t.x,
            t.y,
            t.tracking,
            color,
            effect,
            theme,
        );
    } else {
        draw_text(canvas, face, &t.text, t.x, t.y, color, effect, theme);
    }
}

/// Draw a planned foreground: name, score marker and score, dividers, then the stat cells.
#[tracing::instrument(skip_all, fields(cells = plan.cells.len()))]
pub fn apply_plan(canvas: &mut Canvas, plan: &LayoutPlan, fonts: &mut FontSet, theme: &Theme) {
    if let Some(name) = &plan.name {
        draw_placed(canvas, fonts, name, theme);
    }

    let d = plan.diamond;
    draw_diamond_icon(canvas, d.cx, d.cy, d.half_w, d.half_h, theme);
    draw_placed(canvas, fonts, &plan.score, theme);

    for divider in &plan.dividers {
        canvas.fill_rect(*divider, theme.divider);
    }
    for cell in &plan.cells {
        draw_placed(canvas, fonts, &cell.value, theme);
        draw_placed(canvas, fonts, &cell.label, theme);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
