use std::sync::Arc;

use super::*;
use crate::assets::fonts::{GlyphFace, GlyphMask};

/// Fixed-advance face: every character is `advance` pixels wide and a solid block.
struct BlockFace {
    advance: i32,
}

impl GlyphFace for BlockFace {
    fn size_px(&self) -> f32 {
        self.advance as f32
    }

    fn measure(&mut self, text: &str) -> i32 {
        self.advance * text.chars().count() as i32
    }

    fn rasterize(&mut self, text: &str) -> Arc<GlyphMask> {
        let width = self.measure(text) as u32;
        let height = self.advance as u32;
        Arc::new(GlyphMask {
            width,
            height,
            origin_x: 0,
            origin_y: -self.advance,
            coverage: vec![255; (width * height) as usize],
        })
    }
}

fn fonts() -> FontSet {
    FontSet::from_faces(
        Box::new(BlockFace { advance: 24 }),
        Box::new(BlockFace { advance: 10 }),
        Box::new(BlockFace { advance: 8 }),
        Box::new(BlockFace { advance: 5 }),
    )
}

fn stats(name: &str) -> StatRecord {
    StatRecord {
        display_name: name.to_owned(),
        commits: 1234,
        pull_requests: 56,
        issues: 7,
        reviews: 0,
        stars: 2_500_000,
    }
}

#[test]
fn cells_partition_the_width() {
    let cells = cell_bounds(800);
    assert!(cells.iter().all(|&(_, w)| w == 160));
    assert_eq!(cells.map(|(x, _)| x), [0, 160, 320, 480, 640]);

    let odd = cell_bounds(803);
    assert_eq!(odd[4], (640, 163));
    assert_eq!(odd.iter().map(|&(_, w)| w).sum::<i32>(), 803);
}

#[test]
fn score_group_is_right_aligned() {
    let layout = BadgeLayout::default();
    let plan = plan_layout(CanvasSize::BADGE, &stats("octo"), &mut fonts(), &layout);

    // 1234 + 56 + 7 + 0 + 2_500_000
    assert_eq!(plan.score.text, "2501297");
    assert_eq!(plan.score.width, 7 * 24);
    assert_eq!(plan.score.x + plan.score.width, 800 - layout.margin_x);
    assert_eq!(plan.score.y, 3 + 12 + 52);

    let d = plan.diamond;
    assert_eq!(d.cx + d.half_w + layout.diamond_gap, plan.score.x);
    assert_eq!(d.cy, plan.score.y - 16);
    assert_eq!((d.half_w, d.half_h), (10, 10));
}

#[test]
fn name_is_upper_cased_at_fixed_anchor() {
    let plan = plan_layout(
        CanvasSize::BADGE,
        &stats("octo-cat"),
        &mut fonts(),
        &BadgeLayout::default(),
    );
    let name = plan.name.unwrap();
    assert_eq!(name.text, "OCTO-CAT");
    assert_eq!((name.x, name.y), (130, 3 + 12 + 22));
}

#[test]
fn empty_name_shifts_nothing() {
    let layout = BadgeLayout::default();
    let with = plan_layout(CanvasSize::BADGE, &stats("octo"), &mut fonts(), &layout);
    let without = plan_layout(CanvasSize::BADGE, &stats(""), &mut fonts(), &layout);
    assert!(without.name.is_none());
    assert_eq!(with.score, without.score);
    assert_eq!(with.diamond, without.diamond);
    assert_eq!(with.cells, without.cells);
    assert_eq!(with.dividers, without.dividers);
}

#[test]
fn dividers_sit_on_interior_boundaries() {
    let plan = plan_layout(
        CanvasSize::BADGE,
        &stats(""),
        &mut fonts(),
        &BadgeLayout::default(),
    );
    let xs: Vec<i32> = plan.dividers.iter().map(|r| r.x).collect();
    assert_eq!(xs, [160, 320, 480, 640]);
    for r in &plan.dividers {
        assert_eq!((r.y, r.width, r.height), (118, 1, 44));
    }
}

#[test]
fn stacked_cells_center_value_over_label() {
    let plan = plan_layout(
        CanvasSize::BADGE,
        &stats(""),
        &mut fonts(),
        &BadgeLayout::default(),
    );
    let labels: Vec<&str> = plan.cells.iter().map(|c| c.label.text.as_str()).collect();
    assert_eq!(labels, ["COMMITS", "PRS", "ISSUES", "REVIEWS", "STARS"]);

    let first = &plan.cells[0];
    assert_eq!(first.value.text, "1.2K");
    assert_eq!(first.value.x, 80 - (4 * 8) / 2);
    assert_eq!(first.value.y, 118 + 18);
    // "COMMITS": 7 chars of 5px, drawn as one string.
    assert_eq!(first.label.width, 35);
    assert_eq!(first.label.tracking, 0);
    assert_eq!(first.label.x, 80 - 35 / 2);
    assert_eq!(first.label.y, 118 + 36);

    let stars = &plan.cells[4];
    assert_eq!(stars.value.text, "2.5M");
    assert_eq!(stars.value.x, 720 - 16);
}

#[test]
fn inline_cells_put_label_first_on_one_baseline() {
    let layout = BadgeLayout {
        arrangement: StatArrangement::Inline,
        ..BadgeLayout::default()
    };
    let plan = plan_layout(CanvasSize::BADGE, &stats(""), &mut fonts(), &layout);
    for cell in &plan.cells {
        assert_eq!(cell.label.y, 118 + 27);
        assert_eq!(cell.value.y, cell.label.y);
        assert_eq!(cell.value.x, cell.label.x + cell.label.width + 6);
        let total = cell.label.width + 6 + cell.value.width;
        assert_eq!(cell.label.x, cell.x + cell.width / 2 - total / 2);
    }
}

#[test]
fn tracked_labels_center_on_the_spaced_width() {
    let layout = BadgeLayout {
        label_tracking: 1,
        ..BadgeLayout::default()
    };
    let plan = plan_layout(CanvasSize::BADGE, &stats(""), &mut fonts(), &layout);
    // Six 1px gaps between the seven characters of "COMMITS".
    assert_eq!(plan.cells[0].label.width, 41);
    assert_eq!(plan.cells[0].label.tracking, 1);
    assert_eq!(plan.cells[0].label.x, 80 - 41 / 2);
}

#[test]
fn saturates_on_unvalidated_geometry() {
    let layout = BadgeLayout {
        diamond_half_width: i32::MAX,
        diamond_gap: i32::MAX,
        margin_x: i32::MAX,
        ..BadgeLayout::default()
    };
    let plan = plan_layout(CanvasSize::BADGE, &stats(""), &mut fonts(), &layout);
    assert_eq!(plan.cells.len(), STAT_CELLS);
    let mut canvas = Canvas::new(CanvasSize::BADGE);
    apply_plan(&mut canvas, &plan, &mut fonts(), &Theme::default());
}

#[test]
fn apply_plan_is_deterministic_and_draws_in_the_bar() {
    let theme = Theme::default();
    let layout = BadgeLayout::default();
    let mut f = fonts();
    let plan = plan_layout(CanvasSize::BADGE, &stats("octo"), &mut f, &layout);

    let mut a = Canvas::new(CanvasSize::BADGE);
    apply_plan(&mut a, &plan, &mut f, &theme);
    let mut b = Canvas::new(CanvasSize::BADGE);
    apply_plan(&mut b, &plan, &mut f, &theme);
    assert_eq!(a, b);

    // Divider between the first two cells, mid-bar and clear of any text.
    let div = a.pixel(160, 120).unwrap();
    assert_eq!(div[3], 70);

    // Gold score fill at the middle of its first glyph.
    let s = &plan.score;
    let g = theme.score;
    assert_eq!(a.pixel(s.x + 12, s.y - 12), Some([g.r, g.g, g.b, 255]));

    // Diamond body center.
    let d = plan.diamond;
    assert_eq!(a.pixel(d.cx, d.cy), Some([g.r, g.g, g.b, 255]));
}

#[test]
fn zero_stats_show_zero_everywhere() {
    let plan = plan_layout(
        CanvasSize::BADGE,
        &StatRecord::default(),
        &mut fonts(),
        &BadgeLayout::default(),
    );
    assert_eq!(plan.score.text, "0");
    assert!(plan.cells.iter().all(|c| c.value.text == "0"));
    assert!(plan.name.is_none());
}
