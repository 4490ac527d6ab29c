use crate::config::theme::Theme;
use crate::foundation::core::Rgba8;

/// What a draw pass contributes to the layered text look. Passes run in list order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassKind {
    /// Low-alpha bloom around the glyphs.
    Glow,
    /// Offset drop shadow.
    Shadow,
    /// One copy of the fake stroke ring.
    Stroke,
    /// The glyphs themselves at the anchor.
    Fill,
}

/// Where a pass takes its color from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassColor {
    /// A theme color fixed when the pass list is built.
    Fixed(Rgba8),
    /// The caller's fill color.
    Fill,
    /// The caller's fill color with its alpha replaced.
    FillAlpha(u8),
}

impl PassColor {
    /// Concrete color for a draw with primary color `fill`.
    pub fn resolve(self, fill: Rgba8) -> Rgba8 {
        match self {
            Self::Fixed(c) => c,
            Self::Fill => fill,
            Self::FillAlpha(a) => fill.with_alpha(a),
        }
    }
}

/// One copy of the string: pixel offset from the anchor, color source, purpose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawPass {
    /// Horizontal offset in pixels.
    pub dx: i32,
    /// Vertical offset in pixels (positive is down).
    pub dy: i32,
    /// Color source.
    pub color: PassColor,
    /// Purpose.
    pub kind: PassKind,
}

impl DrawPass {
    const fn new(dx: i32, dy: i32, color: PassColor, kind: PassKind) -> Self {
        Self {
            dx,
            dy,
            color,
            kind,
        }
    }
}

/// Named text treatments. Each resolves to an ordered pass list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextEffect {
    /// Fill only.
    Plain,
    /// Two shadows, a 2px stroke ring, fill.
    #[default]
    Outline,
    /// One shadow, a 1px stroke ring, fill.
    Subtle,
    /// Low-alpha bloom, then the outline passes.
    Glow,
}

const OUTLINE_SHADOWS: [(i32, i32); 2] = [(2, 2), (3, 3)];
const SUBTLE_SHADOWS: [(i32, i32); 1] = [(1, 1)];

const GLOW_RING: [(i32, i32); 12] = [
    (-3, 0),
    (3, 0),
    (0, -3),
    (0, 3),
    (-2, -2),
    (2, -2),
    (-2, 2),
    (2, 2),
    (-3, -2),
    (3, -2),
    (-3, 2),
    (3, 2),
];

/// Every offset on the square ring of Chebyshev radius `r`, row by row.
fn ring(r: i32) -> impl Iterator<Item = (i32, i32)> {
    (-r..=r).flat_map(move |dy| {
        (-r..=r)
            .filter(move |dx| dx.abs() == r || dy.abs() == r)
            .map(move |dx| (dx, dy))
    })
}

fn stroked(passes: &mut Vec<DrawPass>, theme: &Theme, shadows: &[(i32, i32)], radius: i32) {
    for &(dx, dy) in shadows {
        passes.push(DrawPass::new(
            dx,
            dy,
            PassColor::Fixed(theme.shadow),
            PassKind::Shadow,
        ));
    }
    for (dx, dy) in ring(radius) {
        passes.push(DrawPass::new(
            dx,
            dy,
            PassColor::Fixed(theme.stroke),
            PassKind::Stroke,
        ));
    }
    passes.push(DrawPass::new(0, 0, PassColor::Fill, PassKind::Fill));
}

impl TextEffect {
    /// Ordered pass list for this effect under `theme`.
    pub fn passes(self, theme: &Theme) -> Vec<DrawPass> {
        let mut passes = Vec::with_capacity(32);
        match self {
            Self::Plain => passes.push(DrawPass::new(0, 0, PassColor::Fill, PassKind::Fill)),
            Self::Outline => stroked(&mut passes, theme, &OUTLINE_SHADOWS, 2),
            Self::Subtle => stroked(&mut passes, theme, &SUBTLE_SHADOWS, 1),
            Self::Glow => {
                let glow = PassColor::FillAlpha(theme.glow_alpha);
                passes.extend(
                    GLOW_RING
                        .iter()
                        .map(|&(dx, dy)| DrawPass::new(dx, dy, glow, PassKind::Glow)),
                );
                stroked(&mut passes, theme, &OUTLINE_SHADOWS, 2);
            }
        }
        passes
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/passes.rs"]
mod tests;
