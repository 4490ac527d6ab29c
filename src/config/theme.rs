use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;

/// Badge color palette.
///
/// Passed by reference into every drawing step; nothing reads colors from global state, so
/// several themes can be rendered side by side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Aggregate score fill and diamond fill (exotic gold).
    pub score: Rgba8,
    /// Accent line across the top edge.
    pub accent: Rgba8,
    /// Translucent line under the accent.
    pub accent_glow: Rgba8,
    /// Display name and stat values.
    pub text: Rgba8,
    /// Stat labels.
    pub dim_text: Rgba8,
    /// Stroke ring behind text and the diamond outline.
    pub stroke: Rgba8,
    /// Drop shadows.
    pub shadow: Rgba8,
    /// Full-canvas darkening.
    pub overlay: Rgba8,
    /// Right-hand end of the horizontal gradient.
    pub gradient: Rgba8,
    /// Bottom end of the vignette above the stat bar.
    pub vignette: Rgba8,
    /// Stat bar band.
    pub stat_bar: Rgba8,
    /// Separator line along the stat bar's top edge.
    pub stat_bar_edge: Rgba8,
    /// Vertical dividers between stat cells.
    pub divider: Rgba8,
    /// Canvas border.
    pub border: Rgba8,
    /// Alpha applied to the fill color for glow copies.
    pub glow_alpha: u8,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            score: Rgba8::rgba(245, 217, 106, 255),
            accent: Rgba8::rgba(206, 174, 51, 255),
            accent_glow: Rgba8::rgba(206, 174, 51, 80),
            text: Rgba8::WHITE,
            dim_text: Rgba8::rgba(180, 180, 190, 255),
            stroke: Rgba8::BLACK,
            shadow: Rgba8::rgba(0, 0, 0, 204),
            overlay: Rgba8::rgba(0, 0, 0, 35),
            gradient: Rgba8::rgba(0, 0, 0, 150),
            vignette: Rgba8::rgba(0, 0, 0, 60),
            stat_bar: Rgba8::rgba(0, 0, 0, 170),
            stat_bar_edge: Rgba8::rgba(255, 255, 255, 30),
            divider: Rgba8::rgba(255, 255, 255, 70),
            border: Rgba8::rgba(45, 45, 50, 255),
            glow_alpha: 40,
        }
    }
}
