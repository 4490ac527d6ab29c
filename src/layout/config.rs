use serde::{Deserialize, Serialize};

use crate::foundation::core::CanvasSize;
use crate::foundation::error::{BadgeError, BadgeResult};

/// Pixel sizes of the four glyph handles a render loads.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontSizes {
    /// Aggregate score (bold).
    pub score: f32,
    /// Display name (medium).
    pub name: f32,
    /// Stat values (bold).
    pub stat_value: f32,
    /// Stat labels (medium).
    pub stat_label: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            score: 48.0,
            name: 20.0,
            stat_value: 16.0,
            stat_label: 10.0,
        }
    }
}

/// How a stat cell places its value and label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatArrangement {
    /// Value above label, each centered in the cell on its own.
    #[default]
    Stacked,
    /// Label then value on one baseline, centered together.
    Inline,
}

/// Badge geometry. All offsets are pixels; baselines are measured from the element they hang
/// off (accent line, stat bar top).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeLayout {
    /// Right margin of the aggregate score.
    pub margin_x: i32,
    /// Gap between the accent line and the top text rows.
    pub margin_top: i32,
    /// Accent line height.
    pub accent_height: i32,
    /// Draw the translucent line under the accent.
    pub accent_glow: bool,
    /// Border thickness.
    pub border_width: i32,
    /// Stat bar height.
    pub stat_bar_height: i32,
    /// Divider thickness.
    pub divider_width: i32,
    /// Fraction of the width where the horizontal gradient starts.
    pub gradient_start: f32,
    /// Draw the vignette between mid-height and the stat bar.
    pub vignette: bool,
    /// Left edge of the display name.
    pub name_x: i32,
    /// Name baseline below `accent_height + margin_top`.
    pub name_baseline: i32,
    /// Score baseline below `accent_height + margin_top`.
    pub score_baseline: i32,
    /// Diamond half width.
    pub diamond_half_width: i32,
    /// Diamond half height.
    pub diamond_half_height: i32,
    /// Gap between the diamond's right tip and the score.
    pub diamond_gap: i32,
    /// How far the diamond center sits above the score baseline.
    pub diamond_lift: i32,
    /// Stat cell arrangement.
    pub arrangement: StatArrangement,
    /// Stacked: value baseline below the stat bar top.
    pub value_baseline: i32,
    /// Stacked: label baseline below the stat bar top.
    pub label_baseline: i32,
    /// Inline: shared baseline below the stat bar top.
    pub inline_baseline: i32,
    /// Inline: gap between label and value.
    pub inline_gap: i32,
    /// Extra letter spacing for stat labels; 0 (the default) draws each label as one string.
    pub label_tracking: i32,
    /// Glyph handle sizes.
    pub fonts: FontSizes,
}

impl Default for BadgeLayout {
    fn default() -> Self {
        Self {
            margin_x: 20,
            margin_top: 12,
            accent_height: 3,
            accent_glow: true,
            border_width: 1,
            stat_bar_height: 44,
            divider_width: 1,
            gradient_start: 0.4,
            vignette: true,
            name_x: 130,
            name_baseline: 22,
            score_baseline: 52,
            diamond_half_width: 10,
            diamond_half_height: 10,
            diamond_gap: 6,
            diamond_lift: 16,
            arrangement: StatArrangement::Stacked,
            value_baseline: 18,
            label_baseline: 36,
            inline_baseline: 27,
            inline_gap: 6,
            label_tracking: 0,
            fonts: FontSizes::default(),
        }
    }
}

impl BadgeLayout {
    /// Top of the stat bar for a canvas `height` pixels tall.
    pub fn stat_bar_top(&self, height: u32) -> i32 {
        (height as i32).saturating_sub(self.stat_bar_height)
    }

    /// Reject geometry that cannot produce a sensible badge on a canvas of `size`.
    ///
    /// Every pixel offset must lie within `0..=size.width` and every font size within
    /// `(0, size.width]`.
    pub fn validate(&self, size: CanvasSize) -> BadgeResult<()> {
        let height = size.height as i32;
        let width = size.width as i32;
        if self.stat_bar_height < 0 || self.stat_bar_height > height {
            return Err(BadgeError::validation(format!(
                "stat_bar_height must be within 0..={height}"
            )));
        }
        if !(0.0..=1.0).contains(&self.gradient_start) {
            return Err(BadgeError::validation(
                "gradient_start must be within 0..=1",
            ));
        }

        for (name, v) in [
            ("margin_x", self.margin_x),
            ("margin_top", self.margin_top),
            ("accent_height", self.accent_height),
            ("border_width", self.border_width),
            ("divider_width", self.divider_width),
            ("name_x", self.name_x),
            ("name_baseline", self.name_baseline),
            ("score_baseline", self.score_baseline),
            ("diamond_half_width", self.diamond_half_width),
            ("diamond_half_height", self.diamond_half_height),
            ("diamond_gap", self.diamond_gap),
            ("diamond_lift", self.diamond_lift),
            ("value_baseline", self.value_baseline),
            ("label_baseline", self.label_baseline),
            ("inline_baseline", self.inline_baseline),
            ("inline_gap", self.inline_gap),
            ("label_tracking", self.label_tracking),
        ] {
            if !(0..=width).contains(&v) {
                return Err(BadgeError::validation(format!(
                    "{name} must be within 0..={width}"
                )));
            }
        }

        let f = self.fonts;
        let max_px = size.width as f32;
        for (name, v) in [
            ("score", f.score),
            ("name", f.name),
            ("stat_value", f.stat_value),
            ("stat_label", f.stat_label),
        ] {
            if !v.is_finite() || v <= 0.0 || v > max_px {
                return Err(BadgeError::validation(format!(
                    "fonts.{name} must be finite and within (0, {max_px}]"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/config.rs"]
mod tests;
