//! ContribEmblem renders contribution-stat badges as PNG images.
//!
//! A badge is a fixed 800x162 canvas: background artwork framed to fill it, a dark translucent
//! UI backdrop, a diamond marker next to the aggregate score, and a five-cell stat bar. The
//! public API has three levels:
//!
//! - [`render_badge`] composites one badge in memory from a decoded background and a [`FontSet`]
//! - [`render_to_file`] runs the whole pipeline from files on disk to a PNG
//! - [`render_batch`] renders many badges in parallel from shared [`FontSources`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod effects;
mod foundation;
mod layout;
mod render;
mod stats;
mod text;

pub use crate::foundation::core::{CanvasSize, IRect, Rgba8};
pub use crate::foundation::error::{BadgeError, BadgeResult};

pub use crate::assets::decode::{SourceImage, decode_background, load_background};
pub use crate::assets::fonts::{FaceRole, FontFace, FontSet, FontSources, GlyphFace, GlyphMask};
pub use crate::config::badge::BadgeConfig;
pub use crate::config::theme::Theme;
pub use crate::effects::composite::{PremulRgba8, over, over_span};
pub use crate::layout::config::{BadgeLayout, FontSizes, StatArrangement};
pub use crate::layout::engine::{
    DiamondPlacement, LayoutPlan, PlacedText, STAT_CELLS, StatCell, apply_plan, cell_bounds,
    plan_layout,
};
pub use crate::render::canvas::Canvas;
pub use crate::render::frame::{CropRect, aspect_fill_crop, frame_source};
pub use crate::render::icon::{draw_diamond, draw_diamond_icon};
pub use crate::render::layers::{border, composite_backdrop, horizontal_gradient, vertical_gradient};
pub use crate::render::pipeline::{BadgeJob, render_badge, render_batch, render_to_file};
pub use crate::stats::format::format_count;
pub use crate::stats::record::{StatKind, StatRecord, StatsFile};
pub use crate::text::draw::{draw_text, draw_text_tracked, measure_text, measure_tracked};
pub use crate::text::passes::{DrawPass, PassColor, PassKind, TextEffect};
