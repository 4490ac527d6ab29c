use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::foundation::error::{BadgeError, BadgeResult};
use crate::layout::config::FontSizes;

/// Extra transparent border around a rasterized string, for antialiasing overhang.
const MASK_PAD: i32 = 4;

/// Coverage raster of one string at one font size.
///
/// `origin_x`/`origin_y` locate the mask's top-left pixel relative to the pen position on the
/// baseline, so a mask drawn at pen `(x, y)` covers `x + origin_x .. x + origin_x + width`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphMask {
    /// Mask width in pixels.
    pub width: u32,
    /// Mask height in pixels.
    pub height: u32,
    /// Horizontal offset of the top-left pixel from the pen.
    pub origin_x: i32,
    /// Vertical offset of the top-left pixel from the baseline.
    pub origin_y: i32,
    /// Row-major coverage, one byte per pixel.
    pub coverage: Vec<u8>,
}

/// A typeface bound to one pixel size, ready to measure and rasterize text.
///
/// This is the glyph-rasterization handle the typography renderer draws with. Handles own
/// their parsed font data and caches and release them on drop.
pub trait GlyphFace {
    /// Pixel size this handle rasterizes at.
    fn size_px(&self) -> f32;

    /// Advance width of `text` in whole pixels (sum of glyph advances, rounded).
    fn measure(&mut self, text: &str) -> i32;

    /// Coverage mask for `text`, cached per distinct string.
    fn rasterize(&mut self, text: &str) -> Arc<GlyphMask>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct MaskBrush;

/// Production [`GlyphFace`]: `parley` for shaping and advances, `vello_cpu` for coverage.
pub struct FontFace {
    size_px: f32,
    family: String,
    font: vello_cpu::peniko::FontData,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<MaskBrush>,
    widths: HashMap<String, i32>,
    masks: HashMap<String, Arc<GlyphMask>>,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family", &self.family)
            .field("size_px", &self.size_px)
            .field("cached_masks", &self.masks.len())
            .finish()
    }
}

impl FontFace {
    /// Parse `font_bytes` (TrueType/OpenType) and bind the face to `size_px`.
    pub fn from_bytes(font_bytes: &[u8], size_px: f32) -> BadgeResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(BadgeError::validation(
                "font size_px must be finite and > 0",
            ));
        }

        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| BadgeError::font("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| BadgeError::font("registered font family has no name"))?
            .to_string();

        let font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes.to_vec()), 0);

        Ok(Self {
            size_px,
            family,
            font,
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            widths: HashMap::new(),
            masks: HashMap::new(),
        })
    }

    /// Family name resolved from the font data.
    pub fn family_name(&self) -> &str {
        &self.family
    }

    fn layout(&mut self, text: &str) -> parley::Layout<MaskBrush> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));

        let mut layout: parley::Layout<MaskBrush> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    fn advance_of(layout: &parley::Layout<MaskBrush>) -> f32 {
        let mut advance = 0.0f32;
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                advance += run.glyphs().map(|g| g.advance).sum::<f32>();
            }
        }
        advance
    }

    fn render_mask(&mut self, text: &str) -> GlyphMask {
        let layout = self.layout(text);
        let advance = Self::advance_of(&layout);
        let (baseline, bottom) = layout
            .lines()
            .next()
            .map(|line| {
                let m = line.metrics();
                (m.baseline, m.baseline + m.descent)
            })
            .unwrap_or((self.size_px, self.size_px));

        let base_row = baseline.ceil();
        let width = (advance.ceil() as i64 + 2 * i64::from(MASK_PAD)).clamp(1, i64::from(u16::MAX));
        let height = (bottom.ceil() as i64 + 1 + 2 * i64::from(MASK_PAD))
            .clamp(1, i64::from(u16::MAX));
        let (width, height) = (width as u16, height as u16);

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(MASK_PAD),
            f64::from(MASK_PAD) + f64::from(base_row - baseline),
        )));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);
        let coverage = pixmap
            .data_as_u8_slice()
            .chunks_exact(4)
            .map(|px| px[3])
            .collect();

        GlyphMask {
            width: u32::from(width),
            height: u32::from(height),
            origin_x: -MASK_PAD,
            origin_y: -(MASK_PAD + base_row as i32),
            coverage,
        }
    }
}

impl GlyphFace for FontFace {
    fn size_px(&self) -> f32 {
        self.size_px
    }

    fn measure(&mut self, text: &str) -> i32 {
        if text.is_empty() {
            return 0;
        }
        if let Some(w) = self.widths.get(text) {
            return *w;
        }
        let layout = self.layout(text);
        let w = Self::advance_of(&layout).round() as i32;
        self.widths.insert(text.to_owned(), w);
        w
    }

    fn rasterize(&mut self, text: &str) -> Arc<GlyphMask> {
        if text.is_empty() {
            return Arc::new(GlyphMask::default());
        }
        if let Some(m) = self.masks.get(text) {
            return Arc::clone(m);
        }
        let mask = Arc::new(self.render_mask(text));
        self.masks.insert(text.to_owned(), Arc::clone(&mask));
        mask
    }
}

/// Raw typeface bytes shared read-only by every render in the process.
#[derive(Clone, Debug)]
pub struct FontSources {
    /// Bold weight, used for the aggregate score and stat values.
    pub bold: Arc<[u8]>,
    /// Medium weight, used for the display name and stat labels.
    pub medium: Arc<[u8]>,
}

impl FontSources {
    /// Wrap already-loaded font bytes.
    pub fn new(bold: impl Into<Arc<[u8]>>, medium: impl Into<Arc<[u8]>>) -> Self {
        Self {
            bold: bold.into(),
            medium: medium.into(),
        }
    }

    /// Read both typefaces from disk.
    pub fn from_paths(bold: impl AsRef<Path>, medium: impl AsRef<Path>) -> BadgeResult<Self> {
        fn read(path: &Path) -> BadgeResult<Vec<u8>> {
            std::fs::read(path)
                .map_err(|e| BadgeError::font(format!("read font '{}': {e}", path.display())))
        }
        Ok(Self::new(read(bold.as_ref())?, read(medium.as_ref())?))
    }
}

/// Which of the badge's text elements a face is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceRole {
    /// Aggregate score, large.
    Score,
    /// Display name.
    Name,
    /// Stat cell values.
    StatValue,
    /// Stat cell labels.
    StatLabel,
}

/// The fixed set of glyph handles one render draws with.
///
/// A set is built at the start of a render and dropped when the render returns, on success and
/// on every error path alike.
pub struct FontSet {
    score: Box<dyn GlyphFace>,
    name: Box<dyn GlyphFace>,
    stat_value: Box<dyn GlyphFace>,
    stat_label: Box<dyn GlyphFace>,
}

impl FontSet {
    /// Parse the shared typeface bytes into one handle per role.
    pub fn load(sources: &FontSources, sizes: &FontSizes) -> BadgeResult<Self> {
        let face = |bytes: &[u8], size: f32, what: &str| -> BadgeResult<Box<dyn GlyphFace>> {
            FontFace::from_bytes(bytes, size)
                .map(|f| Box::new(f) as Box<dyn GlyphFace>)
                .map_err(|e| BadgeError::font(format!("{what} face at {size}px: {e}")))
        };

        Ok(Self {
            score: face(&sources.bold, sizes.score, "bold")?,
            name: face(&sources.medium, sizes.name, "medium")?,
            stat_value: face(&sources.bold, sizes.stat_value, "bold")?,
            stat_label: face(&sources.medium, sizes.stat_label, "medium")?,
        })
    }

    /// Assemble a set from caller-provided handles.
    pub fn from_faces(
        score: Box<dyn GlyphFace>,
        name: Box<dyn GlyphFace>,
        stat_value: Box<dyn GlyphFace>,
        stat_label: Box<dyn GlyphFace>,
    ) -> Self {
        Self {
            score,
            name,
            stat_value,
            stat_label,
        }
    }

    /// Handle used for `role`.
    pub fn face_mut(&mut self, role: FaceRole) -> &mut dyn GlyphFace {
        match role {
            FaceRole::Score => self.score.as_mut(),
            FaceRole::Name => self.name.as_mut(),
            FaceRole::StatValue => self.stat_value.as_mut(),
            FaceRole::StatLabel => self.stat_label.as_mut(),
        }
    }
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSet")
            .field("score_px", &self.score.size_px())
            .field("name_px", &self.name.size_px())
            .field("stat_value_px", &self.stat_value.size_px())
            .field("stat_label_px", &self.stat_label.size_px())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
