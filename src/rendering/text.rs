//! Font loading and single-line text rasterization
//!
//! Text is laid out as a plain run of glyphs: horizontal advances plus pair
//! kerning, no shaping and no wrapping. Coverage produced by the outline
//! rasterizer is alpha-blended onto the target image.

use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

use crate::rendering::raster::blend_pixel;
use crate::Result;

static EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans-ExtraLight.ttf");

/// The font bundled with the binary.
pub fn embedded_font() -> Result<FontArc> {
    Ok(FontArc::try_from_slice(EMBEDDED_FONT)?)
}

/// Parse TrueType/OpenType font data.
pub fn load_font(bytes: Vec<u8>) -> Result<FontArc> {
    Ok(FontArc::try_from_vec(bytes)?)
}

/// A font at a fixed size.
///
/// `em_px` is the size of the em square in pixels, which is what a point
/// size means at 72 DPI.
#[derive(Clone)]
pub struct Face {
    font: FontArc,
    scale: PxScale,
}

impl Face {
    pub fn new(font: FontArc, em_px: f32) -> Self {
        // ab_glyph scales by ascent-to-descent height, not by em
        let height = font.height_unscaled();
        let per_em = font.units_per_em().unwrap_or(height);
        let scale = PxScale::from(em_px * height / per_em);
        Self { font, scale }
    }

    /// Distance from the top of the line to the bottom, in pixels.
    pub fn line_height(&self) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        scaled.ascent() - scaled.descent()
    }

    /// Advance width and line height of `text`.
    pub fn measure(&self, text: &str) -> (f32, f32) {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0;
        let mut prev: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(p) = prev {
                width += scaled.kern(p, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        (width, self.line_height())
    }

    /// Draw `text` with its baseline at `baseline`, starting at `left`.
    pub fn draw(
        &self,
        image: &mut RgbaImage,
        text: &str,
        left: f32,
        baseline: f32,
        rgba: Rgba<u8>,
    ) {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = left;
        let mut prev: Option<GlyphId> = None;

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(p) = prev {
                caret += scaled.kern(p, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            prev = Some(id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue; // whitespace
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i64 + gx as i64;
                let y = bounds.min.y as i64 + gy as i64;
                blend_pixel(image, x, y, rgba, coverage);
            });
        }
    }

    /// Draw `text` anchored at its middle: horizontally centered on `cx`,
    /// baseline half a line below `cy`.
    pub fn draw_centered(
        &self,
        image: &mut RgbaImage,
        text: &str,
        cx: f32,
        cy: f32,
        rgba: Rgba<u8>,
    ) {
        let (width, height) = self.measure(text);
        self.draw(image, text, cx - width / 2.0, cy + height / 2.0, rgba);
    }
}
