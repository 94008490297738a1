/// Rasterizer: executes paint commands against an RGBA page buffer

use std::io::Cursor;

use ab_glyph::FontArc;
use image::{imageops, ImageFormat, Rgba, RgbaImage};
use log::debug;

use crate::rendering::paint::PaintCommand;
use crate::rendering::text::Face;
use crate::{Error, Result};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Source-over blend of `rgba` scaled by `coverage` onto one pixel.
/// Coordinates outside the image are ignored.
pub(crate) fn blend_pixel(image: &mut RgbaImage, x: i64, y: i64, rgba: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= image.width() as i64 || y >= image.height() as i64 {
        return;
    }
    let src_a = (rgba[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return;
    }
    let dst = image.get_pixel_mut(x as u32, y as u32);
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    for c in 0..3 {
        let s = rgba[c] as f32 / 255.0;
        let d = dst[c] as f32 / 255.0;
        let v = (s * src_a + d * dst_a * (1.0 - src_a)) / out_a;
        dst[c] = (v * 255.0).round() as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}

/// Render `label` onto its own transparent layer and turn it a quarter
/// clockwise. The unrotated layer is as wide as the text advance and one line
/// plus `pad` tall, with the baseline one line down.
pub fn watermark_layer(label: &str, face: &Face, pad: u32) -> RgbaImage {
    let (width, line_height) = face.measure(label);
    let w = width.ceil().max(0.0) as u32;
    let h = line_height.ceil() as u32 + pad;

    let mut layer = RgbaImage::new(w, h);
    face.draw(&mut layer, label, 0.0, line_height, BLACK);
    imageops::rotate90(&layer)
}

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// White page of the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, WHITE),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Run a display list. Text commands are drawn with `font` at the size
    /// each command asks for.
    pub fn execute(&mut self, commands: &[PaintCommand], font: &FontArc) -> Result<()> {
        for cmd in commands {
            match cmd {
                PaintCommand::Watermark { text, em_px, pad } => {
                    let face = Face::new(font.clone(), *em_px);
                    let layer = watermark_layer(text, &face, *pad);
                    self.composite_centered(&layer);
                }
                PaintCommand::DashedLine { from, to, dash, gap, width, rgba } => {
                    self.dashed_line(*from, *to, *dash, *gap, *width, Rgba(*rgba))?;
                }
                PaintCommand::Text { text, center, em_px, rgba } => {
                    let face = Face::new(font.clone(), *em_px);
                    face.draw_centered(&mut self.image, text, center.0, center.1, Rgba(*rgba));
                }
            }
        }
        Ok(())
    }

    /// Alpha-composite `layer` in the middle of the page. Parts that fall
    /// outside the page are dropped.
    pub fn composite_centered(&mut self, layer: &RgbaImage) {
        if layer.width() == 0 || layer.height() == 0 {
            debug!("skipping empty layer");
            return;
        }
        let x = (self.width() as i64 - layer.width() as i64) / 2;
        let y = (self.height() as i64 - layer.height() as i64) / 2;
        imageops::overlay(&mut self.image, layer, x, y);
    }

    /// Stroke an axis-aligned dashed line. The pattern starts with a full
    /// dash at `from`; every dash gets round caps of half the line width.
    pub fn dashed_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        dash: f32,
        gap: f32,
        width: f32,
        rgba: Rgba<u8>,
    ) -> Result<()> {
        if dash <= 0.0 || gap < 0.0 {
            return Err(Error::RenderError(format!(
                "invalid dash pattern {}/{}",
                dash, gap
            )));
        }
        let horizontal = from.1 == to.1;
        if !horizontal && from.0 != to.0 {
            return Err(Error::RenderError(format!(
                "only axis-aligned lines are supported, got {:?} -> {:?}",
                from, to
            )));
        }

        let (start, end) = if horizontal { (from.0, to.0) } else { (from.1, to.1) };
        let across = if horizontal { from.1 } else { from.0 };
        let dir = if end >= start { 1.0 } else { -1.0 };
        let length = (end - start).abs();

        let mut pos = 0.0;
        while pos < length {
            let seg_end = (pos + dash).min(length);
            let a = start + dir * pos;
            let b = start + dir * seg_end;
            let (lo, hi) = (a.min(b), a.max(b));
            self.stroke_segment(horizontal, lo, hi, across, width / 2.0, rgba);
            pos += dash + gap;
        }
        Ok(())
    }

    /// Fill every pixel whose center lies within `hw` of the segment
    /// `lo..=hi` at `across` on the other axis.
    fn stroke_segment(
        &mut self,
        horizontal: bool,
        lo: f32,
        hi: f32,
        across: f32,
        hw: f32,
        rgba: Rgba<u8>,
    ) {
        let (along_max, across_max) = if horizontal {
            (self.width(), self.height())
        } else {
            (self.height(), self.width())
        };
        let span = |from: f32, to: f32, max: u32| {
            let first = from.floor().clamp(0.0, max as f32) as u32;
            let last = to.ceil().clamp(0.0, max as f32) as u32;
            first..last
        };

        for v in span(across - hw, across + hw, across_max) {
            let dv = v as f32 + 0.5 - across;
            for u in span(lo - hw, hi + hw, along_max) {
                let pu = u as f32 + 0.5;
                let du = pu - pu.clamp(lo, hi);
                if du * du + dv * dv <= hw * hw {
                    let (x, y) = if horizontal { (u, v) } else { (v, u) };
                    blend_pixel(&mut self.image, x as i64, y as i64, rgba, 1.0);
                }
            }
        }
    }
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
