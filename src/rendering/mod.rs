//! Sheet rendering: layout -> display list -> raster

pub mod layout;
pub mod paint;
pub mod raster;
pub mod text;

use ab_glyph::FontArc;
use image::RgbaImage;
use log::debug;
use sha2::{Digest, Sha256};

use crate::{Error, LabelRequest, Result, SheetConfig};

/// A finished page
#[derive(Debug, Clone)]
pub struct Sheet {
    pub width: u32,
    pub height: u32,
    pub image: RgbaImage,
}

impl Sheet {
    pub fn to_png(&self) -> Result<Vec<u8>> {
        raster::encode_png(&self.image)
    }

    /// Hex SHA-256 of the raw RGBA pixels, independent of PNG encoder output.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width.to_be_bytes());
        hasher.update(self.height.to_be_bytes());
        hasher.update(self.image.as_raw());
        hex::encode(hasher.finalize())
    }
}

/// Render the page for one label.
pub fn render_sheet(
    font: &FontArc,
    request: &LabelRequest,
    config: &SheetConfig,
) -> Result<Sheet> {
    if request.font_size == 0 || request.font_size > config.max_font_size {
        return Err(Error::InvalidFontSize(request.font_size.to_string()));
    }
    let mut canvas = raster::Canvas::new(config.page.width_px(), config.page.height_px());
    let commands = paint::display_list(&request.label, request.font_size, config);
    debug!(
        "rendering {:?} at {}x{} ({} paint commands)",
        request.label,
        canvas.width(),
        canvas.height(),
        commands.len()
    );
    canvas.execute(&commands, font)?;

    let image = canvas.into_image();
    Ok(Sheet {
        width: image.width(),
        height: image.height(),
        image,
    })
}
