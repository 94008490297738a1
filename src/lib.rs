//! labelsheet
//!
//! Generates printable label sheets: for every word the user enters, a US
//! Letter page is rendered with the word as a large rotated watermark in the
//! middle and two columns of dashed, labeled boxes ready to be cut into
//! flashcards.
//!
//! # Example
//!
//! ```no_run
//! use labelsheet::{LabelRequest, SheetConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SheetConfig::default();
//! let font = labelsheet::rendering::text::embedded_font()?;
//! let request = LabelRequest::new("apple", config.default_font_size);
//!
//! let sheet = labelsheet::render_sheet(&font, &request, &config)?;
//! let path = labelsheet::output::save_sheet(std::path::Path::new("out"), &request.label, &sheet)?;
//! println!("Saved {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod output;
pub mod rendering;
pub mod session;

pub use rendering::{render_sheet, Sheet};
pub use session::{Session, Step};

/// Physical page description
///
/// Pixel dimensions are derived from the physical size and the density. Both
/// edge coordinates are addressable, so a page `inches * dpi` pixels across
/// is one pixel wider than that product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
}

impl PageSize {
    /// US Letter (8.5 x 11 inches)
    pub const fn letter(dpi: u32) -> Self {
        Self {
            width_in: 8.5,
            height_in: 11.0,
            dpi,
        }
    }

    pub fn width_px(&self) -> u32 {
        (self.width_in * self.dpi as f64).round() as u32 + 1
    }

    pub fn height_px(&self) -> u32 {
        (self.height_in * self.dpi as f64).round() as u32 + 1
    }

    pub fn width_cm(&self) -> f64 {
        self.width_in * rendering::layout::CM_PER_INCH
    }

    pub fn height_cm(&self) -> f64 {
        self.height_in * rendering::layout::CM_PER_INCH
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::letter(300)
    }
}

/// Geometry and typography of a generated sheet
///
/// The defaults describe the only sheet the tool produces: twelve rows of two
/// boxes on a 300 DPI letter page. Lengths suffixed `_cm` are physical,
/// lengths suffixed `_px` are device pixels.
///
/// # Examples
///
/// ```
/// let cfg = labelsheet::SheetConfig::default();
/// assert_eq!(cfg.rows, 12);
/// assert_eq!(cfg.default_font_size, 120);
/// ```
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Page size and density
    pub page: PageSize,
    /// Margin around the box grid on every side
    pub margin_cm: f64,
    /// Number of box rows
    pub rows: u32,
    /// Width of a single box
    pub box_width_cm: f64,
    /// Distance from the right margin to the start of the right column
    pub right_column_offset_cm: f64,
    /// Length of a drawn dash
    pub dash_px: f32,
    /// Length of the gap between dashes
    pub gap_px: f32,
    /// Thickness of box outlines
    pub stroke_px: f32,
    /// Em size of the rotated watermark
    pub watermark_em_px: f32,
    /// Transparent room kept below the watermark baseline for descenders
    pub watermark_pad_px: u32,
    /// Em size of box labels when the user does not pick one
    pub default_font_size: u32,
    /// Largest label em size accepted at the prompt; a glyph's raster buffer
    /// grows with the square of this
    pub max_font_size: u32,
    /// Directory name (relative to the working directory) offered for output
    pub default_dir_name: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            page: PageSize::default(),
            margin_cm: 1.5,
            rows: 12,
            box_width_cm: 6.55,
            right_column_offset_cm: 6.5,
            dash_px: 70.0,
            gap_px: 40.0,
            stroke_px: 8.0,
            watermark_em_px: 220.0,
            watermark_pad_px: 90,
            default_font_size: 120,
            max_font_size: 1000,
            default_dir_name: "ReadTheRoomImages".to_string(),
        }
    }
}

/// One iteration's worth of validated user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRequest {
    /// Text printed in the watermark and in every box
    pub label: String,
    /// Em size in pixels of the box labels
    pub font_size: u32,
}

impl LabelRequest {
    pub fn new(label: impl Into<String>, font_size: u32) -> Self {
        Self {
            label: label.into(),
            font_size,
        }
    }
}
