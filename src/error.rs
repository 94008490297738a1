//! Error types for label sheet generation

use thiserror::Error;

/// Result type alias for sheet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while prompting, rendering or saving a sheet
#[derive(Error, Debug)]
pub enum Error {
    /// Reading input, creating the output directory or writing a file failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The font data could not be parsed
    #[error("Font loading failed: {0}")]
    FontError(String),

    /// The font size answer was not a positive integer
    #[error("Invalid font size: {0:?}")]
    InvalidFontSize(String),

    /// A paint command could not be rasterized
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// The finished page could not be encoded
    #[error("PNG encoding failed: {0}")]
    EncodeError(#[from] image::ImageError),
}

impl From<ab_glyph::InvalidFont> for Error {
    fn from(err: ab_glyph::InvalidFont) -> Self {
        Error::FontError(err.to_string())
    }
}
