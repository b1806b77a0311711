//! Bitmap font rasterization
//!
//! Two fixed glyph sets cover printable ASCII (`' '..='~'`): a compact 6x12
//! set and a wide 8x16 set. Glyphs are always half as wide as they are tall
//! (rounded up to a whole byte row for the compact set), so the horizontal
//! advance is `height / 2`.
//!
//! ## Example
//!
//! ```
//! use st7735_tft::font::{glyph, rasterize, GlyphSize};
//! use st7735_tft::Color;
//!
//! let rows = glyph(b'A', GlyphSize::Wide).unwrap_or(&[]);
//! let mut buffer = [0u8; GlyphSize::Wide.buffer_len()];
//! let written = rasterize(rows, GlyphSize::Wide, Color::WHITE, Color::BLACK, &mut buffer);
//! assert_eq!(written, 8 * 16 * 2);
//! ```

use crate::color::Color;
use crate::glyphs::{FONT_6X12, FONT_8X16};

/// Bytes per streamed pixel
pub const BYTES_PER_PIXEL: usize = 2;

/// Largest glyph buffer, in bytes
pub const MAX_GLYPH_BYTES: usize = GlyphSize::Wide.buffer_len();

/// Glyph height class
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphSize {
    /// 6x12 glyphs
    Compact,
    /// 8x16 glyphs
    #[default]
    Wide,
}

impl GlyphSize {
    /// Pick the glyph set for a nominal text height
    ///
    /// 12 selects the compact set; every other height selects the wide set.
    pub const fn from_height(height: u8) -> Self {
        if height == 12 {
            Self::Compact
        } else {
            Self::Wide
        }
    }

    /// Glyph width in pixels
    pub const fn width(self) -> u16 {
        match self {
            Self::Compact => 6,
            Self::Wide => 8,
        }
    }

    /// Glyph height in pixels
    pub const fn height(self) -> u16 {
        match self {
            Self::Compact => 12,
            Self::Wide => 16,
        }
    }

    /// Horizontal cursor advance between glyphs
    pub const fn advance(self) -> u16 {
        self.height() / 2
    }

    /// Size of a rasterized glyph in bytes
    pub const fn buffer_len(self) -> usize {
        self.width() as usize * self.height() as usize * BYTES_PER_PIXEL
    }
}

/// Whether `ch` has a glyph
pub const fn is_printable(ch: u8) -> bool {
    matches!(ch, b' '..=b'~')
}

/// Row bytes for a printable ASCII character
///
/// Returns `None` outside `' '..='~'`.
pub fn glyph(ch: u8, size: GlyphSize) -> Option<&'static [u8]> {
    if !is_printable(ch) {
        return None;
    }
    let index = usize::from(ch - b' ');
    match size {
        GlyphSize::Compact => FONT_6X12.get(index).map(|rows| rows.as_slice()),
        GlyphSize::Wide => FONT_8X16.get(index).map(|rows| rows.as_slice()),
    }
}

/// Expand glyph rows into RGB565 pixels
///
/// Each row contributes `size.width()` pixels taken from the most significant
/// bits. Set bits become `fg`, clear bits `bg`, both written high byte first.
/// Stops early if `out` fills up. Returns the number of bytes written.
pub fn rasterize(rows: &[u8], size: GlyphSize, fg: Color, bg: Color, out: &mut [u8]) -> usize {
    let fg = fg.to_be_bytes();
    let bg = bg.to_be_bytes();
    let width = size.width() as usize;

    let mut pixels = out.chunks_exact_mut(BYTES_PER_PIXEL);
    let mut written = 0;
    for row in rows.iter().take(size.height() as usize) {
        for bit in 0..width {
            let Some(pixel) = pixels.next() else {
                return written;
            };
            let color = if row & (0x80 >> bit) != 0 { fg } else { bg };
            pixel.copy_from_slice(&color);
            written += BYTES_PER_PIXEL;
        }
    }
    written
}
