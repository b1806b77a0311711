//! RGB565 colors
//!
//! The ST7735 streams 16-bit pixels most significant byte first. [`Color`]
//! holds the logical 16-bit value; [`Color::to_be_bytes`] gives the wire order.
//!
//! ## Example
//!
//! ```
//! use st7735_tft::Color;
//!
//! assert_eq!(Color::RED.to_be_bytes(), [0xF8, 0x00]);
//! assert_eq!(Color::from_rgb(0xFF, 0xFF, 0xFF), Color::WHITE);
//! ```

/// A 16-bit RGB565 color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u16);

impl Color {
    /// 0xFFFF
    pub const WHITE: Self = Self(0xFFFF);
    /// 0x0000
    pub const BLACK: Self = Self(0x0000);
    /// 0x001F
    pub const BLUE: Self = Self(0x001F);
    /// Blue-red, 0xF81F
    pub const BRED: Self = Self(0xF81F);
    /// Green-red, 0xFFE0
    pub const GRED: Self = Self(0xFFE0);
    /// Green-blue, 0x07FF
    pub const GBLUE: Self = Self(0x07FF);
    /// 0xF800
    pub const RED: Self = Self(0xF800);
    /// 0xF81F
    pub const MAGENTA: Self = Self(0xF81F);
    /// 0x07E0
    pub const GREEN: Self = Self(0x07E0);
    /// 0x7FFF
    pub const CYAN: Self = Self(0x7FFF);
    /// 0xFFE0
    pub const YELLOW: Self = Self(0xFFE0);
    /// 0xBC40
    pub const BROWN: Self = Self(0xBC40);
    /// Brownish red, 0xFC07
    pub const BRRED: Self = Self(0xFC07);
    /// 0x8430
    pub const GRAY: Self = Self(0x8430);
    /// 0x01CF
    pub const DARKBLUE: Self = Self(0x01CF);
    /// 0x7D7C
    pub const LIGHTBLUE: Self = Self(0x7D7C);
    /// 0x5458
    pub const GRAYBLUE: Self = Self(0x5458);

    /// Pack 8-bit channels into RGB565, dropping the low bits
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }

    /// The raw 16-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Wire representation, high byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::raw::RawU16;
        use embedded_graphics_core::prelude::RawData;

        Self(RawU16::from(color).into_inner())
    }
}
