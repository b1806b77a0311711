//! Display configuration types and builder

pub use crate::error::BuilderError;

/// Glass/driver-IC combination
///
/// The variant decides display inversion polarity at bring-up, the subpixel
/// order bit in MADCTL and the fixed RAM offsets of the visible area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelVariant {
    /// HannStar glass: needs inversion on, BGR subpixel order
    #[default]
    Hannstar,
    /// BOE glass: inversion off, RGB subpixel order
    Boe,
}

/// Physical screen size class
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScreenVariant {
    /// 1.8" 128x160 module
    Screen1_8,
    /// 0.96" 80x160 module
    #[default]
    Screen0_9,
    /// 1.8" 128x160 module with shifted RAM window (A revision)
    Screen1_8A,
}

impl ScreenVariant {
    /// Native (portrait) width in pixels
    pub const fn native_width(self) -> u16 {
        match self {
            Self::Screen0_9 => 80,
            Self::Screen1_8 | Self::Screen1_8A => 128,
        }
    }

    /// Native (portrait) height in pixels
    pub const fn native_height(self) -> u16 {
        160
    }
}

/// Display rotation relative to the native portrait orientation
///
/// The discriminant is the row index into the MADCTL table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Rotation {
    /// Native portrait
    Portrait = 0,
    /// Portrait, rotated 180 degrees
    PortraitFlipped = 1,
    /// Landscape
    #[default]
    Landscape = 2,
    /// Landscape, rotated 180 degrees
    LandscapeFlipped = 3,
}

impl Rotation {
    /// Whether width and height are swapped relative to the native panel
    pub const fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape | Self::LandscapeFlipped)
    }
}

/// Interface pixel format written to COLMOD
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum PixelFormat {
    /// 12 bits per pixel
    Rgb444 = 0x03,
    /// 16 bits per pixel
    #[default]
    Rgb565 = 0x05,
    /// 18 bits per pixel
    Rgb666 = 0x06,
}

/// Display configuration
///
/// Use [`Builder`] to create a Config. All fields are fixed for the lifetime of
/// the [`Display`](crate::Display) built from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Glass variant
    pub panel: PanelVariant,
    /// Screen size class
    pub screen: ScreenVariant,
    /// Orientation
    pub rotation: Rotation,
    /// Pixel format programmed into the controller
    pub pixel_format: PixelFormat,
    /// Backlight level applied before bring-up (0.0 to 1.0)
    pub brightness: f32,
    /// Fill the screen and draw a status line once bring-up completes
    pub splash: bool,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use st7735_tft::{Builder, PanelVariant, Rotation, ScreenVariant};
///
/// let config = match Builder::new()
///     .panel(PanelVariant::Boe)
///     .screen(ScreenVariant::Screen1_8)
///     .rotation(Rotation::Portrait)
///     .brightness(0.5)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.screen, ScreenVariant::Screen1_8);
/// ```
#[must_use]
pub struct Builder {
    panel: PanelVariant,
    screen: ScreenVariant,
    rotation: Rotation,
    pixel_format: PixelFormat,
    brightness: f32,
    splash: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            panel: PanelVariant::Hannstar,
            screen: ScreenVariant::Screen0_9,
            rotation: Rotation::Landscape,
            pixel_format: PixelFormat::Rgb565,
            brightness: 1.0,
            splash: true,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the panel variant
    pub fn panel(mut self, panel: PanelVariant) -> Self {
        self.panel = panel;
        self
    }

    /// Set the screen size class
    pub fn screen(mut self, screen: ScreenVariant) -> Self {
        self.screen = screen;
        self
    }

    /// Set the display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the pixel format
    pub fn pixel_format(mut self, format: PixelFormat) -> Self {
        self.pixel_format = format;
        self
    }

    /// Set the initial backlight level (0.0 to 1.0)
    pub fn brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    /// Enable or disable the post-bring-up splash
    pub fn splash(mut self, enabled: bool) -> Self {
        self.splash = enabled;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidBrightness` if the brightness is NaN or
    /// outside `0.0..=1.0`.
    pub fn build(self) -> Result<Config, BuilderError> {
        if !(0.0..=1.0).contains(&self.brightness) {
            return Err(BuilderError::InvalidBrightness(self.brightness));
        }
        Ok(Config {
            panel: self.panel,
            screen: self.screen,
            rotation: self.rotation,
            pixel_format: self.pixel_format,
            brightness: self.brightness,
            splash: self.splash,
        })
    }
}
