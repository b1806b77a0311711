//! ST7735 TFT Display Driver
//!
//! A driver for ST7735-based RGB TFT panels (0.96" 80x160, 1.8" 128x160 and
//! the 1.8" "A" variant) over a four-wire SPI bus.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Hannstar and BOE glass variants with per-panel offsets
//! - Hardware rotation in 90 degree steps
//! - Solid fills, raw pixel blits and built-in 6x12 / 8x16 text
//! - PWM backlight control
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::pwm::SetDutyCycle;
//! use embedded_hal::spi::SpiBus;
//! use st7735_tft::{Builder, Color, Display, GlyphSize, Interface, Region, Rotation, TextStyle};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _r: &mut [u8], _w: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPwm;
//! # impl embedded_hal::pwm::ErrorType for MockPwm { type Error = Infallible; }
//! # impl SetDutyCycle for MockPwm {
//! #     fn max_duty_cycle(&self) -> u16 { 1000 }
//! #     fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let cs = MockPin;
//! # let dc = MockPin;
//! # let backlight = MockPwm;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, cs, dc, backlight);
//! let config = match Builder::new().rotation(Rotation::Landscape).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = match Display::new(interface, config, &mut delay) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! let screen = Region::full(display.dimensions());
//! let _ = display.fill_solid(screen, Color::BLACK);
//!
//! let style = TextStyle::new(Color::WHITE, Color::BLACK, GlyphSize::Wide);
//! let _ = display.draw_string(screen, style, "Hello");
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// RGB565 color type and palette
pub mod color;
/// ST7735 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in bitmap fonts
pub mod font;
/// Frame memory addressing
pub mod geometry;
mod glyphs;
/// Hardware interface abstraction
pub mod interface;
/// Panel tuning parameters sent at bring-up
pub mod tuning;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use config::{Builder, Config, PanelVariant, PixelFormat, Rotation, ScreenVariant};
pub use display::{Display, DrawOutcome, TextStyle};
pub use error::{BuilderError, Error};
pub use font::GlyphSize;
pub use geometry::{Dimensions, Region};
pub use interface::InterfaceError;
pub use interface::{BACKLIGHT_FREQUENCY_HZ, DisplayInterface, Interface, MODE};
