//! Graphics support via embedded-graphics
//!
//! [`Display`] implements [`DrawTarget`] for [`Rgb565`], so any
//! embedded-graphics primitive, image or text can be drawn straight to the
//! panel. There is no framebuffer: rectangles become windowed fills and
//! contiguous areas are streamed through the driver's staging buffer.
//!
//! Everything outside the screen is clipped silently.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//!     text::Text,
//! };
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::pwm::SetDutyCycle;
//! # use embedded_hal::spi::SpiBus;
//! # use st7735_tft::{Builder, Display, Interface};
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
//! # let interface = Interface::new(MockSpi, MockPin, MockPin, MockPwm);
//! # let config = match Builder::new().splash(false).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let mut display = match Display::new(interface, config, &mut MockDelay) {
//! #     Ok(display) => display,
//! #     Err(_) => return,
//! # };
//! let _ = display.clear(Rgb565::BLACK);
//!
//! let _ = Circle::new(Point::new(10, 10), 40)
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::YELLOW))
//!     .draw(&mut display);
//!
//! let style = MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE);
//! let _ = Text::new("Hello", Point::new(60, 30), style).draw(&mut display);
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions as _, OriginDimensions, Size},
    pixelcolor::Rgb565,
    primitives::{PointsIter, Rectangle},
    Pixel,
};

use crate::color::Color;
use crate::display::Display;
use crate::error::Error;
use crate::geometry::Region;
use crate::interface::DisplayInterface;

/// Convert an on-screen rectangle to a driver region
///
/// Returns `None` for empty rectangles or coordinates outside `u16`.
fn to_region(area: &Rectangle) -> Option<Region> {
    if area.size.width == 0 || area.size.height == 0 {
        return None;
    }
    Some(Region::new(
        u16::try_from(area.top_left.x).ok()?,
        u16::try_from(area.top_left.y).ok()?,
        u16::try_from(area.size.width).ok()?,
        u16::try_from(area.size.height).ok()?,
    ))
}

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();

        for Pixel(point, color) in pixels {
            if !bounds.contains(point) {
                continue;
            }
            if let Some(region) = to_region(&Rectangle::new(point, Size::new(1, 1))) {
                self.write_pixels(region, core::iter::once(Color::from(color)))?;
            }
        }

        Ok(())
    }

    fn fill_contiguous<Iter>(&mut self, area: &Rectangle, colors: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Self::Color>,
    {
        let drawable = area.intersection(&self.bounding_box());

        // Partially visible areas go pixel by pixel so the color stream stays aligned
        if drawable != *area {
            return self.draw_iter(
                area.points()
                    .zip(colors)
                    .map(|(point, color)| Pixel(point, color)),
            );
        }

        if let Some(region) = to_region(area) {
            self.write_pixels(region, colors.into_iter().map(Color::from))?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let drawable = area.intersection(&self.bounding_box());
        if let Some(region) = to_region(&drawable) {
            Display::fill_solid(self, region, color.into())?;
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let region = Region::full(self.dimensions());
        Display::fill_solid(self, region, color.into())?;
        Ok(())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}
