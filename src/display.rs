//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::command::{
    CASET, COLMOD, DISPON, FRMCTR1, FRMCTR2, FRMCTR3, GMCTRN1, GMCTRP1, INVCTR, INVOFF, INVON,
    MADCTL, NORON, PWCTR1, PWCTR2, PWCTR3, PWCTR4, PWCTR5, RAMWR, RASET, SLPOUT, SWRESET, VMCTR1,
};
use crate::config::{Config, PanelVariant};
use crate::error::Error;
use crate::font::{self, BYTES_PER_PIXEL, GlyphSize, MAX_GLYPH_BYTES};
use crate::geometry::{
    Dimensions, MadctlColumn, Region, Window, addressing_offset, addressing_window, madctl_value,
    resolve_dimensions,
};
use crate::interface::DisplayInterface;
use crate::tuning;

type DisplayResult<I, T = ()> = core::result::Result<T, Error<I>>;

/// Pixels held by the staging buffer
pub const STAGING_PIXELS: usize = 1024;

/// Staging buffer size in bytes
pub const STAGING_BYTES: usize = STAGING_PIXELS * BYTES_PER_PIXEL;

/// Text shown by the post-bring-up splash
pub const SPLASH_TEXT: &str = "XRobot ST7735 Driver";

/// Top row of the splash text line
pub const SPLASH_ROW: u16 = 58;

/// Result of a drawing call that did not fail on the bus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Pixels were sent to the controller
    Drawn,
    /// The request did not fit on screen; nothing was sent
    OutOfBounds,
    /// The character has no glyph; nothing was sent
    NotPrintable,
}

impl DrawOutcome {
    /// Whether anything reached the controller
    pub fn is_drawn(self) -> bool {
        self == Self::Drawn
    }
}

/// Glyph parameters for text drawing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    /// Color of set glyph bits
    pub foreground: Color,
    /// Color of clear glyph bits
    pub background: Color,
    /// Glyph set
    pub size: GlyphSize,
}

impl TextStyle {
    /// Create a new text style
    pub const fn new(foreground: Color, background: Color, size: GlyphSize) -> Self {
        Self {
            foreground,
            background,
            size,
        }
    }
}

/// Core display driver for ST7735
///
/// Owns the interface and two scratch buffers: a 1024-pixel staging buffer for
/// solid fills and a glyph buffer for text. There is no framebuffer; every
/// drawing call goes straight to the controller.
///
/// Drawing calls take `&mut self`, so one caller at a time is guaranteed by
/// ownership.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Effective dimensions for the configured rotation
    dimensions: Dimensions,
    /// Frame memory offset of the visible area
    offset: (u16, u16),
    /// Scratch buffer for chunked pixel streaming
    staging: [u8; STAGING_BYTES],
    /// Scratch buffer for one rasterized glyph
    glyph: [u8; MAX_GLYPH_BYTES],
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a Display and run the full bring-up sequence
    ///
    /// Idles the control lines, applies the configured brightness, programs
    /// the controller and, unless disabled in the config, fills the screen and
    /// draws a status line.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` on any bus failure. The controller is then
    /// left partially configured; there is no rollback.
    pub fn new<D: DelayNs>(interface: I, config: Config, delay: &mut D) -> DisplayResult<I, Self> {
        let mut display = Self {
            interface,
            config,
            dimensions: resolve_dimensions(config.screen, config.rotation),
            offset: addressing_offset(config.panel, config.screen, config.rotation),
            staging: [0; STAGING_BYTES],
            glyph: [0; MAX_GLYPH_BYTES],
        };

        display.interface.init().map_err(Error::Interface)?;
        display.set_backlight(config.brightness)?;
        display.init(delay)?;

        if config.splash {
            display.splash()?;
        }

        Ok(display)
    }

    /// Run the controller register program
    fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!(
            "st7735: bring-up {:?} {:?} {:?} {:?}",
            self.config.panel,
            self.config.screen,
            self.config.rotation,
            self.config.pixel_format
        );

        // The first reset is not always latched
        for _ in 0..2 {
            self.send_command(SWRESET, &[])?;
            delay.delay_ms(tuning::RESET_DELAY_MS);
        }

        self.send_command(SLPOUT, &[])?;

        // Frame rate
        self.send_command(FRMCTR1, &tuning::FRAME_RATE_NORMAL)?;
        self.send_command(FRMCTR2, &tuning::FRAME_RATE_IDLE)?;
        self.send_command(FRMCTR3, &tuning::FRAME_RATE_PARTIAL)?;
        self.send_command(INVCTR, &tuning::FRAME_INVERSION)?;

        // Power
        self.send_command(PWCTR1, &tuning::POWER_CONTROL_1)?;
        self.send_command(PWCTR2, &tuning::POWER_CONTROL_2)?;
        self.send_command(PWCTR3, &tuning::POWER_CONTROL_3)?;
        self.send_command(PWCTR4, &tuning::POWER_CONTROL_4)?;
        self.send_command(PWCTR5, &tuning::POWER_CONTROL_5)?;
        self.send_command(VMCTR1, &tuning::VCOM)?;

        // Glass polarity
        let inversion = match self.config.panel {
            PanelVariant::Hannstar => INVON,
            PanelVariant::Boe => INVOFF,
        };
        self.send_command(inversion, &[])?;

        self.send_command(COLMOD, &[self.config.pixel_format as u8])?;

        self.send_command(GMCTRP1, &tuning::GAMMA_POSITIVE)?;
        self.send_command(GMCTRN1, &tuning::GAMMA_NEGATIVE)?;

        self.send_command(NORON, &[])?;
        self.send_command(DISPON, &[])?;

        self.set_orientation()?;

        log::debug!(
            "st7735: ready, {}x{}",
            self.dimensions.width,
            self.dimensions.height
        );
        Ok(())
    }

    /// Set the full-screen window and scan direction
    fn set_orientation(&mut self) -> DisplayResult<I> {
        if let Some(window) = addressing_window(
            self.dimensions,
            self.offset,
            Region::full(self.dimensions),
        ) {
            self.set_window(window)?;
        }
        let madctl = madctl_value(self.config.panel, self.config.rotation, MadctlColumn::After);
        self.send_command(MADCTL, &[madctl])
    }

    fn splash(&mut self) -> DisplayResult<I> {
        let dims = self.dimensions;
        self.fill_solid(Region::full(dims), Color::BLUE)?;

        let size = GlyphSize::Wide;
        let line = Region::new(0, SPLASH_ROW, dims.width, size.height());
        let style = TextStyle::new(Color::RED, Color::BLACK, size);
        self.draw_string(line, style, SPLASH_TEXT)?;
        Ok(())
    }

    /// Fill a region with a single color
    ///
    /// The color is staged once and streamed in chunks of at most
    /// [`STAGING_PIXELS`] pixels.
    ///
    /// Returns `DrawOutcome::OutOfBounds` without touching the bus if the
    /// region is empty or does not fit on screen.
    pub fn fill_solid(&mut self, region: Region, color: Color) -> DisplayResult<I, DrawOutcome> {
        let Some(window) = self.window(region) else {
            return Ok(DrawOutcome::OutOfBounds);
        };
        self.begin_write(window)?;

        let bytes = color.to_be_bytes();
        for pixel in self.staging.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&bytes);
        }

        let mut remaining = region.pixel_count();
        while remaining > 0 {
            let chunk = remaining.min(STAGING_PIXELS);
            self.interface
                .send_data(&self.staging[..chunk * BYTES_PER_PIXEL])
                .map_err(Error::Interface)?;
            remaining -= chunk;
        }

        Ok(DrawOutcome::Drawn)
    }

    /// Write caller-encoded pixels to a region in one transfer
    ///
    /// `pixels` holds big-endian RGB565 values in row-major order; only the
    /// first `w * h * 2` bytes are sent.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `pixels` is shorter than the region
    /// needs. Nothing is sent in that case.
    pub fn fill_buffer(&mut self, region: Region, pixels: &[u8]) -> DisplayResult<I, DrawOutcome> {
        let Some(window) = self.window(region) else {
            return Ok(DrawOutcome::OutOfBounds);
        };
        let required = region.pixel_count() * BYTES_PER_PIXEL;
        if pixels.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: pixels.len(),
            });
        }

        Self::blit(&mut self.interface, window, &pixels[..required])?;
        Ok(DrawOutcome::Drawn)
    }

    /// Stream pixels from an iterator to a region
    ///
    /// Colors are batched through the staging buffer. Stops after
    /// `w * h` pixels or when the iterator runs out, whichever comes first.
    pub fn write_pixels<C>(&mut self, region: Region, colors: C) -> DisplayResult<I, DrawOutcome>
    where
        C: IntoIterator<Item = Color>,
    {
        let Some(window) = self.window(region) else {
            return Ok(DrawOutcome::OutOfBounds);
        };
        self.begin_write(window)?;

        let mut colors = colors.into_iter().take(region.pixel_count());
        loop {
            let mut filled = 0;
            for (pixel, color) in self
                .staging
                .chunks_exact_mut(BYTES_PER_PIXEL)
                .zip(colors.by_ref())
            {
                pixel.copy_from_slice(&color.to_be_bytes());
                filled += BYTES_PER_PIXEL;
            }
            if filled == 0 {
                break;
            }
            self.interface
                .send_data(&self.staging[..filled])
                .map_err(Error::Interface)?;
            if filled < STAGING_BYTES {
                break;
            }
        }

        Ok(DrawOutcome::Drawn)
    }

    /// Draw a single character with its top-left corner at `(x, y)`
    ///
    /// The glyph is drawn whole or not at all: `OutOfBounds` if any part of
    /// the cell would leave the screen, `NotPrintable` for characters outside
    /// `' '..='~'`.
    pub fn draw_glyph(
        &mut self,
        x: u16,
        y: u16,
        ch: u8,
        style: TextStyle,
    ) -> DisplayResult<I, DrawOutcome> {
        let size = style.size;
        let Some(rows) = font::glyph(ch, size) else {
            return Ok(DrawOutcome::NotPrintable);
        };
        let Some(window) = self.window(Region::new(x, y, size.width(), size.height())) else {
            return Ok(DrawOutcome::OutOfBounds);
        };

        let len = font::rasterize(
            rows,
            size,
            style.foreground,
            style.background,
            &mut self.glyph,
        );
        Self::blit(&mut self.interface, window, &self.glyph[..len])?;
        Ok(DrawOutcome::Drawn)
    }

    /// Draw text inside a bounding region
    ///
    /// Glyphs are placed left to right from the region's top-left corner.
    /// The cursor wraps to the next line once it reaches the right edge and
    /// drawing stops once it reaches the bottom edge, at the first
    /// non-printable byte, or at the end of `text`. Glyphs that would leave
    /// the screen are skipped.
    ///
    /// Returns the number of glyphs drawn.
    pub fn draw_string(
        &mut self,
        bounds: Region,
        style: TextStyle,
        text: &str,
    ) -> DisplayResult<I, usize> {
        let right = u32::from(bounds.x) + u32::from(bounds.w);
        let bottom = u32::from(bounds.y) + u32::from(bounds.h);
        let (mut x, mut y) = (u32::from(bounds.x), u32::from(bounds.y));
        let mut drawn = 0;

        for ch in text.bytes() {
            if !font::is_printable(ch) {
                break;
            }
            if x >= right {
                x = u32::from(bounds.x);
                y += u32::from(style.size.height());
            }
            if y >= bottom {
                break;
            }

            // Cursor positions past u16 are off screen anyway
            let (Ok(gx), Ok(gy)) = (u16::try_from(x), u16::try_from(y)) else {
                break;
            };
            if self.draw_glyph(gx, gy, ch, style)?.is_drawn() {
                drawn += 1;
            }
            x += u32::from(style.size.advance());
        }

        Ok(drawn)
    }

    /// Set the backlight level (0.0 to 1.0, clamped)
    pub fn set_backlight(&mut self, fraction: f32) -> DisplayResult<I> {
        self.interface
            .set_backlight(fraction)
            .map_err(Error::Interface)
    }

    /// Effective width in pixels
    pub fn width(&self) -> u16 {
        self.dimensions.width
    }

    /// Effective height in pixels
    pub fn height(&self) -> u16 {
        self.dimensions.height
    }

    /// Effective dimensions for the configured rotation
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Bounds-check a region and map it to frame memory
    fn window(&self, region: Region) -> Option<Window> {
        let window = addressing_window(self.dimensions, self.offset, region);
        if window.is_none() {
            log::trace!(
                "st7735: rejected {}x{} at ({}, {}), screen is {}x{}",
                region.w,
                region.h,
                region.x,
                region.y,
                self.dimensions.width,
                self.dimensions.height
            );
        }
        window
    }

    /// Set the column and row address window
    fn set_window(&mut self, window: Window) -> DisplayResult<I> {
        self.send_command(CASET, &window.column_bytes())?;
        self.send_command(RASET, &window.row_bytes())
    }

    /// Set the window and start a frame memory write
    fn begin_write(&mut self, window: Window) -> DisplayResult<I> {
        self.set_window(window)?;
        self.send_command(RAMWR, &[])
    }

    /// Window setup plus a single pixel transfer
    fn blit(interface: &mut I, window: Window, pixels: &[u8]) -> DisplayResult<I> {
        interface
            .send_command(CASET, &window.column_bytes())
            .map_err(Error::Interface)?;
        interface
            .send_command(RASET, &window.row_bytes())
            .map_err(Error::Interface)?;
        interface
            .send_command(RAMWR, &[])
            .map_err(Error::Interface)?;
        interface.send_data(pixels).map_err(Error::Interface)
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8, data: &[u8]) -> DisplayResult<I> {
        self.interface
            .send_command(cmd, data)
            .map_err(Error::Interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, PixelFormat, Rotation, ScreenVariant};
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Init,
        Command(u8, Vec<u8>),
        Data(Vec<u8>),
        Backlight(f32),
        DelayMs(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    #[derive(Debug)]
    struct MockInterface {
        log: Log,
        fail_on_command: Option<u8>,
        /// Data transfers accepted before every further one fails
        data_budget: Option<usize>,
    }

    #[derive(Debug, PartialEq)]
    struct MockError;

    impl DisplayInterface for MockInterface {
        type Error = MockError;

        fn init(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Init);
            Ok(())
        }

        fn send_command(&mut self, command: u8, data: &[u8]) -> Result<(), Self::Error> {
            if self.fail_on_command == Some(command) {
                return Err(MockError);
            }
            self.log
                .borrow_mut()
                .push(Event::Command(command, data.to_vec()));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            if let Some(budget) = self.data_budget.as_mut() {
                if *budget == 0 {
                    return Err(MockError);
                }
                *budget -= 1;
            }
            self.log.borrow_mut().push(Event::Data(data.to_vec()));
            Ok(())
        }

        fn set_backlight(&mut self, fraction: f32) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Backlight(fraction));
            Ok(())
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.log.borrow_mut().push(Event::DelayMs(ns / 1_000_000));
        }

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::DelayMs(ms));
        }
    }

    fn build(builder: Builder) -> (Display<MockInterface>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let interface = MockInterface {
            log: log.clone(),
            fail_on_command: None,
            data_budget: None,
        };
        let mut delay = MockDelay { log: log.clone() };
        let display = Display::new(interface, builder.build().unwrap(), &mut delay).unwrap();
        (display, log)
    }

    /// 160x128 landscape display with the splash disabled and the log cleared
    fn test_display() -> (Display<MockInterface>, Log) {
        let (display, log) = build(
            Builder::new()
                .panel(PanelVariant::Boe)
                .screen(ScreenVariant::Screen1_8)
                .rotation(Rotation::Landscape)
                .splash(false),
        );
        log.borrow_mut().clear();
        (display, log)
    }

    fn commands(log: &Log) -> Vec<(u8, Vec<u8>)> {
        log.borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Command(cmd, data) => Some((*cmd, data.clone())),
                _ => None,
            })
            .collect()
    }

    fn data_lengths(log: &Log) -> Vec<usize> {
        log.borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Data(data) => Some(data.len()),
                _ => None,
            })
            .collect()
    }

    fn data_payloads(log: &Log) -> Vec<Vec<u8>> {
        log.borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Data(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    fn command_data(log: &Log, command: u8) -> Option<Vec<u8>> {
        commands(log)
            .into_iter()
            .find(|(cmd, _)| *cmd == command)
            .map(|(_, data)| data)
    }

    #[test]
    fn test_bring_up_starts_with_two_resets() {
        let (_display, log) = build(Builder::new().splash(false));
        let log = log.borrow();
        assert_eq!(log[0], Event::Init);
        assert_eq!(log[1], Event::Backlight(1.0));
        assert_eq!(log[2], Event::Command(SWRESET, Vec::new()));
        assert_eq!(log[3], Event::DelayMs(120));
        assert_eq!(log[4], Event::Command(SWRESET, Vec::new()));
        assert_eq!(log[5], Event::DelayMs(120));
        assert_eq!(log[6], Event::Command(SLPOUT, Vec::new()));

        let resets = log
            .iter()
            .filter(|event| matches!(event, Event::Command(SWRESET, _)))
            .count();
        assert_eq!(resets, 2);
    }

    #[test]
    fn test_bring_up_register_program() {
        let (_display, log) = build(Builder::new().splash(false));
        let expected: [(u8, &[u8]); 18] = [
            (SWRESET, &[]),
            (SWRESET, &[]),
            (SLPOUT, &[]),
            (FRMCTR1, &[0x01, 0x2C, 0x2D]),
            (FRMCTR2, &[0x01, 0x2C, 0x2D]),
            (FRMCTR3, &[0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D]),
            (INVCTR, &[0x07]),
            (PWCTR1, &[0xA2, 0x02, 0x84]),
            (PWCTR2, &[0xC5]),
            (PWCTR3, &[0x0A, 0x00]),
            (PWCTR4, &[0x8A, 0x2A]),
            (PWCTR5, &[0x8A, 0xEE]),
            (VMCTR1, &[0x0E]),
            (INVON, &[]),
            (COLMOD, &[0x05]),
            (
                GMCTRP1,
                &[
                    0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D, 0x29, 0x25, 0x2B, 0x39, 0x00,
                    0x01, 0x03, 0x10,
                ],
            ),
            (
                GMCTRN1,
                &[
                    0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D, 0x2E, 0x2E, 0x37, 0x3F, 0x00,
                    0x00, 0x02, 0x10,
                ],
            ),
            (NORON, &[]),
        ];

        let sent = commands(&log);
        for (i, (cmd, data)) in expected.iter().enumerate() {
            assert_eq!(sent[i].0, *cmd, "command {i}");
            assert_eq!(sent[i].1.as_slice(), *data, "data for command {cmd:#04x}");
        }
        assert_eq!(sent[18], (DISPON, Vec::new()));
        assert_eq!(sent.len(), 22);
    }

    #[test]
    fn test_bring_up_orientation_hannstar_small_landscape() {
        let (display, log) = build(Builder::new().splash(false));
        assert_eq!((display.width(), display.height()), (160, 80));

        let sent = commands(&log);
        let tail = &sent[sent.len() - 3..];
        // 160x80 at offset (1, 26)
        assert_eq!(tail[0], (CASET, alloc::vec![0x00, 0x01, 0x00, 0xA0]));
        assert_eq!(tail[1], (RASET, alloc::vec![0x00, 0x1A, 0x00, 0x69]));
        assert_eq!(tail[2], (MADCTL, alloc::vec![0x60 | 0x08]));
    }

    #[test]
    fn test_bring_up_boe_panel_polarity_and_format() {
        let (_display, log) = build(
            Builder::new()
                .panel(PanelVariant::Boe)
                .rotation(Rotation::Portrait)
                .pixel_format(PixelFormat::Rgb666)
                .splash(false),
        );
        let sent = commands(&log);
        assert!(sent.iter().any(|(cmd, _)| *cmd == INVOFF));
        assert!(!sent.iter().any(|(cmd, _)| *cmd == INVON));
        assert_eq!(command_data(&log, COLMOD), Some(alloc::vec![0x06]));
        assert_eq!(command_data(&log, MADCTL), Some(alloc::vec![0xC0]));
        // 80x160 at offset (24, 0)
        assert_eq!(
            command_data(&log, CASET),
            Some(alloc::vec![0x00, 24, 0x00, 103])
        );
        assert_eq!(command_data(&log, RASET), Some(alloc::vec![0x00, 0, 0x00, 159]));
    }

    #[test]
    fn test_bring_up_applies_brightness() {
        let (_display, log) = build(Builder::new().brightness(0.25).splash(false));
        assert_eq!(log.borrow()[1], Event::Backlight(0.25));
    }

    #[test]
    fn test_bring_up_failure_aborts_construction() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let interface = MockInterface {
            log: log.clone(),
            fail_on_command: Some(PWCTR1),
            data_budget: None,
        };
        let mut delay = MockDelay { log: log.clone() };
        let config = Builder::new().build().unwrap();
        let result = Display::new(interface, config, &mut delay);
        assert!(matches!(result, Err(Error::Interface(MockError))));
        assert!(command_data(&log, PWCTR2).is_none());
    }

    #[test]
    fn test_splash_fills_screen_and_draws_text() {
        let (display, log) = build(Builder::new());
        let sent = commands(&log);
        let madctl = sent.iter().position(|(cmd, _)| *cmd == MADCTL).unwrap();
        let after = &sent[madctl + 1..];

        // Full-screen fill first
        assert_eq!(after[0], (CASET, alloc::vec![0x00, 0x01, 0x00, 0xA0]));
        assert_eq!(after[2], (RAMWR, Vec::new()));

        // First glyph sits on the splash row, shifted by the 26-row offset
        assert_eq!(after[3], (CASET, alloc::vec![0x00, 0x01, 0x00, 0x08]));
        assert_eq!(after[4], (RASET, alloc::vec![0x00, 84, 0x00, 99]));

        let glyph_writes = after.iter().filter(|(cmd, _)| *cmd == RAMWR).count() - 1;
        assert_eq!(glyph_writes, SPLASH_TEXT.len());
        assert_eq!(display.width(), 160);
    }

    #[test]
    fn test_fill_solid_stops_at_failed_chunk() {
        let (mut display, log) = test_display();
        display.interface.data_budget = Some(1);

        // 3000 pixels would need three chunks
        let result = display.fill_solid(Region::new(10, 20, 60, 50), Color::RED);
        assert!(matches!(result, Err(Error::Interface(MockError))));
        assert_eq!(data_lengths(&log), [1024 * 2]);
    }

    #[test]
    fn test_fill_buffer_reports_transfer_failure() {
        let (mut display, log) = test_display();
        display.interface.data_budget = Some(0);

        let pixels = [0u8; 4 * 4 * 2];
        let result = display.fill_buffer(Region::new(0, 0, 4, 4), &pixels);
        assert!(matches!(result, Err(Error::Interface(MockError))));
        assert!(data_lengths(&log).is_empty());
        assert_eq!(commands(&log).last(), Some(&(RAMWR, Vec::new())));
    }

    #[test]
    fn test_draw_glyph_reports_transfer_failure() {
        let (mut display, _log) = test_display();
        display.interface.data_budget = Some(0);

        let style = TextStyle::new(Color::WHITE, Color::BLACK, GlyphSize::Compact);
        let result = display.draw_glyph(0, 0, b'A', style);
        assert!(matches!(result, Err(Error::Interface(MockError))));
    }

    #[test]
    fn test_draw_string_stops_at_transfer_failure() {
        let (mut display, log) = test_display();
        display.interface.data_budget = Some(2);

        let style = TextStyle::new(Color::WHITE, Color::BLACK, GlyphSize::Wide);
        let result = display.draw_string(Region::new(0, 0, 160, 16), style, "abcdef");
        assert!(matches!(result, Err(Error::Interface(MockError))));
        assert_eq!(data_lengths(&log).len(), 2);
    }

    #[test]
    fn test_write_pixels_reports_transfer_failure() {
        let (mut display, log) = test_display();
        display.interface.data_budget = Some(1);

        let colors = core::iter::repeat(Color::GREEN);
        let result = display.write_pixels(Region::new(0, 0, 100, 30), colors);
        assert!(matches!(result, Err(Error::Interface(MockError))));
        assert_eq!(data_lengths(&log), [1024 * 2]);
    }

    #[test]
    fn test_fill_solid_full_screen_is_drawn() {
        let (mut display, log) = test_display();
        let dims = display.dimensions();
        let outcome = display.fill_solid(Region::full(dims), Color::GREEN).unwrap();
        assert_eq!(outcome, DrawOutcome::Drawn);

        let total: usize = data_lengths(&log).iter().sum();
        assert_eq!(total, 160 * 128 * 2);
    }

    #[test]
    fn test_fill_solid_one_past_bound_is_noop() {
        let (mut display, log) = test_display();
        let outcome = display
            .fill_solid(Region::new(1, 0, 160, 128), Color::GREEN)
            .unwrap();
        assert_eq!(outcome, DrawOutcome::OutOfBounds);

        let outcome = display
            .fill_solid(Region::new(0, 1, 160, 128), Color::GREEN)
            .unwrap();
        assert_eq!(outcome, DrawOutcome::OutOfBounds);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_fill_solid_empty_region_is_noop() {
        let (mut display, log) = test_display();
        let outcome = display
            .fill_solid(Region::new(0, 0, 0, 10), Color::GREEN)
            .unwrap();
        assert_eq!(outcome, DrawOutcome::OutOfBounds);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_fill_solid_chunks_through_staging_buffer() {
        let (mut display, log) = test_display();
        // 60 x 50 = 3000 pixels
        let outcome = display
            .fill_solid(Region::new(10, 20, 60, 50), Color(0xA55A))
            .unwrap();
        assert_eq!(outcome, DrawOutcome::Drawn);

        assert_eq!(data_lengths(&log), [1024 * 2, 1024 * 2, 952 * 2]);

        let log = log.borrow();
        let pixels: Vec<&[u8]> = log
            .iter()
            .filter_map(|event| match event {
                Event::Data(data) => Some(data.as_slice()),
                _ => None,
            })
            .flat_map(|data| data.chunks_exact(2))
            .collect();
        assert_eq!(pixels.len(), 3000);
        assert!(pixels.iter().all(|pixel| *pixel == [0xA5, 0x5A]));
    }

    #[test]
    fn test_fill_solid_window_commands() {
        let (mut display, log) = test_display();
        display
            .fill_solid(Region::new(10, 20, 60, 50), Color::RED)
            .unwrap();
        let sent = commands(&log);
        assert_eq!(
            sent,
            [
                (CASET, alloc::vec![0x00, 10, 0x00, 69]),
                (RASET, alloc::vec![0x00, 20, 0x00, 69]),
                (RAMWR, Vec::new()),
            ]
        );
    }

    #[test]
    fn test_equal_regions_share_chunk_shape() {
        let (mut display, log) = test_display();
        display
            .fill_solid(Region::new(0, 0, 100, 30), Color::RED)
            .unwrap();
        let first = data_lengths(&log);
        log.borrow_mut().clear();

        display
            .fill_solid(Region::new(40, 90, 100, 30), Color::BLACK)
            .unwrap();
        assert_eq!(data_lengths(&log), first);
    }

    #[test]
    fn test_glyph_then_background_fill_same_shape() {
        let (mut display, log) = test_display();
        let style = TextStyle::new(Color::WHITE, Color::BLACK, GlyphSize::Wide);
        display.draw_glyph(8, 8, b'A', style).unwrap();
        let glyph_shape = data_lengths(&log);
        log.borrow_mut().clear();

        display
            .fill_solid(Region::new(8, 8, 8, 16), Color::BLACK)
            .unwrap();
        assert_eq!(data_lengths(&log), glyph_shape);
    }

    #[test]
    fn test_fill_buffer_single_transfer() {
        let (mut display, log) = test_display();
        let pixels = alloc::vec![0x5Au8; 40 * 40 * 2 + 7];
        let outcome = display
            .fill_buffer(Region::new(0, 0, 40, 40), &pixels)
            .unwrap();
        assert_eq!(outcome, DrawOutcome::Drawn);
        assert_eq!(data_lengths(&log), [40 * 40 * 2]);
    }

    #[test]
    fn test_fill_buffer_too_small() {
        let (mut display, log) = test_display();
        let pixels = [0u8; 10];
        let result = display.fill_buffer(Region::new(0, 0, 4, 4), &pixels);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 32,
                provided: 10
            })
        ));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_fill_buffer_out_of_bounds() {
        let (mut display, log) = test_display();
        let pixels = [0u8; 8];
        let outcome = display
            .fill_buffer(Region::new(159, 127, 2, 2), &pixels)
            .unwrap();
        assert_eq!(outcome, DrawOutcome::OutOfBounds);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_write_pixels_chunks_iterator() {
        let (mut display, log) = test_display();
        let colors = (0..2000u16).map(Color);
        let outcome = display
            .write_pixels(Region::new(0, 0, 100, 20), colors)
            .unwrap();
        assert_eq!(outcome, DrawOutcome::Drawn);
        assert_eq!(data_lengths(&log), [1024 * 2, 976 * 2]);

        let payloads = data_payloads(&log);
        let last = payloads.last().unwrap();
        assert_eq!(&last[last.len() - 2..], 1999u16.to_be_bytes());
    }

    #[test]
    fn test_write_pixels_exact_multiple_of_staging() {
        let (mut display, log) = test_display();
        let colors = core::iter::repeat(Color::RED);
        display
            .write_pixels(Region::new(0, 0, 128, 16), colors)
            .unwrap();
        assert_eq!(data_lengths(&log), [2048, 2048]);
    }

    #[test]
    fn test_draw_glyph_bottom_edge_is_rejected() {
        let (mut display, log) = test_display();
        let style = TextStyle::new(Color::WHITE, Color::BLACK, GlyphSize::Wide);
        let outcome = display.draw_glyph(0, 128 - 15, b'A', style).unwrap();
        assert_eq!(outcome, DrawOutcome::OutOfBounds);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_draw_glyph_right_edge_is_rejected() {
        let (mut display, log) = test_display();
        let style = TextStyle::new(Color::WHITE, Color::BLACK, GlyphSize::Compact);
        let outcome = display.draw_glyph(155, 0, b'A', style).unwrap();
        assert_eq!(outcome, DrawOutcome::OutOfBounds);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_draw_glyph_fits_flush_with_edges() {
        let (mut display, _log) = test_display();
        let style = TextStyle::new(Color::WHITE, Color::BLACK, GlyphSize::Wide);
        let outcome = display.draw_glyph(152, 112, b'A', style).unwrap();
        assert_eq!(outcome, DrawOutcome::Drawn);
    }

    #[test]
    fn test_draw_glyph_pixels() {
        let (mut display, log) = test_display();
        let fg = Color(0xF00F);
        let bg = Color(0x0FF0);
        let style = TextStyle::new(fg, bg, GlyphSize::Wide);
        let outcome = display.draw_glyph(16, 32, b'A', style).unwrap();
        assert_eq!(outcome, DrawOutcome::Drawn);

        assert_eq!(
            commands(&log),
            [
                (CASET, alloc::vec![0x00, 16, 0x00, 23]),
                (RASET, alloc::vec![0x00, 32, 0x00, 47]),
                (RAMWR, Vec::new()),
            ]
        );

        let rows = font::glyph(b'A', GlyphSize::Wide).unwrap();
        let payloads = data_payloads(&log);
        assert_eq!(payloads.len(), 1);
        let pixels = &payloads[0];
        assert_eq!(pixels.len(), 8 * 16 * 2);
        for (i, pixel) in pixels.chunks_exact(2).enumerate() {
            let set = rows[i / 8] & (0x80 >> (i % 8)) != 0;
            let expected = if set { [0xF0, 0x0F] } else { [0x0F, 0xF0] };
            assert_eq!(pixel, expected);
        }
    }

    #[test]
    fn test_draw_glyph_not_printable() {
        let (mut display, log) = test_display();
        let style = TextStyle::new(Color::WHITE, Color::BLACK, GlyphSize::Wide);
        let outcome = display.draw_glyph(0, 0, b'\n', style).unwrap();
        assert_eq!(outcome, DrawOutcome::NotPrintable);
        assert!(log.borrow().is_empty());
    }

    fn glyph_origins(log: &Log) -> Vec<(u8, u8)> {
        commands(log)
            .windows(2)
            .filter(|pair| pair[0].0 == CASET && pair[1].0 == RASET)
            .map(|pair| (pair[0].1[1], pair[1].1[1]))
            .collect()
    }

    #[test]
    fn test_draw_string_advances_and_wraps() {
        let (mut display, log) = test_display();
        let style = TextStyle::new(Color::WHITE, Color::BLACK, GlyphSize::Wide);
        let drawn = display
            .draw_string(Region::new(0, 0, 24, 64), style, "abcdef")
            .unwrap();
        assert_eq!(drawn, 6);
        assert_eq!(
            glyph_origins(&log),
            [(0, 0), (8, 0), (16, 0), (0, 16), (8, 16), (16, 16)]
        );
    }

    #[test]
    fn test_draw_string_compact_advance() {
        let (mut display, log) = test_display();
        let style = TextStyle::new(Color::WHITE, Color::BLACK, GlyphSize::Compact);
        display
            .draw_string(Region::new(4, 2, 100, 12), style, "abc")
            .unwrap();
        assert_eq!(glyph_origins(&log), [(4, 2), (10, 2), (16, 2)]);
    }

    #[test]
    fn test_draw_string_stops_at_bottom_bound() {
        let (mut display, _log) = test_display();
        let style = TextStyle::new(Color::WHITE, Color::BLACK, GlyphSize::Wide);
        let drawn = display
            .draw_string(Region::new(0, 0, 16, 16), style, "abcdef")
            .unwrap();
        assert_eq!(drawn, 2);
    }

    #[test]
    fn test_draw_string_stops_at_non_printable() {
        let (mut display, _log) = test_display();
        let style = TextStyle::new(Color::WHITE, Color::BLACK, GlyphSize::Wide);
        let drawn = display
            .draw_string(Region::new(0, 0, 160, 16), style, "ab\ncd")
            .unwrap();
        assert_eq!(drawn, 2);
    }

    #[test]
    fn test_draw_string_skips_offscreen_glyphs() {
        let (mut display, _log) = test_display();
        let style = TextStyle::new(Color::WHITE, Color::BLACK, GlyphSize::Wide);
        // Bounds extend past the right edge; the last cell does not fit
        let drawn = display
            .draw_string(Region::new(140, 0, 40, 16), style, "abc")
            .unwrap();
        assert_eq!(drawn, 2);
    }

    #[test]
    fn test_set_backlight_forwards_fraction() {
        let (mut display, log) = test_display();
        display.set_backlight(0.75).unwrap();
        assert_eq!(*log.borrow(), [Event::Backlight(0.75)]);
    }

    #[test]
    fn test_release_returns_interface() {
        let (display, _log) = test_display();
        let interface = display.release();
        assert_eq!(interface.fail_on_command, None);
    }
}
