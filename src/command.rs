//! ST7735 command definitions
//!
//! This module defines the command bytes used to drive the ST7735 TFT
//! controller. Commands are sent over SPI with the DC pin low for the command
//! byte and high for any parameter bytes.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Assert CS (Chip Select)
//! 2. Set DC low (command mode)
//! 3. Send command byte
//! 4. Set DC high (data mode)
//! 5. Send parameter bytes (if any)
//! 6. Deassert CS
//!
//! Pixel data following [`RAMWR`] is sent with [`DisplayInterface::send_data`](crate::DisplayInterface::send_data),
//! which keeps DC high from the preceding command.
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7735_tft::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::pwm::SetDutyCycle;
//! # use embedded_hal::spi::SpiBus;
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPwm);
//! # let pixel_data = [0xF8u8, 0x00, 0xF8, 0x00];
//! // Exit sleep
//! let _ = interface.send_command(command::SLPOUT, &[]);
//!
//! // Start a frame memory write and stream pixels
//! let _ = interface.send_command(command::RAMWR, &[]);
//! let _ = interface.send_data(&pixel_data);
//! ```

// System control commands

/// No operation (0x00)
pub const NOP: u8 = 0x00;

/// Software reset (0x01)
///
/// Restores all registers to their reset defaults. The controller needs
/// 120ms before accepting further commands.
pub const SWRESET: u8 = 0x01;

/// Sleep in (0x10)
///
/// Enters the minimum power mode; DC/DC converter and oscillator stop.
pub const SLPIN: u8 = 0x10;

/// Sleep out (0x11)
///
/// Leaves sleep mode. Takes no parameters.
pub const SLPOUT: u8 = 0x11;

/// Partial display mode on (0x12)
pub const PTLON: u8 = 0x12;

/// Normal display mode on (0x13)
///
/// Leaves partial mode; the whole frame memory is displayed.
pub const NORON: u8 = 0x13;

/// Display inversion off (0x20)
pub const INVOFF: u8 = 0x20;

/// Display inversion on (0x21)
pub const INVON: u8 = 0x21;

/// Display off (0x28)
pub const DISPOFF: u8 = 0x28;

/// Display on (0x29)
pub const DISPON: u8 = 0x29;

// Frame memory access commands

/// Column address set (0x2A)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const CASET: u8 = 0x2A;

/// Row address set (0x2B)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const RASET: u8 = 0x2B;

/// Memory write (0x2C)
///
/// Starts a frame memory write inside the current column/row window. Pixel
/// bytes follow as data; the address counter auto-increments.
pub const RAMWR: u8 = 0x2C;

/// Memory data access control (0x36)
///
/// Controls scan direction and subpixel order. Requires 1 byte:
/// - Bit 7 (MY): row address order
/// - Bit 6 (MX): column address order
/// - Bit 5 (MV): row/column exchange
/// - Bit 3 (RGB): 0 = RGB, 1 = BGR
pub const MADCTL: u8 = 0x36;

/// Interface pixel format (0x3A)
///
/// Requires 1 byte, see [`PixelFormat`](crate::PixelFormat).
pub const COLMOD: u8 = 0x3A;

// Panel function commands

/// Frame rate control in normal mode (0xB1)
///
/// Requires 3 bytes: [RTNA, FPA, BPA]
pub const FRMCTR1: u8 = 0xB1;

/// Frame rate control in idle mode (0xB2)
///
/// Requires 3 bytes: [RTNB, FPB, BPB]
pub const FRMCTR2: u8 = 0xB2;

/// Frame rate control in partial mode (0xB3)
///
/// Requires 6 bytes: dot inversion triple followed by column inversion triple
pub const FRMCTR3: u8 = 0xB3;

/// Display inversion control (0xB4)
///
/// Requires 1 byte: inversion mode per normal/idle/partial mode
pub const INVCTR: u8 = 0xB4;

/// Power control 1 (0xC0)
///
/// Requires 3 bytes: AVDD/GVDD, GVCL, mode
pub const PWCTR1: u8 = 0xC0;

/// Power control 2 (0xC1)
///
/// Requires 1 byte: VGH/VGL supply power level
pub const PWCTR2: u8 = 0xC1;

/// Power control 3, normal mode (0xC2)
///
/// Requires 2 bytes: op-amp current and booster frequency
pub const PWCTR3: u8 = 0xC2;

/// Power control 4, idle mode (0xC3)
///
/// Requires 2 bytes
pub const PWCTR4: u8 = 0xC3;

/// Power control 5, partial mode (0xC4)
///
/// Requires 2 bytes
pub const PWCTR5: u8 = 0xC4;

/// VCOM control 1 (0xC5)
///
/// Requires 1 byte: VCOM voltage level
pub const VMCTR1: u8 = 0xC5;

/// Positive gamma correction (0xE0)
///
/// Requires 16 bytes.
pub const GMCTRP1: u8 = 0xE0;

/// Negative gamma correction (0xE1)
///
/// Requires 16 bytes.
pub const GMCTRN1: u8 = 0xE1;

/// MADCTL bit selecting BGR subpixel order
pub const MADCTL_BGR: u8 = 0x08;

/// MADCTL value selecting RGB subpixel order
pub const MADCTL_RGB: u8 = 0x00;
