//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ST7735 controller over a four-wire SPI bus.
//!
//! ## Hardware Requirements
//!
//! The ST7735 requires:
//! - SPI bus (SCK + MOSI), configured with [`MODE`]
//! - 2 GPIO pins:
//!   - **CS**: Chip select (output, active low)
//!   - **DC**: Data/Command select (output, low=command, high=data)
//! - A PWM channel driving the backlight, ideally at [`BACKLIGHT_FREQUENCY_HZ`]
//!
//! The driver toggles CS itself, so the bus must be a raw [`SpiBus`], not a
//! shared [`SpiDevice`](embedded_hal::spi::SpiDevice).
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::pwm::SetDutyCycle;
//! use embedded_hal::spi::SpiBus;
//! use st7735_tft::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! // Create interface with SPI bus, CS, DC and backlight PWM
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPwm);
//!
//! // Idle the control lines
//! let _ = interface.init();
//!
//! // Send a command with parameters
//! let _ = interface.send_command(0x3A, &[0x05]); // COLMOD: RGB565
//!
//! // Half brightness
//! let _ = interface.set_backlight(0.5);
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use embedded_hal::spi::{Mode, SpiBus, MODE_0};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// SPI mode expected by the controller: clock idle low, sample on first edge
pub const MODE: Mode = MODE_0;

/// Recommended backlight PWM frequency
pub const BACKLIGHT_FREQUENCY_HZ: u32 = 10_000;

/// Resolution used when converting a brightness fraction to a duty cycle
pub const BACKLIGHT_DUTY_STEPS: u16 = 1000;

/// Trait for hardware interface to the ST7735 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO + PWM implementation that satisfies embedded-hal traits.
///
/// All methods block until the transfer has completed.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., a parallel bus or a fixed backlight), implement this
/// trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Drive the control lines to their idle level
    ///
    /// Called once before any other traffic. CS and DC both idle high.
    fn init(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Send a command byte followed by its parameters
    ///
    /// The implementation must:
    /// 1. Assert CS
    /// 2. Set DC low (command mode) and send the command byte
    /// 3. Set DC high (data mode) and send `data`, if any
    /// 4. Deassert CS
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// Asserts CS around the transfer but leaves DC alone: the data mode set
    /// by the preceding [`send_command`](Self::send_command) stays in effect.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Set the backlight level
    ///
    /// `fraction` is clamped to `0.0..=1.0`.
    fn set_backlight(&mut self, fraction: f32) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI, GPIO and PWM error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr, PwmErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
    /// Backlight PWM error
    Backlight(PwmErr),
}

impl<SpiErr: Debug, PinErr: Debug, PwmErr: Debug> core::fmt::Display
    for InterfaceError<SpiErr, PinErr, PwmErr>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
            Self::Backlight(e) => write!(f, "Backlight error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug, PwmErr: Debug> core::error::Error
    for InterfaceError<SpiErr, PinErr, PwmErr>
{
}

/// Hardware interface implementation for ST7735
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI, GPIO and PWM traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus`]
/// * `CS` - Chip select pin implementing [`OutputPin`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `BL` - Backlight PWM implementing [`SetDutyCycle`]
pub struct Interface<SPI, CS, DC, BL> {
    /// SPI bus for communication
    spi: SPI,
    /// Chip select pin (active low)
    cs: CS,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Backlight PWM channel
    backlight: BL,
}

impl<SPI, CS, DC, BL> Interface<SPI, CS, DC, BL>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    BL: SetDutyCycle,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI bus (must implement [`SpiBus`], configured with [`MODE`])
    /// * `cs` - Chip select pin (output, push-pull)
    /// * `dc` - Data/Command pin (output, push-pull)
    /// * `backlight` - PWM channel driving the backlight
    pub fn new(spi: SPI, cs: CS, dc: DC, backlight: BL) -> Self {
        Self {
            spi,
            cs,
            dc,
            backlight,
        }
    }

    /// Consume the interface and return the underlying peripherals
    pub fn release(self) -> (SPI, CS, DC, BL) {
        (self.spi, self.cs, self.dc, self.backlight)
    }
}

impl<SPI, CS, DC, BL, PinErr> Interface<SPI, CS, DC, BL>
where
    SPI: SpiBus,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    BL: SetDutyCycle,
{
    /// Run `op` with chip select asserted
    ///
    /// CS is released even when `op` fails; the first error wins.
    fn selected<F>(&mut self, op: F) -> InterfaceResult<(), InterfaceError<SPI::Error, PinErr, BL::Error>>
    where
        F: FnOnce(&mut SPI, &mut DC) -> InterfaceResult<(), InterfaceError<SPI::Error, PinErr, BL::Error>>,
    {
        self.cs.set_low().map_err(InterfaceError::Pin)?;
        let result = op(&mut self.spi, &mut self.dc);
        let release = self.cs.set_high().map_err(InterfaceError::Pin);
        result.and(release)
    }
}

impl<SPI, CS, DC, BL, PinErr> DisplayInterface for Interface<SPI, CS, DC, BL>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    BL: SetDutyCycle,
    BL::Error: Debug,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr, BL::Error>;

    fn init(&mut self) -> InterfaceResult<(), Self::Error> {
        self.cs.set_high().map_err(InterfaceError::Pin)?;
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        Ok(())
    }

    fn send_command(&mut self, command: u8, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.selected(|spi, dc| {
            dc.set_low().map_err(InterfaceError::Pin)?;
            spi.write(&[command]).map_err(InterfaceError::Spi)?;
            spi.flush().map_err(InterfaceError::Spi)?;
            dc.set_high().map_err(InterfaceError::Pin)?;
            if !data.is_empty() {
                spi.write(data).map_err(InterfaceError::Spi)?;
                spi.flush().map_err(InterfaceError::Spi)?;
            }
            Ok(())
        })
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.selected(|spi, _dc| {
            spi.write(data).map_err(InterfaceError::Spi)?;
            spi.flush().map_err(InterfaceError::Spi)
        })
    }

    fn set_backlight(&mut self, fraction: f32) -> InterfaceResult<(), Self::Error> {
        let duty = (fraction.clamp(0.0, 1.0) * f32::from(BACKLIGHT_DUTY_STEPS)) as u16;
        self.backlight
            .set_duty_cycle_fraction(duty, BACKLIGHT_DUTY_STEPS)
            .map_err(InterfaceError::Backlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        CsLow,
        CsHigh,
        DcLow,
        DcHigh,
        Write(Vec<u8>),
        Flush,
        Duty(u16),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    impl embedded_hal::pwm::Error for MockError {
        fn kind(&self) -> embedded_hal::pwm::ErrorKind {
            embedded_hal::pwm::ErrorKind::Other
        }
    }

    struct MockSpi {
        log: Log,
        fail_writes: bool,
    }

    impl embedded_hal::spi::ErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiBus for MockSpi {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            if self.fail_writes {
                return Err(MockError);
            }
            self.log.borrow_mut().push(Event::Write(words.to_vec()));
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Flush);
            Ok(())
        }
    }

    struct MockPin {
        log: Log,
        low: Event,
        high: Event,
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = MockError;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(self.low.clone());
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(self.high.clone());
            Ok(())
        }
    }

    struct MockPwm {
        log: Log,
    }

    impl embedded_hal::pwm::ErrorType for MockPwm {
        type Error = MockError;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            2000
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Duty(duty));
            Ok(())
        }
    }

    fn interface(fail_writes: bool) -> (Interface<MockSpi, MockPin, MockPin, MockPwm>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let spi = MockSpi {
            log: log.clone(),
            fail_writes,
        };
        let cs = MockPin {
            log: log.clone(),
            low: Event::CsLow,
            high: Event::CsHigh,
        };
        let dc = MockPin {
            log: log.clone(),
            low: Event::DcLow,
            high: Event::DcHigh,
        };
        let pwm = MockPwm { log: log.clone() };
        (Interface::new(spi, cs, dc, pwm), log)
    }

    #[test]
    fn test_init_idles_lines_high() {
        let (mut interface, log) = interface(false);
        interface.init().unwrap();
        assert_eq!(*log.borrow(), [Event::CsHigh, Event::DcHigh]);
    }

    #[test]
    fn test_send_command_with_data_framing() {
        let (mut interface, log) = interface(false);
        interface.send_command(0x2A, &[0x00, 0x01, 0x00, 0x50]).unwrap();
        assert_eq!(
            *log.borrow(),
            [
                Event::CsLow,
                Event::DcLow,
                Event::Write(alloc::vec![0x2A]),
                Event::Flush,
                Event::DcHigh,
                Event::Write(alloc::vec![0x00, 0x01, 0x00, 0x50]),
                Event::Flush,
                Event::CsHigh,
            ]
        );
    }

    #[test]
    fn test_send_command_without_data_skips_payload() {
        let (mut interface, log) = interface(false);
        interface.send_command(0x2C, &[]).unwrap();
        assert_eq!(
            *log.borrow(),
            [
                Event::CsLow,
                Event::DcLow,
                Event::Write(alloc::vec![0x2C]),
                Event::Flush,
                Event::DcHigh,
                Event::CsHigh,
            ]
        );
    }

    #[test]
    fn test_send_data_leaves_dc_untouched() {
        let (mut interface, log) = interface(false);
        interface.send_data(&[0xF8, 0x00]).unwrap();
        assert_eq!(
            *log.borrow(),
            [
                Event::CsLow,
                Event::Write(alloc::vec![0xF8, 0x00]),
                Event::Flush,
                Event::CsHigh,
            ]
        );
    }

    #[test]
    fn test_spi_failure_releases_chip_select() {
        let (mut interface, log) = interface(true);
        let result = interface.send_data(&[0x00]);
        assert!(matches!(result, Err(InterfaceError::Spi(MockError))));
        assert_eq!(log.borrow().last(), Some(&Event::CsHigh));
    }

    #[test]
    fn test_backlight_fraction_scaled_and_clamped() {
        let (mut interface, log) = interface(false);
        interface.set_backlight(0.5).unwrap();
        interface.set_backlight(1.7).unwrap();
        interface.set_backlight(-1.0).unwrap();
        assert_eq!(
            *log.borrow(),
            [Event::Duty(1000), Event::Duty(2000), Event::Duty(0)]
        );
    }

    #[test]
    fn test_mode_is_cpol0_cpha0() {
        use embedded_hal::spi::{Phase, Polarity};

        assert_eq!(MODE.polarity, Polarity::IdleLow);
        assert_eq!(MODE.phase, Phase::CaptureOnFirstTransition);
    }
}
