//! Driver errors
//!
//! Two kinds of failure exist: a [`Builder`](crate::Builder) rejecting its
//! inputs ([`BuilderError`]) and a display call failing at runtime ([`Error`]).
//! Bus, pin and backlight failures from the stock [`Interface`](crate::Interface)
//! arrive wrapped in [`InterfaceError`](crate::interface::InterfaceError).
//!
//! Drawing outside the screen is not an error: drawing calls report it as
//! [`DrawOutcome::OutOfBounds`](crate::DrawOutcome::OutOfBounds) and leave the
//! bus untouched.
//!
//! ## Example
//!
//! ```
//! use st7735_tft::{Builder, BuilderError};
//!
//! let result = Builder::new().brightness(2.0).build();
//! assert!(matches!(result, Err(BuilderError::InvalidBrightness(_))));
//! ```

use crate::interface::DisplayInterface;

/// Runtime display error
///
/// Carries the interface's own error type so callers can inspect the
/// underlying bus or pin failure.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// The interface reported a failure
    ///
    /// During bring-up this leaves the controller partially configured.
    Interface(I::Error),
    /// Caller pixel data is shorter than the target region
    BufferTooSmall {
        /// Bytes the region needs
        required: usize,
        /// Bytes supplied
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(err) => write!(f, "interface error: {err:?}"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "pixel buffer holds {provided} bytes, region needs {required}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Configuration rejected by [`Builder::build`](crate::Builder::build)
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Brightness must lie within `0.0..=1.0`
    InvalidBrightness(f32),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidBrightness(value) => {
                write!(f, "brightness {value} is outside 0.0..=1.0")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
