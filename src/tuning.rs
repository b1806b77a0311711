//! Vendor tuning data written during bring-up
//!
//! These byte sequences come from the panel vendors' reference initialisation
//! and must be written unchanged. A wrong value does not fail; it shows up as
//! flicker, washed-out colors or a tinted image.

/// FRMCTR1 parameters: normal mode frame rate
pub const FRAME_RATE_NORMAL: [u8; 3] = [0x01, 0x2C, 0x2D];

/// FRMCTR2 parameters: idle mode frame rate
pub const FRAME_RATE_IDLE: [u8; 3] = [0x01, 0x2C, 0x2D];

/// FRMCTR3 parameters: partial mode frame rate (dot then column inversion)
pub const FRAME_RATE_PARTIAL: [u8; 6] = [0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D];

/// INVCTR parameter: no inversion in any mode
pub const FRAME_INVERSION: [u8; 1] = [0x07];

/// PWCTR1 parameters: -4.6V, auto mode
pub const POWER_CONTROL_1: [u8; 3] = [0xA2, 0x02, 0x84];

/// PWCTR2 parameters: VGH25 = 2.4C, VGSEL = -10, VGH = 3 * AVDD
pub const POWER_CONTROL_2: [u8; 1] = [0xC5];

/// PWCTR3 parameters: small op-amp current, boost frequency
pub const POWER_CONTROL_3: [u8; 2] = [0x0A, 0x00];

/// PWCTR4 parameters: BCLK/2, small and medium-low op-amp current
pub const POWER_CONTROL_4: [u8; 2] = [0x8A, 0x2A];

/// PWCTR5 parameters
pub const POWER_CONTROL_5: [u8; 2] = [0x8A, 0xEE];

/// VMCTR1 parameter: VCOM level
pub const VCOM: [u8; 1] = [0x0E];

/// GMCTRP1 parameters: positive gamma correction curve
pub const GAMMA_POSITIVE: [u8; 16] = [
    0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D, 0x29, 0x25, 0x2B, 0x39, 0x00, 0x01, 0x03, 0x10,
];

/// GMCTRN1 parameters: negative gamma correction curve
pub const GAMMA_NEGATIVE: [u8; 16] = [
    0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D, 0x2E, 0x2E, 0x37, 0x3F, 0x00, 0x00, 0x02, 0x10,
];

/// Delay after each software reset, in milliseconds
pub const RESET_DELAY_MS: u32 = 120;
