//! Addressing geometry
//!
//! Pure functions that map logical drawing coordinates to the controller's
//! frame memory. None of them touch the bus.
//!
//! The ST7735 has a 132x162 frame memory; smaller glass is mounted somewhere
//! inside it, so each panel/screen combination needs a fixed offset. Rotation
//! is done by the controller itself through MADCTL, which also decides whether
//! the offset applies to columns or rows.
//!
//! ## Example
//!
//! ```
//! use st7735_tft::geometry::{addressing_offset, resolve_dimensions};
//! use st7735_tft::{PanelVariant, Rotation, ScreenVariant};
//!
//! let dims = resolve_dimensions(ScreenVariant::Screen0_9, Rotation::Landscape);
//! assert_eq!((dims.width, dims.height), (160, 80));
//!
//! let offset = addressing_offset(PanelVariant::Hannstar, ScreenVariant::Screen0_9, Rotation::Landscape);
//! assert_eq!(offset, (1, 26));
//! ```

use crate::command::{MADCTL_BGR, MADCTL_RGB};
use crate::config::{PanelVariant, Rotation, ScreenVariant};

/// MADCTL values per rotation: `[before, after]`
pub const MADCTL_TABLE: [[u8; 2]; 4] = [[0x40, 0xC0], [0x80, 0x00], [0x20, 0x60], [0xE0, 0xA0]];

/// Effective display dimensions after rotation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl Dimensions {
    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Rectangle in logical (rotated) screen coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// X coordinate in pixels
    pub x: u16,
    /// Y coordinate in pixels
    pub y: u16,
    /// Width in pixels
    pub w: u16,
    /// Height in pixels
    pub h: u16,
}

impl Region {
    /// Create a new region
    #[allow(clippy::many_single_char_names)]
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Region covering the whole screen
    pub const fn full(dims: Dimensions) -> Self {
        Self::new(0, 0, dims.width, dims.height)
    }

    /// Number of pixels in the region
    pub fn pixel_count(&self) -> usize {
        self.w as usize * self.h as usize
    }
}

/// Inclusive column/row window in physical frame memory coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// First column
    pub x0: u16,
    /// First row
    pub y0: u16,
    /// Last column
    pub x1: u16,
    /// Last row
    pub y1: u16,
}

impl Window {
    /// CASET parameter bytes
    pub fn column_bytes(&self) -> [u8; 4] {
        let [s_hi, s_lo] = self.x0.to_be_bytes();
        let [e_hi, e_lo] = self.x1.to_be_bytes();
        [s_hi, s_lo, e_hi, e_lo]
    }

    /// RASET parameter bytes
    pub fn row_bytes(&self) -> [u8; 4] {
        let [s_hi, s_lo] = self.y0.to_be_bytes();
        let [e_hi, e_lo] = self.y1.to_be_bytes();
        [s_hi, s_lo, e_hi, e_lo]
    }
}

/// Which MADCTL table column to read
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MadctlColumn {
    /// Column 0
    Before,
    /// Column 1, the value written at bring-up
    After,
}

/// Effective width and height for a screen in the given rotation
pub const fn resolve_dimensions(screen: ScreenVariant, rotation: Rotation) -> Dimensions {
    let (width, height) = (screen.native_width(), screen.native_height());
    if rotation.is_landscape() {
        Dimensions {
            width: height,
            height: width,
        }
    } else {
        Dimensions { width, height }
    }
}

/// Fixed `(dx, dy)` offset of the visible area inside frame memory
pub const fn addressing_offset(
    panel: PanelVariant,
    screen: ScreenVariant,
    rotation: Rotation,
) -> (u16, u16) {
    let portrait = match (screen, panel) {
        (ScreenVariant::Screen0_9, PanelVariant::Hannstar) => (26, 1),
        (ScreenVariant::Screen0_9, PanelVariant::Boe) => (24, 0),
        (ScreenVariant::Screen1_8A, PanelVariant::Boe) => (2, 1),
        _ => (0, 0),
    };
    if rotation.is_landscape() {
        (portrait.1, portrait.0)
    } else {
        portrait
    }
}

/// MADCTL byte for a rotation with the panel's subpixel order bit
pub const fn madctl_value(panel: PanelVariant, rotation: Rotation, column: MadctlColumn) -> u8 {
    let order = match panel {
        PanelVariant::Hannstar => MADCTL_BGR,
        PanelVariant::Boe => MADCTL_RGB,
    };
    let column = match column {
        MadctlColumn::Before => 0,
        MadctlColumn::After => 1,
    };
    MADCTL_TABLE[rotation as usize][column] | order
}

/// Map a logical region to a physical window
///
/// Returns `None` when the region is empty or does not fit entirely inside
/// `dims`; nothing is clamped.
pub fn addressing_window(dims: Dimensions, offset: (u16, u16), region: Region) -> Option<Window> {
    if region.w == 0 || region.h == 0 {
        return None;
    }
    let right = u32::from(region.x) + u32::from(region.w);
    let bottom = u32::from(region.y) + u32::from(region.h);
    if right > u32::from(dims.width) || bottom > u32::from(dims.height) {
        return None;
    }

    let (dx, dy) = offset;
    Some(Window {
        x0: region.x + dx,
        y0: region.y + dy,
        x1: region.x + region.w - 1 + dx,
        y1: region.y + region.h - 1 + dy,
    })
}
