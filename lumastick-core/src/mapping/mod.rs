//! Calibration mapping
//!
//! Pure functions turning a raw joystick sample into a clamped cursor
//! position and red/blue LED intensities. Nothing here can fail: every
//! intermediate is clamped or saturated.

pub mod intensity;
pub mod position;

pub use intensity::{map_intensity, Intensity};
pub use position::{map_position, CursorPosition};

/// One raw reading of both joystick axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// Horizontal axis ADC value
    pub x: u16,
    /// Vertical axis ADC value
    pub y: u16,
}

impl RawSample {
    /// Create a sample from both axis readings
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}
