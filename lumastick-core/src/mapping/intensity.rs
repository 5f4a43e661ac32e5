//! Raw sample to LED intensity
//!
//! Red follows the X displacement, blue the Y displacement. Green is a
//! plain on/off output driven by the session state, not by the stick.

use super::RawSample;
use crate::config::CalibrationConstants;

/// Duty cycles for the stick-driven LED channels, each in `[0, max_duty]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Intensity {
    pub red: u16,
    pub blue: u16,
}

/// Map a raw sample to red/blue duty cycles
pub fn map_intensity(raw: RawSample, constants: &CalibrationConstants) -> Intensity {
    Intensity {
        red: axis_intensity(raw.x, constants.center_x, constants),
        blue: axis_intensity(raw.y, constants.center_y, constants),
    }
}

/// Deadzone-filtered, gained and saturated displacement of one axis
fn axis_intensity(raw: u16, center: u16, constants: &CalibrationConstants) -> u16 {
    let magnitude = u32::from(raw.abs_diff(center)).saturating_sub(u32::from(constants.deadzone));
    let scaled = magnitude.saturating_mul(u32::from(constants.intensity_gain));

    // Bounded by max_duty, so the narrowing cannot truncate
    scaled.min(u32::from(constants.max_duty)) as u16
}
