//! Raw sample to cursor position
//!
//! The stick's X axis is mounted mirrored relative to the display, so a
//! larger raw X moves the cursor left. Y maps directly.

use super::RawSample;
use crate::config::CalibrationConstants;

/// Top-left corner of the sprite in display pixels
///
/// Always within `[0, width - sprite] x [0, height - sprite]` when produced
/// by [`map_position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorPosition {
    pub x: i32,
    pub y: i32,
}

impl CursorPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Map a raw sample onto the display
///
/// `screen = center - delta / scale` for X and `center + delta / scale` for
/// Y, using truncating integer division, then clamped to the display.
pub fn map_position(raw: RawSample, constants: &CalibrationConstants) -> CursorPosition {
    let delta_x = i32::from(raw.x) - i32::from(constants.center_x);
    let delta_y = i32::from(raw.y) - i32::from(constants.center_y);

    let (center_x, center_y) = constants.screen_center();
    let x = center_x - scale(delta_x, constants.scale_factor);
    let y = center_y + scale(delta_y, constants.scale_factor);

    let (max_x, max_y) = constants.max_cursor();
    CursorPosition {
        x: x.clamp(0, max_x),
        y: y.clamp(0, max_y),
    }
}

/// Truncating division; a zero divisor means no movement
fn scale(delta: i32, scale_factor: i32) -> i32 {
    delta.checked_div(scale_factor).unwrap_or(0)
}
