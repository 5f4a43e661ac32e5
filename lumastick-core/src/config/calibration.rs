//! Joystick calibration constants
//!
//! Fixed center, deadzone and scale values for the analog stick, plus the
//! display geometry the cursor is mapped onto. Set once at build time and
//! never mutated.

/// Largest raw value a 12-bit ADC conversion can return
pub const SAMPLE_MAX: u16 = 4095;

/// Calibration and geometry constants for the mapping pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationConstants {
    /// Raw X reading with the stick at rest
    pub center_x: u16,
    /// Raw Y reading with the stick at rest
    pub center_y: u16,
    /// Raw displacement treated as zero for LED intensity
    pub deadzone: u16,
    /// Raw units per screen pixel (integer divisor)
    pub scale_factor: i32,
    /// Multiplier from raw displacement (after deadzone) to duty cycle
    pub intensity_gain: u16,
    /// Largest duty cycle value (PWM wrap)
    pub max_duty: u16,
    /// Display width in pixels
    pub display_width: i32,
    /// Display height in pixels
    pub display_height: i32,
    /// Edge length of the square sprite in pixels
    pub sprite_size: i32,
}

impl Default for CalibrationConstants {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CalibrationConstants {
    /// Values measured on the reference joystick module and 128x64 OLED
    pub const DEFAULT: Self = Self {
        center_x: 2065,
        center_y: 2050,
        deadzone: 100,
        scale_factor: 41,
        intensity_gain: 16,
        max_duty: 4095,
        display_width: 128,
        display_height: 64,
        sprite_size: 8,
    };

    /// Largest valid cursor coordinate on each axis
    ///
    /// A display smaller than the sprite yields 0.
    pub const fn max_cursor(&self) -> (i32, i32) {
        let x = self.display_width - self.sprite_size;
        let y = self.display_height - self.sprite_size;
        (if x < 0 { 0 } else { x }, if y < 0 { 0 } else { y })
    }

    /// Cursor position with the stick at rest
    pub const fn screen_center(&self) -> (i32, i32) {
        let (max_x, max_y) = self.max_cursor();
        (max_x / 2, max_y / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let c = CalibrationConstants::default();
        assert_eq!(c.max_cursor(), (120, 56));
        assert_eq!(c.screen_center(), (60, 28));
    }

    #[test]
    fn test_display_smaller_than_sprite() {
        let c = CalibrationConstants {
            display_width: 4,
            display_height: 4,
            ..CalibrationConstants::DEFAULT
        };
        assert_eq!(c.max_cursor(), (0, 0));
        assert_eq!(c.screen_center(), (0, 0));
    }
}
