//! Joystick sample source trait

use crate::mapping::RawSample;

/// Errors that can occur while sampling the joystick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion failed or the channel could not be selected
    SensorUnavailable,
}

/// Source of raw two-axis joystick samples
///
/// Implementations select each analog channel in turn and convert it;
/// no simultaneous sample-and-hold is assumed.
pub trait SampleSource {
    /// Read both axes
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read(&mut self) -> Result<RawSample, SensorError>;
}
