//! Joystick ADC sampling

use embassy_rp::adc::{Adc, Blocking, Channel};
use lumastick_core::mapping::RawSample;
use lumastick_core::traits::{SampleSource, SensorError};

/// Two-axis analog stick on ADC0/ADC1
pub struct JoystickAdc {
    adc: Adc<'static, Blocking>,
    x: Channel<'static>,
    y: Channel<'static>,
}

impl JoystickAdc {
    pub fn new(adc: Adc<'static, Blocking>, x: Channel<'static>, y: Channel<'static>) -> Self {
        Self { adc, x, y }
    }
}

impl SampleSource for JoystickAdc {
    fn read(&mut self) -> Result<RawSample, SensorError> {
        let x = self
            .adc
            .blocking_read(&mut self.x)
            .map_err(|_| SensorError::SensorUnavailable)?;
        let y = self
            .adc
            .blocking_read(&mut self.y)
            .map_err(|_| SensorError::SensorUnavailable)?;

        Ok(RawSample::new(x, y))
    }
}
