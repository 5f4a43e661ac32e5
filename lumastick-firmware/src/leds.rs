//! RGB LED PWM output
//!
//! Red and blue share PWM slice 6 (A and B outputs), green sits on slice 5
//! output B. A slice keeps counting while any of its channels is enabled.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use lumastick_core::traits::{ChannelEnables, LedChannel, LedDriver, LedError};

use crate::board::PWM_TOP;

/// Channels sharing PWM slice 6
const SLICE6_CHANNELS: [LedChannel; 2] = [LedChannel::Red, LedChannel::Blue];

/// RGB LED driven by two PWM slices
pub struct RgbPwm {
    red_blue: Pwm<'static>,
    red_blue_config: PwmConfig,
    green: Pwm<'static>,
    green_config: PwmConfig,
    enabled: ChannelEnables,
}

impl RgbPwm {
    /// Slice configuration used at boot: wrap at `PWM_TOP`, 0% duty, running
    pub fn slice_config() -> PwmConfig {
        let mut config = PwmConfig::default();
        config.top = PWM_TOP;
        config.compare_a = 0;
        config.compare_b = 0;
        config.enable = true;
        config
    }

    /// Take ownership of both slices, already configured with `slice_config`
    pub fn new(red_blue: Pwm<'static>, green: Pwm<'static>) -> Self {
        Self {
            red_blue,
            red_blue_config: Self::slice_config(),
            green,
            green_config: Self::slice_config(),
            enabled: ChannelEnables::all(true),
        }
    }

    fn apply(&mut self, channel: LedChannel) {
        match channel {
            LedChannel::Red | LedChannel::Blue => {
                self.red_blue_config.enable = self.enabled.any_enabled(&SLICE6_CHANNELS);
                self.red_blue.set_config(&self.red_blue_config);
            }
            LedChannel::Green => {
                self.green_config.enable = self.enabled.is_enabled(LedChannel::Green);
                self.green.set_config(&self.green_config);
            }
        }
    }
}

impl LedDriver for RgbPwm {
    fn set_duty_cycle(&mut self, channel: LedChannel, duty: u16) -> Result<(), LedError> {
        let duty = duty.min(PWM_TOP);
        match channel {
            LedChannel::Red => self.red_blue_config.compare_a = duty,
            LedChannel::Blue => self.red_blue_config.compare_b = duty,
            LedChannel::Green => self.green_config.compare_b = duty,
        }
        self.apply(channel);
        Ok(())
    }

    fn set_enabled(&mut self, channel: LedChannel, enabled: bool) -> Result<(), LedError> {
        self.enabled.set(channel, enabled);
        self.apply(channel);
        Ok(())
    }
}
