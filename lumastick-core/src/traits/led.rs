//! RGB LED PWM driver trait

/// Errors that can occur with LED output control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// Channel does not exist or is not wired to a PWM output
    InvalidChannel,
}

/// One of the three LED colour channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedChannel {
    Red,
    Green,
    Blue,
}

impl LedChannel {
    /// All channels, in the order they are switched
    pub const ALL: [LedChannel; 3] = [LedChannel::Red, LedChannel::Green, LedChannel::Blue];

    /// Position in `ALL`
    pub const fn index(self) -> usize {
        match self {
            LedChannel::Red => 0,
            LedChannel::Green => 1,
            LedChannel::Blue => 2,
        }
    }
}

/// Per-channel enable flags
///
/// Hardware that drives several channels from one PWM counter keeps the
/// counter running while any of its channels is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelEnables([bool; 3]);

impl ChannelEnables {
    /// Every channel set to `enabled`
    pub const fn all(enabled: bool) -> Self {
        Self([enabled; 3])
    }

    pub fn set(&mut self, channel: LedChannel, enabled: bool) {
        self.0[channel.index()] = enabled;
    }

    pub fn is_enabled(&self, channel: LedChannel) -> bool {
        self.0[channel.index()]
    }

    /// Whether an output shared by `channels` must keep running
    pub fn any_enabled(&self, channels: &[LedChannel]) -> bool {
        channels.iter().any(|&c| self.is_enabled(c))
    }
}

impl TryFrom<u8> for LedChannel {
    type Error = LedError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(LedChannel::Red),
            1 => Ok(LedChannel::Green),
            2 => Ok(LedChannel::Blue),
            _ => Err(LedError::InvalidChannel),
        }
    }
}

/// Trait for the three-channel PWM LED output
///
/// Enabling or disabling a channel starts or stops the PWM hardware
/// itself; it is independent of the duty cycle currently held.
pub trait LedDriver {
    /// Set a channel's duty cycle (0 = off, PWM top = fully on)
    fn set_duty_cycle(&mut self, channel: LedChannel, duty: u16) -> Result<(), LedError>;

    /// Start or stop a channel's PWM output
    fn set_enabled(&mut self, channel: LedChannel, enabled: bool) -> Result<(), LedError>;

    /// Start or stop all channels
    ///
    /// Every channel is attempted even if an earlier one fails; the first
    /// error is returned.
    fn set_all_enabled(&mut self, enabled: bool) -> Result<(), LedError> {
        let mut result = Ok(());
        for channel in LedChannel::ALL {
            let r = self.set_enabled(channel, enabled);
            if result.is_ok() {
                result = r;
            }
        }
        result
    }
}
