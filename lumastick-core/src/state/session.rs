//! Shared session state
//!
//! Written from the button edge context and read every frame by the
//! render loop. Each field is its own atomic word and no invariant spans
//! two fields, so a reader may observe any interleaving of completed
//! per-field stores without seeing a torn value.

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

use crate::traits::{LedDriver, LedError};

/// Number of border variants the primary button cycles through
pub const BORDER_STYLE_COUNT: u8 = 3;

/// Display border variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderStyle {
    /// Single frame on the display edge
    Outer,
    /// Single frame inset by 2 pixels
    Inset,
    /// Edge frame plus a second frame inset by 4 pixels
    Nested,
}

impl BorderStyle {
    /// Border style for a style index (taken mod 3)
    pub const fn from_index(index: u8) -> Self {
        match index % BORDER_STYLE_COUNT {
            0 => BorderStyle::Outer,
            1 => BorderStyle::Inset,
            _ => BorderStyle::Nested,
        }
    }

    /// Style index in `0..3`
    pub const fn index(self) -> u8 {
        match self {
            BorderStyle::Outer => 0,
            BorderStyle::Inset => 1,
            BorderStyle::Nested => 2,
        }
    }

    /// The style the primary button advances to
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Point-in-time copy of the session, taken once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionSnapshot {
    pub led_green_on: bool,
    pub border_style: BorderStyle,
    pub pwm_enabled: bool,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        SessionState::new().snapshot()
    }
}

/// Mutable session record shared between the edge handler and the loop
///
/// Only the two transition methods write to it, and only one execution
/// context (the button handler) calls them.
#[derive(Debug)]
pub struct SessionState {
    led_green_on: AtomicBool,
    /// Border style index, kept reduced mod 3
    border_style: AtomicU8,
    pwm_enabled: AtomicBool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Boot state: green off, outer border, PWM enabled
    pub const fn new() -> Self {
        Self {
            led_green_on: AtomicBool::new(false),
            border_style: AtomicU8::new(0),
            pwm_enabled: AtomicBool::new(true),
        }
    }

    /// Read all three fields
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            led_green_on: self.led_green_on(),
            border_style: self.border_style(),
            pwm_enabled: self.pwm_enabled(),
        }
    }

    pub fn led_green_on(&self) -> bool {
        self.led_green_on.load(Ordering::Acquire)
    }

    pub fn border_style(&self) -> BorderStyle {
        BorderStyle::from_index(self.border_style.load(Ordering::Acquire))
    }

    pub fn pwm_enabled(&self) -> bool {
        self.pwm_enabled.load(Ordering::Acquire)
    }

    /// Primary button: toggle the green LED and advance the border style
    ///
    /// Returns the new green flag and border style.
    pub fn on_primary_button(&self) -> (bool, BorderStyle) {
        let green = !self.led_green_on();
        self.led_green_on.store(green, Ordering::Release);

        let style = self.border_style().next();
        self.border_style.store(style.index(), Ordering::Release);

        (green, style)
    }

    /// Secondary button: toggle PWM output and switch all three channels
    ///
    /// The flag is flipped before the driver is told, so a failing driver
    /// leaves the session toggled. Every channel is attempted; the first
    /// error is returned.
    pub fn on_secondary_button<L: LedDriver>(&self, leds: &mut L) -> Result<bool, LedError> {
        let enabled = !self.pwm_enabled();
        self.pwm_enabled.store(enabled, Ordering::Release);

        leds.set_all_enabled(enabled).map(|()| enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::LedChannel;

    /// Records enable calls; optionally fails on one channel
    #[derive(Default)]
    struct EnableLog {
        calls: Vec<(LedChannel, bool)>,
        fail_on: Option<LedChannel>,
    }

    impl LedDriver for EnableLog {
        fn set_duty_cycle(&mut self, _channel: LedChannel, _duty: u16) -> Result<(), LedError> {
            Ok(())
        }

        fn set_enabled(&mut self, channel: LedChannel, enabled: bool) -> Result<(), LedError> {
            self.calls.push((channel, enabled));
            if self.fail_on == Some(channel) {
                Err(LedError::InvalidChannel)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_boot_state() {
        let s = SessionState::new().snapshot();
        assert!(!s.led_green_on);
        assert_eq!(s.border_style, BorderStyle::Outer);
        assert!(s.pwm_enabled);
    }

    #[test]
    fn test_border_cycle() {
        assert_eq!(BorderStyle::Outer.next(), BorderStyle::Inset);
        assert_eq!(BorderStyle::Inset.next(), BorderStyle::Nested);
        assert_eq!(BorderStyle::Nested.next(), BorderStyle::Outer);
        assert_eq!(BorderStyle::from_index(255), BorderStyle::Outer);
    }

    #[test]
    fn test_primary_twice() {
        let state = SessionState::new();
        let before = state.snapshot();

        assert_eq!(state.on_primary_button(), (true, BorderStyle::Inset));
        assert_eq!(state.on_primary_button(), (false, BorderStyle::Nested));

        let after = state.snapshot();
        assert_eq!(after.led_green_on, before.led_green_on);
        assert_eq!(after.border_style, BorderStyle::Nested);
        assert_eq!(after.pwm_enabled, before.pwm_enabled);
    }

    #[test]
    fn test_border_never_leaves_cycle() {
        let state = SessionState::new();
        for i in 1..=1000u32 {
            let (_, style) = state.on_primary_button();
            assert_eq!(style.index() as u32, i % 3);
        }
    }

    #[test]
    fn test_secondary_toggles_all_outputs() {
        let state = SessionState::new();
        let mut leds = EnableLog::default();

        assert_eq!(state.on_secondary_button(&mut leds), Ok(false));
        assert!(!state.pwm_enabled());
        assert_eq!(
            leds.calls,
            [
                (LedChannel::Red, false),
                (LedChannel::Green, false),
                (LedChannel::Blue, false)
            ]
        );

        leds.calls.clear();
        assert_eq!(state.on_secondary_button(&mut leds), Ok(true));
        assert!(leds.calls.iter().all(|&(_, on)| on));
        assert_eq!(leds.calls.len(), 3);
    }

    #[test]
    fn test_secondary_does_not_touch_other_fields() {
        let state = SessionState::new();
        state.on_primary_button();
        let before = state.snapshot();

        state.on_secondary_button(&mut EnableLog::default()).ok();
        let after = state.snapshot();
        assert_eq!(after.led_green_on, before.led_green_on);
        assert_eq!(after.border_style, before.border_style);
    }

    #[test]
    fn test_secondary_failure_keeps_toggle() {
        let state = SessionState::new();
        let mut leds = EnableLog {
            fail_on: Some(LedChannel::Green),
            ..Default::default()
        };

        assert_eq!(
            state.on_secondary_button(&mut leds),
            Err(LedError::InvalidChannel)
        );
        assert!(!state.pwm_enabled());
        // Blue is still switched after green failed
        assert_eq!(leds.calls.len(), 3);
    }
}
