//! Button edge events and their dispatch

use super::debounce::DebounceGate;
use super::session::{BorderStyle, SessionState};
use crate::traits::{LedDriver, LedError};

/// Which input fired a falling edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Joystick push button: green LED and border style
    Primary,
    /// Auxiliary button: PWM outputs on/off
    Secondary,
}

/// Session change caused by an accepted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Green LED toggled and border style advanced
    GreenToggled {
        led_green_on: bool,
        border_style: BorderStyle,
    },
    /// PWM outputs switched on or off
    PwmToggled { pwm_enabled: bool },
}

/// Edge handler: one debounce gate in front of the session transitions
///
/// Both buttons go through the same gate, so a press on one button within
/// the window of an accepted press on the other is dropped.
pub struct ButtonDispatcher<'a> {
    session: &'a SessionState,
    gate: DebounceGate,
}

impl<'a> ButtonDispatcher<'a> {
    pub fn new(session: &'a SessionState, gate: DebounceGate) -> Self {
        Self { session, gate }
    }

    /// Handle a falling edge on `button` observed at `now_ms`
    ///
    /// Returns `Ok(None)` when the edge is debounced away. A driver error
    /// from the secondary transition is returned after the session has
    /// already been toggled.
    pub fn handle<L: LedDriver>(
        &mut self,
        button: Button,
        now_ms: u32,
        leds: &mut L,
    ) -> Result<Option<Transition>, LedError> {
        if !self.gate.accept(now_ms) {
            return Ok(None);
        }

        let transition = match button {
            Button::Primary => {
                let (led_green_on, border_style) = self.session.on_primary_button();
                Transition::GreenToggled {
                    led_green_on,
                    border_style,
                }
            }
            Button::Secondary => Transition::PwmToggled {
                pwm_enabled: self.session.on_secondary_button(leds)?,
            },
        };

        Ok(Some(transition))
    }

    /// The debounce gate shared by both buttons
    pub fn gate(&self) -> &DebounceGate {
        &self.gate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::LedChannel;

    #[derive(Default)]
    struct CountingLeds {
        enable_calls: usize,
        last_enabled: Option<bool>,
    }

    impl LedDriver for CountingLeds {
        fn set_duty_cycle(&mut self, _channel: LedChannel, _duty: u16) -> Result<(), LedError> {
            Ok(())
        }

        fn set_enabled(&mut self, _channel: LedChannel, enabled: bool) -> Result<(), LedError> {
            self.enable_calls += 1;
            self.last_enabled = Some(enabled);
            Ok(())
        }
    }

    #[test]
    fn test_primary_edge() {
        let session = SessionState::new();
        let mut dispatcher = ButtonDispatcher::new(&session, DebounceGate::armed());
        let mut leds = CountingLeds::default();

        let t = dispatcher.handle(Button::Primary, 1000, &mut leds);
        assert_eq!(
            t,
            Ok(Some(Transition::GreenToggled {
                led_green_on: true,
                border_style: BorderStyle::Inset,
            }))
        );
        assert_eq!(leds.enable_calls, 0);
        assert!(session.led_green_on());
    }

    #[test]
    fn test_secondary_edge() {
        let session = SessionState::new();
        let mut dispatcher = ButtonDispatcher::new(&session, DebounceGate::armed());
        let mut leds = CountingLeds::default();

        let t = dispatcher.handle(Button::Secondary, 1000, &mut leds);
        assert_eq!(t, Ok(Some(Transition::PwmToggled { pwm_enabled: false })));
        assert_eq!(leds.enable_calls, 3);
        assert_eq!(leds.last_enabled, Some(false));
    }

    #[test]
    fn test_bounce_is_ignored() {
        let session = SessionState::new();
        let mut dispatcher = ButtonDispatcher::new(&session, DebounceGate::armed());
        let mut leds = CountingLeds::default();

        dispatcher.handle(Button::Primary, 1000, &mut leds).ok();
        assert_eq!(dispatcher.handle(Button::Primary, 1005, &mut leds), Ok(None));
        assert_eq!(dispatcher.handle(Button::Primary, 1150, &mut leds), Ok(None));
        assert!(session.led_green_on());
        assert_eq!(session.border_style(), BorderStyle::Inset);
    }

    #[test]
    fn test_gate_is_shared_between_buttons() {
        let session = SessionState::new();
        let mut dispatcher = ButtonDispatcher::new(&session, DebounceGate::armed());
        let mut leds = CountingLeds::default();

        dispatcher.handle(Button::Primary, 1000, &mut leds).ok();
        // Secondary within the primary's window is suppressed
        assert_eq!(dispatcher.handle(Button::Secondary, 1100, &mut leds), Ok(None));
        assert!(session.pwm_enabled());
        assert_eq!(leds.enable_calls, 0);

        // After the window it goes through
        assert_eq!(
            dispatcher.handle(Button::Secondary, 1201, &mut leds),
            Ok(Some(Transition::PwmToggled { pwm_enabled: false }))
        );
    }

    #[test]
    fn test_boot_holdoff_gate() {
        let session = SessionState::new();
        let mut dispatcher = ButtonDispatcher::new(&session, DebounceGate::new());
        let mut leds = CountingLeds::default();

        assert_eq!(dispatcher.handle(Button::Primary, 150, &mut leds), Ok(None));
        assert!(dispatcher.handle(Button::Primary, 250, &mut leds).is_ok_and(|t| t.is_some()));
        assert_eq!(dispatcher.gate().last_accepted_ms(), Some(250));
    }
}
