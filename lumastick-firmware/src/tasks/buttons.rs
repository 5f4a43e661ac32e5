//! Button task
//!
//! Waits for a falling edge on either button and feeds it through the
//! shared debounce gate. Accepted presses update the session flags; the
//! secondary button also switches the PWM outputs.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use lumastick_core::state::{Button, ButtonDispatcher, DebounceGate, Transition};

use crate::shared::{SharedLeds, SESSION};

/// Button task - debounced edge handling for both buttons
#[embassy_executor::task]
pub async fn button_task(
    mut primary: Input<'static>,
    mut secondary: Input<'static>,
    leds: &'static SharedLeds,
) {
    info!("Button task started");

    let mut dispatcher = ButtonDispatcher::new(&SESSION, DebounceGate::new());

    loop {
        let button = match select(
            primary.wait_for_falling_edge(),
            secondary.wait_for_falling_edge(),
        )
        .await
        {
            Either::First(()) => Button::Primary,
            Either::Second(()) => Button::Secondary,
        };

        // Millisecond clock wraps after ~49 days; the gate compares with wrapping math
        let now_ms = Instant::now().as_millis() as u32;

        let result = {
            let mut leds = leds.lock().await;
            dispatcher.handle(button, now_ms, &mut *leds)
        };

        match result {
            Ok(Some(Transition::GreenToggled {
                led_green_on,
                border_style,
            })) => {
                debug!(
                    "Primary press: green={} border={:?}",
                    led_green_on, border_style
                );
            }
            Ok(Some(Transition::PwmToggled { pwm_enabled })) => {
                debug!("Secondary press: pwm_enabled={}", pwm_enabled);
            }
            Ok(None) => {
                trace!("{:?} edge debounced at {} ms", button, now_ms);
            }
            Err(e) => {
                warn!("Failed to switch PWM outputs: {:?}", e);
            }
        }
    }
}
