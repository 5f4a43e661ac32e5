//! Frame task
//!
//! Samples the joystick every frame period, drives the LEDs and redraws the
//! OLED. A failed frame is logged and skipped; the next tick retries.

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::{Duration, Ticker};

use lumastick_core::config::{CalibrationConstants, FRAME_PERIOD_MS};
use lumastick_core::frame::{run_frame, Frame, FrameError};
use lumastick_drivers::display::Ssd1306;

use crate::sensor::JoystickAdc;
use crate::shared::{SharedLeds, SESSION};

/// OLED on the blocking I2C1 bus
pub type OledDisplay = Ssd1306<I2c<'static, I2C1, Blocking>>;

/// Frame task - sample, map, drive LEDs, render
#[embassy_executor::task]
pub async fn frame_task(
    mut sensor: JoystickAdc,
    mut display: OledDisplay,
    leds: &'static SharedLeds,
) {
    info!("Frame task started ({} ms period)", FRAME_PERIOD_MS);

    let constants = CalibrationConstants::DEFAULT;
    let mut ticker = Ticker::every(Duration::from_millis(FRAME_PERIOD_MS));
    let mut failing = false;

    loop {
        match step(&mut sensor, &mut display, leds, &constants).await {
            Ok(frame) => {
                if failing {
                    info!("Frame pipeline recovered");
                    failing = false;
                }
                trace!(
                    "raw=({}, {}) cursor=({}, {}) red={} blue={}",
                    frame.raw.x,
                    frame.raw.y,
                    frame.cursor.x,
                    frame.cursor.y,
                    frame.intensity.red,
                    frame.intensity.blue
                );
            }
            Err(e) => {
                // Only report the first failure of a run
                if !failing {
                    warn!("Frame skipped: {:?}", e);
                    failing = true;
                }
            }
        }

        ticker.next().await;
    }
}

async fn step(
    sensor: &mut JoystickAdc,
    display: &mut OledDisplay,
    leds: &'static SharedLeds,
    constants: &CalibrationConstants,
) -> Result<Frame, FrameError> {
    let mut leds = leds.lock().await;
    run_frame(sensor, display, &mut *leds, &SESSION, constants)
}
