//! Lumastick - joystick cursor and RGB LED demo
//!
//! Main firmware binary for RP2040-based boards. An analog joystick moves a
//! square sprite across an SSD1306 OLED and sets the red/blue LED brightness;
//! two buttons toggle the green LED, cycle the border style and switch PWM
//! output on and off.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::pwm::Pwm;
use embassy_sync::mutex::Mutex;
use {defmt_rtt as _, panic_probe as _};

use lumastick_core::traits::FrameDisplay;
use lumastick_drivers::display::Ssd1306;

mod board;
mod leds;
mod sensor;
mod shared;
mod tasks;

use crate::leds::RgbPwm;
use crate::sensor::JoystickAdc;
use crate::shared::LEDS;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lumastick firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup I2C1 and the OLED
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = board::I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);

    let mut display = Ssd1306::with_address(i2c, board::OLED_ADDR);
    match display.init() {
        Ok(()) => {
            display.clear();
            if let Err(e) = display.flush() {
                warn!("Initial OLED flush failed: {:?}", e);
            }
            info!(
                "OLED initialized (SDA=GPIO{}, SCL=GPIO{}, addr={:#x})",
                board::OLED_SDA_GPIO,
                board::OLED_SCL_GPIO,
                board::OLED_ADDR
            );
        }
        Err(e) => {
            // Frames still run; each flush reports the missing display
            error!("Failed to initialize OLED: {:?}", e);
        }
    }

    // Setup ADC for the joystick axes
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let x = Channel::new_pin(p.PIN_26, Pull::None);
    let y = Channel::new_pin(p.PIN_27, Pull::None);
    let sensor = JoystickAdc::new(adc, x, y);
    info!(
        "Joystick ADC initialized (X=GPIO{}, Y=GPIO{})",
        board::JOYSTICK_X_GPIO,
        board::JOYSTICK_Y_GPIO
    );

    // Setup PWM for the RGB LED, all channels running at 0% duty
    let red_blue = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, RgbPwm::slice_config());
    let green = Pwm::new_output_b(p.PWM_SLICE5, p.PIN_11, RgbPwm::slice_config());
    let leds = LEDS.init(Mutex::new(RgbPwm::new(red_blue, green)));
    info!(
        "LED PWM initialized (R=GPIO{}, G=GPIO{}, B=GPIO{}, top={})",
        board::LED_RED_GPIO,
        board::LED_GREEN_GPIO,
        board::LED_BLUE_GPIO,
        board::PWM_TOP
    );

    // Setup buttons (active low)
    let primary = Input::new(p.PIN_22, Pull::Up);
    let secondary = Input::new(p.PIN_5, Pull::Up);
    info!(
        "Buttons initialized (primary=GPIO{}, secondary=GPIO{})",
        board::PRIMARY_BUTTON_GPIO,
        board::SECONDARY_BUTTON_GPIO
    );

    // Spawn tasks
    if spawner.spawn(tasks::button_task(primary, secondary, leds)).is_err() {
        error!("Failed to spawn button task");
    }
    if spawner.spawn(tasks::frame_task(sensor, display, leds)).is_err() {
        error!("Failed to spawn frame task");
    }

    info!("All tasks spawned");
}
