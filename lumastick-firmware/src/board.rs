//! Board wiring
//!
//! Pin assignments for the joystick demo board. The peripherals themselves
//! are claimed by type in `main`; these values document the wiring and feed
//! the startup log.
//!
//! | Function          | GPIO | Peripheral      |
//! |-------------------|------|-----------------|
//! | Joystick X        | 26   | ADC0            |
//! | Joystick Y        | 27   | ADC1            |
//! | Primary button    | 22   | input, pull-up  |
//! | Secondary button  | 5    | input, pull-up  |
//! | LED red           | 12   | PWM slice 6 A   |
//! | LED green         | 11   | PWM slice 5 B   |
//! | LED blue          | 13   | PWM slice 6 B   |
//! | OLED SDA          | 14   | I2C1            |
//! | OLED SCL          | 15   | I2C1            |

pub const JOYSTICK_X_GPIO: u8 = 26;
pub const JOYSTICK_Y_GPIO: u8 = 27;

pub const PRIMARY_BUTTON_GPIO: u8 = 22;
pub const SECONDARY_BUTTON_GPIO: u8 = 5;

pub const LED_RED_GPIO: u8 = 12;
pub const LED_GREEN_GPIO: u8 = 11;
pub const LED_BLUE_GPIO: u8 = 13;

pub const OLED_SDA_GPIO: u8 = 14;
pub const OLED_SCL_GPIO: u8 = 15;

/// OLED bus clock (fast mode)
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// SSD1306 7-bit address
pub const OLED_ADDR: u8 = 0x3C;

/// PWM wrap value, matches the 12-bit duty range
pub const PWM_TOP: u16 = 4095;
