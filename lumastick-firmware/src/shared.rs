//! State shared between tasks

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use lumastick_core::state::SessionState;
use static_cell::StaticCell;

use crate::leds::RgbPwm;

/// Session flags, written by the button task and read once per frame
pub static SESSION: SessionState = SessionState::new();

/// LED driver guarded for the frame and button tasks
pub type SharedLeds = Mutex<CriticalSectionRawMutex, RgbPwm>;

/// Backing storage for the shared LED driver
pub static LEDS: StaticCell<SharedLeds> = StaticCell::new();
