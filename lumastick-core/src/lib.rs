//! Board-agnostic core logic for the joystick demo firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Compile-time calibration and timing constants
//! - Calibration mapping (raw joystick sample to cursor and LED intensity)
//! - Session state, button transitions and the shared debounce gate
//! - Frame composition (border variant plus sprite)
//! - Hardware abstraction traits (sample source, display, LED driver)
//!
//! Tests run on the host with `cargo test -p lumastick-core`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod frame;
pub mod mapping;
pub mod render;
pub mod state;
pub mod traits;
