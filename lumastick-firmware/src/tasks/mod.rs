//! Embassy async tasks
//!
//! The frame task owns the sensor and display; the button task owns both
//! button inputs. They share the session flags and the LED driver.

pub mod buttons;
pub mod frame;

pub use buttons::button_task;
pub use frame::frame_task;
