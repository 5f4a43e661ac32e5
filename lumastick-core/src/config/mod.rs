//! Configuration types
//!
//! All tunables are compile-time constants. Nothing is read from flash,
//! files or the environment.

pub mod calibration;
pub mod timing;

pub use calibration::*;
pub use timing::*;
