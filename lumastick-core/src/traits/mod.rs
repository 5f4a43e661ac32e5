//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod display;
pub mod led;
pub mod sensor;

pub use display::{DisplayError, FrameDisplay};
pub use led::{ChannelEnables, LedChannel, LedDriver, LedError};
pub use sensor::{SampleSource, SensorError};
