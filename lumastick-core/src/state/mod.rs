//! Session state and button handling
//!
//! The session is three independent fields rather than one enumerated
//! state: the green LED flag, the border style and the PWM enable flag.
//! Button edges reach it only through the shared debounce gate.

pub mod debounce;
pub mod events;
pub mod session;

pub use debounce::DebounceGate;
pub use events::{Button, ButtonDispatcher, Transition};
pub use session::{BorderStyle, SessionSnapshot, SessionState};
