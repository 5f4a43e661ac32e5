//! Time-window debounce gate
//!
//! A single gate is shared by both buttons: an accepted press on one button
//! suppresses a press on the other within the same window.

use crate::config::DEBOUNCE_WINDOW_MS;

/// Suppresses edge events closer than the debounce window to the last
/// accepted one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceGate {
    /// Timestamp (ms since boot) of the last accepted edge
    last_accepted_ms: Option<u32>,
    /// Refractory window in ms
    window_ms: u32,
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::new()
    }
}

impl DebounceGate {
    /// Create a gate that behaves as if an edge was accepted at boot
    ///
    /// Edges at or before `DEBOUNCE_WINDOW_MS` after boot are rejected.
    pub const fn new() -> Self {
        Self {
            last_accepted_ms: Some(0),
            window_ms: DEBOUNCE_WINDOW_MS,
        }
    }

    /// Create a gate with no prior acceptance; the first edge always passes
    pub const fn armed() -> Self {
        Self {
            last_accepted_ms: None,
            window_ms: DEBOUNCE_WINDOW_MS,
        }
    }

    /// Use a different refractory window
    pub const fn with_window(mut self, window_ms: u32) -> Self {
        self.window_ms = window_ms;
        self
    }

    /// Decide whether an edge at `now_ms` is a new press
    ///
    /// Returns true and records `now_ms` iff more than the window has
    /// elapsed since the last accepted edge. The millisecond counter is
    /// allowed to wrap.
    pub fn accept(&mut self, now_ms: u32) -> bool {
        let accepted = match self.last_accepted_ms {
            Some(last) => now_ms.wrapping_sub(last) > self.window_ms,
            None => true,
        };

        if accepted {
            self.last_accepted_ms = Some(now_ms);
        }
        accepted
    }

    /// Timestamp of the last accepted edge
    pub fn last_accepted_ms(&self) -> Option<u32> {
        self.last_accepted_ms
    }
}
