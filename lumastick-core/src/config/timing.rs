//! Loop pacing and debounce timing

/// Frame period of the polling loop in milliseconds (~60 frames/s)
pub const FRAME_PERIOD_MS: u64 = 16;

/// Minimum spacing between two accepted button edges, in milliseconds
///
/// An edge is accepted only when strictly more than this many
/// milliseconds have passed since the previously accepted one.
pub const DEBOUNCE_WINDOW_MS: u32 = 200;
