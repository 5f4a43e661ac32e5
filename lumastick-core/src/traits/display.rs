//! Monochrome framebuffer display trait

/// Errors that can occur while drawing or flushing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the panel failed
    DisplayBusError,
    /// Panel was flushed before it was initialized
    NotInitialized,
}

/// Buffered monochrome display
///
/// Drawing only touches the in-memory framebuffer; [`FrameDisplay::flush`]
/// sends the whole buffer to the panel.
pub trait FrameDisplay {
    /// Clear the framebuffer
    fn clear(&mut self);

    /// Draw an axis-aligned rectangle, outlined or filled
    ///
    /// Parts outside the display are clipped.
    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, filled: bool);

    /// Send the framebuffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}
