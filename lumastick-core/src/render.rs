//! Frame composition
//!
//! Turns the border style and cursor into the rectangles drawn each frame:
//! one or two border outlines followed by the filled sprite.

use heapless::Vec;

use crate::config::CalibrationConstants;
use crate::mapping::CursorPosition;
use crate::state::BorderStyle;
use crate::traits::{DisplayError, FrameDisplay};

/// Most rectangles a frame can contain (nested border + sprite)
pub const MAX_FRAME_RECTS: usize = 3;

/// Inset of the single inner frame
const INSET_MARGIN: i32 = 2;

/// Inset of the inner frame of the nested border
const NESTED_MARGIN: i32 = 4;

/// One rectangle to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub filled: bool,
}

impl Rect {
    /// Outline inset by `margin` pixels on every side of a `width` x `height` area
    fn outline(width: i32, height: i32, margin: i32) -> Self {
        Self {
            x: margin,
            y: margin,
            width: (width - 2 * margin).max(0) as u32,
            height: (height - 2 * margin).max(0) as u32,
            filled: false,
        }
    }
}

/// Ordered draw list for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePlan {
    rects: Vec<Rect, MAX_FRAME_RECTS>,
}

impl FramePlan {
    /// Build the draw list for a border style and sprite position
    pub fn build(
        constants: &CalibrationConstants,
        border: BorderStyle,
        cursor: CursorPosition,
    ) -> Self {
        let (w, h) = (constants.display_width, constants.display_height);
        let mut rects = Vec::new();

        // Capacity covers the largest case, so pushes cannot fail
        match border {
            BorderStyle::Outer => {
                let _ = rects.push(Rect::outline(w, h, 0));
            }
            BorderStyle::Inset => {
                let _ = rects.push(Rect::outline(w, h, INSET_MARGIN));
            }
            BorderStyle::Nested => {
                let _ = rects.push(Rect::outline(w, h, 0));
                let _ = rects.push(Rect::outline(w, h, NESTED_MARGIN));
            }
        }

        let size = constants.sprite_size.max(0) as u32;
        let _ = rects.push(Rect {
            x: cursor.x,
            y: cursor.y,
            width: size,
            height: size,
            filled: true,
        });

        Self { rects }
    }

    /// Rectangles in draw order
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }
}

/// Clear, draw the plan and flush
pub fn render_frame<D: FrameDisplay>(display: &mut D, plan: &FramePlan) -> Result<(), DisplayError> {
    display.clear();
    for r in plan.rects() {
        display.draw_rect(r.x, r.y, r.width, r.height, r.filled);
    }
    display.flush()
}
