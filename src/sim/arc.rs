//! Parabolic jump arc
//!
//! A jump is parameterized by world distance travelled since take-off, not by
//! time. With `d` in `[0, length]` the rise is
//!
//! ```text
//! offset(d) = round(d * (length - d) / (length * k))
//! ```
//!
//! which is zero at both ends and peaks at `d = length / 2` with height
//! `length / (4k)`.

use serde::{Deserialize, Serialize};

/// Jump arc parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpArc {
    /// Horizontal world distance the jump spans
    pub length: f32,
    /// Arc sharpness `k` (smaller is higher)
    pub sharpness: f32,
}

/// Vertical placement produced by [`JumpArc::sample`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpSample {
    pub y: f32,
    pub jump_active: bool,
}

impl JumpArc {
    pub fn new(length: f32, sharpness: f32) -> Self {
        Self { length, sharpness }
    }

    /// Rise above ground after `d` world units, or `None` once the jump is over
    pub fn offset(&self, d: f32) -> Option<f32> {
        if d > self.length {
            return None;
        }
        // Written as d * (L - d) so offset(d) and offset(L - d) round identically
        let rise = d * (self.length - d) / (self.length * self.sharpness);
        Some(rise.round())
    }

    /// Peak rise of the arc
    pub fn apex(&self) -> f32 {
        self.offset(self.length / 2.0).unwrap_or(0.0)
    }

    /// Place the player for the current scroll position
    ///
    /// `start_scroll_x` is `None` when the player is not jumping.
    pub fn sample(&self, start_scroll_x: Option<f32>, scroll_x: f32, ground_y: f32) -> JumpSample {
        let landed = JumpSample {
            y: ground_y,
            jump_active: false,
        };
        let Some(start) = start_scroll_x else {
            return landed;
        };
        match self.offset(scroll_x - start) {
            Some(rise) => JumpSample {
                y: ground_y - rise,
                jump_active: true,
            },
            None => landed,
        }
    }
}
