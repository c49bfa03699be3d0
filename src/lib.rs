//! Night Runner - a side-scrolling obstacle runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (jump arc, obstacle spawning, collisions, status)
//! - `simulation`: Double-buffered owner of the simulation state
//! - `tuning`: Data-driven game balance
//! - `cues`: Audio cue detection from snapshot pairs
//!
//! Rendering, asset loading, audio playback and raw input capture live outside
//! this crate and talk to it through [`Snapshot`] and [`Intent`].

pub mod cues;
pub mod error;
pub mod sim;
pub mod simulation;
pub mod tuning;

pub use cues::{Cue, cues_for};
pub use error::SimError;
pub use simulation::{Intent, Simulation, Snapshot};
pub use tuning::Tuning;

/// Fixed geometry constants (pixels)
pub mod consts {
    /// Player bounding box
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Player stays at a fixed horizontal position
    pub const PLAYER_X: f32 = PLAYER_WIDTH * 2.0;

    /// Player sprite animation
    pub const PLAYER_RUN_FRAMES: u32 = 12;
    pub const PLAYER_FRAME_STEP: f32 = 0.5;

    /// Obstacle bounding box
    pub const OBSTACLE_WIDTH: f32 = 55.0;
    pub const OBSTACLE_HEIGHT: f32 = 80.0;

    /// Height of the ground strip at the bottom of the viewport
    pub const GROUND_HEIGHT: f32 = 40.0;
    /// Number of parallax ground strips
    pub const GROUND_LAYERS: usize = 3;

    /// Never more than this many obstacles on screen
    pub const MAX_OBSTACLES: usize = 2;
}

/// Viewport size in pixels, fixed for the lifetime of a simulation
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub w: f32,
    pub h: f32,
}

impl Viewport {
    /// Validate and create a viewport
    ///
    /// The height must leave room for the ground strip and a standing player.
    pub fn new(w: f32, h: f32) -> Result<Self, SimError> {
        let min_h = consts::GROUND_HEIGHT + consts::PLAYER_HEIGHT;
        if !w.is_finite() || !h.is_finite() || w <= 0.0 || h < min_h {
            return Err(SimError::InvalidViewport { width: w, height: h });
        }
        Ok(Self { w, h })
    }

    /// Resting Y of the player's top edge
    #[inline]
    pub fn player_ground_y(&self) -> f32 {
        self.h - consts::PLAYER_HEIGHT - consts::GROUND_HEIGHT
    }

    /// Y of a freshly spawned obstacle's top edge
    #[inline]
    pub fn obstacle_ground_y(&self) -> f32 {
        self.h - consts::OBSTACLE_HEIGHT - consts::GROUND_HEIGHT
    }
}
