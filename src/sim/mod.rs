//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed logical tick per call
//! - Injected RNG only
//! - Obstacles kept in insertion order
//! - No rendering, audio or platform dependencies

pub mod arc;
pub mod collision;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use arc::{JumpArc, JumpSample};
pub use collision::{Aabb, boxes_collide, overlap_area};
pub use rng::{PcgSpawner, SequenceRng, SpawnRng};
pub use spawn::advance_obstacles;
pub use state::{
    Cloud, GameStatus, GroundStrip, JumpPhase, Obstacle, Player, SimulationState, World,
};
pub use tick::{advance, restart, start_jump, toggle_pause};
