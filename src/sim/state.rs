//! Simulation state and entity types
//!
//! Every entity is plain data. A tick never edits them in place; it builds the
//! next value from the previous one, so any two states are fully independent.

use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::Viewport;
use crate::consts::*;

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// World scrolling, score counting
    Play,
    /// Frozen until toggled back
    Pause,
    /// Player hit an obstacle; waits for restart
    Over,
}

/// Scrolling world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Distance scrolled since the run started (never decreases within a run)
    pub scroll_x: f32,
    /// Score-derived boost to obstacle speed
    pub speed_rate: f32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            scroll_x: 0.0,
            speed_rate: 1.0,
        }
    }
}

/// An in-progress jump
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpPhase {
    /// World scroll at take-off
    pub start_scroll_x: f32,
}

/// The runner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Present iff airborne
    pub jump: Option<JumpPhase>,
    /// Sprite animation counter (advances in half steps)
    pub frame: f32,
}

impl Player {
    /// Standing on the ground at the fixed run position
    pub fn grounded(viewport: &Viewport) -> Self {
        Self {
            x: PLAYER_X,
            y: viewport.player_ground_y(),
            jump: None,
            frame: 0.0,
        }
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.jump.is_some()
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::from_rect(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Animation frame after one running tick
    pub fn next_frame(&self) -> f32 {
        if self.frame < (PLAYER_RUN_FRAMES - 1) as f32 {
            self.frame + PLAYER_FRAME_STEP
        } else {
            0.0
        }
    }
}

/// An obstacle the player must jump over
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Obstacle {
    /// Fresh obstacle just past the right edge of the viewport
    pub fn spawn(viewport: &Viewport) -> Self {
        Self {
            x: viewport.w + OBSTACLE_WIDTH,
            y: viewport.obstacle_ground_y(),
            w: OBSTACLE_WIDTH,
            h: OBSTACLE_HEIGHT,
        }
    }

    /// Still (partly) on screen
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.x + self.w >= 0.0
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::from_rect(self.x, self.y, self.w, self.h)
    }
}

/// Background cloud sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    /// Sprite variant
    pub kind: u8,
    pub w: f32,
    /// Extra distance past the right edge when re-entering
    pub offset_x: f32,
}

/// Parallax ground strip (only the horizontal offset moves)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GroundStrip {
    pub x: f32,
}

/// Starting cloud layout as (x, y, kind, w)
const INITIAL_CLOUDS: [(f32, f32, u8, f32); 6] = [
    (0.0, 0.0, 1, 900.0),
    (500.0, 220.0, 2, 200.0),
    (800.0, 60.0, 2, 400.0),
    (1280.0, 0.0, 1, 500.0),
    (1700.0, 150.0, 2, 200.0),
    (1500.0, 200.0, 2, 100.0),
];

/// Complete simulation state (plain, serializable, independently clonable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub viewport: Viewport,
    pub world: World,
    pub player: Player,
    /// Oldest first
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    pub status: GameStatus,
    pub clouds: Vec<Cloud>,
    pub ground: Vec<GroundStrip>,
}

impl SimulationState {
    /// State at the start of a run
    pub fn initial(viewport: Viewport) -> Self {
        let clouds = INITIAL_CLOUDS
            .iter()
            .map(|&(x, y, kind, w)| Cloud {
                x,
                y,
                kind,
                w,
                offset_x: 0.0,
            })
            .collect();

        Self {
            viewport,
            world: World::default(),
            player: Player::grounded(&viewport),
            obstacles: Vec::with_capacity(MAX_OBSTACLES),
            score: 0,
            status: GameStatus::Play,
            clouds,
            ground: vec![GroundStrip::default(); GROUND_LAYERS],
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Play
    }

    /// Leftmost obstacle still ahead of the player's back edge
    pub fn next_obstacle(&self) -> Option<&Obstacle> {
        self.obstacles
            .iter()
            .filter(|o| o.x + o.w > self.player.x)
            .min_by(|a, b| a.x.total_cmp(&b.x))
    }
}
