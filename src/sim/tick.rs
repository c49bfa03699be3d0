//! Fixed-step simulation tick
//!
//! Pure transitions: each function reads one state and returns the next one.
//! Real-time pacing belongs to the caller.

use super::arc::JumpArc;
use super::collision::boxes_collide;
use super::rng::SpawnRng;
use super::spawn::advance_obstacles;
use super::state::{Cloud, GameStatus, GroundStrip, JumpPhase, Player, SimulationState, World};
use crate::Viewport;
use crate::tuning::Tuning;

/// Advance the state by one logical tick
///
/// Paused and finished games are returned unchanged.
pub fn advance(state: &SimulationState, tuning: &Tuning, rng: &mut dyn SpawnRng) -> SimulationState {
    if !state.is_playing() {
        return state.clone();
    }

    let viewport = state.viewport;
    let score = state.score + 1;
    let world = advance_world(&state.world, score, tuning);
    let clouds = advance_clouds(&state.clouds, &viewport, tuning);
    let ground = advance_ground(&state.ground, &viewport);
    let player = advance_player(&state.player, &world, &viewport, tuning);
    let obstacles = advance_obstacles(&state.obstacles, world.speed_rate, &viewport, tuning, rng);

    let player_box = player.hitbox();
    let hit = obstacles
        .iter()
        .any(|o| boxes_collide(&player_box, &o.hitbox(), tuning.hitbox_shrink));

    let status = if hit {
        log::info!("game over: score {score}, distance {}", world.scroll_x);
        GameStatus::Over
    } else {
        state.status
    };

    log::trace!(
        "tick score={score} scroll_x={} y={} obstacles={}",
        world.scroll_x,
        player.y,
        obstacles.len()
    );

    SimulationState {
        viewport,
        world,
        player,
        obstacles,
        score,
        status,
        clouds,
        ground,
    }
}

fn advance_world(world: &World, score: u64, tuning: &Tuning) -> World {
    World {
        scroll_x: world.scroll_x + tuning.game_speed,
        speed_rate: (score as f32 / tuning.speed_rate_divisor).round().max(1.0),
    }
}

fn advance_clouds(clouds: &[Cloud], viewport: &Viewport, tuning: &Tuning) -> Vec<Cloud> {
    let drift = tuning.cloud_speed * 0.1;
    clouds
        .iter()
        .map(|c| {
            let x = if c.x < -c.w {
                viewport.w + c.offset_x
            } else {
                c.x - drift
            };
            Cloud { x, ..*c }
        })
        .collect()
}

/// Strip `i` moves `i²` per tick, so deeper strips scroll faster
fn advance_ground(ground: &[GroundStrip], viewport: &Viewport) -> Vec<GroundStrip> {
    ground
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let x = if g.x.abs() >= viewport.w {
                0.0
            } else {
                g.x - (i * i) as f32
            };
            GroundStrip { x }
        })
        .collect()
}

fn advance_player(player: &Player, world: &World, viewport: &Viewport, tuning: &Tuning) -> Player {
    let arc = JumpArc::new(tuning.jump_length, tuning.arc_sharpness);
    let start = player.jump.map(|j| j.start_scroll_x);
    let sample = arc.sample(start, world.scroll_x, viewport.player_ground_y());

    if player.is_jumping() && !sample.jump_active {
        log::debug!("landed at scroll_x={}", world.scroll_x);
    }

    Player {
        x: player.x,
        y: sample.y,
        jump: if sample.jump_active { player.jump } else { None },
        frame: player.next_frame(),
    }
}

/// Play and Pause swap; Over is left alone
pub fn toggle_pause(state: &SimulationState) -> SimulationState {
    let status = match state.status {
        GameStatus::Play => GameStatus::Pause,
        GameStatus::Pause => GameStatus::Play,
        GameStatus::Over => return state.clone(),
    };
    log::info!("{:?} -> {:?}", state.status, status);
    SimulationState {
        status,
        ..state.clone()
    }
}

/// Take off from the current scroll position if grounded and playing
pub fn start_jump(state: &SimulationState) -> SimulationState {
    if !state.is_playing() || state.player.is_jumping() {
        return state.clone();
    }
    log::debug!("jump at scroll_x={}", state.world.scroll_x);
    SimulationState {
        player: Player {
            jump: Some(JumpPhase {
                start_scroll_x: state.world.scroll_x,
            }),
            ..state.player
        },
        ..state.clone()
    }
}

/// Fresh run with the same viewport; only valid once the game is over
pub fn restart(state: &SimulationState) -> SimulationState {
    if state.status != GameStatus::Over {
        return state.clone();
    }
    log::info!("restart after score {}", state.score);
    SimulationState::initial(state.viewport)
}
