//! Night Runner headless entry point
//!
//! Drives the simulation with a simple autopilot, logs audio cues and prints
//! the final snapshot as JSON. Usage: `night-runner [seed] [ticks]`.
//! Set `NIGHT_RUNNER_TUNING` to a JSON file to override game balance.

use std::error::Error;

use night_runner::consts::PLAYER_WIDTH;
use night_runner::sim::{GameStatus, PcgSpawner, SimulationState};
use night_runner::{Intent, Simulation, Tuning, cues_for};

const VIEWPORT: (f32, f32) = (800.0, 400.0);
const DEFAULT_TICKS: u64 = 10_000;
/// Ticks of lead the autopilot gives itself before an obstacle arrives
const LEAD_TICKS: f32 = 5.0;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse()?,
        None => rand::random(),
    };
    let ticks = match args.next() {
        Some(s) => s.parse()?,
        None => DEFAULT_TICKS,
    };

    let tuning = match std::env::var("NIGHT_RUNNER_TUNING") {
        Ok(path) => {
            log::info!("loading tuning from {path}");
            Tuning::from_json(&std::fs::read_to_string(path)?)?
        }
        Err(_) => Tuning::default(),
    };

    log::info!("Night Runner (headless) seed={seed} ticks={ticks}");
    let mut sim = Simulation::new(VIEWPORT.0, VIEWPORT.1, tuning, PcgSpawner::new(seed))?;

    let mut runs = 1u32;
    let mut best = 0u64;
    for tick in 0..ticks {
        if sim.status() == GameStatus::Over {
            best = best.max(sim.current().score);
            runs += 1;
            sim.apply(Intent::JumpOrRestart);
        } else if should_jump(sim.current(), sim.tuning()) {
            sim.apply(Intent::JumpOrRestart);
        }

        sim.advance();
        for cue in cues_for(&sim.snapshot()) {
            log::info!("tick {tick}: cue {cue:?}");
        }
    }
    best = best.max(sim.current().score);

    println!("runs: {runs}, best score: {best}");
    println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    Ok(())
}

/// Jump when the nearest obstacle is a few ticks from the player's front edge
fn should_jump(state: &SimulationState, tuning: &Tuning) -> bool {
    if state.player.is_jumping() {
        return false;
    }
    let Some(obstacle) = state.next_obstacle() else {
        return false;
    };
    let speed = tuning.obstacle_speed(state.world.speed_rate);
    let gap = obstacle.x - (state.player.x + PLAYER_WIDTH);
    gap <= speed * LEAD_TICKS
}
