//! Double-buffered simulation owner
//!
//! Holds the latest state plus the state as it was before the last tick, and
//! the RNG that feeds spawn decisions. Collaborators read [`Snapshot`]s and
//! send [`Intent`]s; nothing else touches the state.

use serde::{Deserialize, Serialize};

use crate::Viewport;
use crate::error::SimError;
use crate::sim::{self, GameStatus, PcgSpawner, SimulationState, SpawnRng};
use crate::tuning::Tuning;

/// Player intents delivered by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    TogglePause,
    /// Restart when the game is over, otherwise jump
    JumpOrRestart,
}

/// State before and after the most recent tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub current: SimulationState,
    pub previous: SimulationState,
}

impl Snapshot {
    /// Status differs between the two buffers
    ///
    /// Stays true for every frame of a pause, since pausing freezes
    /// `previous` at the last Play tick. Renderers that only want to repaint
    /// on the transition itself should track the status they last drew.
    pub fn status_changed(&self) -> bool {
        self.current.status != self.previous.status
    }

    /// True when `status` was reached by the most recent transition
    pub fn entered(&self, status: GameStatus) -> bool {
        self.current.status == status && self.previous.status != status
    }
}

/// A running game
#[derive(Debug, Clone)]
pub struct Simulation<R: SpawnRng = PcgSpawner> {
    tuning: Tuning,
    rng: R,
    current: SimulationState,
    previous: SimulationState,
}

impl Simulation<PcgSpawner> {
    /// Default tuning with a seeded PCG spawner
    pub fn seeded(width: f32, height: f32, seed: u64) -> Result<Self, SimError> {
        Self::new(width, height, Tuning::default(), PcgSpawner::new(seed))
    }
}

impl<R: SpawnRng> Simulation<R> {
    /// Validate the viewport and tuning, then start in `Play`
    pub fn new(width: f32, height: f32, tuning: Tuning, rng: R) -> Result<Self, SimError> {
        let viewport = Viewport::new(width, height)?;
        tuning.validate()?;
        let current = SimulationState::initial(viewport);
        log::info!("new simulation {}x{}", viewport.w, viewport.h);
        Ok(Self {
            tuning,
            rng,
            previous: current.clone(),
            current,
        })
    }

    /// Run one tick
    ///
    /// While paused both buffers stay frozen, so `previous.status` remains
    /// `Play` for the whole pause and [`Snapshot::status_changed`] keeps
    /// reporting true. Once over, the state stops changing and `previous`
    /// catches up to it, so the Over transition is reported exactly once.
    pub fn advance(&mut self) -> &SimulationState {
        match self.current.status {
            GameStatus::Play => {
                let next = sim::advance(&self.current, &self.tuning, &mut self.rng);
                self.previous = std::mem::replace(&mut self.current, next);
            }
            GameStatus::Over => self.previous.clone_from(&self.current),
            GameStatus::Pause => {}
        }
        &self.current
    }

    pub fn toggle_pause(&mut self) {
        self.current = sim::toggle_pause(&self.current);
    }

    pub fn toggle_jump(&mut self) {
        self.current = sim::start_jump(&self.current);
    }

    pub fn restart(&mut self) {
        self.current = sim::restart(&self.current);
    }

    /// Input collaborator's pause key
    pub fn request_pause(&mut self) {
        self.toggle_pause();
    }

    /// Input collaborator's action key
    pub fn request_jump_or_restart(&mut self) {
        if self.current.status == GameStatus::Over {
            self.restart();
        } else {
            self.toggle_jump();
        }
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::TogglePause => self.request_pause(),
            Intent::JumpOrRestart => self.request_jump_or_restart(),
        }
    }

    /// Independent copies of both buffers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current: self.current.clone(),
            previous: self.previous.clone(),
        }
    }

    pub fn current(&self) -> &SimulationState {
        &self.current
    }

    pub fn previous(&self) -> &SimulationState {
        &self.previous
    }

    pub fn status(&self) -> GameStatus {
        self.current.status
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Mutable access to the live state, for scripted setups
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.current
    }
}
