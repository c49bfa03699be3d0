//! Audio cue detection
//!
//! Playback lives with the audio collaborator. This only decides which cues a
//! snapshot pair calls for, so every frontend triggers them identically.

use serde::{Deserialize, Serialize};

use crate::sim::GameStatus;
use crate::simulation::Snapshot;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    /// First tick of a run: start the theme
    Theme,
    /// Player hit an obstacle
    Death,
}

/// Cues triggered by the most recent tick
pub fn cues_for(snapshot: &Snapshot) -> Vec<Cue> {
    let mut cues = Vec::new();
    let (prev, cur) = (&snapshot.previous, &snapshot.current);

    if cur.status == GameStatus::Play && prev.world.scroll_x == 0.0 && cur.world.scroll_x > 0.0 {
        cues.push(Cue::Theme);
    }
    if snapshot.entered(GameStatus::Over) {
        cues.push(Cue::Death);
    }
    cues
}
