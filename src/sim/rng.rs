//! Spawn-decision randomness
//!
//! The simulation only ever asks for uniform integers, so the source is a
//! small trait. Production uses a seeded PCG; tests replay fixed rolls.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Source of uniform integers for spawn rolls
pub trait SpawnRng {
    /// Uniform integer in `[lo, hi)`; `hi` must be greater than `lo`
    fn next_in_range(&mut self, lo: u32, hi: u32) -> u32;
}

/// Seeded PCG source, reproducible from its seed
#[derive(Debug, Clone)]
pub struct PcgSpawner {
    seed: u64,
    rng: Pcg32,
}

impl PcgSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed drawn from the thread-local generator
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SpawnRng for PcgSpawner {
    fn next_in_range(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.random_range(lo..hi)
    }
}

/// Replays a recorded roll sequence, wrapping around at the end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceRng {
    rolls: Vec<u32>,
    cursor: usize,
}

impl SequenceRng {
    /// An empty sequence always produces `lo`
    pub fn new(rolls: Vec<u32>) -> Self {
        Self { rolls, cursor: 0 }
    }

    /// The same roll forever
    pub fn constant(roll: u32) -> Self {
        Self::new(vec![roll])
    }

    /// How many rolls have been consumed
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl SpawnRng for SequenceRng {
    fn next_in_range(&mut self, lo: u32, hi: u32) -> u32 {
        if self.rolls.is_empty() {
            self.cursor += 1;
            return lo;
        }
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        // Out-of-range recordings are folded back into range
        lo + roll % (hi - lo).max(1)
    }
}
