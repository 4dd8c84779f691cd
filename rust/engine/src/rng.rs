use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Uniform integer source behind every draw the games make.
pub trait RandomSource: std::fmt::Debug {
    /// A uniform value in `0..bound`. `bound` is never 0.
    fn below(&mut self, bound: u32) -> u32;
}

/// ChaCha20-backed source. The same seed replays the same draws.
#[derive(Debug, Clone)]
pub struct ChaChaSource {
    seed: u64,
    rng: ChaCha20Rng,
}

impl ChaChaSource {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Seeds from `seed`, or from a fresh random seed when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        Self::new_with_seed(seed.unwrap_or_else(rand::random))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for ChaChaSource {
    fn below(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..bound.max(1))
    }
}

/// Replays a fixed script of raw values, wrapping each into `0..bound`.
///
/// Once the script runs out it starts over from the beginning; an empty
/// script always yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Vec<u32>,
    pending: VecDeque<u32>,
}

impl ScriptedSource {
    pub fn new<I: IntoIterator<Item = u32>>(values: I) -> Self {
        let script: Vec<u32> = values.into_iter().collect();
        Self {
            pending: script.iter().copied().collect(),
            script,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn below(&mut self, bound: u32) -> u32 {
        if self.pending.is_empty() {
            self.pending.extend(self.script.iter().copied());
        }
        self.pending.pop_front().unwrap_or(0) % bound.max(1)
    }
}
