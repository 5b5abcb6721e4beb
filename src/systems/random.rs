//! Random source injected into the seeder and the rules
//!
//! Every tie-break and the Slime stickiness roll goes through `RandomSource`,
//! so a fixed seed (or a scripted source in tests) reproduces a run exactly.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait RandomSource {
    /// Uniform integer in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: u32) -> u32;

    /// Fair coin; `true` means "right" wherever a side is picked.
    #[inline]
    fn coin(&mut self) -> bool {
        self.below(2) == 1
    }
}

impl<R: RngCore> RandomSource for R {
    #[inline]
    fn below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "below(0) has no valid result");
        self.gen_range(0..bound)
    }
}

/// Generator used by the engine.
pub type SimRng = ChaCha8Rng;

pub fn sim_rng(seed: u64) -> SimRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Replays a fixed sequence of draws, each reduced modulo the requested bound.
#[cfg(test)]
pub(crate) struct Scripted {
    draws: Vec<u32>,
    pos: usize,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(draws: &[u32]) -> Self {
        Self { draws: draws.to_vec(), pos: 0 }
    }

    pub(crate) fn consumed(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn below(&mut self, bound: u32) -> u32 {
        let v = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        v % bound
    }
}
