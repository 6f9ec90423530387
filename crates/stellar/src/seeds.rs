//! Per-object pseudorandom streams.
//!
//! Every generated body owns one `SeedStream`. Child seeds are derived from the
//! parent's seed plus a draw from the parent's stream, so the whole tree
//! (universe → star → planet → moon) replays bit-for-bit from one number.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::sampling::sample_gaussian;

/// Multiplier applied to the star's draw when deriving a planet or planetoid seed.
pub const PLANET_SEED_MULTIPLIER: i64 = 47;

/// Seed step applied between planet placement attempts.
pub const PLANET_RESEED_STEP: u64 = 13_377_331;

/// Seed step applied between planetoid placement attempts.
pub const PLANETOID_RESEED_STEP: u64 = 27_331;

/// Seed step applied when a moon's class is not valid at its planet's orbit.
pub const MOON_RESEED_STEP: u64 = 1_337;

/// Combines a parent seed with a draw from the parent's stream.
pub fn derive_seed(parent: u64, multiplier: i64, draw: i32) -> u64 {
    parent.wrapping_add(multiplier.wrapping_mul(i64::from(draw)) as u64)
}

/// A seeded ChaCha stream that remembers the seed it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedStream {
    seed: u64,
    rng: ChaChaRng,
}

impl SeedStream {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaChaRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restarts the stream from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Moves the seed forward by `step` and restarts the stream.
    pub fn advance(&mut self, step: u64) {
        self.reseed(self.seed.wrapping_add(step));
    }

    pub fn rng(&mut self) -> &mut ChaChaRng {
        &mut self.rng
    }

    /// Full-range signed integer draw.
    pub fn next_int(&mut self) -> i32 {
        self.rng.random()
    }

    /// Uniform integer in `[0, bound)`. A zero bound yields zero.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.rng.random()
    }

    /// Standard normal draw.
    pub fn next_gaussian(&mut self) -> f64 {
        sample_gaussian(&mut self.rng, 0.0, 1.0)
    }

    pub fn next_bool(&mut self) -> bool {
        self.rng.random()
    }

    /// Derives a child seed: `seed + multiplier · next_int()`.
    pub fn child_seed(&mut self, multiplier: i64) -> u64 {
        let draw = self.next_int();
        derive_seed(self.seed, multiplier, draw)
    }
}

impl Default for SeedStream {
    fn default() -> Self {
        Self::new(0)
    }
}
