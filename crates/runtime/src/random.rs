//! Pseudo-random numbers for REDLINE
//!
//! [`RandomGenerator`] is a plain value: the host runtime owns one (see
//! [`crate::context::RuntimeContext`]) and passes it wherever randomness is
//! needed, so fixed-seed runs and per-thread isolation are explicit.
//!
//! Generated code that just calls `random_int(1, 6)` uses the free functions
//! below, which draw from a thread-local default generator. That generator is
//! created lazily on the first draw on each thread, seeded from
//! `REDLINE_SEED` when set and from a high-resolution clock reading otherwise.
//! It is never re-seeded.
//!
//! # Usage from REDLINE
//!
//! ```text
//! let roll: int = random_int(1, 6)
//! let chance: float = random_float()
//! ```

use crate::config::RuntimeConfig;
use crate::time_ops::clock_nanos;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::fmt;

/// A seedable pseudo-random generator
#[derive(Clone)]
pub struct RandomGenerator {
    rng: StdRng,
    seed: u64,
}

impl RandomGenerator {
    /// Deterministic generator: the same seed always yields the same draws
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generator seeded from the clock at the moment of the call
    pub fn from_clock() -> Self {
        let seed = clock_nanos();
        tracing::debug!(seed, "random: seeding generator from clock");
        Self::from_seed(seed)
    }

    /// Use the configured fixed seed if there is one, else the clock
    pub fn from_config(config: &RuntimeConfig) -> Self {
        match config.seed {
            Some(seed) => {
                tracing::debug!(seed, "random: seeding generator from config");
                Self::from_seed(seed)
            }
            None => Self::from_clock(),
        }
    }

    /// The seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer over the closed interval `[min, max]`
    ///
    /// Reversed bounds are swapped rather than rejected.
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max {
            (min, max)
        } else {
            tracing::debug!(min, max, "random_int: bounds reversed, swapping");
            (max, min)
        };
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform float over `[0.0, 1.0)`
    pub fn float(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

impl fmt::Debug for RandomGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomGenerator")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

thread_local! {
    static DEFAULT_RNG: RefCell<RandomGenerator> =
        RefCell::new(RandomGenerator::from_config(&RuntimeConfig::from_env()));
}

/// Uniform integer over `[min, max]` from this thread's default generator
pub fn random_int(min: i64, max: i64) -> i64 {
    DEFAULT_RNG.with(|rng| rng.borrow_mut().int(min, max))
}

/// Uniform float over `[0.0, 1.0)` from this thread's default generator
pub fn random_float() -> f64 {
    DEFAULT_RNG.with(|rng| rng.borrow_mut().float())
}

/// Random integer between min and max (inclusive)
#[unsafe(no_mangle)]
pub extern "C" fn rl_random_int(min: i64, max: i64) -> i64 {
    random_int(min, max)
}

/// Random float in [0.0, 1.0)
#[unsafe(no_mangle)]
pub extern "C" fn rl_random_float() -> f64 {
    random_float()
}
