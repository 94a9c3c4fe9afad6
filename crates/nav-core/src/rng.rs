//! The run's single deterministic RNG.
//!
//! # Determinism strategy
//!
//! One `SimRng` is owned by the episode loop and passed `&mut` into every
//! component that samples: scenario randomization, pedestrian route drawing,
//! the random control policy, and the crowd engine's back-off perturbation.
//! There is no global or thread-local randomness anywhere, so a run is a pure
//! function of (scenario, seed, control mode, episode count).  Episode resets
//! keep consuming from the same stream; the generator is never reseeded
//! mid-tick.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded wrapper around `SmallRng` for all simulation-level sampling.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.  Returns `None` if empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
