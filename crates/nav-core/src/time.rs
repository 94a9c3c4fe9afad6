//! Simulation time model and run configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one pass
//! of the fixed update order (crowd → policy → robot → penalty → termination);
//! `SimClock::dt` is the simulated-seconds span of that pass.  Using an
//! integer tick as the canonical time unit keeps step counting and timeout
//! arithmetic exact, with `dt` entering only the force/velocity integration.

use std::fmt;

use crate::{NavError, NavResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter, reset to zero at each episode start.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick of an episode and the integration step size.
///
/// Cheap to copy; holds no heap data.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
    /// Simulated seconds per tick.
    pub dt: f32,
}

impl SimClock {
    pub fn new(dt: f32) -> Self {
        Self { current_tick: Tick::ZERO, dt }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Rewind to tick zero (episode reset).  `dt` is unchanged.
    #[inline]
    pub fn reset(&mut self) {
        self.current_tick = Tick::ZERO;
    }

    /// Elapsed simulated seconds since tick 0 of the current episode.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.current_tick.0 as f32 * self.dt
    }
}

// ── GoalPolicy ────────────────────────────────────────────────────────────────

/// What happens to a pedestrian that reaches its goal.
///
/// Either choice is deterministic under the run seed; the selection is part
/// of the scenario configuration rather than an implicit behavior.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GoalPolicy {
    /// Tear the pedestrian down and re-create it on a freshly sampled
    /// spawn-region → goal-region route.
    #[default]
    Respawn,
    /// Zero the velocity and skip force integration; the pedestrian stays
    /// parked at its goal for the rest of the episode.
    Freeze,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration, supplied by the caller (CLI/demo layer) and
/// validated once before the first tick.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Simulated seconds per tick.
    pub dt: f32,

    /// Ticks after which a running episode transitions to `TimedOut`.
    pub max_steps_per_episode: u64,

    /// How many episodes `run()` executes before stopping.
    pub episodes: u32,

    /// Pedestrians spawned per episode.
    pub pedestrian_count: usize,

    /// Jitter obstacle layouts and add extra obstacles at each episode reset.
    pub randomize_world: bool,

    /// Pedestrian-at-goal handling.
    pub goal_policy: GoalPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                  42,
            dt:                    1.0,
            max_steps_per_episode: 5_000,
            episodes:              1,
            pedestrian_count:      12,
            randomize_world:       false,
            goal_policy:           GoalPolicy::Respawn,
        }
    }
}

impl SimConfig {
    /// Reject configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> NavResult<()> {
        if !(self.dt > 0.0) {
            return Err(NavError::Config(format!("dt must be positive, got {}", self.dt)));
        }
        if self.max_steps_per_episode == 0 {
            return Err(NavError::Config("max_steps_per_episode must be nonzero".into()));
        }
        if self.episodes == 0 {
            return Err(NavError::Config("episodes must be nonzero".into()));
        }
        Ok(())
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.dt)
    }
}
