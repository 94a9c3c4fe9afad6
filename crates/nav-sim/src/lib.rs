//! `nav-sim` — the episode loop and scoring.
//!
//! # Tick order
//!
//! ```text
//! while phase == Running:
//!   ① Crowd    — social-force update of every pedestrian (two-phase commit).
//!   ② Policy   — decide(world_snapshot) → desired velocity.
//!   ③ Robot    — clamped kinematic update.
//!   ④ Penalty  — score the resulting joint state, update counters.
//!   ⑤ Terminal — goal region → GoalReached; step cap → TimedOut.
//! ```
//!
//! The loop is single-threaded and synchronous: exactly one component writes
//! pedestrian state (①) and one writes robot state (③) per tick, and the
//! world snapshot handed to ②/④ is read-only.  All randomness flows through
//! the one `SimRng` owned by the runner, so a run is reproducible from its
//! config alone.
//!
//! # Episode lifecycle
//!
//! `NotStarted → Running → (GoalReached | TimedOut)`, then reset back to
//! `Running` for the next episode, or to `NotStarted` once the configured
//! episode count is exhausted.

pub mod builder;
pub mod episode;
pub mod error;
pub mod observer;
pub mod penalty;
pub mod stats;


pub use builder::SimBuilder;
pub use episode::{EpisodePhase, EpisodeRunner};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use penalty::{PenaltyEvent, PenaltyKind, PenaltyModel, PenaltyTier, StepPenalty};
pub use stats::EpisodeStats;
