//! Run observer trait for progress reporting and data collection.

use nav_core::{EpisodeId, Tick};

use crate::{EpisodeStats, StepPenalty};

/// Callbacks invoked by [`EpisodeRunner::run`][crate::EpisodeRunner::run] at
/// key points of a multi-episode run.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — per-episode printer
///
/// ```rust,ignore
/// struct EpisodePrinter;
///
/// impl SimObserver for EpisodePrinter {
///     fn on_episode_end(&mut self, stats: &EpisodeStats) {
///         println!("episode {}: penalty={:.1}", stats.episode, stats.total_penalty);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called right after an episode's world has been (re)built, before its
    /// first tick.
    fn on_episode_start(&mut self, _episode: EpisodeId) {}

    /// Called at the end of each tick with that tick's scoring.
    fn on_tick_end(&mut self, _tick: Tick, _penalty: &StepPenalty) {}

    /// Called when an episode reaches a terminal state.
    fn on_episode_end(&mut self, _stats: &EpisodeStats) {}

    /// Called once after the final episode with every episode's stats.
    fn on_run_end(&mut self, _all: &[EpisodeStats]) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
