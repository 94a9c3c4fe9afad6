//! `StatsOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use nav_core::{EpisodeId, Tick};
use nav_sim::{EpisodeStats, PenaltyKind, SimObserver, StepPenalty};

use crate::writer::OutputWriter;
use crate::{EpisodeSummaryRow, OutputError, TickPenaltyRow};

/// A [`SimObserver`] that writes per-tick penalties and episode summaries to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run completes, check for errors with
/// [`take_error`][Self::take_error].
pub struct StatsOutputObserver<W: OutputWriter> {
    writer:          W,
    current_episode: EpisodeId,
    last_error:      Option<OutputError>,
}

impl<W: OutputWriter> StatsOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_episode: EpisodeId(0),
            last_error:      None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for StatsOutputObserver<W> {
    fn on_episode_start(&mut self, episode: EpisodeId) {
        self.current_episode = episode;
    }

    fn on_tick_end(&mut self, tick: Tick, penalty: &StepPenalty) {
        let row = TickPenaltyRow {
            episode:    self.current_episode.0,
            tick:       tick.0,
            penalty:    penalty.total,
            intrusions: penalty.count(PenaltyKind::Intrusion),
            collisions: penalty.count(PenaltyKind::Collision),
        };
        let result = self.writer.write_tick_penalty(&row);
        self.store_err(result);
    }

    fn on_episode_end(&mut self, stats: &EpisodeStats) {
        let row = EpisodeSummaryRow {
            episode:       stats.episode.0,
            steps:         stats.steps,
            total_penalty: stats.total_penalty,
            intrusions:    stats.intrusions,
            collisions:    stats.collisions,
            goal_reached:  stats.goal_reached,
            timed_out:     stats.timed_out,
        };
        let result = self.writer.write_episode_summary(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _all: &[EpisodeStats]) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
