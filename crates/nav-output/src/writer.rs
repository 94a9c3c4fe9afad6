//! The `OutputWriter` trait implemented by backend writers.

use crate::{EpisodeSummaryRow, OutputResult, TickPenaltyRow};

/// Trait implemented by statistics writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`StatsOutputObserver::take_error`][crate::StatsOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one tick's penalty row.
    fn write_tick_penalty(&mut self, row: &TickPenaltyRow) -> OutputResult<()>;

    /// Write one episode's summary row.
    fn write_episode_summary(&mut self, row: &EpisodeSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
