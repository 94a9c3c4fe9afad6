//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_penalties.csv`
//! - `episode_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EpisodeSummaryRow, OutputResult, TickPenaltyRow};

/// Writes run statistics to two CSV files.
pub struct CsvWriter {
    penalties: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut penalties = Writer::from_path(dir.join("tick_penalties.csv"))?;
        penalties.write_record(["episode", "tick", "penalty", "intrusions", "collisions"])?;

        let mut summaries = Writer::from_path(dir.join("episode_summaries.csv"))?;
        summaries.write_record([
            "episode",
            "steps",
            "total_penalty",
            "intrusions",
            "collisions",
            "goal_reached",
            "timed_out",
        ])?;

        Ok(Self {
            penalties,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_penalty(&mut self, row: &TickPenaltyRow) -> OutputResult<()> {
        self.penalties.write_record(&[
            row.episode.to_string(),
            row.tick.to_string(),
            row.penalty.to_string(),
            row.intrusions.to_string(),
            row.collisions.to_string(),
        ])?;
        Ok(())
    }

    fn write_episode_summary(&mut self, row: &EpisodeSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.episode.to_string(),
            row.steps.to_string(),
            row.total_penalty.to_string(),
            row.intrusions.to_string(),
            row.collisions.to_string(),
            (row.goal_reached as u8).to_string(),
            (row.timed_out as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.penalties.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
