//! `nav-output` — persistence for run statistics.
//!
//! The metrics layer consumes per-tick penalties and per-episode summaries
//! through [`StatsOutputObserver`], which bridges `nav_sim::SimObserver` to
//! an [`OutputWriter`] backend.  One backend ships: CSV, producing
//! `tick_penalties.csv` and `episode_summaries.csv`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nav_output::{CsvWriter, StatsOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = StatsOutputObserver::new(writer);
//! runner.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::StatsOutputObserver;
pub use row::{EpisodeSummaryRow, TickPenaltyRow};
pub use writer::OutputWriter;
