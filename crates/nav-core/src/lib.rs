//! `nav-core` — foundational types for the `crowdnav` simulator.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`ids`]   | `PedId`, `EpisodeId`                                  |
//! | [`geom`]  | `Vec2`, `Rect` — planar geometry in world pixels      |
//! | [`time`]  | `Tick`, `SimClock`, `SimConfig`, `GoalPolicy`         |
//! | [`rng`]   | `SimRng` — the run's single seeded generator          |
//! | [`error`] | `NavError`, `NavResult`                               |

pub mod error;
pub mod geom;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NavError, NavResult};
pub use geom::{Rect, Vec2};
pub use ids::{EpisodeId, PedId};
pub use rng::SimRng;
pub use time::{GoalPolicy, SimClock, SimConfig, Tick};
