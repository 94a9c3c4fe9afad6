//! `nav-crowd` — social-force pedestrian dynamics.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`state`]  | `PedestrianParams`, `PedestrianState`                    |
//! | [`engine`] | `CrowdEngine` — the two-phase per-tick update            |
//!
//! # Update model
//!
//! Each tick the engine computes every pedestrian's next state from the
//! previous tick's snapshot, then commits all of them at once.  Pedestrians
//! therefore never observe a half-updated crowd, and the update order cannot
//! leak into the result.  The robot is deliberately invisible here: crowd
//! dynamics read and write pedestrian state only.

pub mod engine;
pub mod state;

#[cfg(test)]
mod tests;

pub use engine::CrowdEngine;
pub use state::{PedestrianParams, PedestrianState};
