//! `nav-policy` — robot control policies.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`mode`]   | `ControlMode` — the selector the config layer parses      |
//! | [`world`]  | `WorldState<'a>` — read-only per-tick snapshot            |
//! | [`policy`] | `Policy` — the four decision functions                    |
//!
//! # Design notes
//!
//! `Policy` is a closed enum rather than a trait object: there are exactly
//! four control modes, a new one is a compile-time extension, and matching
//! stays exhaustive.  Policies read the world only through [`WorldState`]
//! and draw randomness only from the `SimRng` handed in by the episode loop,
//! so a decision is a pure function of (snapshot, policy state, rng state).
//!
//! Manual input arrives as a plain vector inside the snapshot — the input
//! device layer writes it, the manual policy forwards it, and no policy code
//! ever touches an input device.

pub mod mode;
pub mod policy;
pub mod world;

#[cfg(test)]
mod tests;

pub use mode::ControlMode;
pub use policy::{Policy, PotentialFieldParams, RandomWalk};
pub use world::WorldState;
