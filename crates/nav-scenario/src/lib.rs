//! `nav-scenario` — scenario templates and world construction.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`template`] | `ScenarioTemplate`, `Randomization` — the static description  |
//! | [`scenario`] | `Scenario` — a concrete built world, plus route sampling      |
//! | [`builtin`]  | The three stock templates (`home`, `airport`, `shopping_center`) |
//! | [`loader`]   | JSON config-file loading                                      |
//! | [`error`]    | `ScenarioError`, `ScenarioResult<T>`                          |
//!
//! # Template vs. scenario
//!
//! A template is loaded once (from JSON or a builtin constructor) and reused
//! for the whole run.  Each episode reset calls
//! [`ScenarioTemplate::build`] to produce a concrete [`Scenario`]; with world
//! randomization enabled, that is where obstacle jitter and extra-obstacle
//! sampling consume the run RNG.

pub mod builtin;
pub mod error;
pub mod loader;
pub mod scenario;
pub mod template;

#[cfg(test)]
mod tests;

pub use error::{ScenarioError, ScenarioResult};
pub use loader::{load_template_reader, load_templates, select_template};
pub use scenario::Scenario;
pub use template::{Randomization, ScenarioTemplate};
