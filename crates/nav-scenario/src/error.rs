//! Error types for nav-scenario.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating scenario configuration.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no scenario config files found in {0}")]
    NoTemplates(PathBuf),

    #[error("unknown scenario '{wanted}'; available: {available}")]
    UnknownScenario { wanted: String, available: String },

    #[error("invalid scenario: {0}")]
    Invalid(String),
}

/// Alias for `Result<T, ScenarioError>`.
pub type ScenarioResult<T> = Result<T, ScenarioError>;
