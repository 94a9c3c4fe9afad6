use nav_core::NavError;
use nav_scenario::ScenarioError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] NavError),

    #[error("scenario error: {0}")]
    Scenario(#[from] ScenarioError),
}

pub type SimResult<T> = Result<T, SimError>;
