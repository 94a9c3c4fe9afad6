//! The control-mode selector.

use std::fmt;
use std::str::FromStr;

use nav_core::NavError;

/// Which decision function drives the robot.
///
/// Parsed from configuration input; an unknown string is a setup error, not
/// a fallback to some default mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControlMode {
    Manual,
    Naive,
    Random,
    PotentialField,
}

impl ControlMode {
    pub const ALL: [ControlMode; 4] = [
        ControlMode::Manual,
        ControlMode::Naive,
        ControlMode::Random,
        ControlMode::PotentialField,
    ];

    /// The canonical config-file / CLI spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ControlMode::Manual         => "manual",
            ControlMode::Naive          => "naive",
            ControlMode::Random         => "random",
            ControlMode::PotentialField => "potential_field",
        }
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlMode {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual"          => Ok(ControlMode::Manual),
            "naive"           => Ok(ControlMode::Naive),
            "random"          => Ok(ControlMode::Random),
            "potential_field" => Ok(ControlMode::PotentialField),
            other => Err(NavError::Parse(format!(
                "unknown control mode '{other}'; expected one of manual, naive, random, potential_field"
            ))),
        }
    }
}
