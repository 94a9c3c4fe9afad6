//! Fluent builder for constructing an [`EpisodeRunner`].

use nav_core::{EpisodeId, SimConfig, SimRng, Vec2};
use nav_crowd::{CrowdEngine, PedestrianParams};
use nav_policy::Policy;
use nav_robot::{Robot, RobotParams};
use nav_scenario::ScenarioTemplate;

use crate::{EpisodePhase, EpisodeRunner, EpisodeStats, PenaltyModel, SimResult};

/// Fluent builder for [`EpisodeRunner`].
///
/// # Required inputs
///
/// - [`SimConfig`] — episodes, seed, step cap, pedestrian count, …
/// - [`ScenarioTemplate`] — from `nav_scenario::builtin` or the JSON loader
/// - [`Policy`] — the control policy (see [`Policy::from_mode`])
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                      |
/// |-------------------------|------------------------------|
/// | `.pedestrian_params(p)` | `PedestrianParams::default()`|
/// | `.robot_params(p)`      | `RobotParams::default()`     |
/// | `.penalty_model(m)`     | `PenaltyModel::default()`    |
///
/// All validation happens in [`build`][Self::build]: a malformed config or
/// template is reported here, before any tick runs.
///
/// # Example
///
/// ```rust,ignore
/// let mut runner = SimBuilder::new(config, builtin::home(), Policy::Naive).build()?;
/// let stats = runner.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:       SimConfig,
    template:     ScenarioTemplate,
    policy:       Policy,
    ped_params:   Option<PedestrianParams>,
    robot_params: Option<RobotParams>,
    penalty:      Option<PenaltyModel>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, template: ScenarioTemplate, policy: Policy) -> Self {
        Self {
            config,
            template,
            policy,
            ped_params:   None,
            robot_params: None,
            penalty:      None,
        }
    }

    /// Override the crowd's force-model constants.
    pub fn pedestrian_params(mut self, params: PedestrianParams) -> Self {
        self.ped_params = Some(params);
        self
    }

    /// Override the robot's kinematic limits.
    pub fn robot_params(mut self, params: RobotParams) -> Self {
        self.robot_params = Some(params);
        self
    }

    /// Override the scoring rules (see [`PenaltyModel::new`] for the tier
    /// table invariants).
    pub fn penalty_model(mut self, model: PenaltyModel) -> Self {
        self.penalty = Some(model);
        self
    }

    /// Validate all inputs and return a runner parked in `NotStarted`.
    pub fn build(self) -> SimResult<EpisodeRunner> {
        self.config.validate()?;
        self.template.validate()?;

        let mut rng = SimRng::new(self.config.seed);
        // Placeholder world so the runner has a consistent shape before the
        // first episode; a non-randomized build consumes no RNG.
        let scenario = self.template.build(&mut rng, false);

        let robot = Robot::at(self.robot_params.unwrap_or_default(), scenario.robot_start);
        let crowd = CrowdEngine::new(
            self.ped_params.unwrap_or_default(),
            self.config.goal_policy,
        );

        Ok(EpisodeRunner {
            clock:         self.config.make_clock(),
            config:        self.config,
            template:      self.template,
            scenario,
            crowd,
            robot,
            policy:        self.policy,
            penalty:       self.penalty.unwrap_or_default(),
            rng,
            phase:         EpisodePhase::NotStarted,
            stats:         EpisodeStats::new(EpisodeId(0)),
            episodes_done: 0,
            manual_input:  Vec2::ZERO,
        })
    }
}
