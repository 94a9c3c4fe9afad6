//! The `EpisodeRunner` and its tick loop.

use tracing::{debug, info};

use nav_core::{EpisodeId, SimClock, SimConfig, SimRng, Vec2};
use nav_crowd::CrowdEngine;
use nav_policy::{Policy, WorldState};
use nav_robot::Robot;
use nav_scenario::{Scenario, ScenarioTemplate};

use crate::{EpisodeStats, PenaltyModel, SimObserver, StepPenalty};

// ── EpisodePhase ──────────────────────────────────────────────────────────────

/// The episode state machine.
///
/// `NotStarted → Running → (GoalReached | TimedOut)`; a reset (driven by
/// [`EpisodeRunner::run`]) re-enters `Running`, or the runner parks in
/// `NotStarted` once all requested episodes are done.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EpisodePhase {
    NotStarted,
    Running,
    GoalReached,
    TimedOut,
}

// ── EpisodeRunner ─────────────────────────────────────────────────────────────

/// Owns all simulation state and drives the fixed per-tick update order:
/// crowd → policy → robot → penalty → termination.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct EpisodeRunner {
    /// Global configuration (episodes, seed, step cap, …).
    pub config: SimConfig,

    /// Episode clock — current tick plus the integration step size.
    pub clock: SimClock,

    /// The static template episodes are rebuilt from.
    pub template: ScenarioTemplate,

    /// The current episode's built world.
    pub scenario: Scenario,

    /// Pedestrian population and force model.
    pub crowd: CrowdEngine,

    /// The robot's kinematic state.
    pub robot: Robot,

    /// The control policy, called once per tick.
    pub policy: Policy,

    /// Scoring rules.
    pub penalty: PenaltyModel,

    /// The run's single RNG stream.  Consumed by scenario randomization,
    /// route sampling, the crowd engine, and the random policy — never
    /// reseeded mid-tick.
    pub rng: SimRng,

    /// Where the state machine currently is.
    pub phase: EpisodePhase,

    /// Running totals of the current episode.
    pub stats: EpisodeStats,

    /// Episodes completed so far across the whole run.
    pub episodes_done: u32,

    /// This tick's raw manual-input vector; see [`set_manual_input`].
    ///
    /// [`set_manual_input`]: EpisodeRunner::set_manual_input
    pub(crate) manual_input: Vec2,
}

impl EpisodeRunner {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run `config.episodes` episodes to termination, invoking observer
    /// hooks at episode boundaries and every tick.
    ///
    /// Returns every episode's final stats.  The tick loop itself is
    /// infallible; all failure modes are caught at build time.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Vec<EpisodeStats> {
        let mut all = Vec::with_capacity(self.config.episodes as usize);
        for _ in 0..self.config.episodes {
            self.start_episode();
            observer.on_episode_start(self.stats.episode);

            while self.phase == EpisodePhase::Running {
                let tick = self.clock.current_tick;
                let penalty = self.step();
                observer.on_tick_end(tick, &penalty);
            }

            info!(
                episode = self.stats.episode.0,
                steps = self.stats.steps,
                penalty = self.stats.total_penalty,
                goal_reached = self.stats.goal_reached,
                "episode finished"
            );
            observer.on_episode_end(&self.stats);
            all.push(self.stats.clone());
            self.episodes_done += 1;
        }
        self.phase = EpisodePhase::NotStarted;
        observer.on_run_end(&all);
        all
    }

    /// Rebuild the world from the template and enter `Running`.
    ///
    /// Called by [`run`][Self::run] at each episode boundary; exposed for
    /// callers that drive [`step`][Self::step] manually (e.g. a render loop).
    pub fn start_episode(&mut self) {
        self.scenario = self
            .template
            .build(&mut self.rng, self.config.randomize_world);
        self.robot.reset(self.scenario.robot_start);
        self.crowd
            .reset(&self.scenario, self.config.pedestrian_count, &mut self.rng);
        self.stats = EpisodeStats::new(EpisodeId(self.episodes_done));
        self.clock.reset();
        self.manual_input = Vec2::ZERO;
        self.phase = EpisodePhase::Running;
        debug!(
            episode = self.stats.episode.0,
            scenario = %self.scenario.id,
            pedestrians = self.crowd.states.len(),
            "episode started"
        );
    }

    /// Inject this tick's raw input vector for the manual policy.
    ///
    /// The input layer calls this before [`step`][Self::step]; the value is
    /// ignored by every other policy and cleared at episode reset.
    pub fn set_manual_input(&mut self, input: Vec2) {
        self.manual_input = input;
    }

    /// Execute exactly one tick.
    ///
    /// In a terminal phase the world keeps advancing (a render loop may keep
    /// stepping) but penalty accrual has stopped.  Before the first
    /// [`start_episode`][Self::start_episode] this is a no-op.
    pub fn step(&mut self) -> StepPenalty {
        if self.phase == EpisodePhase::NotStarted {
            return StepPenalty::default();
        }
        let now = self.clock.current_tick;
        let dt = self.clock.dt;

        // ① Crowd update — pedestrians never see the robot.
        self.crowd.step(&self.scenario, dt, &mut self.rng);

        // ② Policy decision on the post-crowd, pre-robot snapshot.
        let action = {
            let world = WorldState {
                tick: now,
                dt,
                robot: &self.robot,
                pedestrians: &self.crowd.states,
                ped_radius: self.crowd.params.radius,
                scenario: &self.scenario,
                manual_input: self.manual_input,
            };
            self.policy.decide(&world, &mut self.rng)
        };

        // ③ Robot update.
        self.robot.apply(action, &self.scenario, dt);

        // ④ Score the resulting joint state.
        let step_penalty = if self.stats.goal_reached {
            StepPenalty::default()
        } else {
            let world = WorldState {
                tick: now,
                dt,
                robot: &self.robot,
                pedestrians: &self.crowd.states,
                ped_radius: self.crowd.params.radius,
                scenario: &self.scenario,
                manual_input: self.manual_input,
            };
            self.penalty.score(&world)
        };
        self.stats.record(&step_penalty);
        self.stats.steps += 1;

        // ⑤ Termination.
        if self.phase == EpisodePhase::Running {
            if self.robot.pos.distance(self.scenario.robot_goal) < self.penalty.goal_radius {
                self.phase = EpisodePhase::GoalReached;
                self.stats.goal_reached = true;
            } else if self.stats.steps >= self.config.max_steps_per_episode {
                self.phase = EpisodePhase::TimedOut;
                self.stats.timed_out = true;
            }
        }

        self.clock.advance();
        step_penalty
    }
}
