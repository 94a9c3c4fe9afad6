//! The four control policies.

use std::f32::consts::TAU;

use nav_core::geom::EPSILON;
use nav_core::{SimRng, Vec2};

use crate::{ControlMode, WorldState};

// ── RandomWalk ────────────────────────────────────────────────────────────────

/// State for the random policy: a held heading and its remaining lifetime.
///
/// This is the only per-tick memory any policy carries; the other three
/// variants are pure functions of the snapshot.
#[derive(Clone, Debug)]
pub struct RandomWalk {
    /// Ticks a drawn heading is kept before redrawing.  1 = redraw every tick.
    pub hold_ticks: u32,
    remaining: u32,
    current:   Vec2,
}

impl RandomWalk {
    pub fn new(hold_ticks: u32) -> Self {
        Self {
            hold_ticks: hold_ticks.max(1),
            remaining:  0,
            current:    Vec2::ZERO,
        }
    }
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self::new(1)
    }
}

// ── PotentialFieldParams ──────────────────────────────────────────────────────

/// Robot-level gains for the potential-field policy, independent of the
/// pedestrian force model's constants.
#[derive(Clone, Debug, PartialEq)]
pub struct PotentialFieldParams {
    /// Weight of the unit attraction toward the goal.
    pub attract_gain: f32,
    /// Repulsion gain against pedestrians and obstacles.
    pub repel_gain: f32,
    /// Exponential decay range of the repulsion.
    pub repel_range: f32,
    /// Sources farther than this contribute nothing.
    pub sensing_radius: f32,
}

impl Default for PotentialFieldParams {
    fn default() -> Self {
        Self {
            attract_gain:   1.0,
            repel_gain:     12.0,
            repel_range:    16.0,
            sensing_radius: 60.0,
        }
    }
}

// ── Policy ────────────────────────────────────────────────────────────────────

/// The closed set of control policies.
///
/// One value lives per run; [`Policy::decide`] is called once per tick with
/// that tick's [`WorldState`] and returns the desired velocity handed to the
/// robot model (which applies its own kinematic clamps).
pub enum Policy {
    /// Forward the externally supplied input vector.
    Manual,
    /// Head straight for the goal, ignoring everything else.
    Naive,
    /// Fixed-magnitude heading redrawn from the run RNG.
    Random(RandomWalk),
    /// Goal attraction plus exponential repulsion from nearby pedestrians
    /// and obstacles.
    PotentialField(PotentialFieldParams),
}

impl Policy {
    /// A default-configured policy for `mode`.
    pub fn from_mode(mode: ControlMode) -> Policy {
        match mode {
            ControlMode::Manual         => Policy::Manual,
            ControlMode::Naive          => Policy::Naive,
            ControlMode::Random         => Policy::Random(RandomWalk::default()),
            ControlMode::PotentialField => Policy::PotentialField(PotentialFieldParams::default()),
        }
    }

    /// The mode this policy implements.
    pub fn mode(&self) -> ControlMode {
        match self {
            Policy::Manual            => ControlMode::Manual,
            Policy::Naive             => ControlMode::Naive,
            Policy::Random(_)         => ControlMode::Random,
            Policy::PotentialField(_) => ControlMode::PotentialField,
        }
    }

    /// Produce this tick's desired velocity.
    pub fn decide(&mut self, world: &WorldState<'_>, rng: &mut SimRng) -> Vec2 {
        let max_speed = world.robot.params.max_speed;
        match self {
            Policy::Manual => world.manual_input.normalize() * max_speed,

            Policy::Naive => (world.goal() - world.robot.pos).normalize() * max_speed,

            Policy::Random(walk) => {
                if walk.remaining == 0 {
                    let angle = rng.gen_range(0.0..TAU);
                    walk.current = Vec2::from_angle(angle) * max_speed;
                    walk.remaining = walk.hold_ticks;
                }
                walk.remaining -= 1;
                walk.current
            }

            Policy::PotentialField(params) => {
                potential_field(params, world).normalize() * max_speed
            }
        }
    }
}

/// The raw (unnormalized) potential-field vector.
///
/// When attraction and repulsion cancel exactly, the sum is zero and the
/// robot stalls in the local minimum; there is no escape heuristic.
fn potential_field(params: &PotentialFieldParams, world: &WorldState<'_>) -> Vec2 {
    let robot = world.robot;
    let attract = (world.goal() - robot.pos).normalize() * params.attract_gain;

    let mut repel = Vec2::ZERO;
    let contact = robot.params.radius + world.ped_radius;
    for ped in world.pedestrians {
        repel += repulsion_from(robot.pos, ped.pos, contact, params);
    }
    for obstacle in world.obstacles() {
        repel += repulsion_from(robot.pos, obstacle.nearest_point(robot.pos), robot.params.radius, params);
    }

    attract + repel
}

/// Exponentially decaying repulsion from one source point, zero outside the
/// sensing radius.
fn repulsion_from(pos: Vec2, source: Vec2, contact: f32, params: &PotentialFieldParams) -> Vec2 {
    let offset = pos - source;
    let dist = offset.length();
    if dist < EPSILON || dist >= params.sensing_radius {
        return Vec2::ZERO;
    }
    let magnitude = params.repel_gain * ((contact - dist) / params.repel_range).exp();
    offset * (magnitude / dist)
}
