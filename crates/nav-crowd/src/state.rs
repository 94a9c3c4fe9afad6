//! Per-pedestrian state and the shared force-model parameters.

use nav_core::Vec2;

// ── PedestrianParams ──────────────────────────────────────────────────────────

/// Social-force model constants, shared by every pedestrian in a crowd.
///
/// The defaults are tuned for the 960×640 pixel world at one-second ticks:
/// pedestrians cruise at 1.5 px/tick and may briefly peak at twice that
/// under strong repulsion before the clamp bites.
#[derive(Clone, Debug, PartialEq)]
pub struct PedestrianParams {
    /// Cruise speed the goal-seeking force converges toward.
    pub preferred_speed: f32,
    /// Seconds over which the goal force closes the velocity gap.
    pub relaxation_time: f32,
    /// Hard speed cap applied after force integration.
    pub max_speed: f32,
    /// Collision-circle radius.
    pub radius: f32,
    /// Pedestrian-pedestrian repulsion gain.
    pub repulsion_gain: f32,
    /// Pedestrian-pedestrian repulsion decay range.
    pub repulsion_range: f32,
    /// Wall/obstacle repulsion gain.  Zero (the default) disables the term
    /// while keeping its computation slot live for tuning.
    pub wall_gain: f32,
    /// Wall/obstacle repulsion decay range.
    pub wall_range: f32,
    /// Distance at which a pedestrian counts as having reached its goal.
    pub goal_epsilon: f32,
}

impl Default for PedestrianParams {
    fn default() -> Self {
        Self {
            preferred_speed: 1.5,
            relaxation_time: 30.0,
            max_speed:       3.0,
            radius:          10.0,
            repulsion_gain:  8.0,
            repulsion_range: 8.0,
            wall_gain:       0.0,
            wall_range:      5.0,
            goal_epsilon:    15.0,
        }
    }
}

// ── PedestrianState ───────────────────────────────────────────────────────────

/// The mutable per-tick state of one pedestrian.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PedestrianState {
    pub pos:  Vec2,
    pub vel:  Vec2,
    pub goal: Vec2,
}

impl PedestrianState {
    /// A pedestrian standing still at `pos`, heading for `goal`.
    #[inline]
    pub fn at_rest(pos: Vec2, goal: Vec2) -> Self {
        Self { pos, vel: Vec2::ZERO, goal }
    }

    /// `true` once within `epsilon` of the goal.
    #[inline]
    pub fn has_reached_goal(&self, epsilon: f32) -> bool {
        self.pos.distance(self.goal) < epsilon
    }
}
