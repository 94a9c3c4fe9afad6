//! Robot state and the clamped kinematic update.

use nav_core::Vec2;
use nav_scenario::Scenario;

// ── RobotParams ───────────────────────────────────────────────────────────────

/// Kinematic limits, fixed for the lifetime of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct RobotParams {
    /// Collision-circle radius.
    pub radius: f32,
    /// Hard speed cap.
    pub max_speed: f32,
    /// Velocity change allowed per simulated second.  The default lets a
    /// stationary robot reach full speed within one default-length tick.
    pub max_accel: f32,
}

impl Default for RobotParams {
    fn default() -> Self {
        Self {
            radius:    12.0,
            max_speed: 3.0,
            max_accel: 3.0,
        }
    }
}

// ── Robot ─────────────────────────────────────────────────────────────────────

/// The robot's kinematic state.  One instance lives per episode and is reset
/// to the scenario start pose between episodes.
#[derive(Clone, Debug)]
pub struct Robot {
    pub params: RobotParams,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Robot {
    /// A robot at rest at `pos`.
    pub fn at(params: RobotParams, pos: Vec2) -> Self {
        Self { params, pos, vel: Vec2::ZERO }
    }

    /// Teleport back to `pos` at rest (episode reset).
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Apply one control action for one tick.
    ///
    /// `requested` is the desired velocity.  The update clamps, in order:
    /// the request to `max_speed`, the velocity change to `max_accel · dt`,
    /// the resulting speed to `max_speed`, and the position to obstacle-free
    /// space inside the world.  Nothing here can fail.
    pub fn apply(&mut self, requested: Vec2, scenario: &Scenario, dt: f32) {
        let desired = requested.clamp_length(self.params.max_speed);
        let delta_v = (desired - self.vel).clamp_length(self.params.max_accel * dt);
        self.vel = (self.vel + delta_v).clamp_length(self.params.max_speed);

        let proposed = self.pos + self.vel * dt;
        let pos = if self.collides(proposed, scenario) {
            self.slide(proposed, scenario)
        } else {
            proposed
        };

        let world = scenario.world;
        let r = self.params.radius;
        self.pos = Vec2::new(
            pos.x.clamp(world.left() + r, world.right() - r),
            pos.y.clamp(world.top() + r, world.bottom() - r),
        );
    }

    fn collides(&self, pos: Vec2, scenario: &Scenario) -> bool {
        scenario
            .obstacles
            .iter()
            .any(|o| o.intersects_circle(pos, self.params.radius))
    }

    /// Axis-separated obstacle resolution.  Velocity along a blocked axis is
    /// zeroed; a robot blocked on both axes stops in place.
    fn slide(&mut self, proposed: Vec2, scenario: &Scenario) -> Vec2 {
        let x_only = Vec2::new(proposed.x, self.pos.y);
        if !self.collides(x_only, scenario) {
            self.vel.y = 0.0;
            return x_only;
        }
        let y_only = Vec2::new(self.pos.x, proposed.y);
        if !self.collides(y_only, scenario) {
            self.vel.x = 0.0;
            return y_only;
        }
        self.vel = Vec2::ZERO;
        self.pos
    }
}
