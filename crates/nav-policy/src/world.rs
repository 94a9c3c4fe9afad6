//! Read-only simulation state passed to the control policy each tick.

use nav_core::{Rect, Tick, Vec2};
use nav_crowd::PedestrianState;
use nav_robot::Robot;
use nav_scenario::Scenario;

/// A read-only snapshot of the joint simulation state for one tick.
///
/// Built by the episode loop after the crowd update and before the robot
/// update, and handed (immutably) to the control policy and the penalty
/// model.  Only the episode loop ever mutates the underlying state; all
/// borrows here expire at the end of the tick.
pub struct WorldState<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Simulated seconds per tick.
    pub dt: f32,

    /// The robot as of the previous tick.
    pub robot: &'a Robot,

    /// All pedestrians, indexed by `PedId`, already advanced for this tick.
    pub pedestrians: &'a [PedestrianState],

    /// Crowd-wide pedestrian collision radius.
    pub ped_radius: f32,

    /// The episode's built world (obstacles, bounds, robot goal).
    pub scenario: &'a Scenario,

    /// Raw input vector for the manual policy, written by the input layer.
    /// Zero whenever no input source is attached.
    pub manual_input: Vec2,
}

impl<'a> WorldState<'a> {
    /// The robot's goal position.
    #[inline]
    pub fn goal(&self) -> Vec2 {
        self.scenario.robot_goal
    }

    /// Static obstacle geometry.
    #[inline]
    pub fn obstacles(&self) -> &'a [Rect] {
        &self.scenario.obstacles
    }
}
