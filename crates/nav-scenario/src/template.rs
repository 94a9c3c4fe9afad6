//! Static scenario descriptions and the build step that turns them into
//! concrete worlds.

use nav_core::{Rect, SimRng, Vec2};

use crate::{Scenario, ScenarioError, ScenarioResult};

/// Smallest obstacle side length the builder will emit.
pub const MIN_OBSTACLE_SIZE: f32 = 20.0;

/// Clearance kept around the robot start and goal when placing extra
/// obstacles.
const START_GOAL_CLEARANCE: f32 = 45.0;

/// Placement attempts per extra obstacle before giving up on it.
const EXTRA_OBSTACLE_ATTEMPTS: u32 = 30;

/// Gap enforced between an extra obstacle and every existing one.
const EXTRA_OBSTACLE_GAP: f32 = 20.0;

// ── Randomization ─────────────────────────────────────────────────────────────

/// Per-template knobs for the `randomize_world` mode.
///
/// All-zero (the default) makes [`ScenarioTemplate::build`] a pure layout
/// copy regardless of the randomize flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Randomization {
    /// Max absolute positional jitter applied to each obstacle, in pixels.
    pub obstacle_jitter_px: f32,
    /// Max absolute size jitter applied to each obstacle, in pixels.
    pub obstacle_size_jitter_px: f32,
    /// Inclusive range for the number of extra obstacles sampled per build.
    pub extra_obstacle_min: u32,
    pub extra_obstacle_max: u32,
    /// Inclusive side-length range for extra obstacles.
    pub random_obstacle_min_size: f32,
    pub random_obstacle_max_size: f32,
}

// ── ScenarioTemplate ──────────────────────────────────────────────────────────

/// The static description of one scenario: world bounds, robot start/goal,
/// obstacle layout, and the regions pedestrians spawn in and walk toward.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioTemplate {
    pub id:            String,
    pub name:          String,
    pub world:         Rect,
    pub robot_start:   Vec2,
    pub robot_goal:    Vec2,
    pub obstacles:     Vec<Rect>,
    pub spawn_regions: Vec<Rect>,
    pub goal_regions:  Vec<Rect>,
    pub randomization: Randomization,
}

impl ScenarioTemplate {
    /// Reject templates that cannot host an episode.
    ///
    /// Called by the loader on every parsed file and by the simulation
    /// builder on programmatically constructed templates, so malformed
    /// geometry is caught before any tick runs.
    pub fn validate(&self) -> ScenarioResult<()> {
        if self.world.w <= 0.0 || self.world.h <= 0.0 {
            return Err(ScenarioError::Invalid(format!(
                "scenario '{}': world must have positive size, got {}",
                self.id, self.world,
            )));
        }
        if self.spawn_regions.is_empty() || self.goal_regions.is_empty() {
            return Err(ScenarioError::Invalid(format!(
                "scenario '{}': needs at least one spawn region and one goal region",
                self.id,
            )));
        }
        if !self.world.contains(self.robot_start) || !self.world.contains(self.robot_goal) {
            return Err(ScenarioError::Invalid(format!(
                "scenario '{}': robot start/goal must lie inside the world",
                self.id,
            )));
        }
        let r = &self.randomization;
        if r.extra_obstacle_min > r.extra_obstacle_max
            || r.random_obstacle_min_size > r.random_obstacle_max_size
        {
            return Err(ScenarioError::Invalid(format!(
                "scenario '{}': randomization ranges must be min <= max",
                self.id,
            )));
        }
        Ok(())
    }

    /// Build a concrete [`Scenario`] for one episode.
    ///
    /// Without `randomize_world` this only clamps the configured obstacles
    /// into the world.  With it, every obstacle is jittered in position and
    /// size, and [`Randomization::extra_obstacle_max`] rejection-sampled
    /// extra obstacles are added, keeping the robot start and goal clear.
    pub fn build(&self, rng: &mut SimRng, randomize_world: bool) -> Scenario {
        let obstacles = if randomize_world {
            let mut obstacles: Vec<Rect> = self
                .obstacles
                .iter()
                .map(|&rect| self.jittered_obstacle(rect, rng))
                .collect();
            self.sample_extra_obstacles(&mut obstacles, rng);
            obstacles
        } else {
            self.obstacles
                .iter()
                .map(|r| r.clamped_to(self.world, MIN_OBSTACLE_SIZE))
                .collect()
        };

        Scenario {
            id:            self.id.clone(),
            name:          self.name.clone(),
            world:         self.world,
            robot_start:   self.robot_start,
            robot_goal:    self.robot_goal,
            obstacles,
            spawn_regions: self.spawn_regions.clone(),
            goal_regions:  self.goal_regions.clone(),
        }
    }

    fn jittered_obstacle(&self, rect: Rect, rng: &mut SimRng) -> Rect {
        let r = &self.randomization;
        let mut out = rect;
        if r.obstacle_jitter_px > 0.0 {
            out.x += rng.gen_range(-r.obstacle_jitter_px..=r.obstacle_jitter_px);
            out.y += rng.gen_range(-r.obstacle_jitter_px..=r.obstacle_jitter_px);
        }
        if r.obstacle_size_jitter_px > 0.0 {
            out.w += rng.gen_range(-r.obstacle_size_jitter_px..=r.obstacle_size_jitter_px);
            out.h += rng.gen_range(-r.obstacle_size_jitter_px..=r.obstacle_size_jitter_px);
        }
        out.clamped_to(self.world, MIN_OBSTACLE_SIZE)
    }

    /// Rejection-sample extra obstacles into `obstacles`.
    ///
    /// Each candidate must keep clear of the robot start and goal and must
    /// not touch an existing obstacle (inflated by a walkable gap).  A
    /// candidate that fails [`EXTRA_OBSTACLE_ATTEMPTS`] placements is
    /// dropped rather than forced.
    fn sample_extra_obstacles(&self, obstacles: &mut Vec<Rect>, rng: &mut SimRng) {
        let r = &self.randomization;
        if r.extra_obstacle_max == 0 {
            return;
        }
        let count = rng.gen_range(r.extra_obstacle_min..=r.extra_obstacle_max);
        for _ in 0..count {
            for _attempt in 0..EXTRA_OBSTACLE_ATTEMPTS {
                let w = rng.gen_range(r.random_obstacle_min_size..=r.random_obstacle_max_size);
                let h = rng.gen_range(r.random_obstacle_min_size..=r.random_obstacle_max_size);
                let x = rng.gen_range(0.0..(self.world.w - w).max(1.0));
                let y = rng.gen_range(0.0..(self.world.h - h).max(1.0));
                let rect = Rect::new(x, y, w, h).clamped_to(self.world, MIN_OBSTACLE_SIZE);

                if rect.intersects_circle(self.robot_start, START_GOAL_CLEARANCE) {
                    continue;
                }
                if rect.intersects_circle(self.robot_goal, START_GOAL_CLEARANCE) {
                    continue;
                }
                if obstacles
                    .iter()
                    .any(|o| rect.intersects(o.inflate(EXTRA_OBSTACLE_GAP, EXTRA_OBSTACLE_GAP)))
                {
                    continue;
                }
                obstacles.push(rect);
                break;
            }
        }
    }
}
