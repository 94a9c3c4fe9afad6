//! The crowd engine: force evaluation and the two-phase per-tick update.

use nav_core::geom::EPSILON;
use nav_core::{GoalPolicy, SimRng, Vec2};
use nav_scenario::Scenario;

use crate::{PedestrianParams, PedestrianState};

/// Velocity retained (and inverted) when a pedestrian is blocked on both
/// axes by an obstacle.
const BACKOFF_FACTOR: f32 = -0.4;

/// Per-axis magnitude of the seeded heading perturbation applied on back-off.
const BACKOFF_JITTER: f32 = 0.2;

/// Owns the pedestrian population of one episode and advances it each tick.
///
/// Forces are treated as force-per-unit-mass, so the summed terms integrate
/// directly as acceleration: `v += f · dt`, clamp, `p += v · dt`.
pub struct CrowdEngine {
    /// Force-model constants shared by the whole crowd.
    pub params: PedestrianParams,

    /// Pedestrian-at-goal handling, fixed per run.
    pub goal_policy: GoalPolicy,

    /// All pedestrian states, indexed by `PedId`.
    pub states: Vec<PedestrianState>,
}

impl CrowdEngine {
    pub fn new(params: PedestrianParams, goal_policy: GoalPolicy) -> Self {
        Self { params, goal_policy, states: Vec::new() }
    }

    /// Discard the current crowd and spawn `count` pedestrians on routes
    /// sampled from the scenario's spawn/goal regions.
    pub fn reset(&mut self, scenario: &Scenario, count: usize, rng: &mut SimRng) {
        self.states.clear();
        self.states.reserve(count);
        for _ in 0..count {
            let (spawn, goal) = scenario.sample_route(rng);
            self.states.push(PedestrianState::at_rest(spawn, goal));
        }
    }

    /// Advance the whole crowd by one tick.
    ///
    /// Phase 1 computes every pedestrian's next state from the current
    /// snapshot; phase 2 commits them all, then applies the goal policy to
    /// arrivals.  `rng` is consumed in ascending pedestrian order only, so
    /// the update is deterministic.
    pub fn step(&mut self, scenario: &Scenario, dt: f32, rng: &mut SimRng) {
        let snapshot = self.states.clone();

        let next: Vec<PedestrianState> = snapshot
            .iter()
            .enumerate()
            .map(|(i, ped)| self.integrate(i, ped, &snapshot, scenario, dt, rng))
            .collect();
        self.states = next;

        match self.goal_policy {
            GoalPolicy::Respawn => self.respawn_arrivals(scenario, rng),
            GoalPolicy::Freeze  => {} // arrivals already skipped integration
        }
    }

    // ── Force terms ───────────────────────────────────────────────────────

    /// Goal-seeking force: exponential convergence of the velocity onto
    /// `preferred_speed` toward the goal.
    fn goal_force(&self, ped: &PedestrianState) -> Vec2 {
        let to_goal = ped.goal - ped.pos;
        if to_goal.length() < EPSILON {
            return Vec2::ZERO;
        }
        let desired = to_goal.normalize() * self.params.preferred_speed;
        (desired - ped.vel) * (1.0 / self.params.relaxation_time)
    }

    /// Exponentially decaying repulsion from every other pedestrian.
    fn pedestrian_repulsion(&self, i: usize, ped: &PedestrianState, crowd: &[PedestrianState]) -> Vec2 {
        let p = &self.params;
        let contact = 2.0 * p.radius;
        let mut force = Vec2::ZERO;
        for (j, other) in crowd.iter().enumerate() {
            if j == i {
                continue;
            }
            let offset = ped.pos - other.pos;
            let dist = offset.length().max(EPSILON);
            let magnitude = p.repulsion_gain * ((contact - dist) / p.repulsion_range).exp();
            force += offset * (magnitude / dist);
        }
        force
    }

    /// Repulsion from the world boundary walls and the nearest point of each
    /// obstacle.  Scaled by `wall_gain`, zero by default; the term always
    /// has its place in the force sum.
    fn boundary_repulsion(&self, ped: &PedestrianState, scenario: &Scenario) -> Vec2 {
        let p = &self.params;
        if p.wall_gain == 0.0 {
            return Vec2::ZERO;
        }

        let world = scenario.world;
        // (distance to wall, inward normal)
        let walls = [
            (ped.pos.x - world.left(),   Vec2::new(1.0, 0.0)),
            (world.right() - ped.pos.x,  Vec2::new(-1.0, 0.0)),
            (ped.pos.y - world.top(),    Vec2::new(0.0, 1.0)),
            (world.bottom() - ped.pos.y, Vec2::new(0.0, -1.0)),
        ];

        let mut force = Vec2::ZERO;
        for (dist, normal) in walls {
            let dist = dist.max(EPSILON);
            force += normal * (p.wall_gain * ((p.radius - dist) / p.wall_range).exp());
        }

        for obstacle in &scenario.obstacles {
            let offset = ped.pos - obstacle.nearest_point(ped.pos);
            let dist = offset.length();
            if dist < EPSILON {
                continue; // center inside the obstacle: no usable normal
            }
            let magnitude = p.wall_gain * ((p.radius - dist) / p.wall_range).exp();
            force += offset * (magnitude / dist);
        }
        force
    }

    // ── Integration ───────────────────────────────────────────────────────

    fn integrate(
        &self,
        i:        usize,
        ped:      &PedestrianState,
        crowd:    &[PedestrianState],
        scenario: &Scenario,
        dt:       f32,
        rng:      &mut SimRng,
    ) -> PedestrianState {
        if self.goal_policy == GoalPolicy::Freeze && ped.has_reached_goal(self.params.goal_epsilon) {
            return PedestrianState { vel: Vec2::ZERO, ..*ped };
        }

        let force = self.goal_force(ped)
            + self.pedestrian_repulsion(i, ped, crowd)
            + self.boundary_repulsion(ped, scenario);

        let mut vel = (ped.vel + force * dt).clamp_length(self.params.max_speed);
        let proposed = ped.pos + vel * dt;

        let pos = if self.collides(proposed, scenario) {
            self.slide(ped.pos, proposed, &mut vel, scenario, dt, rng)
        } else {
            proposed
        };

        PedestrianState {
            pos: clamp_to_world(pos, scenario, self.params.radius),
            vel,
            goal: ped.goal,
        }
    }

    fn collides(&self, pos: Vec2, scenario: &Scenario) -> bool {
        scenario
            .obstacles
            .iter()
            .any(|o| o.intersects_circle(pos, self.params.radius))
    }

    /// Axis-separated obstacle resolution: keep the free axis of motion.
    /// When both axes are blocked, back off and slightly perturb the heading
    /// from the run RNG.
    fn slide(
        &self,
        old: Vec2,
        proposed: Vec2,
        vel: &mut Vec2,
        scenario: &Scenario,
        dt: f32,
        rng: &mut SimRng,
    ) -> Vec2 {
        let x_only = Vec2::new(proposed.x, old.y);
        if !self.collides(x_only, scenario) {
            return x_only;
        }
        let y_only = Vec2::new(old.x, proposed.y);
        if !self.collides(y_only, scenario) {
            return y_only;
        }

        *vel = *vel * BACKOFF_FACTOR
            + Vec2::new(
                rng.gen_range(-BACKOFF_JITTER..=BACKOFF_JITTER),
                rng.gen_range(-BACKOFF_JITTER..=BACKOFF_JITTER),
            );
        old + *vel * dt
    }

    /// Replace every pedestrian that reached its goal with a fresh route.
    fn respawn_arrivals(&mut self, scenario: &Scenario, rng: &mut SimRng) {
        for ped in &mut self.states {
            if ped.has_reached_goal(self.params.goal_epsilon) {
                let (spawn, goal) = scenario.sample_route(rng);
                *ped = PedestrianState::at_rest(spawn, goal);
            }
        }
    }
}

/// Clamp a position so the collision circle stays inside the world.
fn clamp_to_world(pos: Vec2, scenario: &Scenario, radius: f32) -> Vec2 {
    let world = scenario.world;
    Vec2::new(
        pos.x.clamp(world.left() + radius, world.right() - radius),
        pos.y.clamp(world.top() + radius, world.bottom() - radius),
    )
}
