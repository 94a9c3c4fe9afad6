//! Unit tests for nav-crowd.

use nav_core::{GoalPolicy, Rect, SimRng, Vec2};
use nav_scenario::{builtin, Scenario};

use crate::{CrowdEngine, PedestrianParams, PedestrianState};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// An obstacle-free 960×640 world with one spawn region (left) and one goal
/// region (right).
fn open_scenario() -> Scenario {
    let mut template = builtin::home();
    template.obstacles.clear();
    template.spawn_regions = vec![Rect::new(0.0, 240.0, 160.0, 160.0)];
    template.goal_regions = vec![Rect::new(800.0, 240.0, 160.0, 160.0)];
    template.build(&mut SimRng::new(0), false)
}

fn engine(goal_policy: GoalPolicy) -> CrowdEngine {
    CrowdEngine::new(PedestrianParams::default(), goal_policy)
}

// ── Speed clamp ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod speed_clamp {
    use super::*;

    #[test]
    fn holds_after_one_update_from_extreme_velocity() {
        let scenario = open_scenario();
        let mut rng = SimRng::new(1);
        let mut eng = engine(GoalPolicy::Freeze);
        eng.states = vec![PedestrianState {
            pos:  Vec2::new(480.0, 320.0),
            vel:  Vec2::new(1_000.0, -1_000.0),
            goal: Vec2::new(900.0, 320.0),
        }];

        eng.step(&scenario, 1.0, &mut rng);
        let max = eng.params.max_speed;
        assert!(
            eng.states[0].vel.length() <= max + 1e-4,
            "speed {} exceeds clamp {max}",
            eng.states[0].vel.length()
        );
    }

    #[test]
    fn holds_for_every_pedestrian_in_a_crowd() {
        let scenario = open_scenario();
        let mut rng = SimRng::new(2);
        let mut eng = engine(GoalPolicy::Respawn);
        eng.reset(&scenario, 20, &mut rng);
        for _ in 0..50 {
            eng.step(&scenario, 1.0, &mut rng);
            for ped in &eng.states {
                assert!(ped.vel.length() <= eng.params.max_speed + 1e-4);
            }
        }
    }
}

// ── Force behavior ────────────────────────────────────────────────────────────

#[cfg(test)]
mod forces {
    use super::*;

    #[test]
    fn lone_pedestrian_converges_on_its_goal() {
        let scenario = open_scenario();
        let mut rng = SimRng::new(3);
        let mut eng = engine(GoalPolicy::Freeze);
        let goal = Vec2::new(500.0, 320.0);
        eng.states = vec![PedestrianState::at_rest(Vec2::new(100.0, 320.0), goal)];

        for _ in 0..400 {
            eng.step(&scenario, 1.0, &mut rng);
        }
        assert!(
            eng.states[0].has_reached_goal(eng.params.goal_epsilon),
            "pedestrian stalled at {}",
            eng.states[0].pos
        );
        // Frozen on arrival.
        assert_eq!(eng.states[0].vel, Vec2::ZERO);
    }

    #[test]
    fn overlapping_pedestrians_push_apart() {
        let scenario = open_scenario();
        let mut rng = SimRng::new(4);
        let mut eng = engine(GoalPolicy::Freeze);
        eng.states = vec![
            PedestrianState::at_rest(Vec2::new(478.0, 320.0), Vec2::new(900.0, 310.0)),
            PedestrianState::at_rest(Vec2::new(483.0, 320.0), Vec2::new(900.0, 330.0)),
        ];
        let before = eng.states[0].pos.distance(eng.states[1].pos);

        eng.step(&scenario, 1.0, &mut rng);
        let after = eng.states[0].pos.distance(eng.states[1].pos);
        assert!(after > before, "repulsion failed: {before} -> {after}");
    }

    #[test]
    fn repulsion_is_negligible_at_range() {
        let scenario = open_scenario();
        let goal = Vec2::new(900.0, 320.0);

        // Same pedestrian alone vs. with a far-away neighbor.
        let mut lone = engine(GoalPolicy::Freeze);
        lone.states = vec![PedestrianState::at_rest(Vec2::new(200.0, 320.0), goal)];
        lone.step(&scenario, 1.0, &mut SimRng::new(5));

        let mut paired = engine(GoalPolicy::Freeze);
        paired.states = vec![
            PedestrianState::at_rest(Vec2::new(200.0, 320.0), goal),
            PedestrianState::at_rest(Vec2::new(200.0, 100.0), Vec2::new(200.0, 90.0)),
        ];
        paired.step(&scenario, 1.0, &mut SimRng::new(5));

        let diff = (lone.states[0].vel - paired.states[0].vel).length();
        assert!(diff < 1e-3, "distant neighbor changed velocity by {diff}");
    }

    #[test]
    fn wall_term_is_inert_at_zero_gain() {
        let scenario = open_scenario();
        let start = Vec2::new(12.0, 320.0); // hugging the left wall
        let goal = Vec2::new(12.0, 600.0);

        let mut eng = engine(GoalPolicy::Freeze);
        assert_eq!(eng.params.wall_gain, 0.0);
        eng.states = vec![PedestrianState::at_rest(start, goal)];
        eng.step(&scenario, 1.0, &mut SimRng::new(6));
        assert_eq!(eng.states[0].vel.x, 0.0, "zero-gain wall term must not push");
    }

    #[test]
    fn wall_term_pushes_inward_when_enabled() {
        let scenario = open_scenario();
        let start = Vec2::new(12.0, 320.0);
        let goal = Vec2::new(12.0, 600.0);

        let mut eng = engine(GoalPolicy::Freeze);
        eng.params.wall_gain = 2.0;
        eng.states = vec![PedestrianState::at_rest(start, goal)];
        eng.step(&scenario, 1.0, &mut SimRng::new(6));
        assert!(eng.states[0].vel.x > 0.0, "left wall should push right");
    }
}

// ── Goal policies ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod goal_policies {
    use super::*;

    #[test]
    fn respawn_replaces_arrival_with_fresh_route() {
        let scenario = open_scenario();
        let mut rng = SimRng::new(7);
        let mut eng = engine(GoalPolicy::Respawn);
        let goal = Vec2::new(850.0, 320.0);
        eng.states = vec![PedestrianState::at_rest(goal, goal)]; // already there

        eng.step(&scenario, 1.0, &mut rng);
        let ped = &eng.states[0];
        assert!(
            scenario.spawn_regions.iter().any(|r| r.contains(ped.pos)),
            "respawned pedestrian at {} is outside the spawn regions",
            ped.pos
        );
        assert_eq!(ped.vel, Vec2::ZERO);
        assert!(!ped.has_reached_goal(eng.params.goal_epsilon));
    }

    #[test]
    fn freeze_parks_arrival_in_place() {
        let scenario = open_scenario();
        let mut rng = SimRng::new(8);
        let mut eng = engine(GoalPolicy::Freeze);
        let goal = Vec2::new(850.0, 320.0);
        eng.states = vec![PedestrianState {
            pos:  goal,
            vel:  Vec2::new(2.0, 0.0),
            goal,
        }];

        eng.step(&scenario, 1.0, &mut rng);
        assert_eq!(eng.states[0].pos, goal);
        assert_eq!(eng.states[0].vel, Vec2::ZERO);
    }

    #[test]
    fn both_policies_are_deterministic() {
        let scenario = open_scenario();
        for policy in [GoalPolicy::Respawn, GoalPolicy::Freeze] {
            let run = |seed: u64| {
                let mut rng = SimRng::new(seed);
                let mut eng = engine(policy);
                eng.reset(&scenario, 8, &mut rng);
                for _ in 0..100 {
                    eng.step(&scenario, 1.0, &mut rng);
                }
                eng.states
            };
            assert_eq!(run(42), run(42));
        }
    }
}

// ── Obstacles and bounds ──────────────────────────────────────────────────────

#[cfg(test)]
mod obstacles {
    use super::*;

    fn walled_scenario() -> Scenario {
        let mut template = builtin::home();
        template.obstacles = vec![Rect::new(400.0, 0.0, 60.0, 640.0)]; // full-height wall
        template.spawn_regions = vec![Rect::new(0.0, 240.0, 160.0, 160.0)];
        template.goal_regions = vec![Rect::new(800.0, 240.0, 160.0, 160.0)];
        template.build(&mut SimRng::new(0), false)
    }

    #[test]
    fn pedestrian_does_not_sink_into_obstacle() {
        let scenario = walled_scenario();
        let mut rng = SimRng::new(9);
        let mut eng = engine(GoalPolicy::Freeze);
        // Charging straight at the wall.
        eng.states = vec![PedestrianState {
            pos:  Vec2::new(380.0, 320.0),
            vel:  Vec2::new(3.0, 0.0),
            goal: Vec2::new(900.0, 320.0),
        }];

        for _ in 0..200 {
            eng.step(&scenario, 1.0, &mut rng);
            let pos = eng.states[0].pos;
            assert!(
                !scenario.obstacles[0].intersects_circle(pos, eng.params.radius - 1e-3),
                "pedestrian center sank into the wall at {pos}"
            );
        }
    }

    #[test]
    fn positions_stay_inside_world() {
        let scenario = open_scenario();
        let mut rng = SimRng::new(10);
        let mut eng = engine(GoalPolicy::Respawn);
        eng.reset(&scenario, 15, &mut rng);
        for _ in 0..300 {
            eng.step(&scenario, 1.0, &mut rng);
            for ped in &eng.states {
                let r = eng.params.radius;
                assert!(ped.pos.x >= r && ped.pos.x <= 960.0 - r);
                assert!(ped.pos.y >= r && ped.pos.y <= 640.0 - r);
            }
        }
    }
}

// ── Reset ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reset {
    use super::*;

    #[test]
    fn spawns_requested_count_inside_spawn_regions() {
        let scenario = open_scenario();
        let mut rng = SimRng::new(11);
        let mut eng = engine(GoalPolicy::Respawn);
        eng.reset(&scenario, 12, &mut rng);
        assert_eq!(eng.states.len(), 12);
        for ped in &eng.states {
            assert!(scenario.spawn_regions.iter().any(|r| r.contains(ped.pos)));
            assert!(scenario.goal_regions.iter().any(|r| r.contains(ped.goal)));
            assert_eq!(ped.vel, Vec2::ZERO);
        }
    }
}
