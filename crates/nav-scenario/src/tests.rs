//! Unit tests for nav-scenario.

use nav_core::{Rect, SimRng, Vec2};

use crate::{builtin, load_template_reader, select_template, ScenarioError, ScenarioTemplate};

fn rng() -> SimRng {
    SimRng::new(123)
}

// ── Template validation ───────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn builtins_are_valid() {
        for (_, template) in builtin::all() {
            template.validate().unwrap();
        }
    }

    #[test]
    fn empty_spawn_regions_rejected() {
        let mut t = builtin::home();
        t.spawn_regions.clear();
        assert!(matches!(t.validate(), Err(ScenarioError::Invalid(_))));
    }

    #[test]
    fn out_of_world_goal_rejected() {
        let mut t = builtin::home();
        t.robot_goal = Vec2::new(5_000.0, 0.0);
        assert!(t.validate().is_err());
    }

    #[test]
    fn zero_size_world_rejected() {
        let mut t = builtin::home();
        t.world = Rect::new(0.0, 0.0, 0.0, 640.0);
        assert!(t.validate().is_err());
    }
}

// ── Building ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod building {
    use super::*;

    #[test]
    fn plain_build_copies_layout() {
        let template = builtin::home();
        let scenario = template.build(&mut rng(), false);
        assert_eq!(scenario.obstacles, template.obstacles);
        assert_eq!(scenario.robot_start, template.robot_start);
        assert_eq!(scenario.robot_goal, template.robot_goal);
    }

    #[test]
    fn randomized_build_keeps_obstacles_in_world() {
        let template = builtin::airport();
        for seed in 0..20 {
            let scenario = template.build(&mut SimRng::new(seed), true);
            for o in &scenario.obstacles {
                assert!(o.left() >= 0.0 && o.right() <= 960.0, "obstacle {o} out of world");
                assert!(o.top() >= 0.0 && o.bottom() <= 640.0, "obstacle {o} out of world");
            }
            // Base obstacles survive (extras only ever add).
            assert!(scenario.obstacles.len() >= template.obstacles.len());
        }
    }

    #[test]
    fn randomized_build_keeps_start_and_goal_clear() {
        let template = builtin::airport();
        for seed in 0..20 {
            let scenario = template.build(&mut SimRng::new(seed), true);
            // Extra obstacles (past the base layout) must not cover start/goal.
            for o in &scenario.obstacles[template.obstacles.len()..] {
                assert!(!o.intersects_circle(template.robot_start, 45.0));
                assert!(!o.intersects_circle(template.robot_goal, 45.0));
            }
        }
    }

    #[test]
    fn build_is_deterministic_per_seed() {
        let template = builtin::shopping_center();
        let a = template.build(&mut SimRng::new(9), true);
        let b = template.build(&mut SimRng::new(9), true);
        assert_eq!(a, b);
    }
}

// ── Route sampling ────────────────────────────────────────────────────────────

#[cfg(test)]
mod routes {
    use super::*;

    #[test]
    fn routes_land_inside_regions() {
        let scenario = builtin::home().build(&mut rng(), false);
        let mut rng = rng();
        for _ in 0..100 {
            let (spawn, goal) = scenario.sample_route(&mut rng);
            assert!(
                scenario.spawn_regions.iter().any(|r| r.contains(spawn)),
                "spawn {spawn} outside all spawn regions"
            );
            assert!(
                scenario.goal_regions.iter().any(|r| r.contains(goal)),
                "goal {goal} outside all goal regions"
            );
        }
    }

    #[test]
    fn narrow_region_collapses_to_center() {
        let mut template = builtin::home();
        template.spawn_regions = vec![Rect::new(100.0, 100.0, 10.0, 10.0)];
        let scenario = template.build(&mut rng(), false);
        let mut rng = rng();
        let (spawn, _) = scenario.sample_route(&mut rng);
        assert_eq!(spawn, Vec2::new(105.0, 105.0));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    const HOME_JSON: &str = r#"{
        "id": "home",
        "name": "Home",
        "robot_start": [80, 80],
        "robot_goal": [880, 560],
        "obstacles": [[280, 140, 150, 70]],
        "pedestrian_spawn_regions": [[0, 480, 240, 160]],
        "pedestrian_goal_regions": [[720, 0, 240, 160]],
        "randomization": { "obstacle_jitter_px": 18, "extra_obstacle_max": 2 }
    }"#;

    #[test]
    fn parses_full_template() {
        let t = load_template_reader(HOME_JSON.as_bytes()).unwrap();
        assert_eq!(t.id, "home");
        assert_eq!(t.world, Rect::new(0.0, 0.0, 960.0, 640.0));
        assert_eq!(t.obstacles, vec![Rect::new(280.0, 140.0, 150.0, 70.0)]);
        assert_eq!(t.randomization.obstacle_jitter_px, 18.0);
        assert_eq!(t.randomization.extra_obstacle_max, 2);
        // Unspecified randomization knobs fall back to defaults.
        assert_eq!(t.randomization.random_obstacle_min_size, 35.0);
    }

    #[test]
    fn missing_required_field_errors() {
        let bad = r#"{ "id": "x", "name": "X" }"#;
        assert!(matches!(
            load_template_reader(bad.as_bytes()),
            Err(ScenarioError::Json(_))
        ));
    }

    #[test]
    fn invalid_geometry_rejected_at_load() {
        let bad = r#"{
            "id": "x", "name": "X",
            "robot_start": [80, 80], "robot_goal": [9999, 560],
            "obstacles": [],
            "pedestrian_spawn_regions": [[0, 0, 100, 100]],
            "pedestrian_goal_regions": [[0, 0, 100, 100]]
        }"#;
        assert!(matches!(
            load_template_reader(bad.as_bytes()),
            Err(ScenarioError::Invalid(_))
        ));
    }

    #[test]
    fn select_unknown_lists_available() {
        let templates = builtin::all();
        let err = select_template(&templates, "moon_base").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("moon_base"));
        assert!(msg.contains("home"));
    }

    #[test]
    fn select_known_returns_template() {
        let templates = builtin::all();
        let t: &ScenarioTemplate = select_template(&templates, "airport").unwrap();
        assert_eq!(t.name, "Airport");
    }
}
