//! The three stock scenario templates, mirroring the shipped JSON configs.
//!
//! Tests and callers that don't want file I/O use these constructors; the
//! `configs/` directory holds the same layouts for the config-driven path.

use std::collections::BTreeMap;

use nav_core::{Rect, Vec2};

use crate::{Randomization, ScenarioTemplate};

fn world() -> Rect {
    Rect::new(0.0, 0.0, 960.0, 640.0)
}

/// A living room: sparse furniture, pedestrians drifting door to door.
pub fn home() -> ScenarioTemplate {
    ScenarioTemplate {
        id:    "home".into(),
        name:  "Home".into(),
        world: world(),
        robot_start: Vec2::new(80.0, 80.0),
        robot_goal:  Vec2::new(880.0, 560.0),
        obstacles: vec![
            Rect::new(280.0, 140.0, 150.0, 70.0),
            Rect::new(560.0, 300.0, 90.0, 180.0),
            Rect::new(180.0, 420.0, 120.0, 90.0),
        ],
        spawn_regions: vec![
            Rect::new(0.0, 480.0, 240.0, 160.0),
            Rect::new(720.0, 0.0, 240.0, 160.0),
        ],
        goal_regions: vec![
            Rect::new(720.0, 480.0, 240.0, 160.0),
            Rect::new(0.0, 0.0, 240.0, 160.0),
        ],
        randomization: Randomization {
            obstacle_jitter_px:      18.0,
            obstacle_size_jitter_px: 12.0,
            extra_obstacle_min:      0,
            extra_obstacle_max:      2,
            random_obstacle_min_size: 35.0,
            random_obstacle_max_size: 90.0,
        },
    }
}

/// A terminal hall: two long check-in islands, heavy cross-traffic.
pub fn airport() -> ScenarioTemplate {
    ScenarioTemplate {
        id:    "airport".into(),
        name:  "Airport".into(),
        world: world(),
        robot_start: Vec2::new(60.0, 320.0),
        robot_goal:  Vec2::new(900.0, 320.0),
        obstacles: vec![
            Rect::new(240.0, 100.0, 480.0, 60.0),
            Rect::new(240.0, 480.0, 480.0, 60.0),
            Rect::new(450.0, 270.0, 60.0, 100.0),
        ],
        spawn_regions: vec![
            Rect::new(0.0, 0.0, 200.0, 120.0),
            Rect::new(760.0, 520.0, 200.0, 120.0),
            Rect::new(0.0, 520.0, 200.0, 120.0),
        ],
        goal_regions: vec![
            Rect::new(760.0, 0.0, 200.0, 120.0),
            Rect::new(380.0, 180.0, 200.0, 120.0),
        ],
        randomization: Randomization {
            obstacle_jitter_px:      24.0,
            obstacle_size_jitter_px: 16.0,
            extra_obstacle_min:      1,
            extra_obstacle_max:      3,
            random_obstacle_min_size: 35.0,
            random_obstacle_max_size: 110.0,
        },
    }
}

/// A mall concourse: shop-front blocks along both walls, a center kiosk.
pub fn shopping_center() -> ScenarioTemplate {
    ScenarioTemplate {
        id:    "shopping_center".into(),
        name:  "Shopping Center".into(),
        world: world(),
        robot_start: Vec2::new(480.0, 600.0),
        robot_goal:  Vec2::new(480.0, 50.0),
        obstacles: vec![
            Rect::new(120.0, 160.0, 160.0, 100.0),
            Rect::new(680.0, 160.0, 160.0, 100.0),
            Rect::new(120.0, 380.0, 160.0, 100.0),
            Rect::new(680.0, 380.0, 160.0, 100.0),
            Rect::new(430.0, 280.0, 100.0, 80.0),
        ],
        spawn_regions: vec![
            Rect::new(0.0, 240.0, 100.0, 160.0),
            Rect::new(860.0, 240.0, 100.0, 160.0),
        ],
        goal_regions: vec![
            Rect::new(360.0, 0.0, 240.0, 100.0),
            Rect::new(360.0, 540.0, 240.0, 100.0),
        ],
        randomization: Randomization {
            obstacle_jitter_px:      24.0,
            obstacle_size_jitter_px: 16.0,
            extra_obstacle_min:      1,
            extra_obstacle_max:      2,
            random_obstacle_min_size: 40.0,
            random_obstacle_max_size: 110.0,
        },
    }
}

/// All stock templates keyed by id, in the same shape `load_templates`
/// returns.
pub fn all() -> BTreeMap<String, ScenarioTemplate> {
    [home(), airport(), shopping_center()]
        .into_iter()
        .map(|t| (t.id.clone(), t))
        .collect()
}
