//! JSON scenario config loading.
//!
//! Each config file holds one scenario.  Rects are encoded as `[x, y, w, h]`
//! arrays and points as `[x, y]`, so the files stay hand-editable:
//!
//! ```json
//! {
//!   "id": "home",
//!   "name": "Home",
//!   "robot_start": [80, 80],
//!   "robot_goal": [880, 560],
//!   "obstacles": [[300, 120, 120, 60]],
//!   "pedestrian_spawn_regions": [[0, 480, 240, 160]],
//!   "pedestrian_goal_regions": [[720, 0, 240, 160]],
//!   "randomization": { "obstacle_jitter_px": 24 }
//! }
//! ```
//!
//! Every loaded template is validated before it is returned, so malformed
//! geometry fails at load time rather than mid-episode.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use nav_core::{Rect, Vec2};

use crate::{Randomization, ScenarioError, ScenarioResult, ScenarioTemplate};

/// World size used when a config file omits the `world` field.
const DEFAULT_WORLD: [f32; 2] = [960.0, 640.0];

// ── Raw JSON shapes ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawTemplate {
    id:   String,
    name: String,
    #[serde(default = "default_world")]
    world: [f32; 2],
    robot_start: [f32; 2],
    robot_goal:  [f32; 2],
    obstacles: Vec<[f32; 4]>,
    pedestrian_spawn_regions: Vec<[f32; 4]>,
    pedestrian_goal_regions:  Vec<[f32; 4]>,
    #[serde(default)]
    randomization: RawRandomization,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawRandomization {
    obstacle_jitter_px:      f32,
    obstacle_size_jitter_px: f32,
    extra_obstacle_min:      u32,
    extra_obstacle_max:      u32,
    random_obstacle_min_size: Option<f32>,
    random_obstacle_max_size: Option<f32>,
}

fn default_world() -> [f32; 2] {
    DEFAULT_WORLD
}

fn rect(raw: [f32; 4]) -> Rect {
    Rect::new(raw[0], raw[1], raw[2], raw[3])
}

impl From<RawTemplate> for ScenarioTemplate {
    fn from(raw: RawTemplate) -> Self {
        ScenarioTemplate {
            id:    raw.id,
            name:  raw.name,
            world: Rect::new(0.0, 0.0, raw.world[0], raw.world[1]),
            robot_start: Vec2::new(raw.robot_start[0], raw.robot_start[1]),
            robot_goal:  Vec2::new(raw.robot_goal[0], raw.robot_goal[1]),
            obstacles:     raw.obstacles.into_iter().map(rect).collect(),
            spawn_regions: raw.pedestrian_spawn_regions.into_iter().map(rect).collect(),
            goal_regions:  raw.pedestrian_goal_regions.into_iter().map(rect).collect(),
            randomization: Randomization {
                obstacle_jitter_px:      raw.randomization.obstacle_jitter_px,
                obstacle_size_jitter_px: raw.randomization.obstacle_size_jitter_px,
                extra_obstacle_min:      raw.randomization.extra_obstacle_min,
                extra_obstacle_max:      raw.randomization.extra_obstacle_max,
                random_obstacle_min_size: raw.randomization.random_obstacle_min_size.unwrap_or(35.0),
                random_obstacle_max_size: raw.randomization.random_obstacle_max_size.unwrap_or(110.0),
            },
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse a single scenario template from `reader`.
pub fn load_template_reader<R: Read>(reader: R) -> ScenarioResult<ScenarioTemplate> {
    let raw: RawTemplate = serde_json::from_reader(reader)?;
    let template = ScenarioTemplate::from(raw);
    template.validate()?;
    Ok(template)
}

/// Load every `*.json` file in `dir`, keyed by scenario id.
///
/// Files are read in sorted path order; an empty directory is an error
/// because a run cannot proceed without at least one template.
pub fn load_templates(dir: &Path) -> ScenarioResult<BTreeMap<String, ScenarioTemplate>> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut templates = BTreeMap::new();
    for path in paths {
        let template = load_template_reader(File::open(&path)?)?;
        templates.insert(template.id.clone(), template);
    }

    if templates.is_empty() {
        return Err(ScenarioError::NoTemplates(dir.to_path_buf()));
    }
    Ok(templates)
}

/// Look up a template by id with a listing of the available ids on failure.
pub fn select_template<'a>(
    templates: &'a BTreeMap<String, ScenarioTemplate>,
    id: &str,
) -> ScenarioResult<&'a ScenarioTemplate> {
    templates.get(id).ok_or_else(|| ScenarioError::UnknownScenario {
        wanted:    id.to_string(),
        available: templates.keys().cloned().collect::<Vec<_>>().join(", "),
    })
}
