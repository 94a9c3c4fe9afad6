//! A concrete built world and pedestrian route sampling.

use nav_core::{Rect, SimRng, Vec2};

/// Margin kept from region edges when sampling spawn/goal points.
const REGION_MARGIN: f32 = 12.0;

/// One episode's concrete world: the template's layout after any
/// randomization has been applied.
///
/// Immutable for the lifetime of the episode; the episode loop rebuilds it
/// from the template at each reset.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub id:            String,
    pub name:          String,
    pub world:         Rect,
    pub robot_start:   Vec2,
    pub robot_goal:    Vec2,
    pub obstacles:     Vec<Rect>,
    pub spawn_regions: Vec<Rect>,
    pub goal_regions:  Vec<Rect>,
}

impl Scenario {
    /// Sample a pedestrian route: a spawn point from a random spawn region
    /// and a goal point from a random goal region.
    ///
    /// Region lists are non-empty by template validation, so the `choose`
    /// calls cannot fail.
    pub fn sample_route(&self, rng: &mut SimRng) -> (Vec2, Vec2) {
        let spawn_region = *rng.choose(&self.spawn_regions).expect("validated non-empty");
        let goal_region = *rng.choose(&self.goal_regions).expect("validated non-empty");
        (
            random_point_in_region(spawn_region, rng),
            random_point_in_region(goal_region, rng),
        )
    }
}

/// Uniform point inside `region`, inset by [`REGION_MARGIN`] on every side.
///
/// Regions narrower than twice the margin collapse to their center line
/// rather than inverting the sampling range.
pub fn random_point_in_region(region: Rect, rng: &mut SimRng) -> Vec2 {
    let (left, right) = inset_span(region.left(), region.right());
    let (top, bottom) = inset_span(region.top(), region.bottom());
    Vec2::new(rng.gen_range(left..=right), rng.gen_range(top..=bottom))
}

fn inset_span(lo: f32, hi: f32) -> (f32, f32) {
    if hi - lo > 2.0 * REGION_MARGIN {
        (lo + REGION_MARGIN, hi - REGION_MARGIN)
    } else {
        let mid = (lo + hi) * 0.5;
        (mid, mid)
    }
}
