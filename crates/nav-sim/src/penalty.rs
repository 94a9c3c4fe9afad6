//! The proximity and overlap penalty model.

use nav_core::{NavError, NavResult, PedId};
use nav_policy::WorldState;

// ── Tiers ─────────────────────────────────────────────────────────────────────

/// One row of the overlap penalty table.
///
/// A collision with depth ratio below `max_depth_ratio` (and above the
/// previous tier's bound) incurs `penalty`.  The last tier also covers every
/// deeper overlap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PenaltyTier {
    pub max_depth_ratio: f32,
    pub penalty: f32,
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Which rule a pedestrian triggered this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PenaltyKind {
    /// Inside the near radius but not overlapping: a personal-space
    /// incursion.
    Intrusion,
    /// Collision circles overlap.
    Collision,
}

/// One pedestrian's contribution to a tick's penalty.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PenaltyEvent {
    pub ped: PedId,
    pub kind: PenaltyKind,
    pub penalty: f32,
}

/// The scored outcome of one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepPenalty {
    /// Sum of all event penalties.
    pub total: f32,
    /// Per-pedestrian events, in `PedId` order.
    pub events: Vec<PenaltyEvent>,
}

impl StepPenalty {
    pub fn count(&self, kind: PenaltyKind) -> u64 {
        self.events.iter().filter(|e| e.kind == kind).count() as u64
    }
}

// ── PenaltyModel ──────────────────────────────────────────────────────────────

/// Scores the joint robot/pedestrian state after each tick.
///
/// Every pedestrian is classified independently and all penalties accumulate:
/// an overlapping pedestrian incurs its tier penalty, a near-but-separate one
/// the flat near penalty.  The near boundary is exclusive — a pedestrian at
/// exactly `near_radius` incurs nothing.
#[derive(Clone, Debug)]
pub struct PenaltyModel {
    /// Center distance below which a non-overlapping pedestrian counts as an
    /// intrusion (strict `<`).
    pub near_radius: f32,
    /// Flat penalty per intrusion.
    pub near_penalty: f32,
    /// Robot-to-goal distance that ends the episode successfully.
    pub goal_radius: f32,
    tiers: Vec<PenaltyTier>,
}

impl Default for PenaltyModel {
    fn default() -> Self {
        // Statically known-good table; `new` guards caller-supplied ones.
        Self {
            near_radius:  48.0,
            near_penalty: 0.1,
            goal_radius:  20.0,
            tiers: vec![
                PenaltyTier { max_depth_ratio: 0.33, penalty: 0.5 },
                PenaltyTier { max_depth_ratio: 0.66, penalty: 1.0 },
                PenaltyTier { max_depth_ratio: 1.0,  penalty: 1.5 },
            ],
        }
    }
}

impl PenaltyModel {
    /// Build a model from a caller-supplied tier table.
    ///
    /// The table must be non-empty, with strictly increasing depth bounds and
    /// non-decreasing penalties — deeper overlap may never cost less.
    pub fn new(
        near_radius: f32,
        near_penalty: f32,
        goal_radius: f32,
        tiers: Vec<PenaltyTier>,
    ) -> NavResult<Self> {
        if tiers.is_empty() {
            return Err(NavError::Config("penalty tier table must not be empty".into()));
        }
        for pair in tiers.windows(2) {
            if pair[1].max_depth_ratio <= pair[0].max_depth_ratio {
                return Err(NavError::Config(
                    "penalty tier depth bounds must be strictly increasing".into(),
                ));
            }
            if pair[1].penalty < pair[0].penalty {
                return Err(NavError::Config(
                    "penalty may not decrease with overlap depth".into(),
                ));
            }
        }
        Ok(Self { near_radius, near_penalty, goal_radius, tiers })
    }

    /// The tier penalty for an overlap of `depth_ratio ∈ [0, 1]`.
    pub fn overlap_penalty(&self, depth_ratio: f32) -> f32 {
        for tier in &self.tiers {
            if depth_ratio < tier.max_depth_ratio {
                return tier.penalty;
            }
        }
        // Full-depth overlap falls through to the deepest tier.
        self.tiers.last().map(|t| t.penalty).unwrap_or(0.0)
    }

    /// Score one tick's joint state.
    ///
    /// Pure with respect to the world: counters live in `EpisodeStats`, which
    /// the episode loop updates from the returned events.
    pub fn score(&self, world: &WorldState<'_>) -> StepPenalty {
        let robot = world.robot;
        let contact = robot.params.radius + world.ped_radius;

        let mut out = StepPenalty::default();
        for (i, ped) in world.pedestrians.iter().enumerate() {
            let distance = robot.pos.distance(ped.pos);

            let event = if distance < contact {
                let depth_ratio = (contact - distance) / contact;
                PenaltyEvent {
                    ped:     PedId(i as u32),
                    kind:    PenaltyKind::Collision,
                    penalty: self.overlap_penalty(depth_ratio),
                }
            } else if distance < self.near_radius {
                PenaltyEvent {
                    ped:     PedId(i as u32),
                    kind:    PenaltyKind::Intrusion,
                    penalty: self.near_penalty,
                }
            } else {
                continue;
            };

            out.total += event.penalty;
            out.events.push(event);
        }
        out
    }
}
