//! Spawn timing and stage-dependent spawn selection

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::entity::{Behavior, Entity};
use crate::Tuning;

/// Spawn timer plus the once-per-stage item flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnPolicy {
    /// Frames until the next spawn attempt
    pub countdown: u32,
    /// This stage's healing item has already appeared
    pub item_spawned: bool,
}

impl SpawnPolicy {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            countdown: tuning.stage1_spawn_interval,
            item_spawned: false,
        }
    }

    /// Fresh stage: short lead-in, item available again
    pub fn on_stage_start(&mut self, tuning: &Tuning) {
        self.countdown = tuning.post_transition_interval;
        self.item_spawned = false;
    }

    /// Count down one frame. When the timer expires (and spawning isn't
    /// suspended) pick what to spawn and rearm the timer.
    pub fn tick<R: Rng>(
        &mut self,
        stage: u32,
        suspended: bool,
        catalog: &Catalog,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<Entity> {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 || suspended {
            return None;
        }
        let spawned = self.maybe_spawn(stage, catalog, tuning, rng);
        self.countdown = next_interval(stage, tuning, rng);
        spawned
    }

    /// Decide what (if anything) a spawn produces on `stage`.
    ///
    /// Returns `None` only when an obstacle was wanted but the catalog couldn't
    /// supply one; that is logged and the frame carries on.
    pub fn maybe_spawn<R: Rng>(
        &mut self,
        stage: u32,
        catalog: &Catalog,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<Entity> {
        if stage >= 3 && !self.item_spawned && rng.random::<f64>() < tuning.item_chance {
            self.item_spawned = true;
            log::debug!("Healing item spawned on stage {}", stage);
            return Some(Entity::item());
        }

        let plan = match stage {
            0 | 1 | 2 => SpawnPlan::Obstacle(Behavior::Linear),
            3 => {
                if rng.random::<f64>() < 0.5 {
                    SpawnPlan::Obstacle(Behavior::Wiggle)
                } else {
                    SpawnPlan::Obstacle(Behavior::Linear)
                }
            }
            4 => {
                if rng.random::<f64>() < 0.5 {
                    SpawnPlan::Shooter
                } else {
                    SpawnPlan::Obstacle(Behavior::Linear)
                }
            }
            _ => {
                let roll = rng.random::<f64>();
                if roll < 0.4 {
                    SpawnPlan::Obstacle(Behavior::Wiggle)
                } else if roll < 0.7 {
                    SpawnPlan::Shooter
                } else {
                    SpawnPlan::Obstacle(Behavior::Linear)
                }
            }
        };

        match plan {
            SpawnPlan::Shooter => Some(Entity::shooter(tuning)),
            SpawnPlan::Obstacle(behavior) => {
                match catalog.pick_for_stage(stage, tuning.stage1_archetype_id, rng) {
                    Ok(archetype) => Some(Entity::from_archetype(archetype, behavior)),
                    Err(e) => {
                        log::warn!("Skipping spawn on stage {}: {}", stage, e);
                        None
                    }
                }
            }
        }
    }
}

enum SpawnPlan {
    Obstacle(Behavior),
    Shooter,
}

/// Frames until the next spawn
fn next_interval<R: Rng>(stage: u32, tuning: &Tuning, rng: &mut R) -> u32 {
    if stage <= 1 {
        tuning.stage1_spawn_interval
    } else {
        let spread = tuning.spawn_interval_spread.max(1);
        tuning.spawn_interval_min + rng.random_range(0..spread)
    }
}
