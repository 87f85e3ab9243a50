//! Game state and simulation events
//!
//! Everything a run needs lives in one owned `GameState`; there are no
//! globals, so several engines can run side by side.

use std::sync::Arc;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::entity::{Category, Entity};
use super::player::Player;
use super::spawn::SpawnPolicy;
use super::stage::{StagePhase, StageProgression};
use crate::Tuning;

/// Things that happened during a tick, for audio and UI hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Jump started (play the jump sound)
    Jumped,
    Damaged { lives: u8 },
    Healed { lives: u8 },
    Spawned { category: Category },
    ShotFired,
    /// Stage threshold reached; the upgrade waits for an empty screen
    StageCleared { stage: u32 },
    StageStarted { stage: u32 },
    GameOver { won: bool, score: u32 },
    Restarted,
}

/// Complete engine state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed; `reset` reseeds from it
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Shared, read-only archetype table
    pub catalog: Arc<Catalog>,
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub score: u32,
    pub player: Player,
    /// Active entities in spawn order
    pub entities: Vec<Entity>,
    pub spawner: SpawnPolicy,
    pub progression: StageProgression,
    /// Current sprite animation frame
    pub anim_frame: u32,
    /// Events raised by the last tick
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, catalog: Arc<Catalog>, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(&tuning),
            spawner: SpawnPolicy::new(&tuning),
            progression: StageProgression::new(&tuning),
            catalog,
            tuning,
            time_ticks: 0,
            score: 0,
            entities: Vec::new(),
            anim_frame: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Built-in catalog and default tuning
    pub fn with_defaults(seed: u64) -> Self {
        Self::new(seed, Arc::new(Catalog::builtin()), Tuning::default())
    }

    /// Back to stage 1, score 0, full lives, empty screen, RNG reseeded.
    /// Only call between ticks.
    pub fn reset(&mut self) {
        *self = Self::new(self.seed, Arc::clone(&self.catalog), self.tuning.clone());
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert an entity at the end of the list, assigning its id
    pub fn push_entity(&mut self, mut entity: Entity) -> u32 {
        entity.id = self.next_entity_id();
        let id = entity.id;
        self.entities.push(entity);
        id
    }

    pub fn stage(&self) -> u32 {
        self.progression.stage()
    }

    pub fn phase(&self) -> StagePhase {
        self.progression.phase
    }

    pub fn lives(&self) -> u8 {
        self.player.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.progression.is_game_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Behavior;

    #[test]
    fn test_new_state() {
        let state = GameState::with_defaults(1);
        assert_eq!(state.stage(), 1);
        assert_eq!(state.lives(), 3);
        assert_eq!(state.score, 0);
        assert!(state.entities.is_empty());
        assert_eq!(state.phase(), StagePhase::Playing { stage: 1 });
    }

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut state = GameState::with_defaults(1);
        let archetype = state.catalog.archetypes()[0].clone();
        let a = state.push_entity(Entity::from_archetype(&archetype, Behavior::Linear));
        let b = state.push_entity(Entity::item());
        assert_ne!(a, b);
        assert_eq!(state.entities[1].id, b);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut state = GameState::with_defaults(5);
        state.score = 40;
        state.player.lives = 1;
        state.progression.phase = StagePhase::GameOver { stage: 3, won: false };
        state.push_entity(Entity::item());

        state.reset();
        assert_eq!(state.score, 0);
        assert_eq!(state.lives(), 3);
        assert_eq!(state.stage(), 1);
        assert!(state.entities.is_empty());
        assert_eq!(state.seed, 5);
        assert_eq!(state.progression.speed, state.tuning.base_speed);
    }
}
