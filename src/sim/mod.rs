//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no internal timers
//! - Seeded RNG only
//! - Stable iteration order (entity spawn order)
//! - No rendering or platform dependencies

pub mod catalog;
pub mod collision;
pub mod entity;
pub mod motion;
pub mod player;
pub mod snapshot;
pub mod spawn;
pub mod stage;
pub mod state;
pub mod tick;

pub use catalog::{Archetype, Catalog};
pub use collision::{Collision, CollisionOutcome};
pub use entity::{Behavior, Category, Entity, EntityKind};
pub use player::Player;
pub use snapshot::{EntityView, FrameSnapshot, PlayerView};
pub use spawn::SpawnPolicy;
pub use stage::{StageMessage, StagePhase, StageProgression, StageTransition};
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, tick};
