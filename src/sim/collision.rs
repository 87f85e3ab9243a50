//! Player-versus-entity collision detection and resolution
//!
//! The hit test is deliberately lopsided: the player's box is pulled in on
//! the left, barely on the right, and stretched far downward, and only the
//! entity's top edge is checked against it. Anything overlapping
//! horizontally whose top is above the stretched bottom is a hit, however
//! tall the entity is.

use super::entity::{Category, Entity, EntityKind};
use super::player::{Hitbox, Player};
use crate::Tuning;

/// What a single contact did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Item picked up; lives after healing
    Healed { lives: u8 },
    /// Lost a life and became invincible; lives left
    Damaged { lives: u8 },
    /// Lost the last life
    Killed,
}

/// One resolved contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    pub entity_id: u32,
    pub category: Category,
    pub outcome: CollisionOutcome,
}

/// Hit test for one entity
pub fn hits(hitbox: &Hitbox, entity: &Entity) -> bool {
    entity.overlaps_x(hitbox.left, hitbox.right) && hitbox.bottom > entity.pos.y
}

/// Test the player against every entity in list order and apply effects.
///
/// - Items heal and are removed.
/// - Anything else costs a life and stays on screen; the invincibility that
///   follows stops the same entity from hitting again on its way past.
/// - While invincible nothing is tested at all, items included.
///
/// Resolution stops at the first damaging contact, since the player is then
/// either invincible or dead.
pub fn resolve(player: &mut Player, entities: &mut Vec<Entity>, tuning: &Tuning) -> Vec<Collision> {
    let mut collisions = Vec::new();
    if player.is_invincible() || player.lives == 0 {
        return collisions;
    }

    let mut i = 0;
    while i < entities.len() {
        let hitbox = player.hitbox();
        if !hits(&hitbox, &entities[i]) {
            i += 1;
            continue;
        }

        let entity_id = entities[i].id;
        let category = entities[i].category();
        match entities[i].kind {
            EntityKind::Item => {
                let lives = player.heal(tuning);
                entities.remove(i);
                log::debug!("Picked up item {} (lives {})", entity_id, lives);
                collisions.push(Collision {
                    entity_id,
                    category,
                    outcome: CollisionOutcome::Healed { lives },
                });
            }
            EntityKind::Obstacle | EntityKind::Shooter { .. } | EntityKind::Projectile => {
                let lives = player.take_damage(tuning);
                let outcome = if lives == 0 {
                    CollisionOutcome::Killed
                } else {
                    CollisionOutcome::Damaged { lives }
                };
                log::debug!("Hit by {:?} {} (lives {})", category, entity_id, lives);
                collisions.push(Collision {
                    entity_id,
                    category,
                    outcome,
                });
                break;
            }
        }
    }

    collisions
}
