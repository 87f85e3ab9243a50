//! Spawned entities: obstacles, shooter enemies, healing items, projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::catalog::Archetype;
use crate::Tuning;
use crate::consts::*;

/// What an entity is, carrying only the state that kind needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Plain obstacle built from a catalog archetype
    Obstacle,
    /// Fires a projectile whenever its countdown runs out
    Shooter { shot_countdown: u32 },
    /// Restores a life on contact
    Item,
    /// Fired by a shooter
    Projectile,
}

/// Fieldless mirror of `EntityKind` for renderers and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Obstacle,
    Shooter,
    Item,
    Projectile,
}

impl EntityKind {
    pub fn category(&self) -> Category {
        match self {
            EntityKind::Obstacle => Category::Obstacle,
            EntityKind::Shooter { .. } => Category::Shooter,
            EntityKind::Item => Category::Item,
            EntityKind::Projectile => Category::Projectile,
        }
    }

    /// Passing this entity (off-screen or jumped over) is worth a point
    pub fn scoreable(&self) -> bool {
        matches!(self, EntityKind::Obstacle | EntityKind::Shooter { .. })
    }

    /// Touching this entity costs a life
    pub fn damaging(&self) -> bool {
        !matches!(self, EntityKind::Item)
    }
}

/// How an entity moves each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    /// Scroll at the stage speed
    Linear,
    /// Scroll with a sinusoidal lateral sway
    Wiggle,
    /// Scroll while bouncing off `floor_y` under gravity
    Bounce { vy: f32, floor_y: f32 },
    /// Fly left at the fixed projectile speed
    ProjectileLinear,
}

/// A live entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Assigned by the game state on insertion
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: EntityKind,
    pub behavior: Behavior,
    /// Renderer shape type (catalog `shape` column)
    pub shape: i32,
    pub color: String,
    /// Jump-avoidance point already awarded
    pub scored: bool,
}

impl Entity {
    /// Obstacle at the right screen edge, resting on the ground (plus offset)
    pub fn from_archetype(archetype: &Archetype, behavior: Behavior) -> Self {
        let size = Vec2::new(archetype.width, archetype.height);
        Self {
            id: 0,
            pos: Vec2::new(SCREEN_WIDTH, floor_y() - size.y - archetype.y_offset),
            size,
            kind: EntityKind::Obstacle,
            behavior,
            shape: archetype.shape,
            color: archetype.color.clone(),
            scored: false,
        }
    }

    pub fn shooter(tuning: &Tuning) -> Self {
        let size = Vec2::new(SHOOTER_WIDTH, SHOOTER_HEIGHT);
        Self {
            id: 0,
            pos: Vec2::new(SCREEN_WIDTH, floor_y() - size.y),
            size,
            kind: EntityKind::Shooter {
                shot_countdown: tuning.shooter_first_shot,
            },
            behavior: Behavior::Linear,
            shape: 0,
            color: "darkslategray".to_string(),
            scored: false,
        }
    }

    /// Healing item dropped from above its floor so it starts mid-bounce
    pub fn item() -> Self {
        let size = Vec2::splat(ITEM_SIZE);
        let rest_y = floor_y() - size.y;
        Self {
            id: 0,
            pos: Vec2::new(SCREEN_WIDTH, rest_y - ITEM_SPAWN_LIFT),
            size,
            kind: EntityKind::Item,
            behavior: Behavior::Bounce {
                vy: 0.0,
                floor_y: rest_y,
            },
            shape: 1,
            color: "gold".to_string(),
            scored: false,
        }
    }

    /// Projectile leaving `shooter`'s muzzle
    pub fn projectile(shooter: &Entity) -> Self {
        Self {
            id: 0,
            pos: Vec2::new(shooter.pos.x, shooter.pos.y + PROJECTILE_MUZZLE_Y),
            size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            kind: EntityKind::Projectile,
            behavior: Behavior::ProjectileLinear,
            shape: 0,
            color: "orangered".to_string(),
            scored: false,
        }
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Scrolled entirely past the left screen edge
    pub fn is_offscreen(&self) -> bool {
        self.right_edge() < 0.0
    }

    /// Horizontal extents overlap `[left, right)`
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        left < self.right_edge() && right > self.pos.x
    }

    /// Award the jump-avoidance point. Returns false if it was already taken.
    pub fn mark_scored(&mut self) -> bool {
        if self.scored {
            return false;
        }
        self.scored = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog::Catalog;

    #[test]
    fn test_archetype_placement() {
        let catalog = Catalog::parse("9,0,teal,30,60,15");
        let entity = Entity::from_archetype(&catalog.archetypes()[0], Behavior::Linear);
        assert_eq!(entity.pos.x, SCREEN_WIDTH);
        // 400 - 60 - 20 - 15
        assert_eq!(entity.pos.y, 305.0);
        assert_eq!(entity.color, "teal");
        assert_eq!(entity.category(), Category::Obstacle);
    }

    #[test]
    fn test_mark_scored_once() {
        let mut entity = Entity::shooter(&Tuning::default());
        assert!(entity.mark_scored());
        assert!(!entity.mark_scored());
        assert!(entity.scored);
    }

    #[test]
    fn test_kind_rules() {
        assert!(EntityKind::Obstacle.scoreable());
        assert!(EntityKind::Shooter { shot_countdown: 1 }.scoreable());
        assert!(!EntityKind::Item.scoreable());
        assert!(!EntityKind::Projectile.scoreable());
        assert!(!EntityKind::Item.damaging());
        assert!(EntityKind::Projectile.damaging());
    }

    #[test]
    fn test_projectile_leaves_from_shooter() {
        let mut shooter = Entity::shooter(&Tuning::default());
        shooter.pos = Vec2::new(500.0, 330.0);
        let shot = Entity::projectile(&shooter);
        assert_eq!(shot.pos, Vec2::new(500.0, 330.0 + PROJECTILE_MUZZLE_Y));
        assert_eq!(shot.behavior, Behavior::ProjectileLinear);
    }

    #[test]
    fn test_offscreen() {
        let mut entity = Entity::item();
        entity.pos.x = -ITEM_SIZE;
        assert!(!entity.is_offscreen());
        entity.pos.x -= 0.5;
        assert!(entity.is_offscreen());
    }
}
