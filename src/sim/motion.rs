//! Per-frame entity movement, shooter fire and off-screen cleanup

use super::entity::{Behavior, Entity, EntityKind};
use crate::Tuning;

/// What a motion step produced besides moving things
#[derive(Debug, Default)]
pub struct MotionOutcome {
    /// Projectiles fired this frame (not yet in the entity list)
    pub projectiles: Vec<Entity>,
    /// Scoreable entities that scrolled off the left edge
    pub passed: u32,
    /// Entities removed at the left edge (any kind)
    pub removed: usize,
}

/// Move one entity by one frame
pub fn step_entity(entity: &mut Entity, speed: f32, time_ticks: u64, tuning: &Tuning) {
    match &mut entity.behavior {
        Behavior::Linear => {
            entity.pos.x -= speed;
        }
        Behavior::Wiggle => {
            let phase = time_ticks as f32 * tuning.wiggle_frequency;
            entity.pos.x += -speed + phase.sin() * tuning.wiggle_amplitude;
        }
        Behavior::Bounce { vy, floor_y } => {
            entity.pos.x -= speed;
            *vy += tuning.item_gravity;
            entity.pos.y += *vy;
            if entity.pos.y >= *floor_y {
                entity.pos.y = *floor_y;
                *vy = -tuning.item_bounce_velocity;
            }
        }
        Behavior::ProjectileLinear => {
            entity.pos.x -= tuning.projectile_speed;
        }
    }
}

/// Advance every entity, fire shooters, then drop whatever left the screen.
///
/// Projectiles are returned rather than inserted so the caller can assign ids;
/// they start moving on the next frame.
pub fn advance(
    entities: &mut Vec<Entity>,
    speed: f32,
    time_ticks: u64,
    tuning: &Tuning,
) -> MotionOutcome {
    let mut outcome = MotionOutcome::default();

    for entity in entities.iter_mut() {
        step_entity(entity, speed, time_ticks, tuning);

        if let EntityKind::Shooter { shot_countdown } = &mut entity.kind {
            *shot_countdown = shot_countdown.saturating_sub(1);
            if *shot_countdown == 0 {
                *shot_countdown = tuning.shooter_fire_interval;
                outcome.projectiles.push(Entity::projectile(entity));
            }
        }
    }

    let before = entities.len();
    entities.retain(|entity| {
        if !entity.is_offscreen() {
            return true;
        }
        if entity.kind.scoreable() {
            outcome.passed += 1;
        }
        false
    });
    outcome.removed = before - entities.len();

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::catalog::Catalog;
    use glam::Vec2;

    fn obstacle(behavior: Behavior) -> Entity {
        Entity::from_archetype(&Catalog::builtin().archetypes()[0], behavior)
    }

    #[test]
    fn test_linear_scrolls_at_stage_speed() {
        let tuning = Tuning::default();
        let mut entity = obstacle(Behavior::Linear);
        step_entity(&mut entity, 6.0, 0, &tuning);
        assert_eq!(entity.pos.x, SCREEN_WIDTH - 6.0);
    }

    #[test]
    fn test_projectile_ignores_stage_speed() {
        let tuning = Tuning::default();
        let mut shot = Entity::projectile(&Entity::shooter(&tuning));
        step_entity(&mut shot, 100.0, 0, &tuning);
        assert_eq!(shot.pos.x, SCREEN_WIDTH - tuning.projectile_speed);
    }

    #[test]
    fn test_wiggle_sways_around_linear() {
        let tuning = Tuning::default();
        let mut wiggle = obstacle(Behavior::Wiggle);
        let mut linear = obstacle(Behavior::Linear);
        let mut max_gap: f32 = 0.0;
        for t in 0..120 {
            step_entity(&mut wiggle, 4.0, t, &tuning);
            step_entity(&mut linear, 4.0, t, &tuning);
            max_gap = max_gap.max((wiggle.pos.x - linear.pos.x).abs());
        }
        assert!(max_gap > 1.0);
        // Oscillation, not drift: the sway is bounded
        assert!(max_gap < tuning.wiggle_amplitude / tuning.wiggle_frequency * 2.0 + 1.0);
        assert_eq!(wiggle.pos.y, linear.pos.y);
    }

    #[test]
    fn test_bounce_stays_above_floor() {
        let tuning = Tuning::default();
        let mut item = Entity::item();
        let floor = match item.behavior {
            Behavior::Bounce { floor_y, .. } => floor_y,
            _ => unreachable!(),
        };
        let mut bounced = false;
        for t in 0..200 {
            step_entity(&mut item, 4.0, t, &tuning);
            assert!(item.pos.y <= floor);
            if let Behavior::Bounce { vy, .. } = item.behavior {
                if vy == -tuning.item_bounce_velocity {
                    bounced = true;
                }
            }
        }
        assert!(bounced);
    }

    #[test]
    fn test_shooter_fires_on_countdown() {
        let tuning = Tuning::default();
        let mut entities = vec![Entity::shooter(&tuning)];
        let mut fired = 0;
        for t in 0..tuning.shooter_first_shot as u64 {
            fired += advance(&mut entities, 1.0, t, &tuning).projectiles.len();
        }
        assert_eq!(fired, 1);
        match entities[0].kind {
            EntityKind::Shooter { shot_countdown } => {
                assert_eq!(shot_countdown, tuning.shooter_fire_interval)
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_offscreen_removal_scores_only_scoreables() {
        let tuning = Tuning::default();
        let mut entities = vec![
            obstacle(Behavior::Linear),
            Entity::item(),
            Entity::projectile(&Entity::shooter(&tuning)),
            obstacle(Behavior::Linear),
        ];
        for entity in entities.iter_mut().take(3) {
            entity.pos.x = -100.0;
        }
        let outcome = advance(&mut entities, 4.0, 0, &tuning);
        assert_eq!(outcome.passed, 1);
        assert_eq!(outcome.removed, 3);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].pos, Vec2::new(SCREEN_WIDTH - 4.0, entities[0].pos.y));
    }
}
