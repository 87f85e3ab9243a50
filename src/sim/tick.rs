//! Per-frame simulation tick
//!
//! One call per display refresh. Order within a tick is fixed:
//! input edge, player physics and timers, spawning, motion, collisions,
//! jump scoring, stage check.

use super::collision::{self, CollisionOutcome};
use super::entity::{Behavior, Entity};
use super::motion;
use super::stage::StageTransition;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump key pressed this frame (edge, not level). Restarts after game over.
    pub jump: bool,
    /// Restart the run before anything else happens this tick
    pub restart: bool,
    /// Idle/demo mode - jump automatically
    pub idle_mode: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if input.restart || (input.jump && state.is_game_over()) {
        state.reset();
        state.events.push(GameEvent::Restarted);
        log::info!("Game restarted with seed: {}", state.seed);
        return;
    }

    if state.is_game_over() {
        state.progression.tick_message();
        return;
    }

    state.time_ticks += 1;
    advance_animation(state);

    let jump = input.jump || (input.idle_mode && should_auto_jump(state));
    if jump && state.player.try_jump(&state.tuning) {
        state.events.push(GameEvent::Jumped);
    }
    state.player.update(&state.tuning);
    state.progression.tick_message();

    // Spawning
    let stage = state.stage();
    let suspended = state.progression.is_pending();
    if let Some(entity) = state.spawner.tick(
        stage,
        suspended,
        &state.catalog,
        &state.tuning,
        &mut state.rng,
    ) {
        let category = entity.category();
        state.push_entity(entity);
        state.events.push(GameEvent::Spawned { category });
    }

    // Motion, shooter fire, off-screen cleanup
    let moved = motion::advance(
        &mut state.entities,
        state.progression.speed,
        state.time_ticks,
        &state.tuning,
    );
    state.score += moved.passed;
    for projectile in moved.projectiles {
        state.push_entity(projectile);
        state.events.push(GameEvent::ShotFired);
    }

    // Collisions
    for hit in collision::resolve(&mut state.player, &mut state.entities, &state.tuning) {
        match hit.outcome {
            CollisionOutcome::Healed { lives } => state.events.push(GameEvent::Healed { lives }),
            CollisionOutcome::Damaged { lives } => {
                state.events.push(GameEvent::Damaged { lives })
            }
            CollisionOutcome::Killed => {
                state.events.push(GameEvent::Damaged { lives: 0 });
                state.progression.lose();
                state.events.push(GameEvent::GameOver {
                    won: false,
                    score: state.score,
                });
                return;
            }
        }
    }

    state.score += score_jumps(state);

    // Stage progression
    let screen_empty = state.entities.is_empty();
    match state
        .progression
        .update(state.score, screen_empty, &state.tuning)
    {
        Some(StageTransition::UpgradePending { stage }) => {
            state.events.push(GameEvent::StageCleared { stage });
        }
        Some(StageTransition::Advanced { stage }) => {
            state.spawner.on_stage_start(&state.tuning);
            state.events.push(GameEvent::StageStarted { stage });
        }
        Some(StageTransition::Won { stage }) => {
            state.events.push(GameEvent::StageCleared { stage });
            state.events.push(GameEvent::GameOver {
                won: true,
                score: state.score,
            });
        }
        None => {}
    }
}

/// Cycle the player sprite
fn advance_animation(state: &mut GameState) {
    let speed = state.tuning.anim_frame_speed.max(1) as u64;
    let frames = state.tuning.anim_total_frames.max(1);
    if state.time_ticks.is_multiple_of(speed) {
        state.anim_frame = (state.anim_frame + 1) % frames;
    }
}

/// Points for jumping over things: each scoreable entity under an airborne
/// player pays out once.
fn score_jumps(state: &mut GameState) -> u32 {
    if !state.player.airborne {
        return 0;
    }
    let left = state.player.x;
    let right = state.player.x + PLAYER_WIDTH;
    let mut points = 0;
    for entity in state.entities.iter_mut() {
        if entity.kind.scoreable() && entity.overlaps_x(left, right) && entity.mark_scored() {
            points += 1;
        }
    }
    points
}

/// Demo AI: jump when something harmful is about to reach the hitbox
fn should_auto_jump(state: &GameState) -> bool {
    if state.player.airborne {
        return false;
    }
    let hitbox_right = state.player.hitbox().right;
    state.entities.iter().any(|entity| {
        if !entity.kind.damaging() {
            return false;
        }
        let speed = entity_speed(entity, state);
        let gap = entity.pos.x - hitbox_right;
        gap >= speed * 6.0 && gap <= speed * 12.0
    })
}

fn entity_speed(entity: &Entity, state: &GameState) -> f32 {
    match entity.behavior {
        Behavior::ProjectileLinear => state.tuning.projectile_speed,
        _ => state.progression.speed,
    }
}
