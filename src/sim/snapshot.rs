//! Read-only view of a frame for renderers
//!
//! Built after each tick; holds copies so a renderer can't reach back into
//! the simulation.

use serde::Serialize;

use super::entity::Category;
use super::stage::{StageMessage, StagePhase};
use super::state::GameState;
use crate::consts::*;

/// Frames per on/off half of the invincibility blink
const BLINK_PERIOD_TICKS: u32 = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub airborne: bool,
    pub invincible: bool,
    /// False on the "off" half of the invincibility blink
    pub blink_visible: bool,
    /// Sprite sheet column
    pub anim_frame: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub category: Category,
    pub shape: i32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub player: PlayerView,
    pub entities: Vec<EntityView>,
    pub score: u32,
    pub stage: u32,
    pub lives: u8,
    pub phase: StagePhase,
    pub message: Option<StageMessage>,
}

impl GameState {
    pub fn snapshot(&self) -> FrameSnapshot {
        let player = &self.player;
        let invincible = player.is_invincible();
        FrameSnapshot {
            tick: self.time_ticks,
            player: PlayerView {
                x: player.x,
                y: player.y,
                width: PLAYER_WIDTH,
                height: PLAYER_HEIGHT,
                airborne: player.airborne,
                invincible,
                blink_visible: !invincible
                    || (player.invincible_ticks / BLINK_PERIOD_TICKS) % 2 == 0,
                anim_frame: self.anim_frame,
            },
            entities: self
                .entities
                .iter()
                .map(|e| EntityView {
                    id: e.id,
                    x: e.pos.x,
                    y: e.pos.y,
                    width: e.size.x,
                    height: e.size.y,
                    category: e.category(),
                    shape: e.shape,
                    color: e.color.clone(),
                })
                .collect(),
            score: self.score,
            stage: self.stage(),
            lives: player.lives,
            phase: self.phase(),
            message: self.progression.message.clone(),
        }
    }
}
