//! The player character: jump physics, lives and post-hit invincibility

use serde::{Deserialize, Serialize};

use crate::Tuning;
use crate::consts::*;

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Fixed horizontal position
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub vy: f32,
    pub airborne: bool,
    /// Frames of immunity left
    pub invincible_ticks: u32,
    pub lives: u8,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: PLAYER_X,
            y: PLAYER_GROUND_Y,
            vy: 0.0,
            airborne: false,
            invincible_ticks: 0,
            lives: tuning.lives_cap(),
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_ticks > 0
    }

    /// Start a jump. Returns false (and does nothing) while already airborne.
    pub fn try_jump(&mut self, tuning: &Tuning) -> bool {
        if self.airborne {
            return false;
        }
        self.airborne = true;
        self.vy = tuning.jump_velocity;
        true
    }

    /// Advance jump physics and the invincibility timer by one frame
    pub fn update(&mut self, tuning: &Tuning) {
        if self.airborne {
            self.y += self.vy;
            self.vy += tuning.gravity;
            if self.y >= PLAYER_GROUND_Y {
                self.y = PLAYER_GROUND_Y;
                self.vy = 0.0;
                self.airborne = false;
            }
        }

        self.invincible_ticks = self.invincible_ticks.saturating_sub(1);
    }

    /// Lose a life. Returns the lives left.
    pub fn take_damage(&mut self, tuning: &Tuning) -> u8 {
        self.lives = self.lives.saturating_sub(1);
        if self.lives > 0 {
            self.invincible_ticks = tuning.invincible_frames;
        }
        self.lives
    }

    /// Gain a life, capped at the maximum. Returns the lives after healing.
    pub fn heal(&mut self, tuning: &Tuning) -> u8 {
        self.lives = self.lives.saturating_add(1).min(tuning.lives_cap());
        self.lives
    }

    /// Collision box: inset horizontally, stretched downward
    pub fn hitbox(&self) -> Hitbox {
        Hitbox {
            left: self.x + HITBOX_LEFT_INSET,
            right: self.x + PLAYER_WIDTH - HITBOX_RIGHT_INSET,
            bottom: self.y + PLAYER_HEIGHT + HITBOX_DOWN_EXTENSION,
        }
    }
}

/// Player collision box. There is no top edge: anything whose top is above
/// `bottom` counts as vertically overlapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
}
