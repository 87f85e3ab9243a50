//! Data-driven game balance
//!
//! Every gameplay number the simulation consults lives here so a run can be
//! rebalanced from a JSON file without recompiling. Missing fields fall back
//! to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_LIVES;
use crate::error::ConfigError;

/// Gameplay balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Scrolling ===
    /// Leftward speed of obstacles, shooters and items at stage 1 (px/frame)
    pub base_speed: f32,
    /// Speed added on every stage upgrade
    pub speed_step: f32,
    /// Upper bound for the scroll speed
    pub max_speed: f32,
    /// Projectiles ignore the scroll speed and use this instead
    pub projectile_speed: f32,

    // === Player ===
    /// Initial vertical velocity of a jump (negative is up)
    pub jump_velocity: f32,
    /// Added to vertical velocity every airborne frame
    pub gravity: f32,
    /// Immunity window after taking damage (frames)
    pub invincible_frames: u32,
    /// Starting lives and heal cap. Read through `lives_cap`, which keeps it in `1..=MAX_LIVES`.
    pub max_lives: u8,

    // === Spawning ===
    /// Fixed gap between spawns on stage 1 (frames)
    pub stage1_spawn_interval: u32,
    /// Random gap on later stages: `min..min + spread` frames
    pub spawn_interval_min: u32,
    pub spawn_interval_spread: u32,
    /// Gap before the first spawn of a freshly started stage
    pub post_transition_interval: u32,
    /// Archetype id used for every stage-1 obstacle
    pub stage1_archetype_id: u32,
    /// Chance per spawn that a stage's healing item appears (stage 3+)
    pub item_chance: f64,

    // === Stages ===
    /// Score needed to clear stage N is `stage_thresholds[N - 1]`
    pub stage_thresholds: Vec<u32>,
    /// Clearing this stage wins the run
    pub final_stage: u32,
    /// How long the "STAGE N START!" banner stays up (frames)
    pub stage_message_frames: u32,

    // === Behaviors ===
    /// Must stay below `base_speed` so a wiggling obstacle never drifts right
    pub wiggle_amplitude: f32,
    /// Radians per frame
    pub wiggle_frequency: f32,
    pub item_gravity: f32,
    /// Upward speed an item gets back every time it touches the floor
    pub item_bounce_velocity: f32,
    /// Frames from shooter spawn to its first shot
    pub shooter_first_shot: u32,
    pub shooter_fire_interval: u32,

    // === Animation ===
    /// Frames per sprite frame
    pub anim_frame_speed: u32,
    pub anim_total_frames: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: 4.0,
            speed_step: 2.0,
            max_speed: 10.0,
            projectile_speed: 7.0,

            jump_velocity: -10.0,
            gravity: 0.45,
            invincible_frames: 60,
            max_lives: 3,

            stage1_spawn_interval: 120,
            spawn_interval_min: 60,
            spawn_interval_spread: 90,
            post_transition_interval: 30,
            stage1_archetype_id: 1,
            item_chance: 0.3,

            stage_thresholds: vec![10, 25, 45, 70, 100],
            final_stage: 5,
            stage_message_frames: 180,

            wiggle_amplitude: 3.0,
            wiggle_frequency: 0.15,
            item_gravity: 0.3,
            item_bounce_velocity: 8.0,
            shooter_first_shot: 45,
            shooter_fire_interval: 90,

            anim_frame_speed: 10,
            anim_total_frames: 4,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning table
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject tables that would let entities stall on screen
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_speed <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "base_speed must be positive, got {}",
                self.base_speed
            )));
        }
        if self.wiggle_amplitude.abs() >= self.base_speed {
            return Err(ConfigError::Invalid(format!(
                "wiggle_amplitude {} must be below base_speed {}",
                self.wiggle_amplitude, self.base_speed
            )));
        }
        Ok(())
    }

    /// Starting lives and heal cap, clamped to `1..=MAX_LIVES`
    pub fn lives_cap(&self) -> u8 {
        if self.max_lives > MAX_LIVES {
            log::warn!("max_lives {} clamped to {}", self.max_lives, MAX_LIVES);
        }
        self.max_lives.clamp(1, MAX_LIVES)
    }

    /// Load a tuning table from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning ({} stages)", tuning.stage_thresholds.len());
        Ok(tuning)
    }

    /// Score needed to leave `stage`, or `None` when the stage never auto-advances
    pub fn threshold(&self, stage: u32) -> Option<u32> {
        let index = stage.checked_sub(1)?;
        self.stage_thresholds.get(index as usize).copied()
    }
}
