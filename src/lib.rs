//! Bear Dash - a side-scrolling jump-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, stage progression)
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences (audio, presentation)
//! - `audio`: Fire-and-forget sound hook fed by simulation events
//! - `error`: Error types for catalog and config loading

pub mod audio;
pub mod error;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{CatalogError, ConfigError, RowError};
pub use settings::Settings;
pub use tuning::Tuning;

/// Screen and body geometry shared by the simulation and any renderer
pub mod consts {
    /// Canvas dimensions in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;
    /// Height of the ground strip at the bottom of the screen
    pub const GROUND_HEIGHT: f32 = 20.0;

    /// Player body (one sprite frame)
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    /// Resting top edge of the player (ground strip + 50px margin below the sprite)
    pub const PLAYER_GROUND_Y: f32 = SCREEN_HEIGHT - PLAYER_HEIGHT - 70.0;

    /// Hitbox shaping. The left edge sits further in than the right one because
    /// the sprite faces right; the bottom reaches well below the drawn sprite.
    pub const HITBOX_LEFT_INSET: f32 = 16.0;
    pub const HITBOX_RIGHT_INSET: f32 = 4.0;
    pub const HITBOX_DOWN_EXTENSION: f32 = 60.0;

    /// Hard ceiling on lives, whatever the tuning table asks for
    pub const MAX_LIVES: u8 = 3;

    /// Shooter enemy body
    pub const SHOOTER_WIDTH: f32 = 40.0;
    pub const SHOOTER_HEIGHT: f32 = 50.0;
    /// Projectile body and its muzzle offset from the shooter's top edge
    pub const PROJECTILE_WIDTH: f32 = 16.0;
    pub const PROJECTILE_HEIGHT: f32 = 8.0;
    pub const PROJECTILE_MUZZLE_Y: f32 = 12.0;
    /// Healing item body and how far above its floor it appears
    pub const ITEM_SIZE: f32 = 30.0;
    pub const ITEM_SPAWN_LIFT: f32 = 100.0;

    /// Top of the ground strip
    pub const fn floor_y() -> f32 {
        SCREEN_HEIGHT - GROUND_HEIGHT
    }
}
