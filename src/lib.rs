//! Megalith Shooter - a side-scrolling canvas arcade shooter
//!
//! Core modules:
//! - `sim`: Frame simulation (motion, spawning, collisions, game state)
//! - `renderer`: Draws a game state onto a 2D surface
//! - `platform`: Browser glue (assets, HUD)
//! - `input`: Logical key state
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use input::{Key, KeyState};
pub use tuning::{ObstacleMode, Tuning};

/// Game configuration constants
pub mod consts {
    /// Drawing surface dimensions
    pub const CANVAS_WIDTH: f32 = 512.0;
    pub const CANVAS_HEIGHT: f32 = 480.0;

    /// Movement speeds (pixels/s)
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const BULLET_SPEED: f32 = 500.0;
    pub const ENEMY_SPEED: f32 = 50.0;

    /// Minimum time between triple shots
    pub const FIRE_COOLDOWN_MS: f64 = 100.0;

    /// Spawn ramp: P(spawn this frame) = 1 - SPAWN_BASE^game_time
    pub const SPAWN_BASE: f32 = 0.993;

    /// Score per destroyed enemy
    pub const KILL_SCORE: u64 = 100;

    /// Vertical nudge applied to an enemy deflected by a megalith
    pub const DEFLECT_OFFSET: f32 = 10.0;

    /// Player x on reset (y is half the canvas height)
    pub const PLAYER_START_X: f32 = 50.0;

    /// Sprite sheet and background asset paths
    pub const SPRITE_SHEET: &str = "img/sprites.png";
    pub const TERRAIN: &str = "img/terrain.png";
}
