//! Space Invasion - a browser arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `renderer`: 2D canvas rendering (wasm only)

pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod renderer;

/// Game configuration constants
pub mod consts {
    /// Player ship dimensions
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;
    /// Horizontal player speed (pixels per frame)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Distance from the bottom edge to the player's top edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 40.0;

    /// Bullet dimensions
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 10.0;
    /// Upward bullet speed (pixels per frame)
    pub const BULLET_SPEED: f32 = 6.0;
    /// Minimum time between shots (milliseconds)
    pub const FIRE_COOLDOWN_MS: f64 = 300.0;

    /// Enemy dimensions
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 20.0;
    /// Vertical enemy speed range (pixels per frame, upper bound exclusive)
    pub const ENEMY_SPEED_Y_MIN: f32 = 2.0;
    pub const ENEMY_SPEED_Y_MAX: f32 = 4.0;
    /// Horizontal enemy drift half-range (pixels per frame)
    pub const ENEMY_DRIFT_X: f32 = 0.5;
    /// Time between enemy spawns (milliseconds)
    pub const ENEMY_SPAWN_INTERVAL_MS: f64 = 1000.0;
}
