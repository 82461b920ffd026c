//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - One `tick` per animation frame; cooldown and spawn gates compare against
//!   the monotonic frame timestamp, not the frame count
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use state::{Bullet, Enemy, GamePhase, GameState, Player};
pub use tick::{FrameInput, FrameReport, tick};
