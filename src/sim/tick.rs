//! Per-frame simulation update
//!
//! One `tick` call advances the run by a single animation frame. Movement is
//! expressed in pixels per frame; the fire cooldown and the enemy spawn
//! interval are elapsed-time gates against the monotonic frame timestamp, so
//! they hold up under a variable frame rate.

use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Held-key input for a single frame
///
/// Key events arrive asynchronously; the platform layer folds them into this
/// struct and `tick` reads it once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl FrameInput {
    /// Fold a key event into the held state. Codes outside the tracked set
    /// are ignored.
    pub fn set_key(&mut self, code: &str, held: bool) {
        match code {
            "ArrowLeft" => self.left = held,
            "ArrowRight" => self.right = held,
            "Space" | "Spacebar" => self.fire = held,
            _ => {}
        }
    }
}

/// What the host needs to know about the frame that just ran
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// At least one enemy was shot down; the score display is stale
    pub score_changed: bool,
    /// The run ended this frame
    pub game_over: bool,
}

/// Advance the game state by one frame
///
/// No-op unless the run is active. The host reschedules the next frame only
/// while `state.is_running()` still holds afterwards.
pub fn tick(state: &mut GameState, input: &FrameInput, timestamp_ms: f64) -> FrameReport {
    let mut report = FrameReport::default();
    if state.phase != GamePhase::Running {
        return report;
    }

    // Player movement, clamped to the playfield. Holding both keys nets to
    // zero displacement away from the edges.
    if input.left {
        state.player.pos.x = (state.player.pos.x - PLAYER_SPEED).max(0.0);
    }
    if input.right {
        state.player.pos.x =
            (state.player.pos.x + PLAYER_SPEED).min(state.playfield.x - PLAYER_WIDTH);
    }

    // Firing: one bullet per cooldown window no matter how long the key is held
    if input.fire && timestamp_ms - state.last_shot_ms > FIRE_COOLDOWN_MS {
        state.spawn_bullet();
        state.last_shot_ms = timestamp_ms;
    }

    // Advance bullets; drop any that left through the top
    for bullet in &mut state.bullets {
        bullet.pos.y -= BULLET_SPEED;
    }
    state.bullets.retain(|b| b.pos.y + BULLET_HEIGHT > 0.0);

    // Spawn an enemy when the interval has elapsed
    if timestamp_ms - state.last_spawn_ms > ENEMY_SPAWN_INTERVAL_MS {
        state.spawn_enemy();
        state.last_spawn_ms = timestamp_ms;
    }

    // Advance enemies; bounce off the side edges by negating the drift.
    // No positional correction, so an enemy may overlap an edge for a frame.
    for enemy in &mut state.enemies {
        enemy.pos += enemy.vel;
        if enemy.pos.x < 0.0 || enemy.pos.x + ENEMY_WIDTH > state.playfield.x {
            enemy.vel.x = -enemy.vel.x;
        }
    }

    // Bullet-enemy collisions: mark every overlapping pair first, remove
    // afterwards, so one bullet can take out several enemies in a frame and
    // each pair scores independently.
    let mut bullet_hit = vec![false; state.bullets.len()];
    let mut enemy_hit = vec![false; state.enemies.len()];
    let mut hits = 0u32;
    for (bi, bullet) in state.bullets.iter().enumerate() {
        for (ei, enemy) in state.enemies.iter().enumerate() {
            if bullet.aabb().overlaps(&enemy.aabb()) {
                bullet_hit[bi] = true;
                enemy_hit[ei] = true;
                hits += 1;
            }
        }
    }
    if hits > 0 {
        state.score += hits;
        report.score_changed = true;

        let mut i = 0;
        state.bullets.retain(|_| {
            let keep = !bullet_hit[i];
            i += 1;
            keep
        });
        let mut i = 0;
        state.enemies.retain(|_| {
            let keep = !enemy_hit[i];
            i += 1;
            keep
        });
    }

    // Surviving enemies end the run by ramming the player or reaching the
    // bottom edge. Enemies shot down above were removed first and cannot
    // trigger this.
    let player_box = state.player.aabb();
    let breached = state
        .enemies
        .iter()
        .any(|e| e.aabb().overlaps(&player_box) || e.aabb().bottom() >= state.playfield.y);
    if breached {
        state.phase = GamePhase::GameOver;
        report.game_over = true;
    }

    report
}
