//! Game state and entity types
//!
//! The whole simulation is a value: everything `tick` mutates lives in
//! `GameState`, including the seeded RNG, so a run is reproducible from its
//! seed and the input sequence.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Before the first start; nothing moves
    Idle,
    /// Active play
    Running,
    /// Run ended by an enemy breach or collision
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
}

impl Player {
    /// Spawn centered horizontally, near the bottom edge
    pub fn spawn(playfield: Vec2) -> Self {
        Self {
            pos: Vec2::new(
                playfield.x / 2.0 - PLAYER_WIDTH / 2.0,
                playfield.y - PLAYER_BOTTOM_OFFSET,
            ),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT))
    }
}

/// A bullet, travelling straight up at `BULLET_SPEED`
#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    /// Top-left corner
    pub pos: Vec2,
}

impl Bullet {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(BULLET_WIDTH, BULLET_HEIGHT))
    }
}

/// An enemy, drifting down with an individual velocity
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    /// Top-left corner
    pub pos: Vec2,
    /// Per-frame displacement; x is negated on edge bounces
    pub vel: Vec2,
}

impl Enemy {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT))
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Playfield dimensions (the canvas size)
    pub playfield: Vec2,
    /// Current phase
    pub phase: GamePhase,
    /// Destroyed-enemy count
    pub score: u32,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    /// Timestamp of the last shot (ms, same clock as the frame timestamp)
    pub last_shot_ms: f64,
    /// Timestamp of the last enemy spawn (ms)
    pub last_spawn_ms: f64,
    /// RNG driving spawn positions and speeds
    pub rng: Pcg32,
}

impl GameState {
    /// Create an idle game state for the given playfield and seed
    pub fn new(playfield_width: f32, playfield_height: f32, seed: u64) -> Self {
        let playfield = Vec2::new(playfield_width, playfield_height);
        Self {
            seed,
            playfield,
            phase: GamePhase::Idle,
            score: 0,
            player: Player::spawn(playfield),
            bullets: Vec::new(),
            enemies: Vec::new(),
            last_shot_ms: 0.0,
            last_spawn_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start or restart the run: full reset, then `Running`
    ///
    /// Always succeeds; restarting mid-run discards the run in progress.
    pub fn start(&mut self) {
        self.score = 0;
        self.player = Player::spawn(self.playfield);
        self.bullets.clear();
        self.enemies.clear();
        self.last_shot_ms = 0.0;
        self.last_spawn_ms = 0.0;
        self.phase = GamePhase::Running;
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Spawn a bullet centered on the player's top edge
    pub fn spawn_bullet(&mut self) {
        self.bullets.push(Bullet {
            pos: Vec2::new(
                self.player.pos.x + PLAYER_WIDTH / 2.0 - BULLET_WIDTH / 2.0,
                self.player.pos.y - BULLET_HEIGHT,
            ),
        });
    }

    /// Spawn an enemy just above the top edge at a random x, with randomized
    /// downward and drift speeds
    pub fn spawn_enemy(&mut self) {
        let x = self.rng.random_range(0.0..self.playfield.x - ENEMY_WIDTH);
        let speed_y = self.rng.random_range(ENEMY_SPEED_Y_MIN..ENEMY_SPEED_Y_MAX);
        let speed_x = self.rng.random_range(-ENEMY_DRIFT_X..ENEMY_DRIFT_X);
        self.enemies.push(Enemy {
            pos: Vec2::new(x, -ENEMY_HEIGHT),
            vel: Vec2::new(speed_x, speed_y),
        });
    }
}
