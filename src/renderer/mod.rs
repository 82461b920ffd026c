//! 2D canvas rendering
//!
//! Presentation is deliberately plain: the playfield is cleared each frame
//! and every entity is one solid-colored rectangle.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::*;
use crate::sim::GameState;

/// Entity fill colors
pub const PLAYER_COLOR: &str = "#0f0";
pub const BULLET_COLOR: &str = "#ff0";
pub const ENEMY_COLOR: &str = "#f00";

/// Draws the game into a canvas 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Erase the previous frame
    pub fn clear(&self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    /// Draw one frame: player, bullets, enemies. Fill style is set once per
    /// entity group.
    pub fn draw(&self, state: &GameState) {
        self.clear();

        self.ctx.set_fill_style_str(PLAYER_COLOR);
        let player = &state.player;
        self.fill_rect(player.pos.x, player.pos.y, PLAYER_WIDTH, PLAYER_HEIGHT);

        self.ctx.set_fill_style_str(BULLET_COLOR);
        for bullet in &state.bullets {
            self.fill_rect(bullet.pos.x, bullet.pos.y, BULLET_WIDTH, BULLET_HEIGHT);
        }

        self.ctx.set_fill_style_str(ENEMY_COLOR);
        for enemy in &state.enemies {
            self.fill_rect(enemy.pos.x, enemy.pos.y, ENEMY_WIDTH, ENEMY_HEIGHT);
        }
    }
}
