//! Game state and core simulation types
//!
//! The whole simulation is one owned [`GameState`]; callers pass it by
//! reference to `advance`, the input layer, and the renderer. All of it is
//! serializable so the shell can snapshot a run as JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ball exited the bottom boundary; only `restart` leaves this phase
    GameOver,
}

/// Paddle movement direction for a single input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// The ball - position and per-tick velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// World units moved per tick; collisions only ever flip a sign
    pub vel: Vec2,
}

impl Ball {
    /// Ball at the field center with the fixed starting velocity
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
            vel: Vec2::new(BALL_START_VEL.0, BALL_START_VEL.1),
        }
    }
}

/// The player's paddle - only its left edge moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: FIELD_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
        }
    }
}

impl Paddle {
    /// Step the paddle one input event's worth in `dir`, clamped so the
    /// paddle never leaves the field.
    pub fn step(&mut self, dir: Direction) {
        let dx = match dir {
            Direction::Left => -PADDLE_STEP,
            Direction::Right => PADDLE_STEP,
        };
        self.x = (self.x + dx).clamp(0.0, FIELD_WIDTH - PADDLE_WIDTH);
    }
}

/// A destructible brick; dies exactly once, resurrected only by restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub alive: bool,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    /// Fixed grid, indexed `[row][col]` with row 0 at the top
    pub bricks: [[Brick; BRICK_COLS]; BRICK_ROWS],
    pub score: u32,
    pub phase: GamePhase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: ball at center, paddle centered, all bricks alive
    pub fn new() -> Self {
        Self {
            ball: Ball::spawn(),
            paddle: Paddle::default(),
            bricks: [[Brick { alive: true }; BRICK_COLS]; BRICK_ROWS],
            score: 0,
            phase: GamePhase::Playing,
        }
    }

    /// Reset everything to initial values (restart is re-initialize)
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Move the paddle one step.
    ///
    /// Deliberately not gated on the phase: the paddle stays movable after
    /// game over, matching the original game.
    pub fn move_paddle(&mut self, dir: Direction) {
        self.paddle.step(dir);
    }

    /// Restart the game. Permitted only from `GameOver`; a no-op while
    /// still playing.
    pub fn restart(&mut self) {
        if self.phase == GamePhase::GameOver {
            self.reset();
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Number of bricks still alive
    pub fn alive_bricks(&self) -> usize {
        self.bricks
            .iter()
            .flatten()
            .filter(|b| b.alive)
            .count()
    }

    pub const fn total_bricks() -> usize {
        BRICK_ROWS * BRICK_COLS
    }
}
