//! Brick Breaker - a classic Breakout-style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic fixed-tick simulation (physics, collisions, game state)
//! - `render`: State snapshot to display-list conversion
//! - `input`: Key event to engine command mapping
//!
//! The simulation advances once per fixed tick with no frame-rate
//! compensation; velocities are expressed in world units per tick.

pub mod input;
pub mod render;
pub mod sim;

pub use input::{Command, Outcome};
pub use sim::{Ball, Brick, Direction, GamePhase, GameState, Paddle};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick interval in milliseconds (~60 Hz)
    pub const TICK_MS: u64 = 16;

    /// Playfield dimensions (world units, y-up with the floor at y = 0)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults - slides along the floor
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Paddle floor offset (bottom edge of the paddle rectangle)
    pub const PADDLE_Y: f32 = 10.0;
    /// Horizontal distance moved per input event
    pub const PADDLE_STEP: f32 = 20.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_START_VEL: (f32, f32) = (5.0, -5.0);

    /// Brick grid - rows stack down from the ceiling
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_WIDTH: f32 = FIELD_WIDTH / BRICK_COLS as f32;
    pub const BRICK_HEIGHT: f32 = 30.0;

    /// Points awarded per destroyed brick
    pub const SCORE_PER_BRICK: u32 = 10;

    /// Window title for the presentation layer
    pub const WINDOW_TITLE: &str = "Brick Breaker";
}
