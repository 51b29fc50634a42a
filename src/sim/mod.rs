//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one Euler step per tick)
//! - Stable iteration order (bricks walked row-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{hit_ceiling, hit_side_wall, in_paddle_band, out_bottom};
pub use rect::{Rect, ball_rect, brick_rect, paddle_rect};
pub use state::{Ball, Brick, Direction, GamePhase, GameState, Paddle};
pub use tick::advance;
