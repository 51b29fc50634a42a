//! Axis-aligned rectangles and the fixed playfield geometry
//!
//! Brick placement is a fixed bijection between (row, col) and a screen
//! rectangle: row 0 hangs from the ceiling and rows stack downward, each
//! column spanning one tenth of the field width.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An axis-aligned rectangle (origin at bottom-left, y-up)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Point containment with inclusive edges.
    ///
    /// Collision tests use the ball's center point only, never its bounding
    /// box, so a point landing exactly on an edge counts as inside.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// Rectangle of the brick at (row, col), row 0 at the top of the field
pub fn brick_rect(row: usize, col: usize) -> Rect {
    Rect::new(
        col as f32 * BRICK_WIDTH,
        FIELD_HEIGHT - (row as f32 + 1.0) * BRICK_HEIGHT,
        BRICK_WIDTH,
        BRICK_HEIGHT,
    )
}

/// Rectangle of the paddle given its left edge
pub fn paddle_rect(paddle_x: f32) -> Rect {
    Rect::new(paddle_x, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT)
}

/// Draw rectangle of the ball centered on its position
pub fn ball_rect(center: Vec2) -> Rect {
    Rect::new(
        center.x - BALL_SIZE / 2.0,
        center.y - BALL_SIZE / 2.0,
        BALL_SIZE,
        BALL_SIZE,
    )
}
