//! Fixed timestep simulation tick
//!
//! One call to [`advance`] is one tick. Integration is a single explicit
//! Euler step per tick with no sub-stepping, so a sufficiently fast ball can
//! tunnel through thin geometry. Accepted limitation, kept for fidelity with
//! the original game.

use super::collision::{hit_ceiling, hit_side_wall, in_paddle_band, out_bottom};
use super::rect::brick_rect;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Advance the game state by one fixed tick. No-op once the game is over.
///
/// Order within a tick: integrate, reflect off walls, reflect off the paddle
/// band, brick pass (row-major, each brick tested once), terminal check.
/// Collisions only flip a velocity sign; the ball's position is never pushed
/// back out of the object it hit.
pub fn advance(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.ball.pos += state.ball.vel;

    // Walls are point-checks against the ball center
    if hit_side_wall(state.ball.pos) {
        state.ball.vel.x = -state.ball.vel.x;
    }
    if hit_ceiling(state.ball.pos) {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Fires every tick the center stays in the band, downward or not
    if in_paddle_band(state.ball.pos, state.paddle.x) {
        state.ball.vel.y = -state.ball.vel.y;
    }

    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            let brick = &mut state.bricks[row][col];
            if brick.alive && brick_rect(row, col).contains(state.ball.pos) {
                brick.alive = false;
                state.ball.vel.y = -state.ball.vel.y;
                state.score += SCORE_PER_BRICK;
            }
        }
    }

    if out_bottom(state.ball.pos) {
        state.phase = GamePhase::GameOver;
        log::info!("ball exited bottom, final score {}", state.score);
    }
}
