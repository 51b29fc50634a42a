//! State snapshot to display-list conversion
//!
//! The renderer is an external collaborator: once per tick, after `advance`
//! completes, it reads the game state and issues draw-rectangle and
//! draw-text commands. This module builds that command list; the surface
//! that consumes it lives outside the crate.

use crate::consts::*;
use crate::sim::rect::{Rect, ball_rect, brick_rect, paddle_rect};
use crate::sim::{GamePhase, GameState};

/// RGB color, one channel per component in 0..=1
pub type Color = [f32; 3];

pub const WHITE: Color = [1.0, 1.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0];
pub const GREEN: Color = [0.0, 1.0, 0.0];

/// A single drawing command for the surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect { rect: Rect, color: Color },
    Text { x: f32, y: f32, text: String, color: Color },
}

/// Build the frame for the current state.
///
/// Game over: the two status lines centered on the field. Otherwise: white
/// paddle, red ball, one green rectangle per alive brick (cell shrunk by one
/// unit on each axis so the grid reads as separate bricks), and the score
/// in the top-left corner.
pub fn build_frame(state: &GameState) -> Vec<DrawCmd> {
    let mut cmds = Vec::new();

    if state.phase == GamePhase::GameOver {
        cmds.push(DrawCmd::Text {
            x: FIELD_WIDTH / 2.0 - 100.0,
            y: FIELD_HEIGHT / 2.0,
            text: format!("Game Over! Final Score: {}", state.score),
            color: WHITE,
        });
        cmds.push(DrawCmd::Text {
            x: FIELD_WIDTH / 2.0 - 100.0,
            y: FIELD_HEIGHT / 2.0 - 30.0,
            text: "Press 'R' to restart or 'Q' to quit".to_string(),
            color: WHITE,
        });
        return cmds;
    }

    cmds.push(DrawCmd::Rect {
        rect: paddle_rect(state.paddle.x),
        color: WHITE,
    });
    cmds.push(DrawCmd::Rect {
        rect: ball_rect(state.ball.pos),
        color: RED,
    });

    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            if state.bricks[row][col].alive {
                let cell = brick_rect(row, col);
                cmds.push(DrawCmd::Rect {
                    rect: Rect::new(cell.x, cell.y, cell.w - 1.0, cell.h - 1.0),
                    color: GREEN,
                });
            }
        }
    }

    cmds.push(DrawCmd::Text {
        x: 10.0,
        y: FIELD_HEIGHT - 30.0,
        text: format!("Score: {}", state.score),
        color: WHITE,
    });

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rects(frame: &[DrawCmd]) -> usize {
        frame
            .iter()
            .filter(|c| matches!(c, DrawCmd::Rect { .. }))
            .count()
    }

    fn texts(frame: &[DrawCmd]) -> Vec<&str> {
        frame
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_playing_frame_contents() {
        let state = GameState::new();
        let frame = build_frame(&state);
        // Paddle + ball + 50 bricks
        assert_eq!(rects(&frame), 2 + 50);
        assert_eq!(texts(&frame), vec!["Score: 0"]);
    }

    #[test]
    fn test_dead_bricks_are_not_drawn() {
        let mut state = GameState::new();
        state.bricks[0][0].alive = false;
        state.bricks[3][9].alive = false;
        state.score = 20;
        let frame = build_frame(&state);
        assert_eq!(rects(&frame), 2 + 48);
        assert_eq!(texts(&frame), vec!["Score: 20"]);
    }

    #[test]
    fn test_brick_cells_shrink_for_grid_gaps() {
        let state = GameState::new();
        let frame = build_frame(&state);
        let brick = frame
            .iter()
            .find_map(|c| match c {
                DrawCmd::Rect { rect, color } if *color == GREEN => Some(rect),
                _ => None,
            })
            .unwrap();
        assert_eq!(brick.w, BRICK_WIDTH - 1.0);
        assert_eq!(brick.h, BRICK_HEIGHT - 1.0);
    }

    #[test]
    fn test_game_over_frame_is_text_only() {
        let mut state = GameState::new();
        state.score = 230;
        state.phase = GamePhase::GameOver;
        let frame = build_frame(&state);
        assert_eq!(rects(&frame), 0);
        assert_eq!(
            texts(&frame),
            vec![
                "Game Over! Final Score: 230",
                "Press 'R' to restart or 'Q' to quit"
            ]
        );
    }

    #[test]
    fn test_ball_is_red_paddle_is_white() {
        let state = GameState::new();
        let frame = build_frame(&state);
        match &frame[0] {
            DrawCmd::Rect { color, .. } => assert_eq!(*color, WHITE),
            other => panic!("expected paddle rect, got {other:?}"),
        }
        match &frame[1] {
            DrawCmd::Rect { color, .. } => assert_eq!(*color, RED),
            other => panic!("expected ball rect, got {other:?}"),
        }
    }
}
