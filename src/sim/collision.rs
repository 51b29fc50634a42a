//! Point-check collision predicates
//!
//! All tests are against the ball's CENTER point, not its bounding box, and
//! no test resolves penetration; the tick only flips a velocity sign. Both
//! are deliberate fidelity constraints inherited from the original game, so
//! a fast ball can tunnel and a ball can visually clip into what it hits.

use glam::Vec2;

use crate::consts::*;

/// Ball center at or beyond either side wall
#[inline]
pub fn hit_side_wall(pos: Vec2) -> bool {
    pos.x <= 0.0 || pos.x >= FIELD_WIDTH
}

/// Ball center at or above the ceiling
#[inline]
pub fn hit_ceiling(pos: Vec2) -> bool {
    pos.y >= FIELD_HEIGHT
}

/// Ball center inside the paddle reflection band.
///
/// The band is the full horizontal span of the paddle up to
/// `PADDLE_HEIGHT + 10` above the floor. There is no check that the ball is
/// moving downward, so the test fires on every tick the center stays in the
/// band. Preserved as-is from the original game; see the multi-trigger test
/// in `tick`.
#[inline]
pub fn in_paddle_band(pos: Vec2, paddle_x: f32) -> bool {
    pos.y <= PADDLE_HEIGHT + 10.0 && pos.x >= paddle_x && pos.x <= paddle_x + PADDLE_WIDTH
}

/// Ball center below the floor (terminal condition)
#[inline]
pub fn out_bottom(pos: Vec2) -> bool {
    pos.y < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_walls_are_point_checks() {
        assert!(hit_side_wall(Vec2::new(0.0, 300.0)));
        assert!(hit_side_wall(Vec2::new(-3.0, 300.0)));
        assert!(hit_side_wall(Vec2::new(FIELD_WIDTH, 300.0)));
        // A ball whose edge overlaps the wall but whose center does not is
        // not a hit - center-point semantics.
        assert!(!hit_side_wall(Vec2::new(BALL_SIZE / 2.0 - 1.0, 300.0)));
    }

    #[test]
    fn test_ceiling() {
        assert!(hit_ceiling(Vec2::new(400.0, FIELD_HEIGHT)));
        assert!(hit_ceiling(Vec2::new(400.0, FIELD_HEIGHT + 5.0)));
        assert!(!hit_ceiling(Vec2::new(400.0, FIELD_HEIGHT - 1.0)));
    }

    #[test]
    fn test_paddle_band_extent() {
        let paddle_x = 350.0;
        assert!(in_paddle_band(Vec2::new(350.0, 20.0), paddle_x));
        assert!(in_paddle_band(Vec2::new(450.0, 0.0), paddle_x));
        // One unit past either paddle edge misses
        assert!(!in_paddle_band(Vec2::new(349.0, 10.0), paddle_x));
        assert!(!in_paddle_band(Vec2::new(451.0, 10.0), paddle_x));
        // Above the band misses
        assert!(!in_paddle_band(Vec2::new(400.0, 21.0), paddle_x));
    }

    #[test]
    fn test_paddle_band_has_no_lower_bound() {
        // The band test has no y lower bound: a ball already below the
        // paddle still triggers it while over the paddle. Original behavior.
        assert!(in_paddle_band(Vec2::new(400.0, -2.0), 350.0));
    }

    #[test]
    fn test_out_bottom_is_strictly_below_zero() {
        assert!(!out_bottom(Vec2::new(400.0, 0.0)));
        assert!(out_bottom(Vec2::new(400.0, -0.1)));
    }
}
