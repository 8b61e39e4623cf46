//! Collision predicates for the ball against walls, paddle and bricks
//!
//! Everything here is axis-aligned. The ball is a circle but the brick test
//! treats it as its bounding square, which over-reports hits near brick
//! corners by up to `radius * (1 - 1/sqrt(2))`. That coarseness is part of
//! the game feel and is kept on purpose.

use glam::Vec2;

use super::state::{Ball, Brick, Paddle};

/// Axis-aligned rectangle (top-left + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

impl From<&Brick> for Rect {
    fn from(brick: &Brick) -> Self {
        Self {
            pos: brick.pos,
            size: brick.size,
        }
    }
}

/// Circle vs rectangle overlap, circle approximated by its bounding box.
///
/// Strict inequalities: touching edges do not overlap.
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.x + radius > rect.pos.x
        && center.x - radius < rect.right()
        && center.y + radius > rect.pos.y
        && center.y - radius < rect.bottom()
}

/// Check if the ball overlaps a brick (visibility is not considered)
#[inline]
pub fn ball_brick_collision(ball: &Ball, brick: &Brick) -> bool {
    circle_rect_overlap(ball.pos, ball.radius, &Rect::from(brick))
}

/// Which walls the ball is touching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Left or right wall
    pub side: bool,
    /// Ceiling
    pub top: bool,
}

/// Check ball against left, right and top walls. The bottom is open.
pub fn ball_wall_contact(ball: &Ball, canvas_width: f32) -> WallContact {
    WallContact {
        side: ball.pos.x + ball.radius >= canvas_width || ball.pos.x - ball.radius <= 0.0,
        top: ball.pos.y - ball.radius <= 0.0,
    }
}

/// Paddle hit test.
///
/// Returns the normalized hit position in `[0, 1]` (0 = left edge) when the
/// ball's bottom reaches the paddle top, its center is within the paddle's
/// horizontal span, and it is moving down. Upward-moving balls never hit, so
/// a ball already bounced cannot retrigger while still overlapping.
pub fn ball_paddle_hit(ball: &Ball, paddle: &Paddle) -> Option<f32> {
    let within_span = ball.pos.x >= paddle.pos.x && ball.pos.x <= paddle.pos.x + paddle.width;
    if ball.pos.y + ball.radius >= paddle.pos.y && within_span && ball.vel.y > 0.0 {
        Some((ball.pos.x - paddle.pos.x) / paddle.width)
    } else {
        None
    }
}
