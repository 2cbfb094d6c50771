//! Collision detection for an axis-aligned arena
//!
//! Every test here looks at the ball's center only: bricks use an
//! open-interval AABB check, walls and the floor use the projected next
//! position.

use super::arena::{Arena, Rect};
use super::bricks::BrickGrid;
use super::state::{Ball, Paddle};

/// Result of checking the ball against the side walls and ceiling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallResult {
    /// Next x would leave [r, W - r]
    pub side: bool,
    /// Next y would go above r
    pub ceiling: bool,
}

impl WallResult {
    pub fn hit(&self) -> bool {
        self.side || self.ceiling
    }
}

/// Result of checking the ball against the paddle line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorResult {
    /// Ball stays above the paddle line this tick
    Clear,
    /// Ball reaches the line within the paddle's span
    PaddleBounce,
    /// Ball reaches the line outside the paddle's span
    Miss,
}

/// Deactivate every active brick containing the ball center.
///
/// Bricks are scanned in row-major order against the pre-tick position; each
/// hit inverts the vertical velocity. Returns the (row, col) of every brick
/// destroyed, in scan order.
pub fn ball_brick_collisions(ball: &mut Ball, grid: &mut BrickGrid) -> Vec<(u32, u32)> {
    let center = ball.pos;
    let (width, height) = (grid.brick_width, grid.brick_height);
    let mut destroyed = Vec::new();

    for brick in grid.iter_mut().filter(|b| b.active) {
        if Rect::new(brick.x, brick.y, width, height).contains_open(center) {
            brick.active = false;
            ball.vel.y = -ball.vel.y;
            destroyed.push((brick.row, brick.col));
        }
    }

    destroyed
}

/// Check the projected position against side walls and the ceiling
pub fn ball_wall_collision(ball: &Ball, arena: &Arena) -> WallResult {
    let next = ball.next_pos();
    WallResult {
        side: next.x > arena.width - ball.radius || next.x < ball.radius,
        ceiling: next.y < ball.radius,
    }
}

/// Check the projected position against the paddle line
pub fn ball_floor_collision(ball: &Ball, paddle: &Paddle, paddle_line: f32) -> FloorResult {
    if ball.next_pos().y <= paddle_line {
        return FloorResult::Clear;
    }
    if paddle.spans(ball.pos.x) {
        FloorResult::PaddleBounce
    } else {
        FloorResult::Miss
    }
}
