//! Idle/demo mode: the paddle follows the ball on its own

use super::paddle::PaddleDirection;
use super::state::GameWorld;

/// Direction that keeps the paddle centered under the ball.
///
/// Within one paddle step of the target the paddle holds still, which stops
/// it from jittering back and forth around the ball.
pub fn steer(world: &GameWorld) -> PaddleDirection {
    let paddle = &world.paddle;
    let center = paddle.x + paddle.width / 2.0;
    let target = world.ball.pos.x;
    let deadzone = world.settings.paddle_speed;

    if target < center - deadzone {
        PaddleDirection::MovingLeft
    } else if target > center + deadzone {
        PaddleDirection::MovingRight
    } else {
        PaddleDirection::Idle
    }
}
