//! Frame building
//!
//! Turns a `GameWorld` into pixel-space geometry plus the HUD/banner text the
//! DOM overlay shows. Pure, so it runs (and is tested) without a GPU.

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{GamePhase, GameWorld, Rect};

/// Segments used to tessellate the ball
const BALL_SEGMENTS: u32 = 24;

/// Score line shown in the corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub high_score: u32,
}

/// End-of-round message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Won,
    Lost,
}

impl Banner {
    pub fn text(self) -> &'static str {
        match self {
            Banner::Won => "YOU WIN!",
            Banner::Lost => "GAME OVER",
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// Triangle list in arena pixel coordinates
    pub vertices: Vec<Vertex>,
    pub hud: Hud,
    /// Present only on the end screen, together with the reset control
    pub banner: Option<Banner>,
}

impl Frame {
    pub fn shows_reset(&self) -> bool {
        self.banner.is_some()
    }
}

/// Build the frame for the current world state
pub fn build_frame(world: &GameWorld) -> Frame {
    let mut vertices = Vec::new();

    for brick in world.bricks.iter_active() {
        vertices.extend(shapes::rect(&world.bricks.rect_of(brick), colors::BRICK));
    }

    vertices.extend(shapes::circle(
        world.ball.pos,
        world.ball.radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    let paddle = world.paddle.rect(&world.arena);
    let shadow = Rect::new(paddle.x + 2.0, paddle.y - 3.0, paddle.w, paddle.h);
    vertices.extend(shapes::rect(&shadow, colors::SHADOW));
    vertices.extend(shapes::rect(&paddle, colors::PADDLE));

    let banner = match world.phase {
        GamePhase::Playing => None,
        GamePhase::Won => Some(Banner::Won),
        GamePhase::Lost => Some(Banner::Lost),
    };
    if banner.is_some() {
        let full = Rect::new(0.0, 0.0, world.arena.width, world.arena.height);
        vertices.extend(shapes::rect(&full, colors::OVERLAY));
    }

    Frame {
        vertices,
        hud: Hud {
            score: world.score,
            high_score: world.high_score,
        },
        banner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::Arena;

    fn world() -> GameWorld {
        GameWorld::new(Arena::new(800.0, 600.0), Settings::default(), 12)
    }

    #[test]
    fn test_playing_frame() {
        let world = world();
        let frame = build_frame(&world);

        // 40 bricks, ball, paddle shadow, paddle
        assert_eq!(frame.vertices.len(), 40 * 6 + BALL_SEGMENTS as usize * 3 + 6 + 6);
        assert_eq!(frame.hud, Hud { score: 0, high_score: 12 });
        assert!(frame.banner.is_none());
        assert!(!frame.shows_reset());
    }

    #[test]
    fn test_inactive_bricks_not_drawn() {
        let mut world = world();
        for brick in world.bricks.iter_mut().take(10) {
            brick.active = false;
        }
        let frame = build_frame(&world);
        assert_eq!(frame.vertices.len(), 30 * 6 + BALL_SEGMENTS as usize * 3 + 12);
    }

    #[test]
    fn test_terminal_banner() {
        let mut world = world();

        world.phase = GamePhase::Lost;
        let frame = build_frame(&world);
        assert_eq!(frame.banner, Some(Banner::Lost));
        assert_eq!(frame.banner.map(Banner::text), Some("GAME OVER"));
        assert!(frame.shows_reset());

        world.phase = GamePhase::Won;
        let frame = build_frame(&world);
        assert_eq!(frame.banner.map(Banner::text), Some("YOU WIN!"));
    }
}
