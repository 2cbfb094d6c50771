//! Game state and core simulation types
//!
//! Everything one session needs lives in [`GameWorld`]; the frontend owns a
//! single instance and hands it to [`super::tick`] each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, Rect};
use super::bricks::BrickGrid;
use super::paddle::PaddleController;
use crate::consts::BALL_START_CLEARANCE;
use crate::settings::Settings;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Every brick destroyed
    Won,
    /// Ball slipped past the paddle
    Lost,
}

impl GamePhase {
    /// Won and Lost halt the simulation until reset
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Serve position: centered, just above the paddle, heading up and right
    pub fn serve(arena: &Arena, settings: &Settings) -> Self {
        let radius = settings.ball_radius;
        Self {
            pos: Vec2::new(
                arena.width / 2.0,
                arena.height - settings.paddle_height - radius - BALL_START_CLEARANCE,
            ),
            vel: Vec2::new(settings.ball_speed, -settings.ball_speed),
            radius,
        }
    }

    /// Position after this tick's velocity is applied
    #[inline]
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.vel
    }
}

/// The player's paddle, resting on the arena floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Pixels per tick, set from input
    pub vel_x: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// A paddle centered horizontally in the arena
    pub fn centered(arena: &Arena, settings: &Settings) -> Self {
        Self {
            x: (arena.width - settings.paddle_width) / 2.0,
            vel_x: 0.0,
            width: settings.paddle_width,
            height: settings.paddle_height,
        }
    }

    /// Largest legal x for the left edge
    #[inline]
    pub fn max_x(&self, arena: &Arena) -> f32 {
        (arena.width - self.width).max(0.0)
    }

    /// Advance by the current velocity and clamp into the arena
    pub fn advance(&mut self, arena: &Arena) {
        self.x = (self.x + self.vel_x).clamp(0.0, self.max_x(arena));
    }

    /// Whether an x coordinate lies strictly within the paddle's span
    #[inline]
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.x + self.width
    }

    pub fn rect(&self, arena: &Arena) -> Rect {
        Rect::new(self.x, arena.height - self.height, self.width, self.height)
    }
}

/// Complete state of one play session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameWorld {
    pub arena: Arena,
    pub settings: Settings,
    pub bricks: BrickGrid,
    pub ball: Ball,
    pub paddle: Paddle,
    pub controller: PaddleController,
    pub score: u32,
    /// Cached copy of the persisted high score
    pub high_score: u32,
    pub phase: GamePhase,
    /// Simulation ticks in the current round
    pub time_ticks: u64,
    /// Rounds started this session (1-based)
    pub round: u32,
}

impl GameWorld {
    /// Create a world for the given viewport, starting a fresh round
    pub fn new(arena: Arena, settings: Settings, high_score: u32) -> Self {
        let mut settings = settings.validated();
        let ball = Ball::serve(&arena, &settings);

        // Every row must sit above the served ball or the round can't be won
        let max_rows = fitting_rows(ball.pos.y - ball.radius, &settings);
        if settings.brick_rows > max_rows {
            log::warn!(
                "{} brick rows don't fit above the ball in a {}x{} arena, using {}",
                settings.brick_rows,
                arena.width,
                arena.height,
                max_rows
            );
            settings.brick_rows = max_rows;
        }

        Self {
            bricks: BrickGrid::new(&arena, &settings),
            ball,
            paddle: Paddle::centered(&arena, &settings),
            controller: PaddleController::new(),
            score: 0,
            high_score,
            phase: GamePhase::Playing,
            time_ticks: 0,
            round: 1,
            arena,
            settings,
        }
    }

    /// Restart: fresh grid, served ball, centered paddle, score 0, Playing.
    /// The high score and currently held keys are kept.
    pub fn reset(&mut self) {
        self.bricks.reset();
        self.ball = Ball::serve(&self.arena, &self.settings);
        self.paddle = Paddle::centered(&self.arena, &self.settings);
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.round += 1;
        log::info!("Round {} started", self.round);
    }

    /// Score that ends the round in a win
    pub fn winning_score(&self) -> u32 {
        self.bricks.total()
    }

    /// Y coordinate at which the ball center meets the paddle
    #[inline]
    pub fn paddle_line(&self) -> f32 {
        self.arena.height - self.ball.radius
    }
}

/// Number of brick rows whose bottom edge stays above `limit` (at least one)
fn fitting_rows(limit: f32, settings: &Settings) -> u32 {
    let pitch = settings.brick_height + settings.brick_gap;
    let bottom = |rows: u32| rows as f32 * pitch - settings.brick_gap;

    let mut rows = ((limit + settings.brick_gap) / pitch).floor().max(1.0) as u32;
    rows = rows.min(settings.brick_rows.max(1));
    while rows > 1 && bottom(rows) > limit {
        rows -= 1;
    }
    rows
}
