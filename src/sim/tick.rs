//! Simulation tick
//!
//! One call advances the world by exactly one frame. Velocities are in
//! pixels per tick, so the frontend is expected to call this at a fixed rate.

use super::autopilot;
use super::collision::{FloorResult, ball_brick_collisions, ball_floor_collision, ball_wall_collision};
use super::paddle::InputEvent;
use super::state::{GamePhase, GameWorld};
use crate::highscore::{HighScoreStore, record_if_high_score};

/// Input gathered since the previous tick, applied before any collision check
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Paddle key transitions in arrival order
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Hand the pending events over, leaving this input empty
    pub fn take(&mut self) -> TickInput {
        std::mem::take(self)
    }
}

/// Things that happened during a tick (for logging, audio, HUD effects)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BrickDestroyed { row: u32, col: u32 },
    WallBounce,
    PaddleBounce,
    Won { score: u32 },
    Lost { score: u32, new_high_score: bool },
}

/// Advance the world by one tick.
///
/// Does nothing but absorb input once the round is over.
pub fn tick(
    world: &mut GameWorld,
    input: &TickInput,
    store: &mut impl HighScoreStore,
) -> Vec<GameEvent> {
    for &event in &input.events {
        world.controller.apply(event);
    }

    if world.phase.is_terminal() {
        return Vec::new();
    }

    world.time_ticks += 1;

    let direction = if world.settings.autopilot {
        autopilot::steer(world)
    } else {
        world.controller.direction()
    };
    world.paddle.vel_x = direction.sign() * world.settings.paddle_speed;

    let mut events = Vec::new();

    // --- BRICKS ---
    for (row, col) in ball_brick_collisions(&mut world.ball, &mut world.bricks) {
        world.score += 1;
        events.push(GameEvent::BrickDestroyed { row, col });
    }

    if world.score == world.winning_score() {
        world.phase = GamePhase::Won;
        log::info!("Round {} won with {} points", world.round, world.score);
        events.push(GameEvent::Won { score: world.score });
        return events;
    }

    // --- WALLS, CEILING, PADDLE ---
    let wall = ball_wall_collision(&world.ball, &world.arena);
    if wall.side {
        world.ball.vel.x = -world.ball.vel.x;
    }
    if wall.ceiling {
        world.ball.vel.y = -world.ball.vel.y;
    } else {
        match ball_floor_collision(&world.ball, &world.paddle, world.paddle_line()) {
            FloorResult::Clear => {}
            FloorResult::PaddleBounce => {
                world.ball.vel.y = -world.ball.vel.y;
                events.push(GameEvent::PaddleBounce);
            }
            FloorResult::Miss => {
                world.phase = GamePhase::Lost;
                let new_high_score = record_if_high_score(store, world.score);
                if new_high_score {
                    world.high_score = world.score;
                }
                log::info!("Round {} lost with {} points", world.round, world.score);
                events.push(GameEvent::Lost {
                    score: world.score,
                    new_high_score,
                });
                return events;
            }
        }
    }
    if wall.hit() {
        events.push(GameEvent::WallBounce);
    }

    // --- MOVEMENT ---
    world.ball.pos += world.ball.vel;
    world.paddle.advance(&world.arena);

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscore::MemoryStore;
    use crate::settings::Settings;
    use crate::sim::arena::Arena;
    use glam::Vec2;
    use proptest::prelude::*;

    fn world() -> GameWorld {
        GameWorld::new(Arena::new(800.0, 600.0), Settings::default(), 0)
    }

    #[test]
    fn test_tick_moves_ball_and_counts() {
        let mut world = world();
        let mut store = MemoryStore::new();

        let events = tick(&mut world, &TickInput::default(), &mut store);
        assert!(events.is_empty());
        assert_eq!(world.ball.pos, Vec2::new(404.0, 536.0));
        assert_eq!(world.time_ticks, 1);
        assert_eq!(world.phase, GamePhase::Playing);
    }

    #[test]
    fn test_brick_hit_scores() {
        let mut world = world();
        let mut store = MemoryStore::new();
        world.ball.pos = Vec2::new(20.0, 20.0);
        world.ball.vel = Vec2::new(4.0, -4.0);

        let events = tick(&mut world, &TickInput::default(), &mut store);

        assert_eq!(events, vec![GameEvent::BrickDestroyed { row: 0, col: 0 }]);
        assert_eq!(world.score, 1);
        assert!(!world.bricks.get(0, 0).unwrap().active);
        assert_eq!(world.ball.vel.y, 4.0);
        assert_eq!(world.ball.pos, Vec2::new(24.0, 24.0));
    }

    #[test]
    fn test_last_brick_wins_and_halts() {
        let mut world = world();
        let mut store = MemoryStore::new();
        for brick in world.bricks.iter_mut().skip(1) {
            brick.active = false;
        }
        world.score = 39;
        world.ball.pos = Vec2::new(20.0, 20.0);

        let events = tick(&mut world, &TickInput::default(), &mut store);
        assert_eq!(world.phase, GamePhase::Won);
        assert_eq!(world.score, 40);
        assert_eq!(events.last(), Some(&GameEvent::Won { score: 40 }));
        // Winning tick does not move the ball
        assert_eq!(world.ball.pos, Vec2::new(20.0, 20.0));

        let ticks = world.time_ticks;
        let events = tick(&mut world, &TickInput::default(), &mut store);
        assert!(events.is_empty());
        assert_eq!(world.time_ticks, ticks);
        assert_eq!(world.ball.pos, Vec2::new(20.0, 20.0));
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn test_wall_bounce() {
        let mut world = world();
        let mut store = MemoryStore::new();
        world.ball.pos = Vec2::new(788.0, 300.0);
        world.ball.vel = Vec2::new(4.0, -4.0);

        let events = tick(&mut world, &TickInput::default(), &mut store);
        assert_eq!(events, vec![GameEvent::WallBounce]);
        assert_eq!(world.ball.vel, Vec2::new(-4.0, -4.0));
        assert_eq!(world.ball.pos, Vec2::new(784.0, 296.0));
    }

    #[test]
    fn test_ceiling_bounce() {
        let mut world = world();
        let mut store = MemoryStore::new();
        // Gap between columns 0 and 1, clear of every brick
        world.ball.pos = Vec2::new(97.0, 12.0);
        world.ball.vel = Vec2::new(4.0, -4.0);

        tick(&mut world, &TickInput::default(), &mut store);
        assert_eq!(world.ball.vel.y, 4.0);
        assert_eq!(world.score, 0);
    }

    #[test]
    fn test_paddle_bounce() {
        let mut world = world();
        let mut store = MemoryStore::new();
        world.ball.pos = Vec2::new(400.0, 588.0);
        world.ball.vel = Vec2::new(4.0, 4.0);

        let events = tick(&mut world, &TickInput::default(), &mut store);
        assert_eq!(events, vec![GameEvent::PaddleBounce]);
        assert_eq!(world.phase, GamePhase::Playing);
        assert_eq!(world.ball.pos, Vec2::new(404.0, 584.0));
    }

    #[test]
    fn test_miss_loses_and_records_high_score() {
        let mut world = world();
        let mut store = MemoryStore::with_value(3);
        world.score = 5;
        world.ball.pos = Vec2::new(100.0, 588.0);
        world.ball.vel = Vec2::new(4.0, 4.0);

        let events = tick(&mut world, &TickInput::default(), &mut store);
        assert_eq!(world.phase, GamePhase::Lost);
        assert_eq!(
            events,
            vec![GameEvent::Lost {
                score: 5,
                new_high_score: true
            }]
        );
        assert_eq!(store.get(), 5);
        assert_eq!(world.high_score, 5);
    }

    #[test]
    fn test_miss_keeps_better_high_score() {
        let mut world = GameWorld::new(Arena::new(800.0, 600.0), Settings::default(), 3);
        let mut store = MemoryStore::with_value(3);
        world.score = 2;
        world.ball.pos = Vec2::new(100.0, 588.0);
        world.ball.vel = Vec2::new(4.0, 4.0);

        tick(&mut world, &TickInput::default(), &mut store);
        assert_eq!(world.phase, GamePhase::Lost);
        assert_eq!(store.get(), 3);
        assert_eq!(store.writes, 0);
        assert_eq!(world.high_score, 3);
    }

    #[test]
    fn test_miss_with_zero_score_on_fresh_store() {
        let mut world = world();
        let mut store = MemoryStore::new();
        world.ball.pos = Vec2::new(100.0, 588.0);
        world.ball.vel = Vec2::new(4.0, 4.0);

        tick(&mut world, &TickInput::default(), &mut store);
        assert_eq!(world.phase, GamePhase::Lost);
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn test_paddle_input() {
        let mut world = world();
        let mut store = MemoryStore::new();

        tick(&mut world, &TickInput::new([InputEvent::LeftPressed]), &mut store);
        assert_eq!(world.paddle.x, 345.0);

        // Right held as well: opposing holds cancel
        tick(&mut world, &TickInput::new([InputEvent::RightPressed]), &mut store);
        assert_eq!(world.paddle.vel_x, 0.0);
        assert_eq!(world.paddle.x, 345.0);

        tick(&mut world, &TickInput::new([InputEvent::LeftReleased]), &mut store);
        assert_eq!(world.paddle.x, 350.0);
    }

    #[test]
    fn test_input_absorbed_while_terminal() {
        let mut world = world();
        let mut store = MemoryStore::new();
        world.phase = GamePhase::Lost;

        tick(&mut world, &TickInput::new([InputEvent::RightPressed]), &mut store);
        assert_eq!(world.paddle.x, 350.0);
        assert_eq!(
            world.controller.direction(),
            crate::sim::PaddleDirection::MovingRight
        );
    }

    #[test]
    fn test_key_held_through_reset_moves_paddle() {
        let mut world = world();
        let mut store = MemoryStore::new();
        world.phase = GamePhase::Lost;

        tick(&mut world, &TickInput::new([InputEvent::RightPressed]), &mut store);
        world.reset();
        tick(&mut world, &TickInput::default(), &mut store);

        assert_eq!(world.paddle.x, 355.0);
    }

    #[test]
    fn test_reset_after_loss_resumes_play() {
        let mut world = world();
        let mut store = MemoryStore::new();
        world.ball.pos = Vec2::new(100.0, 588.0);
        world.ball.vel = Vec2::new(4.0, 4.0);
        tick(&mut world, &TickInput::default(), &mut store);
        assert_eq!(world.phase, GamePhase::Lost);

        world.reset();
        tick(&mut world, &TickInput::default(), &mut store);
        assert_eq!(world.phase, GamePhase::Playing);
        assert_eq!(world.time_ticks, 1);
    }

    #[test]
    fn test_autopilot_keeps_ball_in_play() {
        let settings = Settings {
            autopilot: true,
            ..Default::default()
        };
        let mut world = GameWorld::new(Arena::new(800.0, 600.0), settings, 0);
        let mut store = MemoryStore::new();

        for _ in 0..5000 {
            tick(&mut world, &TickInput::default(), &mut store);
        }
        assert_ne!(world.phase, GamePhase::Lost);
        assert!(world.score > 0);
    }

    fn event_strategy() -> impl Strategy<Value = Option<InputEvent>> {
        prop_oneof![
            4 => Just(None),
            1 => Just(Some(InputEvent::LeftPressed)),
            1 => Just(Some(InputEvent::LeftReleased)),
            1 => Just(Some(InputEvent::RightPressed)),
            1 => Just(Some(InputEvent::RightReleased)),
        ]
    }

    fn settings_strategy() -> impl Strategy<Value = Settings> {
        (
            (1u32..=20, 1u32..=32, 4.0f32..=60.0, 0.0f32..=8.0),
            (10.0f32..=300.0, 4.0f32..=40.0, 0.5f32..=30.0),
            (2.0f32..=30.0, 0.5f32..=20.0),
        )
            .prop_map(
                |(
                    (brick_rows, brick_columns, brick_height, brick_gap),
                    (paddle_width, paddle_height, paddle_speed),
                    (ball_radius, ball_speed),
                )| Settings {
                    brick_rows,
                    brick_columns,
                    brick_height,
                    brick_gap,
                    paddle_width,
                    paddle_height,
                    paddle_speed,
                    ball_radius,
                    ball_speed,
                    autopilot: false,
                },
            )
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_every_tick(
            width in 320.0f32..1600.0,
            height in 300.0f32..1000.0,
            settings in settings_strategy(),
            inputs in prop::collection::vec(event_strategy(), 1..800),
        ) {
            let mut world = GameWorld::new(Arena::new(width, height), settings, 0);
            let mut store = MemoryStore::new();
            let total = world.winning_score();

            prop_assert!(world.bricks.bottom() <= world.ball.pos.y - world.ball.radius);
            prop_assert!(world.arena.contains_circle(world.ball.pos, world.ball.radius));

            for event in inputs {
                let before_score = world.score;
                let was_inactive: Vec<bool> = world.bricks.iter().map(|b| !b.active).collect();

                tick(&mut world, &TickInput::new(event), &mut store);

                prop_assert!(world.score >= before_score);
                prop_assert!(world.score <= total);
                prop_assert_eq!(world.score == total, world.phase == GamePhase::Won);
                prop_assert_eq!(world.bricks.iter().count() as u32, total);
                for (brick, inactive) in world.bricks.iter().zip(was_inactive) {
                    if inactive {
                        prop_assert!(!brick.active);
                    }
                }
                prop_assert!(world.paddle.x >= 0.0);
                prop_assert!(world.paddle.x <= world.arena.width - world.paddle.width);
                if world.phase == GamePhase::Playing {
                    prop_assert!(world.arena.contains_circle(world.ball.pos, world.ball.radius));
                }
            }
        }
    }
}
