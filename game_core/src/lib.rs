pub mod components;
pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use error::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input: &InputLatch,
) -> Result<(), SimError> {
    // Clear events at start of tick
    events.clear();

    // 1. User paddle follows the input latch
    ingest_input(world, input);
    move_paddles(world, map, config);

    // 2. Top/bottom walls
    bounce_off_walls(world, map, events);

    // 3. Goal lines (resets the ball)
    check_goals(world, map, config, score, events);

    // 4. Move ball
    move_ball(world);

    // 5. AI paddle chases the ball
    track_ball(world, map, config);

    // 6. Ball vs the paddle on its half
    check_paddle_hit(world, map, config, events);

    time.tick += 1;

    check_ball_integrity(world, map, config, time)
}

/// Helper to create the keyboard-driven paddle on the left
pub fn create_user_paddle(world: &mut World, config: &Config) -> hecs::Entity {
    let paddle = Paddle::new(
        Side::Left,
        config.paddle_spawn(Side::Left),
        config.paddle_size(),
    );
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the AI paddle on the right
pub fn create_ai_paddle(world: &mut World, config: &Config) -> hecs::Entity {
    let paddle = Paddle::new(
        Side::Right,
        config.paddle_spawn(Side::Right),
        config.paddle_size(),
    );
    world.spawn((paddle, AiTracker::new(config.ai_tracking_gain)))
}

/// Helper to create the ball entity at base speed
pub fn create_ball(world: &mut World, config: &Config, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(
        pos,
        vel,
        config.ball_radius,
        config.ball_speed_base,
    ),))
}
