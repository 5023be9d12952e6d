use crate::{AiTracker, Ball, Config, GameMap, Paddle};
use hecs::World;

/// Vertical displacement that closes a fraction of the gap between the
/// paddle's center and the ball. The lag is what makes the AI beatable.
pub fn tracking_delta(ball_y: f32, paddle: &Paddle, gain: f32) -> f32 {
    (ball_y - paddle.center_y()) * gain
}

/// Move AI paddles toward the ball
pub fn track_ball(world: &mut World, map: &GameMap, config: &Config) {
    let ball_y = match world.query::<&Ball>().iter().next() {
        Some((_entity, ball)) => ball.pos.y,
        None => return,
    };

    for (_entity, (paddle, tracker)) in world.query_mut::<(&mut Paddle, &AiTracker)>() {
        paddle.pos.y += tracking_delta(ball_y, paddle, tracker.gain);
        if config.clamp_ai_paddle {
            paddle.pos.y = map.clamp_paddle_y(paddle.pos.y, paddle.size.y);
        }
    }
}
