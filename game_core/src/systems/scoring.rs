use crate::{Ball, Config, Events, GameMap, Score};
use hecs::World;

/// Check whether the ball reached a goal line. The right goal is checked
/// first and at most one goal is scored per tick.
pub fn check_goals(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    let center = map.center();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x + ball.radius >= map.width {
            // User scores
            score.increment_user();
            events.user_scored = true;
            ball.reset(center, config.ball_speed_base);
        } else if ball.pos.x - ball.radius <= 0.0 {
            // AI scores
            score.increment_ai();
            events.ai_scored = true;
            ball.reset(center, config.ball_speed_base);
        }
    }
}
