use crate::{Ball, Config, GameMap, Paddle, PaddleIntent};
use hecs::World;

/// Step user paddles by a fixed amount, keeping them inside the field.
/// Up is tried first; with both held, a paddle pinned at the top moves down.
pub fn move_paddles(world: &mut World, map: &GameMap, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        let max_y = map.max_paddle_y(paddle.size.y);
        if intent.up && paddle.pos.y > 0.0 {
            paddle.pos.y = (paddle.pos.y - config.paddle_step).max(0.0);
        } else if intent.down && paddle.pos.y < max_y {
            paddle.pos.y = (paddle.pos.y + config.paddle_step).min(max_y);
        }
    }
}

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;
    use glam::Vec2;

    const UP: PaddleIntent = PaddleIntent { up: true, down: false };
    const DOWN: PaddleIntent = PaddleIntent { up: false, down: true };
    const BOTH: PaddleIntent = PaddleIntent { up: true, down: true };

    fn spawn_user_paddle(
        world: &mut World,
        config: &Config,
        y: f32,
        intent: PaddleIntent,
    ) -> hecs::Entity {
        let pos = Vec2::new(config.paddle_x(Side::Left), y);
        world.spawn((Paddle::new(Side::Left, pos, config.paddle_size()), intent))
    }

    #[test]
    fn test_paddle_moves_up_and_down() {
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let up = spawn_user_paddle(&mut world, &config, 100.0, UP);

        move_paddles(&mut world, &map, &config);
        assert_eq!(world.get::<&Paddle>(up).unwrap().pos.y, 92.0);

        *world.get::<&mut PaddleIntent>(up).unwrap() = DOWN;
        move_paddles(&mut world, &map, &config);
        move_paddles(&mut world, &map, &config);
        assert_eq!(world.get::<&Paddle>(up).unwrap().pos.y, 108.0);
    }

    #[test]
    fn test_paddle_stays_at_top() {
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let entity = spawn_user_paddle(&mut world, &config, 0.0, UP);

        move_paddles(&mut world, &map, &config);
        assert_eq!(world.get::<&Paddle>(entity).unwrap().pos.y, 0.0);
    }

    #[test]
    fn test_both_held_prefers_up_until_blocked() {
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let mid = spawn_user_paddle(&mut world, &config, 100.0, BOTH);
        let top = spawn_user_paddle(&mut world, &config, 0.0, BOTH);
        let bottom = spawn_user_paddle(&mut world, &config, 275.0, BOTH);

        move_paddles(&mut world, &map, &config);

        assert_eq!(world.get::<&Paddle>(mid).unwrap().pos.y, 92.0, "Up wins in open field");
        assert_eq!(world.get::<&Paddle>(top).unwrap().pos.y, 8.0, "Blocked up falls through to down");
        assert_eq!(world.get::<&Paddle>(bottom).unwrap().pos.y, 267.0);
    }

    #[test]
    fn test_paddle_does_not_overshoot_walls() {
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        // 1.5 above the top wall: a full step would end at -6.5
        let top = spawn_user_paddle(&mut world, &config, 1.5, UP);
        move_paddles(&mut world, &map, &config);
        assert_eq!(world.get::<&Paddle>(top).unwrap().pos.y, 0.0);

        let mut world = World::new();
        let bottom = spawn_user_paddle(&mut world, &config, 270.0, DOWN);
        move_paddles(&mut world, &map, &config);
        assert_eq!(world.get::<&Paddle>(bottom).unwrap().pos.y, 275.0);
        move_paddles(&mut world, &map, &config);
        assert_eq!(world.get::<&Paddle>(bottom).unwrap().pos.y, 275.0);
    }

    #[test]
    fn test_idle_paddle_does_not_move() {
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let entity = spawn_user_paddle(&mut world, &config, 137.5, PaddleIntent::new());

        move_paddles(&mut world, &map, &config);
        assert_eq!(world.get::<&Paddle>(entity).unwrap().pos.y, 137.5);
    }

    #[test]
    fn test_move_ball_applies_velocity_once() {
        let mut world = World::new();
        let entity = world.spawn((Ball::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(5.0, -5.0),
            7.0,
            9.0,
        ),));

        move_ball(&mut world);
        assert_eq!(world.get::<&Ball>(entity).unwrap().pos, Vec2::new(105.0, 95.0));
    }
}
