use crate::{overlaps, Ball, Config, Events, GameMap, Paddle, Side};
use hecs::World;

/// Reflect the ball off the top and bottom walls
pub fn bounce_off_walls(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y + ball.radius >= map.height || ball.pos.y - ball.radius <= 0.0 {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Paddle the ball is heading for, judged only by which half it is in
pub fn target_side(ball_x: f32, map: &GameMap) -> Side {
    if ball_x < map.midfield_x() {
        Side::Left
    } else {
        Side::Right
    }
}

/// Launch angle for a ball striking a paddle: level off the exact center,
/// upward off the top half, downward off the bottom half.
pub fn deflection_angle(ball_y: f32, paddle: &Paddle, max_angle: f32) -> f32 {
    let center = paddle.center_y();
    if ball_y < center {
        -max_angle
    } else if ball_y > center {
        max_angle
    } else {
        0.0
    }
}

/// Bounce the ball off the paddle on its half of the field
pub fn check_paddle_hit(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    let ball_pos = match world.query::<&Ball>().iter().next() {
        Some((_entity, ball)) => ball.pos,
        None => return,
    };
    let side = target_side(ball_pos.x, map);

    let paddle = world
        .query::<&Paddle>()
        .iter()
        .map(|(_entity, paddle)| *paddle)
        .find(|paddle| paddle.side == side);
    let Some(paddle) = paddle else {
        return;
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !overlaps(&paddle.bounds(), ball.pos, ball.radius) {
            continue;
        }

        let angle = deflection_angle(ball.pos.y, &paddle, config.deflection_angle);
        ball.vel.x = side.serve_sign() * ball.speed * angle.cos();
        ball.vel.y = ball.speed * angle.sin();
        ball.speed += config.ball_speed_increment;

        events.ball_hit_paddle = true;
    }
}
