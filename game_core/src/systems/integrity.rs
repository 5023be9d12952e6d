use crate::{Ball, Config, GameMap, SimError, Time};
use hecs::World;

/// Verify the ball is still in a finite state. A ball holding NaN or
/// infinity is re-served from center and the violation is reported.
pub fn check_ball_integrity(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    time: &Time,
) -> Result<(), SimError> {
    let corrupted = world
        .query_mut::<&mut Ball>()
        .into_iter()
        .find(|(_entity, ball)| !ball.is_finite());

    if let Some((_entity, ball)) = corrupted {
        let err = SimError::NonFiniteBall {
            tick: time.tick,
            pos: ball.pos,
            vel: ball.vel,
            speed: ball.speed,
        };
        *ball = Ball::new(
            map.center(),
            config.ball_velocity_initial,
            config.ball_radius,
            config.ball_speed_base,
        );
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    #[test]
    fn test_finite_ball_passes() {
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        create_ball(&mut world, &config, Vec2::new(100.0, 100.0), Vec2::new(5.0, 5.0));

        assert_eq!(check_ball_integrity(&mut world, &map, &config, &Time::new()), Ok(()));
    }

    #[test]
    fn test_nan_ball_is_reserved_and_reported() {
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let entity = create_ball(&mut world, &config, Vec2::new(100.0, 100.0), Vec2::new(f32::NAN, 5.0));

        let result = check_ball_integrity(&mut world, &map, &config, &Time { tick: 7 });

        assert!(matches!(result, Err(SimError::NonFiniteBall { tick: 7, .. })));
        let ball = *world.get::<&Ball>(entity).unwrap();
        assert!(ball.is_finite(), "Ball state must not stay corrupted");
        assert_eq!(ball.pos, map.center());
        assert_eq!(ball.speed, config.ball_speed_base);
    }
}
