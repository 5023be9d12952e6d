//! Single owner of all game state

use crate::{
    create_ai_paddle, create_ball, create_user_paddle, step, Aabb, Ball, BallView, Config, ConfigError,
    Events, GameMap, InputLatch, Paddle, PaddleView, RectView, RenderSnapshot, Score, Side,
    SimError, Time,
};
use glam::Vec2;
use hecs::{Entity, World};

pub struct Game {
    world: World,
    time: Time,
    map: GameMap,
    config: Config,
    score: Score,
    events: Events,
    input: InputLatch,
    user: Entity,
    ai: Entity,
    ball: Entity,
}

impl Game {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let user = create_user_paddle(&mut world, &config);
        let ai = create_ai_paddle(&mut world, &config);
        let ball = create_ball(&mut world, &config, map.center(), config.ball_velocity_initial);

        Ok(Self {
            world,
            time: Time::new(),
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            input: InputLatch::new(),
            user,
            ai,
            ball,
        })
    }

    /// Advance the simulation by one tick
    pub fn tick(&mut self) -> Result<&Events, SimError> {
        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            &self.input,
        )?;
        Ok(&self.events)
    }

    pub fn input(&self) -> &InputLatch {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputLatch {
        &mut self.input
    }

    pub fn set_move_up(&mut self, held: bool) {
        self.input.set_move_up(held);
    }

    pub fn set_move_down(&mut self, held: bool) {
        self.input.set_move_down(held);
    }

    pub fn begin_move_up(&mut self) {
        self.input.begin_move_up();
    }

    pub fn begin_move_down(&mut self) {
        self.input.begin_move_down();
    }

    pub fn clear_move(&mut self) {
        self.input.clear_move();
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn user_paddle(&self) -> Option<Paddle> {
        self.world.get::<&Paddle>(self.user).ok().map(|paddle| *paddle)
    }

    pub fn ai_paddle(&self) -> Option<Paddle> {
        self.world.get::<&Paddle>(self.ai).ok().map(|paddle| *paddle)
    }

    /// Mutable access for harnesses that need to stage a position
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn ball_entity(&self) -> Entity {
        self.ball
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let palette = &self.config.palette;
        let ball = self.ball().unwrap_or_else(|| {
            Ball::new(
                self.map.center(),
                Vec2::ZERO,
                self.config.ball_radius,
                self.config.ball_speed_base,
            )
        });
        let paddle_or_spawn = |paddle: Option<Paddle>, side: Side| {
            paddle.unwrap_or_else(|| {
                Paddle::new(
                    side,
                    self.config.paddle_spawn(side),
                    self.config.paddle_size(),
                )
            })
        };
        let user = paddle_or_spawn(self.user_paddle(), Side::Left);
        let ai = paddle_or_spawn(self.ai_paddle(), Side::Right);

        let (w, h) = (self.map.width, self.map.height);
        let background = Aabb::from_rect(Vec2::ZERO, Vec2::new(w, h));

        RenderSnapshot {
            background: RectView::from_aabb(&background, palette.background),
            net: RectView::from_aabb(&self.map.net(self.config.net_width), palette.net),
            user: PaddleView::new(&user, self.score.user, palette.user_paddle),
            ai: PaddleView::new(&ai, self.score.ai, palette.ai_paddle),
            ball: BallView::new(&ball, palette.ball),
            score_color: palette.score,
            score_font: palette.score_font,
            user_score_anchor: Vec2::new(w / 4.0, h / 6.0),
            ai_score_anchor: Vec2::new(3.0 * w / 4.0, h / 6.0),
        }
    }
}
