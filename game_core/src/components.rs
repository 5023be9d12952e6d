use crate::Aabb;
use glam::Vec2;

/// Which goal line a paddle defends. The user always plays `Left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal direction a ball travels after bouncing off this side's paddle
    pub fn serve_sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // top-left corner
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2) -> Self {
        Self { side, pos, size }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.pos, self.size)
    }
}

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // center
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
        }
    }

    /// Put the ball back on the center spot at base speed, heading back the
    /// way it came
    pub fn reset(&mut self, center: Vec2, base_speed: f32) {
        self.pos = center;
        self.speed = base_speed;
        self.vel = -self.vel;
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite() && self.speed.is_finite()
    }
}

/// Movement intent for the user paddle, copied from the input latch.
/// Both flags may be set; the movement system decides which one applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marks a paddle steered by the tracking AI
#[derive(Debug, Clone, Copy)]
pub struct AiTracker {
    pub gain: f32,
}

impl AiTracker {
    pub fn new(gain: f32) -> Self {
        Self { gain }
    }
}
