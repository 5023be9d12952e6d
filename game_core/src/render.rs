//! Read-only view of the game handed to the render adapter

use crate::{Aabb, Ball, Paddle};
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: &'static str,
}

impl RectView {
    pub fn from_aabb(aabb: &Aabb, color: &'static str) -> Self {
        let size = aabb.size();
        Self {
            x: aabb.left(),
            y: aabb.top(),
            width: size.x,
            height: size.y,
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleView {
    pub rect: RectView,
    pub score: u32,
}

impl PaddleView {
    pub fn new(paddle: &Paddle, score: u32, color: &'static str) -> Self {
        Self {
            rect: RectView::from_aabb(&paddle.bounds(), color),
            score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: &'static str,
}

impl BallView {
    pub fn new(ball: &Ball, color: &'static str) -> Self {
        Self {
            x: ball.pos.x,
            y: ball.pos.y,
            radius: ball.radius,
            color,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSnapshot {
    pub background: RectView,
    pub net: RectView,
    pub user: PaddleView,
    pub ai: PaddleView,
    pub ball: BallView,
    pub score_color: &'static str,
    pub score_font: &'static str,
    pub user_score_anchor: Vec2,
    pub ai_score_anchor: Vec2,
}
