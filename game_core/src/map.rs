use crate::Config;
use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from a top-left corner and a size
    pub fn from_rect(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Bounding box of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        let half = Vec2::splat(radius);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        other.left() < self.right()
            && other.top() < self.bottom()
            && other.right() > self.left()
            && other.bottom() > self.top()
    }
}

/// Check whether a circle's bounding box overlaps a rectangle
pub fn overlaps(rect: &Aabb, center: Vec2, radius: f32) -> bool {
    rect.overlaps(&Aabb::around_circle(center, radius))
}

/// Playfield bounds. Walls run along the top and bottom edges; the left and
/// right edges are goal lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.field_width, config.field_height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn midfield_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Lowest top-edge Y a paddle of this height can have
    pub fn max_paddle_y(&self, paddle_height: f32) -> f32 {
        self.height - paddle_height
    }

    /// Clamp a paddle's top edge so the whole paddle stays in the field
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y(paddle_height))
    }

    /// Full-height net centered on the midfield line
    pub fn net(&self, net_width: f32) -> Aabb {
        Aabb::from_rect(
            Vec2::new(self.midfield_x() - net_width / 2.0, 0.0),
            Vec2::new(net_width, self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_rect() -> Aabb {
        Aabb::from_rect(Vec2::new(10.0, 100.0), Vec2::new(10.0, 100.0))
    }

    #[test]
    fn test_overlap_when_ball_inside_paddle() {
        assert!(overlaps(&paddle_rect(), Vec2::new(15.0, 150.0), 7.0));
    }

    #[test]
    fn test_no_overlap_when_far_away() {
        assert!(!overlaps(&paddle_rect(), Vec2::new(300.0, 150.0), 7.0));
        assert!(!overlaps(&paddle_rect(), Vec2::new(15.0, 20.0), 7.0));
    }

    #[test]
    fn test_edge_touching_is_not_overlap() {
        // Ball's left edge exactly on the paddle's right edge
        assert!(!overlaps(&paddle_rect(), Vec2::new(27.0, 150.0), 7.0));
        // Ball's bottom edge exactly on the paddle's top edge
        assert!(!overlaps(&paddle_rect(), Vec2::new(15.0, 93.0), 7.0));
        // A hair inside counts
        assert!(overlaps(&paddle_rect(), Vec2::new(26.9, 150.0), 7.0));
    }

    #[test]
    fn test_corner_uses_bounding_boxes() {
        // Circle misses the corner geometrically, but bounding boxes intersect
        let center = Vec2::new(25.0, 95.0);
        assert!(overlaps(&paddle_rect(), center, 7.0));
    }

    #[test]
    fn test_overlap_is_repeatable() {
        let rect = paddle_rect();
        let center = Vec2::new(22.0, 101.0);
        let first = overlaps(&rect, center, 7.0);
        let second = overlaps(&rect, center, 7.0);
        assert_eq!(first, second);
        assert_eq!(rect, paddle_rect(), "Inputs should be untouched");
    }

    #[test]
    fn test_aabb_edges() {
        let ball = Aabb::around_circle(Vec2::new(620.0, 187.0), 7.0);
        assert_eq!(ball.top(), 180.0);
        assert_eq!(ball.bottom(), 194.0);
        assert_eq!(ball.left(), 613.0);
        assert_eq!(ball.right(), 627.0);
        assert_eq!(ball.size(), Vec2::splat(14.0));
    }

    #[test]
    fn test_map_clamp_paddle_y() {
        let map = GameMap::new(625.0, 375.0);
        assert_eq!(map.clamp_paddle_y(-6.5, 100.0), 0.0);
        assert_eq!(map.clamp_paddle_y(300.0, 100.0), 275.0);
        assert_eq!(map.clamp_paddle_y(137.5, 100.0), 137.5);
    }

    #[test]
    fn test_map_net_is_centered() {
        let map = GameMap::new(625.0, 375.0);
        let net = map.net(4.0);
        assert_eq!(net.left(), 310.5);
        assert_eq!(net.right(), 314.5);
        assert_eq!(net.top(), 0.0);
        assert_eq!(net.bottom(), 375.0);
    }
}
