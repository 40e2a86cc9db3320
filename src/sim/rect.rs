//! Axis-aligned rectangle
//!
//! Screen coordinates: x grows rightward, y grows downward. Overlap is
//! closed-interval, so rectangles that merely touch count as colliding.

use glam::Vec2;

/// An axis-aligned rectangle stored as center + size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Rect whose top edge midpoint is at `midtop`
    pub fn from_midtop(midtop: Vec2, size: Vec2) -> Self {
        Self {
            center: Vec2::new(midtop.x, midtop.y + size.y / 2.0),
            size,
        }
    }

    /// Rect whose bottom edge midpoint is at `midbottom`
    pub fn from_midbottom(midbottom: Vec2, size: Vec2) -> Self {
        Self {
            center: Vec2::new(midbottom.x, midbottom.y - size.y / 2.0),
            size,
        }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Closed-interval overlap test; touching edges collide
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }
}
