use glam::{Vec2, vec2};

/// Axis-aligned rectangle in pixel space. Used as the hit-box for every
/// collision test in the game.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn square(position: Vec2, size: f32) -> Self {
        Self::new(position.x, position.y, size, size)
    }

    pub fn position(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    // Touching edges do not count as an overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn intersects_any(&self, others: &[Rect]) -> bool {
        others.iter().any(|other| self.intersects(other))
    }

    /// Whether `other` lies entirely within this rectangle. Shared edges
    /// count as inside.
    pub fn encloses(&self, other: &Rect) -> bool {
        self.x <= other.x
            && other.right() <= self.right()
            && self.y <= other.y
            && other.bottom() <= self.bottom()
    }

    /// Half-open: the left and top edges are inside, the right and bottom
    /// edges are not.
    pub fn contains(&self, point: Vec2) -> bool {
        self.x <= point.x && point.x < self.right() && self.y <= point.y && point.y < self.bottom()
    }
}
