use glam::{Vec2, vec2};

use crate::rect::Rect;

/// Direction keys held during one tick. Opposite keys cancel out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayerInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl PlayerInput {
    pub const NONE: PlayerInput = PlayerInput {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Unnormalized: a diagonal moves a full step on both axes.
    pub fn intent(&self) -> Vec2 {
        let mut intent = Vec2::ZERO;

        if self.left {
            intent.x -= 1.0;
        }
        if self.right {
            intent.x += 1.0;
        }
        if self.up {
            intent.y -= 1.0;
        }
        if self.down {
            intent.y += 1.0;
        }

        intent
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub size: f32,
    pub speed: f32, // Pixels per tick.
}

impl Player {
    pub fn new(position: Vec2, size: f32, speed: f32) -> Self {
        Self {
            position,
            size,
            speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.position, self.size)
    }

    /// Where `intent` would take the player, each axis clamped to the
    /// top-left corners allowed by `min` and `max`.
    pub fn intended_position(&self, intent: Vec2, min: Vec2, max: Vec2) -> Vec2 {
        let target = self.position + intent * self.speed;
        vec2(target.x.clamp(min.x, max.x), target.y.clamp(min.y, max.y))
    }

    pub fn freeze(&mut self) {
        self.speed = 0.0;
    }

    pub fn is_frozen(&self) -> bool {
        self.speed == 0.0
    }
}
