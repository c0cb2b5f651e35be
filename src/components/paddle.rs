//! Paddle component.
//!
//! A paddle is a fixed-size rectangle that only moves vertically. Its
//! horizontal position is set once at spawn and never changes. The movement
//! systems ([`crate::systems::paddle`] and [`crate::systems::ai`]) mutate the
//! entity's [`MapPosition`](super::mapposition::MapPosition) and keep it
//! inside the playfield with [`clamp_y`].

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

pub const PADDLE_WIDTH: f32 = 15.0;
pub const PADDLE_HEIGHT: f32 = 150.0;
/// Vertical paddle speed in pixels per second.
pub const PADDLE_SPEED: f32 = 500.0;

/// Which side of the court a paddle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Paddle entity data: court side and vertical movement speed.
#[derive(Component, Clone, Copy, Debug)]
pub struct Paddle {
    pub side: Side,
    /// Movement speed in pixels per second.
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            speed: PADDLE_SPEED,
        }
    }

    /// The paddle rectangle for a given top-left position.
    pub fn rect(&self, position: Vector2) -> Rectangle {
        Rectangle {
            x: position.x,
            y: position.y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

/// Clamp a paddle top-left y so the whole paddle stays on screen.
pub fn clamp_y(y: f32, screen_h: f32) -> f32 {
    y.clamp(0.0, screen_h - PADDLE_HEIGHT)
}
