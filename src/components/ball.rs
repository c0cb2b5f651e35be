//! Ball component.
//!
//! The ball stores a direction vector and a scalar speed instead of a plain
//! velocity: bounces only flip the sign of one direction component, and the
//! speed ratchets up on every paddle hit until the next reset. Direction
//! components are ±1 at spawn and are never renormalized during play; the
//! simulation relies solely on sign flips.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Ball diameter in pixels.
pub const BALL_SIZE: f32 = 18.0;
/// Speed of a freshly served ball, in pixels per second.
pub const BALL_BASE_SPEED: f32 = 400.0;
/// Speed gained on each paddle hit.
pub const BALL_SPEED_INCREMENT: f32 = BALL_BASE_SPEED / 10.0;

/// Ball entity data: travel direction and scalar speed.
///
/// Position lives in the entity's
/// [`MapPosition`](super::mapposition::MapPosition) (circle center).
#[derive(Component, Clone, Copy, Debug)]
pub struct Ball {
    /// Component signs are ±1 at spawn; magnitude is never normalized.
    pub direction: Vector2,
    /// Current speed in pixels per second. Never decreases within a rally.
    pub speed: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            direction: Vector2 { x: 1.0, y: 1.0 },
            speed: BALL_BASE_SPEED,
        }
    }

    pub fn radius(&self) -> f32 {
        BALL_SIZE / 2.0
    }

    /// Re-serve the ball: center position, fresh random diagonal, base speed.
    ///
    /// Both direction signs are drawn independently and uniformly.
    pub fn reset(&mut self, position: &mut Vector2, screen_w: f32, screen_h: f32) {
        position.x = screen_w / 2.0;
        position.y = screen_h / 2.0;
        self.direction.x = if fastrand::bool() { 1.0 } else { -1.0 };
        self.direction.y = if fastrand::bool() { 1.0 } else { -1.0 };
        self.speed = BALL_BASE_SPEED;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_ball_new() {
        let ball = Ball::new();
        assert!(approx_eq(ball.speed, BALL_BASE_SPEED));
        assert!(approx_eq(ball.direction.x, 1.0));
        assert!(approx_eq(ball.direction.y, 1.0));
    }

    #[test]
    fn test_radius_is_half_diameter() {
        assert!(approx_eq(Ball::new().radius(), BALL_SIZE / 2.0));
    }

    #[test]
    fn test_reset_centers_and_restores_base_speed() {
        let mut ball = Ball::new();
        ball.speed = 720.0;
        let mut pos = Vector2 { x: -5.0, y: 12.0 };

        ball.reset(&mut pos, 1280.0, 720.0);

        assert!(approx_eq(pos.x, 640.0));
        assert!(approx_eq(pos.y, 360.0));
        assert!(approx_eq(ball.speed, BALL_BASE_SPEED));
    }

    #[test]
    fn test_reset_direction_components_are_unit_signs() {
        let mut ball = Ball::new();
        let mut pos = Vector2 { x: 0.0, y: 0.0 };
        for _ in 0..32 {
            ball.reset(&mut pos, 1280.0, 720.0);
            assert!(approx_eq(ball.direction.x.abs(), 1.0));
            assert!(approx_eq(ball.direction.y.abs(), 1.0));
        }
    }
}
