//! Computer opponent for the left paddle.
//!
//! Two behaviors keyed off the ball's horizontal direction:
//! - ball moving away: drift back toward the vertical center of the court,
//!   with a wide deadband so the paddle settles instead of jittering;
//! - ball approaching: chase the ball's y coordinate with a tight deadband,
//!   clamped to the playfield.
//!
//! The paddle moves at the same speed as a human player, so a fast ball can
//! still beat it to the corner.

use bevy_ecs::prelude::*;

use crate::components::ball::Ball;
use crate::components::mapposition::MapPosition;
use crate::components::paddle::{self, PADDLE_HEIGHT, Paddle, Side};
use crate::resources::scene::SceneState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Tolerated distance from the court center while idling, in pixels.
const CENTER_DEADBAND: f32 = 10.0;
/// Tolerated tracking error while chasing the ball, in pixels.
const TRACK_DEADBAND: f32 = 1.0;

/// Steer the left paddle when the AI opponent is enabled.
pub fn ai_paddle_control(
    mut paddles: Query<(&Paddle, &mut MapPosition), Without<Ball>>,
    balls: Query<(&Ball, &MapPosition)>,
    scene: Res<SceneState>,
    screen: Res<ScreenSize>,
    time: Res<WorldTime>,
) {
    if !scene.ai_player {
        return;
    }
    let Ok((ball, ball_position)) = balls.single() else {
        return;
    };

    let screen_h = screen.h as f32;
    for (paddle, mut position) in paddles.iter_mut() {
        if paddle.side != Side::Left {
            continue;
        }
        let step = paddle.speed * time.delta;
        let paddle_center = position.pos.y + PADDLE_HEIGHT / 2.0;

        if ball.direction.x > 0.0 {
            // Ball is heading to the other side: return to center.
            let distance = screen_h / 2.0 - paddle_center;
            if distance.abs() > CENTER_DEADBAND {
                if distance > 0.0 {
                    position.pos.y += step;
                } else {
                    position.pos.y -= step;
                }
            }
        } else {
            // Ball is incoming: track its vertical position.
            let distance = ball_position.pos.y - paddle_center;
            if distance.abs() > TRACK_DEADBAND {
                if distance > 0.0 {
                    position.pos.y += step;
                } else {
                    position.pos.y -= step;
                }
            }
            position.pos.y = paddle::clamp_y(position.pos.y, screen_h);
        }
    }
}
