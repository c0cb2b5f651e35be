//! Player paddle movement.
//!
//! Key mapping depends on the opponent mode:
//! - versus AI: the human drives the right paddle with either W/S or the
//!   arrow keys; the left paddle belongs to [`crate::systems::ai`].
//! - two players: W/S moves the left paddle, arrows move the right one.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::paddle::{self, Paddle, Side};
use crate::resources::input::InputState;
use crate::resources::scene::SceneState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Move every human-controlled paddle from held movement keys.
pub fn player_paddle_control(
    mut paddles: Query<(&Paddle, &mut MapPosition)>,
    input: Res<InputState>,
    scene: Res<SceneState>,
    screen: Res<ScreenSize>,
    time: Res<WorldTime>,
) {
    let screen_h = screen.h as f32;
    for (paddle, mut position) in paddles.iter_mut() {
        let (up, down) = match (paddle.side, scene.ai_player) {
            // AI drives the left paddle in versus-AI mode.
            (Side::Left, true) => continue,
            (Side::Left, false) => (input.left_up.active, input.left_down.active),
            (Side::Right, true) => (
                input.left_up.active || input.right_up.active,
                input.left_down.active || input.right_down.active,
            ),
            (Side::Right, false) => (input.right_up.active, input.right_down.active),
        };

        let step = paddle.speed * time.delta;
        if up {
            position.pos.y -= step;
        }
        if down {
            position.pos.y += step;
        }
        position.pos.y = paddle::clamp_y(position.pos.y, screen_h);
    }
}
