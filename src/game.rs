//! World setup: spawn the court entities and queue the sound effect loads.

use bevy_ecs::prelude::*;

use crate::components::ball::Ball;
use crate::components::mapposition::MapPosition;
use crate::components::paddle::{PADDLE_HEIGHT, PADDLE_WIDTH, Paddle, Side};
use crate::events::audio::AudioCmd;
use crate::resources::screensize::ScreenSize;

/// Horizontal inset of each paddle from its court edge, in pixels.
const PADDLE_MARGIN: f32 = 50.0;

/// One-shot startup system: spawns both paddles and the ball and queues the
/// sound effect loads. Registered and run once from `main` after
/// `setup_audio`.
pub fn setup(
    mut commands: Commands,
    screen: Res<ScreenSize>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    let (screen_w, screen_h) = (screen.w as f32, screen.h as f32);
    let paddle_y = (screen_h - PADDLE_HEIGHT) / 2.0;

    commands.spawn((
        Paddle::new(Side::Left),
        MapPosition::new(PADDLE_MARGIN, paddle_y),
    ));
    commands.spawn((
        Paddle::new(Side::Right),
        MapPosition::new(screen_w - PADDLE_MARGIN - PADDLE_WIDTH, paddle_y),
    ));

    // Initial serve
    let mut ball = Ball::new();
    let mut position = MapPosition::new(screen_w / 2.0, screen_h / 2.0);
    ball.reset(&mut position.pos, screen_w, screen_h);
    commands.spawn((ball, position));

    // Don't block; the audio thread answers with FxLoaded/FxLoadFailed, and a
    // cue that failed to load just never plays.
    audio_cmd_writer.write(AudioCmd::LoadFx {
        id: "top".into(),
        path: "./assets/sounds/ping_pong_8bit_beeep.ogg".into(),
    });
    audio_cmd_writer.write(AudioCmd::LoadFx {
        id: "hit".into(),
        path: "./assets/sounds/ping_pong_8bit_plop.ogg".into(),
    });
    audio_cmd_writer.write(AudioCmd::LoadFx {
        id: "edge".into(),
        path: "./assets/sounds/ping_pong_8bit_peeeeeep.ogg".into(),
    });
}
