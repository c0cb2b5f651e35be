//! Ball simulation.
//!
//! One system advances the ball each frame, in a fixed order: integrate,
//! bounce off the horizontal walls, bounce off paddles, then check the
//! scoring edges. Bounces only flip a direction sign and never correct the
//! position, so a ball that tunnels past a wall in one frame flips back on
//! the next.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::ball::{BALL_SIZE, BALL_SPEED_INCREMENT, Ball};
use crate::components::mapposition::MapPosition;
use crate::components::paddle::{Paddle, Side};
use crate::events::audio::AudioCmd;
use crate::events::scene::SceneChangedEvent;
use crate::resources::scene::{Scene, SceneState};
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Integrate the ball and resolve wall bounces, paddle hits, and scoring.
pub fn ball_movement(
    mut commands: Commands,
    mut balls: Query<(&mut Ball, &mut MapPosition), Without<Paddle>>,
    paddles: Query<(&Paddle, &MapPosition)>,
    mut scene: ResMut<SceneState>,
    mut score: ResMut<Score>,
    screen: Res<ScreenSize>,
    time: Res<WorldTime>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let screen_w = screen.w as f32;
    let screen_h = screen.h as f32;

    for (mut ball, mut position) in balls.iter_mut() {
        let step = ball.direction.scale_by(ball.speed * time.delta);
        position.pos += step;

        // Top and bottom walls flip the vertical direction.
        if position.pos.y <= 0.0 || position.pos.y >= screen_h - BALL_SIZE {
            ball.direction.y *= -1.0;
            audio.write(AudioCmd::PlayFx { id: "top".into() });
        }

        // A paddle hit flips the horizontal direction and speeds the ball up.
        let hit = paddles.iter().any(|(paddle, paddle_position)| {
            paddle
                .rect(paddle_position.pos)
                .check_collision_circle_rec(position.pos, ball.radius())
        });
        if hit {
            ball.direction.x *= -1.0;
            ball.speed += BALL_SPEED_INCREMENT;
            audio.write(AudioCmd::PlayFx { id: "hit".into() });
        }

        // Leaving a vertical edge scores for the opposite player.
        let scorer = if position.pos.x < 0.0 {
            Some(Side::Right)
        } else if position.pos.x > screen_w {
            Some(Side::Left)
        } else {
            None
        };
        if let Some(side) = scorer {
            audio.write(AudioCmd::PlayFx { id: "edge".into() });
            score.award(side);
            ball.reset(&mut position.pos, screen_w, screen_h);
        }

        if score.winner().is_some() && scene.current() == Scene::Game {
            scene.set(Scene::GameOver);
            commands.trigger(SceneChangedEvent {
                from: Scene::Game,
                to: Scene::GameOver,
            });
        }
    }
}
