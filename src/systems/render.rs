//! Scene rendering.
//!
//! Exclusive system: snapshots the drawable state first, then takes the
//! Raylib handle and thread out of the world for the draw pass. The court
//! (paddles, dashed divider, scores) is shared between the pregame, game,
//! and game-over scenes and only changes color.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::ball::Ball;
use crate::components::mapposition::MapPosition;
use crate::components::paddle::Paddle;
use crate::resources::scene::{Scene, SceneState};
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;

const DASH_LENGTH: f32 = 10.0;
const DASH_GAP: f32 = 5.0;
const DASH_THICKNESS: f32 = 5.0;
const SCORE_FONT_SIZE: i32 = 80;

/// Draw the current scene.
pub fn render_system(world: &mut World) {
    let scene = *world.resource::<SceneState>();
    let score = *world.resource::<Score>();
    let screen = *world.resource::<ScreenSize>();

    let mut paddle_query = world.query::<(&Paddle, &MapPosition)>();
    let paddles: Vec<(Paddle, Vector2)> = paddle_query
        .iter(world)
        .map(|(paddle, position)| (*paddle, position.pos))
        .collect();

    let mut ball_query = world.query::<(&Ball, &MapPosition)>();
    let ball: Option<(Ball, Vector2)> = ball_query
        .iter(world)
        .next()
        .map(|(ball, position)| (*ball, position.pos));

    // begin_drawing needs the thread alongside a mutable handle borrow, so
    // the thread is taken out of the world for the duration of the pass.
    let thread = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("RaylibThread missing from world");
    {
        let mut rl = world.non_send_resource_mut::<RaylibHandle>();
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::DARKGRAY);

        match scene.current() {
            Scene::MainMenu => draw_main_menu(&mut d, &screen),
            Scene::Pregame => {
                draw_court(&mut d, &screen, &score, &paddles, Color::LIGHTGRAY);
                draw_text_centered(
                    &mut d,
                    "Press to start game.",
                    screen.w / 2,
                    screen.h / 2 - 30,
                    60,
                    Color::RAYWHITE,
                );
            }
            Scene::Game => {
                draw_court(&mut d, &screen, &score, &paddles, Color::RAYWHITE);
                if let Some((ball, position)) = ball {
                    d.draw_circle_v(position, ball.radius(), Color::RAYWHITE);
                }
                // Pause overrides the frame with a dimmed redraw.
                if scene.paused {
                    d.clear_background(Color::DARKGRAY);
                    draw_court(&mut d, &screen, &score, &paddles, Color::LIGHTGRAY);
                    if let Some((ball, position)) = ball {
                        d.draw_circle_v(position, ball.radius(), Color::LIGHTGRAY);
                    }
                    draw_text_centered(
                        &mut d,
                        "Paused.",
                        screen.w / 2,
                        screen.h / 2 - 30,
                        60,
                        Color::RED,
                    );
                }
            }
            Scene::GameOver => {
                draw_court(&mut d, &screen, &score, &paddles, Color::LIGHTGRAY);
                draw_text_centered(
                    &mut d,
                    "Press R to restart game.",
                    screen.w / 2,
                    screen.h / 2 - 30,
                    60,
                    Color::RAYWHITE,
                );
                draw_text_centered(
                    &mut d,
                    "Press M for main menu.",
                    screen.w / 2,
                    screen.h / 2 + 40,
                    20,
                    Color::RAYWHITE,
                );
            }
            Scene::ExitConfirm => {
                draw_text_centered(
                    &mut d,
                    "Are you sure you want to exit program? [Y/N]",
                    screen.w / 2,
                    screen.h / 2 - 15,
                    30,
                    Color::RAYWHITE,
                );
            }
        }
    }
    world.insert_non_send_resource(thread);
}

fn draw_main_menu(d: &mut RaylibDrawHandle, screen: &ScreenSize) {
    let center_x = screen.w / 2;
    draw_text_centered(d, "PONG!", center_x, screen.h / 4, 40, Color::RAYWHITE);
    draw_text_centered(
        d,
        "Play with AI (press Enter)",
        center_x,
        screen.h / 2,
        20,
        Color::RAYWHITE,
    );
    draw_text_centered(
        d,
        "Local Two Player (press Space)",
        center_x,
        screen.h / 2 + 40,
        20,
        Color::RAYWHITE,
    );
    draw_text_centered(
        d,
        "Exit (press Escape)",
        center_x,
        screen.h / 2 + 80,
        20,
        Color::RAYWHITE,
    );
}

/// Paddles, the dashed center divider, and both scores.
fn draw_court(
    d: &mut RaylibDrawHandle,
    screen: &ScreenSize,
    score: &Score,
    paddles: &[(Paddle, Vector2)],
    color: Color,
) {
    for (paddle, position) in paddles {
        d.draw_rectangle_rec(paddle.rect(*position), color);
    }
    draw_dashed_divider(d, screen, color);
    draw_text_centered(
        d,
        &score.left.to_string(),
        screen.w / 4,
        20,
        SCORE_FONT_SIZE,
        color,
    );
    draw_text_centered(
        d,
        &score.right.to_string(),
        3 * screen.w / 4,
        20,
        SCORE_FONT_SIZE,
        color,
    );
}

fn draw_dashed_divider(d: &mut RaylibDrawHandle, screen: &ScreenSize, color: Color) {
    let x = screen.w as f32 / 2.0;
    let screen_h = screen.h as f32;
    let mut y = 0.0;
    while y < screen_h {
        let end = (y + DASH_LENGTH).min(screen_h);
        d.draw_line_ex(
            Vector2 { x, y },
            Vector2 { x, y: end },
            DASH_THICKNESS,
            color,
        );
        y += DASH_LENGTH + DASH_GAP;
    }
}

fn draw_text_centered(
    d: &mut RaylibDrawHandle,
    text: &str,
    center_x: i32,
    y: i32,
    font_size: i32,
    color: Color,
) {
    let width = d.measure_text(text, font_size);
    d.draw_text(text, center_x - width / 2, y, font_size, color);
}
