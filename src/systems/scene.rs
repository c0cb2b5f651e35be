//! Scene transition system and scheduling conditions.
//!
//! One system owns every key-driven transition of the scene machine:
//!
//! ```text
//! MainMenu --Enter--> Pregame --any move/start key--> Game
//! MainMenu --Space--> Game (two players)
//! Game --P--> (pause toggle, scene unchanged)
//! GameOver --R--> Game (scores and ball reset)
//! GameOver --M--> MainMenu
//! any --Escape/close--> ExitConfirm --Y--> quit
//!                                   --N--> resume interrupted scene
//! ```
//!
//! The win-driven `Game -> GameOver` transition lives in
//! [`crate::systems::ball::ball_movement`], where the final point is scored.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::ball::Ball;
use crate::components::mapposition::MapPosition;
use crate::events::scene::SceneChangedEvent;
use crate::resources::input::InputState;
use crate::resources::scene::{Scene, SceneState};
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;

/// Run condition: simulation systems execute only during unpaused play.
pub fn scene_is_game_active(scene: Res<SceneState>) -> bool {
    scene.current() == Scene::Game && !scene.paused
}

/// Apply at most one scene transition per frame from the current input.
pub fn scene_transition(
    mut commands: Commands,
    input: Res<InputState>,
    mut scene: ResMut<SceneState>,
    mut score: ResMut<Score>,
    mut balls: Query<(&mut Ball, &mut MapPosition)>,
    screen: Res<ScreenSize>,
) {
    // Escape and the window close button interrupt whatever scene is active.
    if input.close_requested || input.back.just_pressed {
        if scene.current() != Scene::ExitConfirm {
            let from = scene.current();
            scene.enter_exit_confirm();
            commands.trigger(SceneChangedEvent {
                from,
                to: Scene::ExitConfirm,
            });
        }
        return;
    }

    match scene.current() {
        Scene::MainMenu => {
            if input.start_versus_ai.just_pressed {
                scene.ai_player = true;
                scene.set(Scene::Pregame);
                commands.trigger(SceneChangedEvent {
                    from: Scene::MainMenu,
                    to: Scene::Pregame,
                });
            } else if input.start_two_player.just_pressed {
                scene.ai_player = false;
                scene.set(Scene::Game);
                commands.trigger(SceneChangedEvent {
                    from: Scene::MainMenu,
                    to: Scene::Game,
                });
            }
        }
        Scene::Pregame => {
            // Any start or movement key serves the ball.
            let any_start = input.start_versus_ai.just_pressed
                || input.start_two_player.just_pressed
                || input.left_up.just_pressed
                || input.left_down.just_pressed
                || input.right_up.just_pressed
                || input.right_down.just_pressed;
            if any_start {
                scene.set(Scene::Game);
                commands.trigger(SceneChangedEvent {
                    from: Scene::Pregame,
                    to: Scene::Game,
                });
            }
        }
        Scene::Game => {
            if input.pause.just_pressed {
                scene.paused = !scene.paused;
                debug!("pause toggled: {}", scene.paused);
            }
        }
        Scene::GameOver => {
            if input.restart.just_pressed {
                score.reset();
                for (mut ball, mut position) in balls.iter_mut() {
                    ball.reset(&mut position.pos, screen.w as f32, screen.h as f32);
                }
                scene.set(Scene::Game);
                commands.trigger(SceneChangedEvent {
                    from: Scene::GameOver,
                    to: Scene::Game,
                });
            } else if input.menu.just_pressed {
                scene.set(Scene::MainMenu);
                commands.trigger(SceneChangedEvent {
                    from: Scene::GameOver,
                    to: Scene::MainMenu,
                });
            }
        }
        Scene::ExitConfirm => {
            if input.confirm.just_pressed {
                scene.quit = true;
            } else if input.cancel.just_pressed {
                let to = scene.prev();
                scene.resume_from_exit_confirm();
                commands.trigger(SceneChangedEvent {
                    from: Scene::ExitConfirm,
                    to,
                });
            }
        }
    }
}
