//! Scene machine tests: menu flow, pause, exit prompt, restart.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use pong::components::ball::{BALL_BASE_SPEED, Ball};
use pong::components::mapposition::MapPosition;
use pong::components::paddle::Side;
use pong::events::audio::AudioCmd;
use pong::events::scene::SceneChangedEvent;
use pong::resources::input::InputState;
use pong::resources::scene::{Scene, SceneState};
use pong::resources::score::{Score, WIN_SCORE};
use pong::resources::screensize::ScreenSize;
use pong::resources::worldtime::WorldTime;
use pong::systems::scene::scene_transition;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta: 0.016,
        time_scale: 1.0,
    });
    world.insert_resource(ScreenSize { w: 1280, h: 720 });
    world.insert_resource(InputState::default());
    world.insert_resource(SceneState::new());
    world.insert_resource(Score::new());
    world.init_resource::<Messages<AudioCmd>>();
    world
}

fn tick_scene(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(scene_transition);
    schedule.run(world);
}

/// Release every edge-triggered key from the previous simulated frame.
fn release_all(world: &mut World) {
    let mut input = world.resource_mut::<InputState>();
    let input = &mut *input;
    input.close_requested = false;
    for state in [
        &mut input.left_up,
        &mut input.left_down,
        &mut input.right_up,
        &mut input.right_down,
        &mut input.start_versus_ai,
        &mut input.start_two_player,
        &mut input.pause,
        &mut input.restart,
        &mut input.menu,
        &mut input.back,
        &mut input.confirm,
        &mut input.cancel,
    ] {
        state.active = false;
        state.just_pressed = false;
        state.just_released = false;
    }
}

#[test]
fn enter_on_menu_goes_to_pregame_versus_ai() {
    let mut world = make_world();
    world.resource_mut::<InputState>().start_versus_ai.just_pressed = true;

    tick_scene(&mut world);

    let scene = world.resource::<SceneState>();
    assert_eq!(scene.current(), Scene::Pregame);
    assert!(scene.ai_player);
}

#[test]
fn space_on_menu_starts_two_player_game() {
    let mut world = make_world();
    world.resource_mut::<InputState>().start_two_player.just_pressed = true;

    tick_scene(&mut world);

    let scene = world.resource::<SceneState>();
    assert_eq!(scene.current(), Scene::Game);
    assert!(!scene.ai_player);
}

#[test]
fn any_movement_key_serves_from_pregame() {
    let mut world = make_world();
    world.resource_mut::<SceneState>().set(Scene::Pregame);
    world.resource_mut::<InputState>().right_down.just_pressed = true;

    tick_scene(&mut world);

    assert_eq!(world.resource::<SceneState>().current(), Scene::Game);
}

#[test]
fn unrelated_key_does_not_serve_from_pregame() {
    let mut world = make_world();
    world.resource_mut::<SceneState>().set(Scene::Pregame);
    world.resource_mut::<InputState>().restart.just_pressed = true;

    tick_scene(&mut world);

    assert_eq!(world.resource::<SceneState>().current(), Scene::Pregame);
}

#[test]
fn pause_toggles_in_game_scene_only() {
    let mut world = make_world();
    world.resource_mut::<SceneState>().set(Scene::Game);
    world.resource_mut::<InputState>().pause.just_pressed = true;

    tick_scene(&mut world);
    assert!(world.resource::<SceneState>().paused);
    assert_eq!(world.resource::<SceneState>().current(), Scene::Game);

    // Second press resumes.
    release_all(&mut world);
    world.resource_mut::<InputState>().pause.just_pressed = true;
    tick_scene(&mut world);
    assert!(!world.resource::<SceneState>().paused);

    // P outside the game scene does nothing.
    release_all(&mut world);
    world.resource_mut::<SceneState>().set(Scene::MainMenu);
    world.resource_mut::<InputState>().pause.just_pressed = true;
    tick_scene(&mut world);
    assert!(!world.resource::<SceneState>().paused);
    assert_eq!(world.resource::<SceneState>().current(), Scene::MainMenu);
}

#[test]
fn escape_opens_exit_prompt_and_n_resumes() {
    let mut world = make_world();
    world.resource_mut::<SceneState>().set(Scene::Game);
    world.resource_mut::<InputState>().back.just_pressed = true;

    tick_scene(&mut world);

    {
        let scene = world.resource::<SceneState>();
        assert_eq!(scene.current(), Scene::ExitConfirm);
        assert_eq!(scene.prev(), Scene::Game);
        assert!(!scene.quit);
    }

    release_all(&mut world);
    world.resource_mut::<InputState>().cancel.just_pressed = true;
    tick_scene(&mut world);

    let scene = world.resource::<SceneState>();
    assert_eq!(scene.current(), Scene::Game);
    assert!(!scene.quit);
}

#[test]
fn window_close_routes_to_exit_prompt() {
    let mut world = make_world();
    world.resource_mut::<InputState>().close_requested = true;

    tick_scene(&mut world);

    let scene = world.resource::<SceneState>();
    assert_eq!(scene.current(), Scene::ExitConfirm);
    assert_eq!(scene.prev(), Scene::MainMenu);
}

#[test]
fn confirming_the_exit_prompt_sets_quit() {
    let mut world = make_world();
    world.resource_mut::<SceneState>().enter_exit_confirm();
    world.resource_mut::<InputState>().confirm.just_pressed = true;

    tick_scene(&mut world);

    assert!(world.resource::<SceneState>().quit);
}

#[test]
fn pause_survives_the_exit_prompt_round_trip() {
    let mut world = make_world();
    {
        let mut scene = world.resource_mut::<SceneState>();
        scene.set(Scene::Game);
        scene.paused = true;
    }
    world.resource_mut::<InputState>().back.just_pressed = true;
    tick_scene(&mut world);

    release_all(&mut world);
    world.resource_mut::<InputState>().cancel.just_pressed = true;
    tick_scene(&mut world);

    let scene = world.resource::<SceneState>();
    assert_eq!(scene.current(), Scene::Game);
    assert!(scene.paused);
}

#[test]
fn restart_from_game_over_resets_score_and_ball() {
    let mut world = make_world();
    world.resource_mut::<SceneState>().set(Scene::GameOver);
    {
        let mut score = world.resource_mut::<Score>();
        for _ in 0..WIN_SCORE {
            score.award(Side::Left);
        }
        score.award(Side::Right);
    }
    // Frozen ball parked where the final point left it.
    let ball = world
        .spawn((
            Ball {
                direction: Vector2 { x: -1.0, y: 1.0 },
                speed: 0.0,
            },
            MapPosition::new(12.0, 60.0),
        ))
        .id();

    world.resource_mut::<InputState>().restart.just_pressed = true;
    tick_scene(&mut world);

    assert_eq!(world.resource::<SceneState>().current(), Scene::Game);
    assert_eq!(*world.resource::<Score>(), Score::new());

    let pos = world.get::<MapPosition>(ball).unwrap();
    assert!(approx_eq(pos.pos.x, 640.0));
    assert!(approx_eq(pos.pos.y, 360.0));
    let b = world.get::<Ball>(ball).unwrap();
    assert!(approx_eq(b.speed, BALL_BASE_SPEED));
}

#[test]
fn menu_key_from_game_over_returns_to_main_menu() {
    let mut world = make_world();
    world.resource_mut::<SceneState>().set(Scene::GameOver);
    world.resource_mut::<InputState>().menu.just_pressed = true;

    tick_scene(&mut world);

    assert_eq!(world.resource::<SceneState>().current(), Scene::MainMenu);
}

#[test]
fn transitions_emit_scene_changed_events() {
    let mut world = make_world();

    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    world.add_observer(move |trigger: On<SceneChangedEvent>| {
        let event = trigger.event();
        seen_clone.lock().unwrap().push((event.from, event.to));
    });
    world.flush();

    world.resource_mut::<InputState>().start_versus_ai.just_pressed = true;
    tick_scene(&mut world);

    release_all(&mut world);
    world.resource_mut::<InputState>().left_up.just_pressed = true;
    tick_scene(&mut world);

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            (Scene::MainMenu, Scene::Pregame),
            (Scene::Pregame, Scene::Game),
        ]
    );
}
