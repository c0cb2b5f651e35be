//! Pong entry point.
//!
//! A two-paddle arcade game written in Rust using:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, the ECS world, and the audio thread
//! 2. Spawn the paddles and the ball, queue the sound effect loads
//! 3. Run the per-frame schedule: input, scene flow, simulation, render
//! 4. Exit when the exit prompt is confirmed, then join the audio thread
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use pong::events::scene::observe_scene_change;
use pong::game;
use pong::resources::audio::{setup_audio, shutdown_audio};
use pong::resources::gameconfig::GameConfig;
use pong::resources::input::InputState;
use pong::resources::scene::{Scene, SceneState};
use pong::resources::score::Score;
use pong::resources::screensize::ScreenSize;
use pong::resources::worldtime::WorldTime;
use pong::systems::ai::ai_paddle_control;
use pong::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use pong::systems::ball::ball_movement;
use pong::systems::input::update_input_state;
use pong::systems::paddle::player_paddle_control;
use pong::systems::render::render_system;
use pong::systems::scene::{scene_is_game_active, scene_transition};
use pong::systems::time::update_world_time;

/// Pong
#[derive(Parser)]
#[command(version, about = "Two-paddle arcade game for one or two players")]
struct Cli {
    /// Skip the main menu and start in the pregame scene against the AI.
    #[arg(long)]
    dev: bool,

    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();

    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .title("Pong")
        .msaa_4x();
    if config.vsync {
        builder.vsync();
    }
    if config.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape opens the exit prompt instead of killing the window.
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize::default());
    world.insert_resource(InputState::default());
    world.insert_resource(Score::new());
    world.insert_resource(config);

    // Init audio. It must go before the game setup!!
    setup_audio(&mut world);

    let mut scene = SceneState::new();
    if cli.dev {
        scene.set(Scene::Pregame);
    }
    world.insert_resource(scene);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // Ensure the observer is registered before any system triggers events.
    world.spawn(Observer::new(observe_scene_change));
    world.flush();

    let setup_id = world.register_system(game::setup);
    world.run_system(setup_id).expect("Failed to run setup");

    // --------------- Schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(
        // audio systems must be together
        (
            // First, advance AudioCmd messages and forward them to the audio thread
            update_bevy_audio_cmds,
            forward_audio_cmds,
            // Then, pull audio thread messages and advance them
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_messages,
        )
            .chain(),
    );
    update.add_systems(scene_transition.after(update_input_state));
    update.add_systems(
        player_paddle_control
            .run_if(scene_is_game_active)
            .after(scene_transition),
    );
    update.add_systems(
        ai_paddle_control
            .run_if(scene_is_game_active)
            .after(scene_transition),
    );
    update.add_systems(
        ball_movement
            .run_if(scene_is_game_active)
            .after(player_paddle_control)
            .after(ai_paddle_control),
    );
    update.add_systems(render_system.after(ball_movement).after(scene_transition));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world.resource::<SceneState>().quit {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
    shutdown_audio(&mut world);
    log::info!("bye!");
}
