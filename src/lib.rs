//! Two-paddle arcade game built on raylib and bevy_ecs.
//!
//! The binary in `main.rs` owns the window and the frame loop; everything
//! else lives here so integration tests can drive the simulation headlessly
//! with a hand-built `World` and `Schedule`.
//!
//! - [`components`] – ECS components (paddles, ball, positions)
//! - [`events`] – audio protocol and scene-change event
//! - [`game`] – world setup
//! - [`resources`] – ECS resources (scene machine, score, input, config)
//! - [`systems`] – ECS systems (input, scene flow, simulation, render, audio)

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
