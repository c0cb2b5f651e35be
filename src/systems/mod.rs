//! Game systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`ai`] – drive the left paddle when playing against the computer
//! - [`audio`] – background audio thread and its bridge systems
//! - [`ball`] – ball integration, bounces, scoring, win detection
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`paddle`] – translate held keys into paddle movement
//! - [`render`] – draw the current scene using Raylib
//! - [`scene`] – apply key-driven scene transitions
//! - [`time`] – update simulation time and delta

pub mod ai;
pub mod audio;
pub mod ball;
pub mod input;
pub mod paddle;
pub mod render;
pub mod scene;
pub mod time;
