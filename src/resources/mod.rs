//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `gameconfig` – window settings loaded from an INI file
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `scene` – current/previous scene, pause flag, AI flag, quit flag
//! - `score` – both players' scores and win detection
//! - `screensize` – playfield dimensions in pixels
//! - `worldtime` – simulation time and delta
pub mod audio;
pub mod gameconfig;
pub mod input;
pub mod scene;
pub mod score;
pub mod screensize;
pub mod worldtime;
