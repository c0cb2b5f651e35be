//! Event types and observers used by the game.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`scene`] – scene transition notifications for the game flow
pub mod audio;
pub mod scene;
