//! ECS components for entities.
//!
//! This module groups the component types attached to entities in the game
//! world. Pong only has three long-lived entities (two paddles and the
//! ball), all spawned once at startup and never despawned.
//!
//! Submodules overview:
//! - [`ball`] – ball direction/speed and the randomized reset policy
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`paddle`] – paddle side, movement speed, and rectangle helpers

pub mod ball;
pub mod mapposition;
pub mod paddle;
