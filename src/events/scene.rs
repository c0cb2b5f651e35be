//! Scene transition event and observer.
//!
//! Every scene change goes through [`SceneChangedEvent`] so side effects of
//! *entering* a scene live in one place instead of being scattered across
//! the systems that request transitions. Currently that is transition
//! logging and freezing the ball when the game-over scene is entered.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::ball::Ball;
use crate::resources::scene::Scene;

/// Emitted by [`crate::systems::scene::scene_transition`] and
/// [`crate::systems::ball::ball_movement`] after the scene has been switched.
#[derive(Event, Debug, Clone, Copy)]
pub struct SceneChangedEvent {
    pub from: Scene,
    pub to: Scene,
}

/// Observer that applies enter-scene side effects.
///
/// On entering [`Scene::GameOver`] the ball speed is forced to zero; the
/// direction is left untouched so a restart only has to re-serve.
pub fn observe_scene_change(trigger: On<SceneChangedEvent>, mut balls: Query<&mut Ball>) {
    let event = trigger.event();
    info!("Scene transition: {:?} -> {:?}", event.from, event.to);

    if event.to == Scene::GameOver {
        for mut ball in balls.iter_mut() {
            ball.speed = 0.0;
        }
    }
}
