//! Keyboard polling system.
//!
//! Runs first in the frame: reads the Raylib keyboard and window state into
//! the [`InputState`] resource so every other system sees one consistent
//! snapshot for the whole frame.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::resources::input::{BoolState, InputState};

fn refresh(state: &mut BoolState, rl: &RaylibHandle) {
    state.active = rl.is_key_down(state.key_binding);
    state.just_pressed = rl.is_key_pressed(state.key_binding);
    state.just_released = rl.is_key_released(state.key_binding);
}

/// Poll every bound key and the window close button into [`InputState`].
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<RaylibHandle>) {
    refresh(&mut input.left_up, &rl);
    refresh(&mut input.left_down, &rl);
    refresh(&mut input.right_up, &rl);
    refresh(&mut input.right_down, &rl);
    refresh(&mut input.start_versus_ai, &rl);
    refresh(&mut input.start_two_player, &rl);
    refresh(&mut input.pause, &rl);
    refresh(&mut input.restart, &rl);
    refresh(&mut input.menu, &rl);
    refresh(&mut input.back, &rl);
    refresh(&mut input.confirm, &rl);
    refresh(&mut input.cancel, &rl);

    // The exit key is unbound at startup, so this only reports the window
    // close button.
    input.close_requested = rl.window_should_close();
}
