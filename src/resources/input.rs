//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. Movement keys are read as
//! level-triggered ("is down"), everything that drives a scene transition is
//! read as edge-triggered ("was just pressed").
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held down this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
///
/// Fields are grouped by purpose: paddle movement (W/S for the left player,
/// arrows for the right), scene flow actions, and the exit-confirmation
/// answers. `close_requested` mirrors the window close button, which routes
/// to the same exit prompt as Escape.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub left_up: BoolState,
    pub left_down: BoolState,
    pub right_up: BoolState,
    pub right_down: BoolState,
    // Scene flow
    pub start_versus_ai: BoolState,
    pub start_two_player: BoolState,
    pub pause: BoolState,
    pub restart: BoolState,
    pub menu: BoolState,
    pub back: BoolState,
    // Exit confirmation
    pub confirm: BoolState,
    pub cancel: BoolState,
    /// OS window close request (close button); Escape is tracked by `back`.
    pub close_requested: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left_up: BoolState::bound_to(KeyboardKey::KEY_W),
            left_down: BoolState::bound_to(KeyboardKey::KEY_S),
            right_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            right_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            start_versus_ai: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            start_two_player: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            pause: BoolState::bound_to(KeyboardKey::KEY_P),
            restart: BoolState::bound_to(KeyboardKey::KEY_R),
            menu: BoolState::bound_to(KeyboardKey::KEY_M),
            back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            confirm: BoolState::bound_to(KeyboardKey::KEY_Y),
            cancel: BoolState::bound_to(KeyboardKey::KEY_N),
            close_requested: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.left_up.active);
        assert!(!input.left_down.active);
        assert!(!input.right_up.active);
        assert!(!input.right_down.active);
        assert!(!input.start_versus_ai.just_pressed);
        assert!(!input.start_two_player.just_pressed);
        assert!(!input.pause.just_pressed);
        assert!(!input.restart.just_pressed);
        assert!(!input.menu.just_pressed);
        assert!(!input.back.just_pressed);
        assert!(!input.confirm.just_pressed);
        assert!(!input.cancel.just_pressed);
        assert!(!input.close_requested);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.left_up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.left_down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.right_up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.right_down.key_binding, KeyboardKey::KEY_DOWN);
        assert_eq!(input.start_versus_ai.key_binding, KeyboardKey::KEY_ENTER);
        assert_eq!(input.start_two_player.key_binding, KeyboardKey::KEY_SPACE);
        assert_eq!(input.pause.key_binding, KeyboardKey::KEY_P);
        assert_eq!(input.restart.key_binding, KeyboardKey::KEY_R);
        assert_eq!(input.menu.key_binding, KeyboardKey::KEY_M);
        assert_eq!(input.back.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.confirm.key_binding, KeyboardKey::KEY_Y);
        assert_eq!(input.cancel.key_binding, KeyboardKey::KEY_N);
    }
}
