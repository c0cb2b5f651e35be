//! Scene machine state.
//!
//! [`Scene`] is the discrete UI/gameplay phase controlling which update and
//! render logic executes each frame. [`SceneState`] tracks the current and
//! previous scene plus the orthogonal flags that ride along with it: pause,
//! the AI-opponent toggle, and the quit flag the main loop polls.
//!
//! Transitions are applied by [`crate::systems::scene::scene_transition`],
//! which emits a [`SceneChangedEvent`](crate::events::scene::SceneChangedEvent)
//! for every change so observers can react (logging, freezing the ball on
//! game over).

use bevy_ecs::prelude::Resource;

/// Discrete phases of the game flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scene {
    #[default]
    MainMenu,
    Pregame,
    Game,
    GameOver,
    /// Transient exit-confirmation overlay; `prev` records the interrupted
    /// scene so cancel can resume it.
    ExitConfirm,
}

/// Authoritative scene machine state.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneState {
    current: Scene,
    prev: Scene,
    /// Orthogonal sub-state of [`Scene::Game`]: while set, simulation systems
    /// are skipped but the scene remains `Game`.
    pub paused: bool,
    /// Left paddle is AI-controlled when set.
    pub ai_player: bool,
    /// Set on confirmed exit; the main loop terminates when it sees this.
    pub quit: bool,
}

impl SceneState {
    pub fn new() -> Self {
        SceneState {
            current: Scene::MainMenu,
            prev: Scene::MainMenu,
            paused: false,
            ai_player: true,
            quit: false,
        }
    }

    pub fn current(&self) -> Scene {
        self.current
    }

    pub fn prev(&self) -> Scene {
        self.prev
    }

    /// Switch to `scene` without touching `prev`.
    pub fn set(&mut self, scene: Scene) {
        self.current = scene;
    }

    /// Enter the exit-confirmation overlay, remembering where we came from.
    pub fn enter_exit_confirm(&mut self) {
        if self.current != Scene::ExitConfirm {
            self.prev = self.current;
            self.current = Scene::ExitConfirm;
        }
    }

    /// Cancel the exit prompt and resume the interrupted scene.
    pub fn resume_from_exit_confirm(&mut self) {
        self.current = self.prev;
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SceneState::new();
        assert_eq!(state.current(), Scene::MainMenu);
        assert!(!state.paused);
        assert!(state.ai_player);
        assert!(!state.quit);
    }

    #[test]
    fn test_exit_confirm_records_and_restores_prev() {
        let mut state = SceneState::new();
        state.set(Scene::Game);
        state.enter_exit_confirm();
        assert_eq!(state.current(), Scene::ExitConfirm);
        assert_eq!(state.prev(), Scene::Game);
        state.resume_from_exit_confirm();
        assert_eq!(state.current(), Scene::Game);
    }

    #[test]
    fn test_reentering_exit_confirm_keeps_original_prev() {
        let mut state = SceneState::new();
        state.set(Scene::GameOver);
        state.enter_exit_confirm();
        state.enter_exit_confirm();
        assert_eq!(state.prev(), Scene::GameOver);
    }
}
