use bevy_ecs::prelude::Resource;

/// Fixed playfield dimensions in pixels. All simulation bounds (paddle
/// clamping, wall bounces, scoring edges) are expressed against this, not
/// the OS window size.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}

pub const SCREEN_WIDTH: i32 = 1280;
pub const SCREEN_HEIGHT: i32 = 720;

impl Default for ScreenSize {
    fn default() -> Self {
        ScreenSize {
            w: SCREEN_WIDTH,
            h: SCREEN_HEIGHT,
        }
    }
}
