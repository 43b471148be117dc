//! Camera and coordinate mapping.
//!
//! The simulation works in window pixels (origin top-left, y down), the same
//! space `Window::cursor_position` reports. Bevy's 2D world has its origin at
//! the window center with y up; one world unit is one logical pixel.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::types::SlingshotConfig;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing the fixed 2D camera.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Convert a window-pixel position to a 2D world position.
pub fn screen_to_world(pos: DVec2, config: &SlingshotConfig) -> Vec2 {
    Vec2::new(
        (pos.x - config.width / 2.0) as f32,
        (config.height / 2.0 - pos.y) as f32,
    )
}

/// Translation for a sprite of radius `half_size` centered on `center`.
///
/// The sprite's top-left corner is snapped to a whole pixel by truncation,
/// so sprites land on the same pixels a top-left blit would put them.
pub fn sprite_translation(
    center: DVec2,
    half_size: f64,
    config: &SlingshotConfig,
    z: f32,
) -> Vec3 {
    let top_left = (center - DVec2::splat(half_size)).trunc();
    screen_to_world(top_left + DVec2::splat(half_size), config).extend(z)
}
