//! Mouse input for launching projectiles.

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::assets::SpriteAssets;
use crate::launch::LaunchState;
use crate::projectile::{spawn_projectile, LaunchCounter};
use crate::types::SlingshotConfig;

/// Plugin providing click-to-launch handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LaunchState>()
            .init_resource::<LaunchCounter>()
            .add_systems(Update, handle_launch_clicks);
    }
}

/// Pointer position in window pixels, if the cursor is over the window.
pub fn pointer_position(window: &Window) -> Option<DVec2> {
    window
        .cursor_position()
        .map(|pos| DVec2::new(pos.x as f64, pos.y as f64))
}

/// Advance the launch state machine on each left click.
///
/// Clicks with the cursor outside the window carry no position and are
/// ignored.
fn handle_launch_clicks(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut launch: ResMut<LaunchState>,
    mut counter: ResMut<LaunchCounter>,
    config: Res<SlingshotConfig>,
    sprites: Option<Res<SpriteAssets>>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };

    let Some(point) = pointer_position(window) else {
        return;
    };

    let Some(projectile) = launch.click(point, &config) else {
        debug!("Launch origin set at ({:.0}, {:.0})", point.x, point.y);
        return;
    };

    counter.0 += 1;
    info!(
        "Launching projectile {} from ({:.0}, {:.0}) with velocity ({:.2}, {:.2})",
        counter.0, projectile.pos.x, projectile.pos.y, projectile.vel.x, projectile.vel.y
    );

    spawn_projectile(&mut commands, projectile, &config, sprites.as_deref());
}
