//! Aiming feedback while a launch is armed.
//!
//! A white guide line runs from the launch origin to the pointer, and a
//! preview meteor sits on the origin until the aiming click.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::assets::SpriteAssets;
use crate::camera::{screen_to_world, sprite_translation};
use crate::input::pointer_position;
use crate::launch::LaunchState;
use crate::render::z_layers;
use crate::types::SlingshotConfig;

/// Marker for the preview sprite shown at an armed launch origin.
#[derive(Component)]
pub struct LaunchPreview;

/// Plugin providing the guide line and preview sprite.
pub struct LaunchGuidePlugin;

impl Plugin for LaunchGuidePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (configure_guide_line, spawn_launch_preview))
            .add_systems(Update, (update_launch_preview, draw_launch_guide));
    }
}

fn configure_guide_line(mut store: ResMut<GizmoConfigStore>, config: Res<SlingshotConfig>) {
    let (gizmo_config, _) = store.config_mut::<DefaultGizmoConfigGroup>();
    gizmo_config.line.width = config.guide_line_width;
}

fn spawn_launch_preview(
    mut commands: Commands,
    sprites: Option<Res<SpriteAssets>>,
    config: Res<SlingshotConfig>,
) {
    let Some(sprites) = sprites else {
        return;
    };

    commands.spawn((
        LaunchPreview,
        sprites.meteor_sprite(&config),
        Transform::from_xyz(0.0, 0.0, z_layers::LAUNCH_PREVIEW),
        Visibility::Hidden,
    ));
}

/// Show the preview sprite on the origin while aiming, hide it otherwise.
fn update_launch_preview(
    mut previews: Query<(&mut Transform, &mut Visibility), With<LaunchPreview>>,
    launch: Res<LaunchState>,
    config: Res<SlingshotConfig>,
) {
    let Ok((mut transform, mut visibility)) = previews.single_mut() else {
        return;
    };

    match launch.origin() {
        Some(origin) => {
            transform.translation = sprite_translation(
                origin,
                config.projectile_radius,
                &config,
                z_layers::LAUNCH_PREVIEW,
            );
            *visibility = Visibility::Visible;
        }
        None => *visibility = Visibility::Hidden,
    }
}

/// Draw the guide line from the launch origin to the pointer.
fn draw_launch_guide(
    mut gizmos: Gizmos,
    launch: Res<LaunchState>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    config: Res<SlingshotConfig>,
) {
    let Some(origin) = launch.origin() else {
        return;
    };
    let Ok(window) = window_query.single() else {
        return;
    };
    let Some(pointer) = pointer_position(window) else {
        return;
    };

    gizmos.line_2d(
        screen_to_world(origin, &config),
        screen_to_world(pointer, &config),
        Color::WHITE,
    );
}
