//! Background image covering the play area.

use bevy::prelude::*;

use crate::assets::SpriteAssets;
use crate::render::z_layers;
use crate::types::SlingshotConfig;

/// Plugin spawning the background.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_background);
    }
}

/// Spawn the background sprite stretched over the whole window.
fn spawn_background(
    mut commands: Commands,
    sprites: Option<Res<SpriteAssets>>,
    config: Res<SlingshotConfig>,
) {
    let Some(sprites) = sprites else {
        return;
    };

    commands.spawn((
        sprites.background_sprite(&config),
        Transform::from_xyz(0.0, 0.0, z_layers::BACKGROUND),
    ));
}
