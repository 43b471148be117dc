//! The central massive body.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::assets::SpriteAssets;
use crate::camera::sprite_translation;
use crate::render::z_layers;
use crate::types::SlingshotConfig;

/// Component marking the fixed attractor at the center of the play area.
///
/// Position and mass are set once at spawn; no system mutates them.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct CelestialBody {
    /// Center in window pixels
    pub position: DVec2,
    /// Mass used in the gravity law
    pub mass: f64,
}

impl CelestialBody {
    /// The body described by a configuration: centered, with `body_mass`.
    pub fn from_config(config: &SlingshotConfig) -> Self {
        Self {
            position: config.body_position(),
            mass: config.body_mass,
        }
    }
}

/// Plugin spawning the central body at startup.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_celestial_body);
    }
}

/// Spawn the central body, with its sprite when assets are loaded.
pub fn spawn_celestial_body(
    mut commands: Commands,
    config: Res<SlingshotConfig>,
    sprites: Option<Res<SpriteAssets>>,
) {
    let body = CelestialBody::from_config(&config);
    let translation = sprite_translation(
        body.position,
        config.body_radius,
        &config,
        z_layers::CELESTIAL,
    );

    info!(
        "Spawning celestial body at ({:.0}, {:.0}) with mass {}",
        body.position.x, body.position.y, body.mass
    );

    let mut entity = commands.spawn((body, Transform::from_translation(translation)));
    if let Some(sprites) = sprites {
        entity.insert(sprites.planet_sprite(&config));
    }
}
