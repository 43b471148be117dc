//! Projectile entity definition and spawning.
//!
//! Projectiles are the user-launched meteors. Each simulation step they are
//! pulled toward the central body by one explicit Euler step; they live until
//! they hit the body or leave the play area.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::assets::SpriteAssets;
use crate::body::CelestialBody;
use crate::camera::sprite_translation;
use crate::physics::{euler_step, gravitational_acceleration};
use crate::render::z_layers;
use crate::types::SlingshotConfig;

/// Physical state of a launched projectile.
///
/// Positions are window pixels (origin top-left, y down), velocities are
/// pixels per step.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Projectile {
    pub pos: DVec2,
    pub vel: DVec2,
    pub mass: f64,
}

/// Resource counting launches, used for log output.
#[derive(Resource, Default)]
pub struct LaunchCounter(pub u32);

impl Projectile {
    pub fn new(pos: DVec2, vel: DVec2, mass: f64) -> Self {
        Self { pos, vel, mass }
    }

    /// Advance one step under the body's gravity.
    ///
    /// Inside `config.min_distance` of the body's center the gravity term is
    /// dropped for the step and the projectile coasts.
    pub fn update_position(&mut self, body: &CelestialBody, config: &SlingshotConfig) {
        let acc = gravitational_acceleration(
            self.pos,
            self.mass,
            body.position,
            body.mass,
            config.gravity_constant,
            config.min_distance,
        )
        .unwrap_or(DVec2::ZERO);

        let step = euler_step(self.pos, self.vel, acc);
        self.pos = step.pos;
        self.vel = step.vel;
    }

    /// Distance from the projectile to the body's center.
    pub fn distance_to(&self, body: &CelestialBody) -> f64 {
        self.pos.distance(body.position)
    }
}

/// Build a projectile launched from `origin` toward `target`.
///
/// The drag vector is divided by `velocity_scale` to get the initial
/// per-step velocity.
pub fn create_projectile(origin: DVec2, target: DVec2, config: &SlingshotConfig) -> Projectile {
    let vel = (target - origin) / config.velocity_scale;
    Projectile::new(origin, vel, config.projectile_mass)
}

/// Spawn a projectile entity, with its sprite when assets are loaded.
///
/// # Returns
/// The spawned projectile's Entity ID
pub fn spawn_projectile(
    commands: &mut Commands,
    projectile: Projectile,
    config: &SlingshotConfig,
    sprites: Option<&SpriteAssets>,
) -> Entity {
    let translation = sprite_translation(
        projectile.pos,
        config.projectile_radius,
        config,
        z_layers::PROJECTILE,
    );

    let mut entity = commands.spawn((projectile, Transform::from_translation(translation)));

    if let Some(sprites) = sprites {
        entity.insert(sprites.meteor_sprite(config));
    }

    entity.id()
}
