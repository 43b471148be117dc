//! Simulation configuration and shared system ordering.

use bevy::math::DVec2;
use bevy::prelude::*;

/// Ordering of the per-step simulation systems.
///
/// Physics must finish before collisions are resolved, and explosions are
/// spawned from the impacts of the same step before old ones are pruned.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Gravity and Euler integration for every live projectile
    Physics,
    /// Out-of-bounds and impact classification, despawning
    Resolve,
    /// Explosion spawn and expiry
    Effects,
}

/// Reasons a [`SlingshotConfig`] is rejected.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("play area must be positive (got {width}x{height})")]
    InvalidPlayArea { width: f64, height: f64 },

    #[error("{name} must be positive and finite (got {value})")]
    NonPositive { name: &'static str, value: f64 },

    #[error("frame rate must be non-zero")]
    ZeroFrameRate,

    #[error("explosion duration must be non-zero")]
    ZeroExplosionDuration,
}

/// Every tunable of a simulation run.
///
/// Inserted as a resource before the simulation plugins are added and never
/// mutated afterwards. Distances are in pixels, velocities in pixels per step.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SlingshotConfig {
    /// Play area width in pixels
    pub width: f64,
    /// Play area height in pixels
    pub height: f64,
    /// Mass of the central body
    pub body_mass: f64,
    /// Mass given to every launched projectile
    pub projectile_mass: f64,
    /// Gravitational constant G
    pub gravity_constant: f64,
    /// Simulation steps (and frames) per second
    pub frame_rate: u32,
    /// Visual and collision radius of the central body
    pub body_radius: f64,
    /// Visual radius of a projectile sprite
    pub projectile_radius: f64,
    /// Divisor turning launch drag length into initial speed
    pub velocity_scale: f64,
    /// How long an explosion stays on screen
    pub explosion_duration_ms: u64,
    /// Below this distance the gravity contribution is skipped
    pub min_distance: f64,
    /// Thickness of the aiming guide line
    pub guide_line_width: f32,
}

impl Default for SlingshotConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            body_mass: 100.0,
            projectile_mass: 5.0,
            gravity_constant: 5.0,
            frame_rate: 60,
            body_radius: 70.0,
            projectile_radius: 30.0,
            velocity_scale: 100.0,
            explosion_duration_ms: 1500,
            min_distance: 1.0,
            guide_line_width: 2.0,
        }
    }
}

impl SlingshotConfig {
    /// Check that every parameter is usable by the physics and renderer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let usable = |v: f64| v.is_finite() && v > 0.0;

        if !usable(self.width) || !usable(self.height) {
            return Err(ConfigError::InvalidPlayArea {
                width: self.width,
                height: self.height,
            });
        }

        for (name, value) in [
            ("body_mass", self.body_mass),
            ("projectile_mass", self.projectile_mass),
            ("gravity_constant", self.gravity_constant),
            ("body_radius", self.body_radius),
            ("projectile_radius", self.projectile_radius),
            ("velocity_scale", self.velocity_scale),
            ("min_distance", self.min_distance),
        ] {
            if !usable(value) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if self.explosion_duration_ms == 0 {
            return Err(ConfigError::ZeroExplosionDuration);
        }

        Ok(())
    }

    /// Where the central body sits: the play area center, on whole pixels.
    pub fn body_position(&self) -> DVec2 {
        DVec2::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }

    /// Whether a position lies inside `[0, width] x [0, height]`.
    pub fn in_bounds(&self, pos: DVec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }

    /// Duration of one simulation step.
    pub fn step_seconds(&self) -> f64 {
        1.0 / self.frame_rate as f64
    }
}
