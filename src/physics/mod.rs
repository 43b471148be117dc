//! Physics for launched projectiles.
//!
//! A single explicit Euler step toward the central body per simulation step.
//! The step is frame-coupled: it advances by one unit regardless of how much
//! wall-clock time passed, so the step rate is set by the schedule it runs in.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

pub use gravity::{bearing, gravitational_acceleration};
pub use integrator::{euler_step, EulerStep};

use crate::body::CelestialBody;
use crate::projectile::Projectile;
use crate::types::SlingshotConfig;

/// Advance every live projectile by one step.
///
/// Without a central body there is nothing to integrate against and the
/// step is skipped.
pub fn advance_projectiles(
    mut projectiles: Query<&mut Projectile>,
    bodies: Query<&CelestialBody>,
    config: Res<SlingshotConfig>,
) {
    let Ok(body) = bodies.single() else {
        return;
    };

    for mut projectile in projectiles.iter_mut() {
        projectile.update_position(body, &config);
    }
}
