//! Impact and out-of-bounds detection for projectiles.
//!
//! Runs after the physics step. Every projectile is classified first and
//! only then are the doomed ones despawned, so nothing is removed while the
//! live set is being scanned. A projectile that hits the body produces an
//! [`Impact`] message at the point on the body's surface facing it.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::body::CelestialBody;
use crate::physics::bearing;
use crate::projectile::Projectile;
use crate::types::SlingshotConfig;

/// Message sent when a projectile strikes the central body.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct Impact {
    /// Point on the body's surface along the line from its center to the
    /// projectile (window pixels).
    pub point: DVec2,
    /// Projectile velocity at impact (pixels per step).
    pub velocity: DVec2,
}

/// What happens to a projectile after a physics step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProjectileFate {
    /// Still in flight
    Alive,
    /// Left the play area; dropped silently
    OutOfBounds,
    /// Hit the body at the given surface point
    Impact { point: DVec2 },
}

impl ProjectileFate {
    pub fn is_removed(&self) -> bool {
        !matches!(self, ProjectileFate::Alive)
    }
}

/// Decide a projectile's fate.
///
/// Hitting the body wins over leaving the play area if both hold.
pub fn classify(
    projectile: &Projectile,
    body: &CelestialBody,
    config: &SlingshotConfig,
) -> ProjectileFate {
    if projectile.distance_to(body) <= config.body_radius {
        ProjectileFate::Impact {
            point: surface_point(body, projectile.pos, config.body_radius),
        }
    } else if !config.in_bounds(projectile.pos) {
        ProjectileFate::OutOfBounds
    } else {
        ProjectileFate::Alive
    }
}

/// Point on a body of radius `radius` facing `toward`.
pub fn surface_point(body: &CelestialBody, toward: DVec2, radius: f64) -> DVec2 {
    let angle = bearing(body.position, toward);
    body.position + radius * DVec2::new(angle.cos(), angle.sin())
}

/// Remove projectiles that hit the body or left the play area.
pub fn resolve_projectiles(
    mut commands: Commands,
    projectiles: Query<(Entity, &Projectile)>,
    bodies: Query<&CelestialBody>,
    config: Res<SlingshotConfig>,
    mut impacts: MessageWriter<Impact>,
) {
    let Ok(body) = bodies.single() else {
        return;
    };

    // Collect fates first; despawns are applied together afterwards
    let doomed: Vec<_> = projectiles
        .iter()
        .map(|(entity, projectile)| (entity, projectile, classify(projectile, body, &config)))
        .filter(|(_, _, fate)| fate.is_removed())
        .collect();

    for (entity, projectile, fate) in doomed {
        match fate {
            ProjectileFate::Impact { point } => {
                impacts.write(Impact {
                    point,
                    velocity: projectile.vel,
                });
            }
            ProjectileFate::OutOfBounds => {
                debug!(
                    "Projectile left the play area at ({:.1}, {:.1})",
                    projectile.pos.x, projectile.pos.y
                );
            }
            ProjectileFate::Alive => {}
        }

        commands.entity(entity).despawn();
    }
}
