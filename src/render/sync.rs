//! Position synchronization between physics and rendering.

use bevy::prelude::*;

use crate::camera::sprite_translation;
use crate::projectile::Projectile;
use crate::render::z_layers;
use crate::types::SlingshotConfig;

/// Move projectile sprites to their simulated positions.
pub fn sync_projectile_transforms(
    mut query: Query<(&mut Transform, &Projectile)>,
    config: Res<SlingshotConfig>,
) {
    for (mut transform, projectile) in query.iter_mut() {
        transform.translation = sprite_translation(
            projectile.pos,
            config.projectile_radius,
            &config,
            z_layers::PROJECTILE,
        );
    }
}
