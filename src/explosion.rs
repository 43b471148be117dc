//! Timed explosion effects marking impacts.
//!
//! One explosion is spawned per [`Impact`] and stays on screen until it is
//! older than `explosion_duration_ms`.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::assets::SpriteAssets;
use crate::camera::sprite_translation;
use crate::collision::Impact;
use crate::render::z_layers;
use crate::types::SlingshotConfig;

/// Component for a live explosion effect.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Explosion {
    /// Center in window pixels
    pub position: DVec2,
    /// Clock reading at spawn, in milliseconds
    pub spawned_at_ms: u64,
}

impl Explosion {
    /// Age of the effect at `now_ms`.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.spawned_at_ms)
    }

    /// Whether the effect has outlived `duration_ms`.
    ///
    /// An explosion exactly `duration_ms` old is still shown.
    pub fn is_expired(&self, now_ms: u64, duration_ms: u64) -> bool {
        self.age_ms(now_ms) > duration_ms
    }
}

/// Elapsed clock time in whole milliseconds.
pub fn now_ms(time: &Time) -> u64 {
    time.elapsed().as_millis() as u64
}

/// Spawn one explosion for each impact of this step.
pub fn spawn_explosions(
    mut commands: Commands,
    mut impacts: MessageReader<Impact>,
    time: Res<Time>,
    config: Res<SlingshotConfig>,
    sprites: Option<Res<SpriteAssets>>,
) {
    let now = now_ms(&time);

    for impact in impacts.read() {
        info!(
            "IMPACT at ({:.1}, {:.1}), {:.2} px/step",
            impact.point.x,
            impact.point.y,
            impact.velocity.length()
        );

        let translation = sprite_translation(
            impact.point,
            config.body_radius,
            &config,
            z_layers::EXPLOSION,
        );

        let mut entity = commands.spawn((
            Explosion {
                position: impact.point,
                spawned_at_ms: now,
            },
            Transform::from_translation(translation),
        ));

        if let Some(sprites) = sprites.as_deref() {
            entity.insert(sprites.explosion_sprite(&config));
        }
    }
}

/// Despawn explosions older than the configured display duration.
pub fn prune_explosions(
    mut commands: Commands,
    explosions: Query<(Entity, &Explosion)>,
    time: Res<Time>,
    config: Res<SlingshotConfig>,
) {
    let now = now_ms(&time);

    for (entity, explosion) in explosions.iter() {
        if explosion.is_expired(now, config.explosion_duration_ms) {
            commands.entity(entity).despawn();
        }
    }
}
