//! Two-click launch state machine.
//!
//! The first click records where a projectile will start; the second click
//! sets where it is aimed. There is no way to cancel an armed launch.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::projectile::{create_projectile, Projectile};
use crate::types::SlingshotConfig;

/// Pending launch, if any.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub enum LaunchState {
    /// No origin recorded
    #[default]
    Idle,
    /// Origin recorded, waiting for the aiming click
    Aiming { origin: DVec2 },
}

impl LaunchState {
    /// The recorded launch origin while aiming.
    pub fn origin(&self) -> Option<DVec2> {
        match self {
            LaunchState::Idle => None,
            LaunchState::Aiming { origin } => Some(*origin),
        }
    }

    /// Feed a primary click at `point`.
    ///
    /// Returns the projectile to spawn when the click completes a launch.
    pub fn click(&mut self, point: DVec2, config: &SlingshotConfig) -> Option<Projectile> {
        match *self {
            LaunchState::Idle => {
                *self = LaunchState::Aiming { origin: point };
                None
            }
            LaunchState::Aiming { origin } => {
                *self = LaunchState::Idle;
                Some(create_projectile(origin, point, config))
            }
        }
    }
}
