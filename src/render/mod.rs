//! Rendering for the slingshot simulation.
//!
//! Sprites are ordinary entities; this module keeps their transforms in step
//! with simulation state and draws the aiming guide.

mod background;
mod launch_guide;
mod sync;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::launch_guide::LaunchGuidePlugin;
use self::sync::sync_projectile_transforms;

pub use self::launch_guide::LaunchPreview;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BackgroundPlugin, LaunchGuidePlugin))
            .add_systems(Update, sync_projectile_transforms);
    }
}

/// Z-layer constants for rendering order.
///
/// The central body is drawn last, over projectiles and explosions.
pub mod z_layers {
    /// Background image.
    pub const BACKGROUND: f32 = 0.0;
    /// Preview sprite at an armed launch origin.
    pub const LAUNCH_PREVIEW: f32 = 1.0;
    /// Projectiles in flight.
    pub const PROJECTILE: f32 = 2.0;
    /// Impact explosions.
    pub const EXPLOSION: f32 = 3.0;
    /// The central body.
    pub const CELESTIAL: f32 = 4.0;
}
