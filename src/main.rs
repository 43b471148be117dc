//! Slingshot - Gravitational Slingshot Simulation
//!
//! Click once to set a launch point, click again to aim and fire. Projectiles
//! curve around the planet; those that hit it explode.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use slingshot::assets::AssetsPlugin;
use slingshot::body::CelestialBodyPlugin;
use slingshot::camera::CameraPlugin;
use slingshot::input::InputPlugin;
use slingshot::render::RenderPlugin;
use slingshot::simulation::SimulationPlugin;
use slingshot::sound::SoundPlugin;
use slingshot::types::SlingshotConfig;

const WINDOW_TITLE: &str = "Gravitational Slingshot Effect Simulation";

fn main() -> AppExit {
    let config = SlingshotConfig::default();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: WINDOW_TITLE.into(),
            resolution: WindowResolution::new(config.width as u32, config.height as u32),
            resizable: false,
            ..default()
        }),
        ..default()
    }));

    if let Err(err) = config.validate() {
        error!("Invalid configuration: {err}");
        return AppExit::error();
    }

    // One physics step per frame at the configured rate
    app.insert_resource(Time::<Fixed>::from_seconds(config.step_seconds()))
        // Insert resources before plugins that depend on them
        .insert_resource(config)
        .add_plugins((
            AssetsPlugin,
            CameraPlugin,
            CelestialBodyPlugin,
            InputPlugin,
            SimulationPlugin::default(),
            SoundPlugin::default(),
            RenderPlugin,
        ))
        .run()
}
