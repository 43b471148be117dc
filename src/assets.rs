//! Sprite and sound assets.
//!
//! All media lives under `assets/`. Every file is required: a missing or
//! undecodable asset aborts the run instead of rendering a blank scene.

use std::path::{Path, PathBuf};

use bevy::asset::io::file::FileAssetReader;
use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::types::SlingshotConfig;

/// Directory holding the media files, relative to the asset base path.
pub const ASSET_DIR: &str = "assets";

pub const BACKGROUND_IMAGE: &str = "space.png";
pub const PLANET_IMAGE: &str = "planet.png";
pub const METEOR_IMAGE: &str = "meteor.png";
pub const EXPLOSION_IMAGE: &str = "explosion.png";
pub const IMPACT_SOUND: &str = "boom.mp3";

/// Every file the simulation loads at startup.
pub const REQUIRED_ASSETS: &[&str] = &[
    BACKGROUND_IMAGE,
    PLANET_IMAGE,
    METEOR_IMAGE,
    EXPLOSION_IMAGE,
    IMPACT_SOUND,
];

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("required asset {path} not found")]
    Missing { path: PathBuf },

    #[error("asset {name} failed to load: {reason}")]
    LoadFailed { name: &'static str, reason: String },
}

/// Image handles for everything drawn on screen.
#[derive(Resource, Clone, Debug)]
pub struct SpriteAssets {
    pub background: Handle<Image>,
    pub planet: Handle<Image>,
    pub meteor: Handle<Image>,
    pub explosion: Handle<Image>,
}

impl SpriteAssets {
    /// Background stretched over the whole play area.
    pub fn background_sprite(&self, config: &SlingshotConfig) -> Sprite {
        sized_sprite(
            &self.background,
            Vec2::new(config.width as f32, config.height as f32),
        )
    }

    pub fn planet_sprite(&self, config: &SlingshotConfig) -> Sprite {
        sized_sprite(&self.planet, Vec2::splat(2.0 * config.body_radius as f32))
    }

    pub fn meteor_sprite(&self, config: &SlingshotConfig) -> Sprite {
        sized_sprite(
            &self.meteor,
            Vec2::splat(2.0 * config.projectile_radius as f32),
        )
    }

    /// Explosions are drawn at the planet's size.
    pub fn explosion_sprite(&self, config: &SlingshotConfig) -> Sprite {
        sized_sprite(&self.explosion, Vec2::splat(2.0 * config.body_radius as f32))
    }
}

fn sized_sprite(image: &Handle<Image>, size: Vec2) -> Sprite {
    Sprite {
        image: image.clone(),
        custom_size: Some(size),
        ..default()
    }
}

/// Sound played once per impact.
#[derive(Resource, Clone, Debug)]
pub struct ImpactSound(pub Handle<AudioSource>);

/// Plugin checking for and loading all media before the scene is spawned.
pub struct AssetsPlugin;

impl Plugin for AssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_assets)
            .add_systems(Update, watch_load_failures);
    }
}

/// The directory the asset server reads from.
///
/// Resolved from `BEVY_ASSET_ROOT`, then `CARGO_MANIFEST_DIR`, then the
/// executable's directory, never from the working directory.
pub fn asset_root() -> PathBuf {
    FileAssetReader::get_base_path().join(ASSET_DIR)
}

/// Check that every required file exists in `dir`.
///
/// Files are named explicitly so a stray or renamed file is caught here
/// rather than surfacing as a missing sprite mid-run.
pub fn check_asset_files(dir: &Path) -> Result<(), AssetError> {
    for name in REQUIRED_ASSETS {
        let path = dir.join(name);
        if !path.is_file() {
            return Err(AssetError::Missing { path });
        }
    }
    Ok(())
}

fn load_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut exit: MessageWriter<AppExit>,
) {
    let root = asset_root();
    if let Err(err) = check_asset_files(&root) {
        error!("{err}");
        exit.write(AppExit::error());
        return;
    }

    commands.insert_resource(SpriteAssets {
        background: asset_server.load(BACKGROUND_IMAGE),
        planet: asset_server.load(PLANET_IMAGE),
        meteor: asset_server.load(METEOR_IMAGE),
        explosion: asset_server.load(EXPLOSION_IMAGE),
    });
    commands.insert_resource(ImpactSound(asset_server.load(IMPACT_SOUND)));

    info!("Loading {} assets from {}", REQUIRED_ASSETS.len(), root.display());
}

/// Abort the run if any asset failed to decode.
fn watch_load_failures(
    asset_server: Res<AssetServer>,
    sprites: Option<Res<SpriteAssets>>,
    sound: Option<Res<ImpactSound>>,
    mut exit: MessageWriter<AppExit>,
    mut reported: Local<bool>,
) {
    if *reported {
        return;
    }
    let (Some(sprites), Some(sound)) = (sprites, sound) else {
        return;
    };

    let tracked = [
        (BACKGROUND_IMAGE, sprites.background.id().untyped()),
        (PLANET_IMAGE, sprites.planet.id().untyped()),
        (METEOR_IMAGE, sprites.meteor.id().untyped()),
        (EXPLOSION_IMAGE, sprites.explosion.id().untyped()),
        (IMPACT_SOUND, sound.0.id().untyped()),
    ];

    for (name, id) in tracked {
        if let LoadState::Failed(reason) = asset_server.load_state(id) {
            let err = AssetError::LoadFailed {
                name,
                reason: reason.to_string(),
            };
            error!("{err}");
            exit.write(AppExit::error());
            *reported = true;
            return;
        }
    }
}
