use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::journey_manifest::JourneyManifest;
use crate::engine::loading::progress::LoadingProgress;

pub const MANIFEST_PATH: &str = "journey.json";

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<JourneyManifest>>,
}

/// Start the loading process.
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    println!("Loading journey manifest from: {MANIFEST_PATH}");
    manifest_loader.handle = Some(asset_server.load(MANIFEST_PATH));
}

/// Promote the manifest to a resource once parsed; abort on failure since
/// nothing downstream can be constructed without it.
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<JourneyManifest>>,
    mut exit: EventWriter<AppExit>,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    if let LoadState::Failed(err) = asset_server.load_state(handle) {
        eprintln!("✗ Failed to load journey manifest: {err}");
        exit.write(AppExit::error());
        return;
    }

    if let Some(manifest) = manifests.get(handle) {
        println!("✓ Journey manifest loaded");
        commands.insert_resource(manifest.clone());
        loading_progress.manifest_loaded = true;
    }
}
