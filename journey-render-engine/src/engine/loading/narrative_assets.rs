use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::journey_manifest::JourneyManifest;
use crate::engine::loading::progress::LoadingProgress;

/// Handles to the external narrative collaborators: vector font, star
/// sprite, CMBR photograph. Stage construction waits for all three.
#[derive(Resource, Default)]
pub struct NarrativeAssets {
    pub font: Handle<Font>,
    pub star_sprite: Handle<Image>,
    pub cmbr_texture: Handle<Image>,
}

/// Request every asset the manifest names, once the manifest is in.
pub fn request_narrative_assets(
    manifest: Option<Res<JourneyManifest>>,
    mut loading_progress: ResMut<LoadingProgress>,
    mut assets: ResMut<NarrativeAssets>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.assets_requested {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };

    println!("Loading narrative assets:");
    println!("  Font: {}", manifest.font);
    println!("  Star sprite: {}", manifest.star_sprite);
    println!("  CMBR texture: {}", manifest.cmbr_texture);

    assets.font = asset_server.load(&manifest.font);
    assets.star_sprite = asset_server.load(&manifest.star_sprite);
    assets.cmbr_texture = asset_server.load(&manifest.cmbr_texture);
    loading_progress.assets_requested = true;
}

/// Poll asset load states. A failed required asset aborts the app with a
/// diagnostic; without it stage construction would be silently skipped.
pub fn check_asset_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    assets: Res<NarrativeAssets>,
    asset_server: Res<AssetServer>,
    mut exit: EventWriter<AppExit>,
) {
    if !loading_progress.assets_requested {
        return;
    }

    let font_state = asset_server.load_state(&assets.font);
    poll("font", font_state, &mut loading_progress.font_loaded, &mut exit);

    let star_state = asset_server.load_state(&assets.star_sprite);
    poll(
        "star sprite",
        star_state,
        &mut loading_progress.star_sprite_loaded,
        &mut exit,
    );

    let cmbr_state = asset_server.load_state(&assets.cmbr_texture);
    poll(
        "CMBR texture",
        cmbr_state,
        &mut loading_progress.cmbr_texture_loaded,
        &mut exit,
    );
}

fn poll(label: &str, state: LoadState, flag: &mut bool, exit: &mut EventWriter<AppExit>) {
    if *flag {
        return;
    }
    match state {
        LoadState::Loaded => {
            println!("✓ {label} loaded");
            *flag = true;
        }
        LoadState::Failed(err) => {
            eprintln!("✗ Required asset '{label}' failed to load: {err}");
            exit.write(AppExit::error());
        }
        _ => {}
    }
}
