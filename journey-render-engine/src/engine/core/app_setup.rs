use bevy::asset::AssetMetaCheck;
use bevy::core_pipeline::core_2d::Camera2d;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;
use bevy_common_assets::json::JsonAssetPlugin;

use constants::render_settings::CAMERA_ORBIT_RADIUS;

// Crate engine modules
use crate::engine::assets::journey_manifest::JourneyManifest;
use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller};
use crate::engine::caption::{CaptionEvent, handle_caption_events, spawn_caption_hud};
use crate::engine::core::app_state::{
    AppState, FpsText, transition_to_building, transition_to_running,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::kinetics::color_fade::color_fade_system;
use crate::engine::kinetics::converge::converge_system;
use crate::engine::kinetics::jitter::jitter_system;
use crate::engine::kinetics::scale_fade::scale_fade_system;
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::narrative_assets::{
    NarrativeAssets, check_asset_loading, request_narrative_assets,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::cosmos::{billboard_sprites, rotate_cosmos};
use crate::engine::systems::fps_tracking::fps_text_update_system;
use crate::engine::timeline::apply::scrub_timeline;
use crate::engine::timeline::effects::StageEffectEvent;
use crate::engine::timeline::scroll::{ScrollProgress, scroll_progress_system};
use crate::engine::timeline::stage_timeline::StageTimeline;

// Narrative content
use crate::narrative::effects::{
    handle_combine_nuclei, handle_form_atoms, handle_paint_cosmos, handle_redshift,
    handle_scatter_particles, route_stage_effects,
};
use crate::narrative::stages::build_narrative;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers JourneyManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<JourneyManifest>::new(&["json"]));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<NarrativeAssets>()
        .init_resource::<ScrollProgress>()
        .init_resource::<StageTimeline>()
        .init_resource::<OrbitCamera>()
        .add_event::<StageEffectEvent>()
        .add_event::<CaptionEvent>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                load_manifest_system,
                request_narrative_assets,
                check_asset_loading,
                transition_to_building,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Building), build_narrative)
        .add_systems(
            Update,
            transition_to_running.run_if(in_state(AppState::Building)),
        );

    // The scroll scrub drives the timeline, whose effects feed the
    // handlers in the same frame; everything downstream of the scrub is
    // ordered after it.
    let runtime_systems = (
        scroll_progress_system,
        scrub_timeline,
        route_stage_effects,
        handle_scatter_particles,
        handle_combine_nuclei,
        handle_form_atoms,
        handle_paint_cosmos,
        handle_redshift,
        handle_caption_events,
    )
        .chain();

    let kinetic_systems = (
        jitter_system,
        converge_system,
        color_fade_system,
        scale_fade_system,
        camera_controller,
        rotate_cosmos,
        billboard_sprites,
    );

    app.add_systems(
        Update,
        (runtime_systems, kinetic_systems).run_if(in_state(AppState::Running)),
    );

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

fn spawn_cameras(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, CAMERA_ORBIT_RADIUS).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Title, credits and captions render on top of the 3D view.
    commands.spawn((
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_cameras(&mut commands);
    spawn_caption_hud(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
