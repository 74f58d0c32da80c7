use bevy::prelude::*;

use crate::engine::timeline::effects::StageEffectEvent;
use crate::engine::timeline::scroll::ScrollProgress;
use crate::engine::timeline::stage_timeline::StageTimeline;
use crate::engine::timeline::step::TrackValue;

/// Write sampled track values into the scene graph and forward fired
/// one-shot effects as events. Runs every frame whether or not progress
/// changed; evaluation is absolute so re-applying is harmless.
pub fn scrub_timeline(
    mut timeline: ResMut<StageTimeline>,
    progress: Res<ScrollProgress>,
    mut transforms: Query<&mut Transform>,
    material_handles: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut effects: EventWriter<StageEffectEvent>,
) {
    let p = progress.value;

    for (entity, value) in timeline.sample(p) {
        match value {
            TrackValue::Scale(scale) => {
                if let Ok(mut transform) = transforms.get_mut(entity) {
                    transform.scale = scale;
                }
            }
            TrackValue::Translation(translation) => {
                if let Ok(mut transform) = transforms.get_mut(entity) {
                    transform.translation = translation;
                }
            }
            TrackValue::BaseColor(color) => {
                if let Ok(handle) = material_handles.get(entity) {
                    if let Some(material) = materials.get_mut(&handle.0) {
                        material.base_color = Color::from(color);
                    }
                }
            }
            TrackValue::Emissive(intensity) => {
                if let Ok(handle) = material_handles.get(entity) {
                    if let Some(material) = materials.get_mut(&handle.0) {
                        material.emissive = LinearRgba::rgb(intensity, intensity, intensity);
                    }
                }
            }
        }
    }

    for effect in timeline.fire_effects(p) {
        effects.write(StageEffectEvent(effect));
    }
}
