use bevy::prelude::*;

use crate::engine::timeline::step::{Easing, lerp_color};

/// Real-time base colour tween that removes itself on arrival.
#[derive(Component, Debug, Clone)]
pub struct ColorFade {
    pub from: LinearRgba,
    pub to: LinearRgba,
    pub duration: f32,
    pub elapsed: f32,
}

impl ColorFade {
    pub fn new(from: LinearRgba, to: LinearRgba, duration: f32) -> Self {
        ColorFade {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }
}

pub fn color_fade_system(
    mut commands: Commands,
    time: Res<Time>,
    mut fades: Query<(Entity, &mut ColorFade, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, mut fade, handle) in fades.iter_mut() {
        fade.elapsed += time.delta_secs();
        let t = (fade.elapsed / fade.duration).clamp(0.0, 1.0);
        if let Some(material) = materials.get_mut(&handle.0) {
            material.base_color = Color::from(lerp_color(fade.from, fade.to, Easing::QuadOut.apply(t)));
        }
        if t >= 1.0 {
            commands.entity(entity).remove::<ColorFade>();
        }
    }
}
