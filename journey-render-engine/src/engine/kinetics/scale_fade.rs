use bevy::prelude::*;

use crate::engine::timeline::step::Easing;

/// Real-time scale tween that removes itself on arrival.
#[derive(Component, Debug, Clone)]
pub struct ScaleFade {
    pub from: Vec3,
    pub to: Vec3,
    pub duration: f32,
    pub elapsed: f32,
}

impl ScaleFade {
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Self {
        ScaleFade {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }
}

pub fn scale_fade_system(
    mut commands: Commands,
    time: Res<Time>,
    mut fades: Query<(Entity, &mut ScaleFade, &mut Transform)>,
) {
    for (entity, mut fade, mut transform) in fades.iter_mut() {
        fade.elapsed += time.delta_secs();
        let t = (fade.elapsed / fade.duration).clamp(0.0, 1.0);
        transform.scale = fade.from.lerp(fade.to, Easing::QuadOut.apply(t));
        if t >= 1.0 {
            commands.entity(entity).remove::<ScaleFade>();
        }
    }
}
