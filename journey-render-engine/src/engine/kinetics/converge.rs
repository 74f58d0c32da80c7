use bevy::prelude::*;
use rand::thread_rng;

use constants::render_settings::{NUCLEON_GREY, PARTICLE_FADE_SECS};

use crate::engine::kinetics::color_fade::ColorFade;
use crate::engine::kinetics::jitter::Jitter;
use crate::engine::kinetics::scale_fade::ScaleFade;
use crate::engine::timeline::step::Easing;

/// What happens when a converge arrives at its destination.
#[derive(Debug, Clone, Copy, Default)]
pub enum ArrivalAction {
    #[default]
    None,
    /// This particle absorbs another: the other entity is scaled away
    /// and both turn nucleon grey, while the survivor grows and resumes
    /// jittering from the meeting point.
    Absorb {
        hide: Entity,
        survivor_scale: f32,
    },
}

/// One-shot real-time flight from a fixed start to a fixed destination.
///
/// Spawning a converge implies the mover's jitter was already removed;
/// the two components never coexist on purpose.
#[derive(Component, Debug, Clone)]
pub struct Converge {
    pub from: Vec3,
    pub to: Vec3,
    pub duration: f32,
    pub elapsed: f32,
    pub then: ArrivalAction,
}

impl Converge {
    pub fn new(from: Vec3, to: Vec3, duration: f32, then: ArrivalAction) -> Self {
        Converge {
            from,
            to,
            duration,
            elapsed: 0.0,
            then,
        }
    }
}

pub fn converge_system(
    mut commands: Commands,
    time: Res<Time>,
    mut movers: Query<(Entity, &mut Converge, &mut Transform)>,
    material_handles: Query<&MeshMaterial3d<StandardMaterial>>,
    materials: Res<Assets<StandardMaterial>>,
) {
    let now = time.elapsed_secs();
    for (entity, mut converge, mut transform) in movers.iter_mut() {
        converge.elapsed += time.delta_secs();
        let t = (converge.elapsed / converge.duration).clamp(0.0, 1.0);
        transform.translation = converge.from.lerp(converge.to, Easing::CubicInOut.apply(t));
        if t < 1.0 {
            continue;
        }

        commands.entity(entity).remove::<Converge>();
        if let ArrivalAction::Absorb {
            hide,
            survivor_scale,
        } = converge.then
        {
            let grey = NUCLEON_GREY;
            let survivor_from = current_color(entity, &material_handles, &materials);
            let hidden_from = current_color(hide, &material_handles, &materials);

            let mut rng = thread_rng();
            commands.entity(entity).insert((
                ColorFade::new(survivor_from, grey, PARTICLE_FADE_SECS),
                ScaleFade::new(transform.scale, Vec3::splat(survivor_scale), PARTICLE_FADE_SECS),
                Jitter::starting_now(converge.to, now, 0.0, &mut rng),
            ));
            commands.entity(hide).remove::<Jitter>().insert((
                ColorFade::new(hidden_from, grey, PARTICLE_FADE_SECS),
                ScaleFade::new(Vec3::ONE, Vec3::ZERO, PARTICLE_FADE_SECS),
            ));
        }
    }
}

fn current_color(
    entity: Entity,
    handles: &Query<&MeshMaterial3d<StandardMaterial>>,
    materials: &Assets<StandardMaterial>,
) -> LinearRgba {
    handles
        .get(entity)
        .ok()
        .and_then(|handle| materials.get(&handle.0))
        .map(|material| material.base_color.to_linear())
        .unwrap_or(LinearRgba::WHITE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::kinetics::jitter::jitter_system;
    use std::time::Duration;

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.insert_resource(Assets::<StandardMaterial>::default());
        app.add_systems(Update, (converge_system, jitter_system));
        app
    }

    fn tick(app: &mut App, seconds: f32) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(seconds));
        app.update();
    }

    #[test]
    fn converge_reaches_destination_and_detaches() {
        let mut app = test_app();
        let mover = app
            .world_mut()
            .spawn((
                Transform::default(),
                Converge::new(Vec3::ZERO, Vec3::X, 1.0, ArrivalAction::None),
            ))
            .id();

        tick(&mut app, 0.5);
        let mid = app.world().get::<Transform>(mover).unwrap().translation;
        assert!(mid.x > 0.0 && mid.x < 1.0);

        tick(&mut app, 1.0);
        let done = app.world().get::<Transform>(mover).unwrap().translation;
        assert!((done - Vec3::X).length() < 1e-5);
        assert!(app.world().get::<Converge>(mover).is_none());
    }

    #[test]
    fn absorb_leaves_survivor_jittering_and_victim_still() {
        let mut app = test_app();
        let victim = app
            .world_mut()
            .spawn(Transform::from_translation(Vec3::NEG_X))
            .id();
        let survivor = app
            .world_mut()
            .spawn((
                Transform::default(),
                Converge::new(
                    Vec3::X,
                    Vec3::ZERO,
                    0.5,
                    ArrivalAction::Absorb {
                        hide: victim,
                        survivor_scale: 1.5,
                    },
                ),
            ))
            .id();

        tick(&mut app, 1.0);
        // Apply the arrival commands, then one more frame so the fades run.
        tick(&mut app, 0.1);

        assert!(app.world().get::<Converge>(survivor).is_none());
        assert!(app.world().get::<Jitter>(survivor).is_some());
        assert!(app.world().get::<Jitter>(victim).is_none());
        assert!(app.world().get::<ScaleFade>(victim).is_some());
    }
}
