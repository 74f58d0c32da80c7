use bevy::prelude::*;
use rand::thread_rng;

use constants::field_settings::{
    GALAXY_ARM_COUNT, GALAXY_ARM_THICKNESS, GALAXY_COUNT, GALAXY_SPREAD, GALAXY_STARS_PER_ARM,
    STARFIELD_COUNT, STARFIELD_RADIUS,
};
use constants::narrative;
use constants::render_settings::{
    COSMOS_VISIBLE_SCALE, CREDITS_FONT_SIZE, PARTICLE_RADIUS, PARTICLE_TRIAD_COUNT,
    TITLE_COLOR, TITLE_FONT_SIZE,
};

use crate::engine::loading::narrative_assets::NarrativeAssets;
use crate::engine::scene::cosmos::CosmosRoot;
use crate::engine::scene::galaxy::spawn_galaxy;
use crate::engine::scene::starfield::spawn_starfield;
use crate::engine::timeline::effects::StageEffect;
use crate::engine::timeline::stage_timeline::StageTimeline;
use crate::engine::kinetics::jitter::random_scatter_point;

/// Container entity the particle triads hang off. The timeline scales
/// it in and out around the nucleosynthesis stages.
#[derive(Component)]
pub struct ParticleCloud;

/// One proton/neutron/electron group. The combine and atom effects
/// pair particles within a triad, never across triads.
#[derive(Component)]
pub struct ParticleTriad;

/// Which particle of its triad an entity plays.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleRole {
    Proton,
    Neutron,
    Electron,
}

/// Scene-graph entities the timeline mutates, resolved once when the
/// narrative is built.
pub struct StageTargets {
    pub title: Entity,
    pub singularity: Entity,
    pub particle_cloud: Entity,
    pub cmbr: Entity,
    pub cosmos: Entity,
    pub rebirth: Entity,
    pub credits: Entity,
}

/// Build the whole narrative scene graph and register its stage
/// timeline. Runs once, after all assets have arrived.
pub fn build_narrative(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut timeline: ResMut<StageTimeline>,
    assets: Res<NarrativeAssets>,
) {
    let mut rng = thread_rng();
    let sphere = meshes.add(Sphere::new(1.0));
    let quad = meshes.add(Rectangle::new(1.0, 1.0));

    let title = commands
        .spawn((
            Text2d::new(narrative::TITLE_TEXT),
            TextFont {
                font: assets.font.clone(),
                font_size: TITLE_FONT_SIZE,
                ..default()
            },
            TextColor(TITLE_COLOR),
            TextLayout::new_with_justify(JustifyText::Center),
            Transform::default(),
        ))
        .id();

    let singularity = commands
        .spawn((
            Mesh3d(sphere.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::WHITE,
                emissive: LinearRgba::WHITE,
                unlit: false,
                ..default()
            })),
            Transform::from_scale(Vec3::ZERO),
        ))
        .id();

    commands.spawn((
        PointLight {
            intensity: 500_000.0,
            range: 200.0,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 20.0),
    ));

    let particle_sphere = meshes.add(Sphere::new(PARTICLE_RADIUS));
    let particle_cloud = commands
        .spawn((Transform::from_scale(Vec3::ZERO), Visibility::default(), ParticleCloud))
        .id();
    for _ in 0..PARTICLE_TRIAD_COUNT {
        let triad = commands
            .spawn((
                Transform::default(),
                Visibility::default(),
                ParticleTriad,
                ChildOf(particle_cloud),
            ))
            .id();
        for role in [
            ParticleRole::Proton,
            ParticleRole::Neutron,
            ParticleRole::Electron,
        ] {
            commands.spawn((
                Mesh3d(particle_sphere.clone()),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::BLACK,
                    unlit: true,
                    ..default()
                })),
                Transform::from_translation(random_scatter_point(&mut rng)),
                role,
                ChildOf(triad),
            ));
        }
    }

    let cmbr = commands
        .spawn((
            Mesh3d(sphere.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::BLACK,
                base_color_texture: Some(assets.cmbr_texture.clone()),
                unlit: true,
                ..default()
            })),
            Transform::from_scale(Vec3::ZERO),
        ))
        .id();

    let cosmos = commands
        .spawn((Transform::from_scale(Vec3::ZERO), Visibility::default(), CosmosRoot))
        .id();
    spawn_starfield(
        &mut commands,
        cosmos,
        &quad,
        &assets.star_sprite,
        &mut materials,
        STARFIELD_COUNT,
        STARFIELD_RADIUS,
        &mut rng,
    );
    for _ in 0..GALAXY_COUNT {
        spawn_galaxy(
            &mut commands,
            cosmos,
            &quad,
            &assets.star_sprite,
            &mut materials,
            GALAXY_ARM_COUNT,
            GALAXY_STARS_PER_ARM,
            GALAXY_SPREAD,
            GALAXY_ARM_THICKNESS,
            &mut rng,
        );
    }

    // Seen from inside with backface culling on, so invisible until it
    // shrinks back toward the origin for the crunch.
    let rebirth = commands
        .spawn((
            Mesh3d(sphere),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::WHITE,
                unlit: true,
                ..default()
            })),
            Transform::from_scale(Vec3::splat(50.0)),
        ))
        .id();

    let credits = commands
        .spawn((
            Text2d::new(narrative::CREDITS_TEXT),
            TextFont {
                font: assets.font.clone(),
                font_size: CREDITS_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            TextLayout::new_with_justify(JustifyText::Center),
            Transform::from_scale(Vec3::ZERO),
        ))
        .id();

    build_stages(
        &mut timeline,
        &StageTargets {
            title,
            singularity,
            particle_cloud,
            cmbr,
            cosmos,
            rebirth,
            credits,
        },
    );

    println!("✓ Narrative scene built: {} stage steps", timeline.len());
}

/// Append every stage of the journey in narrative order, then normalize
/// the weights onto the progress budget.
pub fn build_stages(timeline: &mut StageTimeline, targets: &StageTargets) {
    let white = LinearRgba::WHITE;
    let black = LinearRgba::BLACK;

    // Title card fades while the reader starts scrolling.
    timeline
        .scale(targets.title, Vec3::ONE, Vec3::ZERO, 0.75)
        .with_effect(StageEffect::caption(&narrative::INTRO));

    // The singularity appears, lingers, then inflates past the camera.
    timeline.scale(targets.singularity, Vec3::ZERO, Vec3::ONE, 0.25);
    timeline
        .scale(targets.singularity, Vec3::ONE, Vec3::splat(1.1), 1.0)
        .with_effect(StageEffect::caption(&narrative::SINGULARITY));
    timeline
        .scale(targets.singularity, Vec3::splat(1.1), Vec3::splat(48.0), 1.0)
        .with_effect(StageEffect::caption(&narrative::INFLATION));

    // Cooling: the engulfing surface darkens and its glow dies.
    timeline
        .color(targets.singularity, white, black, 0.25)
        .with_effect(StageEffect::caption(&narrative::COOLING));
    timeline.emissive(targets.singularity, 1.0, 0.0, 0.75);
    timeline.scale(targets.singularity, Vec3::splat(48.0), Vec3::ZERO, 0.1);

    // Nucleosynthesis: scatter, combine, bind.
    timeline
        .scale(targets.particle_cloud, Vec3::ZERO, Vec3::ONE, 0.25)
        .with_effect(StageEffect::caption(&narrative::PARTICLES));
    timeline.hold(1.0).with_effect(StageEffect::ScatterParticles);
    timeline
        .hold(2.0)
        .with_effect(StageEffect::caption(&narrative::NUCLEI))
        .with_effect(StageEffect::CombineNuclei);
    timeline
        .hold(1.0)
        .with_effect(StageEffect::caption(&narrative::ATOMS))
        .with_effect(StageEffect::FormAtoms);
    timeline.scale(targets.particle_cloud, Vec3::ONE, Vec3::ZERO, 0.5);

    // Recombination glow and the dark ages.
    timeline.scale(targets.cmbr, Vec3::ZERO, Vec3::splat(45.0), 0.25);
    timeline
        .color(targets.cmbr, black, white, 0.75)
        .with_effect(StageEffect::caption(&narrative::CMBR));
    timeline
        .color(targets.cmbr, white, black, 0.75)
        .with_effect(StageEffect::caption(&narrative::DARK_AGES));
    timeline.scale(targets.cmbr, Vec3::splat(45.0), Vec3::ZERO, 0.25);

    // First light.
    timeline.hold(0.1).with_effect(StageEffect::PaintCosmos);
    timeline
        .scale(
            targets.cosmos,
            Vec3::ZERO,
            Vec3::splat(COSMOS_VISIBLE_SCALE),
            0.75,
        )
        .with_effect(StageEffect::caption(&narrative::STARS_AND_GALAXIES));
    timeline.hold(0.5);
    timeline
        .hold(1.0)
        .with_effect(StageEffect::caption(&narrative::REDSHIFT))
        .with_effect(StageEffect::Redshift);

    // Two endings, then the present.
    timeline
        .scale(targets.cosmos, Vec3::splat(COSMOS_VISIBLE_SCALE), Vec3::ZERO, 0.5)
        .with_effect(StageEffect::caption(&narrative::BIG_RIP));
    timeline.hold(0.15);
    timeline
        .scale(targets.rebirth, Vec3::splat(50.0), Vec3::ONE, 0.5)
        .with_effect(StageEffect::caption(&narrative::BIG_CRUNCH));
    timeline.hold(0.25);
    timeline.scale(targets.rebirth, Vec3::ONE, Vec3::splat(50.0), 0.5);
    timeline
        .hold(1.0)
        .with_effect(StageEffect::caption(&narrative::PRESENT));
    timeline
        .scale(targets.credits, Vec3::ZERO, Vec3::ONE, 0.25)
        .with_effect(StageEffect::caption(&narrative::CREDITS));

    timeline.normalize();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::timeline::step::TrackValue;

    fn targets() -> StageTargets {
        StageTargets {
            title: Entity::from_raw(1),
            singularity: Entity::from_raw(2),
            particle_cloud: Entity::from_raw(3),
            cmbr: Entity::from_raw(4),
            cosmos: Entity::from_raw(5),
            rebirth: Entity::from_raw(6),
            credits: Entity::from_raw(7),
        }
    }

    #[test]
    fn full_journey_fills_the_budget_exactly() {
        let mut timeline = StageTimeline::default();
        build_stages(&mut timeline, &targets());
        assert!((timeline.total_duration() - StageTimeline::TOTAL_BUDGET).abs() < 1e-3);
        assert_eq!(
            timeline.steps().last().unwrap().end(),
            StageTimeline::TOTAL_BUDGET
        );
    }

    #[test]
    fn journey_starts_dark_and_ends_on_credits() {
        let mut timeline = StageTimeline::default();
        let targets = targets();
        build_stages(&mut timeline, &targets);

        // At the start only the title is visible.
        let start: Vec<_> = timeline.sample(0.0);
        assert_eq!(start.len(), 1);
        assert_eq!(start[0].0, targets.title);

        // At the end the credits have reached full scale.
        let end = timeline.sample(StageTimeline::TOTAL_BUDGET);
        let credits_scale = end
            .iter()
            .rev()
            .find(|(target, _)| *target == targets.credits)
            .map(|(_, value)| *value);
        assert_eq!(credits_scale, Some(TrackValue::Scale(Vec3::ONE)));
    }

    #[test]
    fn every_caption_appears_once() {
        let mut timeline = StageTimeline::default();
        build_stages(&mut timeline, &targets());

        let captions: Vec<_> = timeline
            .steps()
            .iter()
            .flat_map(|step| step.effects.iter())
            .filter_map(|effect| match effect {
                StageEffect::Caption { time_label, .. } => Some(time_label.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(captions.len(), 15);
        assert_eq!(captions.first().unwrap(), narrative::INTRO.time_label);
        assert_eq!(captions.last().unwrap(), narrative::CREDITS.time_label);
    }

    #[test]
    fn factory_effects_run_in_nucleosynthesis_order() {
        let mut timeline = StageTimeline::default();
        build_stages(&mut timeline, &targets());

        let mut fired = Vec::new();
        for step in timeline.steps() {
            for effect in &step.effects {
                if !matches!(effect, StageEffect::Caption { .. }) {
                    fired.push(effect.clone());
                }
            }
        }
        assert_eq!(
            fired,
            vec![
                StageEffect::ScatterParticles,
                StageEffect::CombineNuclei,
                StageEffect::FormAtoms,
                StageEffect::PaintCosmos,
                StageEffect::Redshift,
            ]
        );
    }
}
