use std::collections::HashMap;

use bevy::prelude::*;
use rand::{Rng, thread_rng};

use constants::render_settings::{
    CONVERGE_DURATION_SECS, COSMOS_VIOLET, ELECTRON_COLOR, JITTER_STAGGER_STEP_SECS,
    NEUTRON_COLOR, NUCLEUS_SURVIVOR_SCALE, PARTICLE_FADE_SECS, PROTON_COLOR, REDSHIFT_COLOR,
    REDSHIFT_FADE_SECS,
};

use crate::engine::caption::CaptionEvent;
use crate::engine::kinetics::color_fade::ColorFade;
use crate::engine::kinetics::converge::{ArrivalAction, Converge};
use crate::engine::kinetics::jitter::Jitter;
use crate::engine::scene::cosmos::{CosmosSprite, Population};
use crate::engine::timeline::effects::{StageEffect, StageEffectEvent};
use crate::engine::timeline::step::lerp_color;
use crate::narrative::stages::ParticleRole;

/// Forward caption effects to the presenter.
pub fn route_stage_effects(
    mut stage_events: EventReader<StageEffectEvent>,
    mut captions: EventWriter<CaptionEvent>,
) {
    for StageEffectEvent(effect) in stage_events.read() {
        if let StageEffect::Caption {
            body,
            time_label,
            tooltip,
        } = effect
        {
            captions.write(CaptionEvent {
                body: body.clone(),
                time_label: time_label.clone(),
                tooltip: tooltip.clone(),
            });
        }
    }
}

fn role_color(role: ParticleRole) -> LinearRgba {
    match role {
        ParticleRole::Proton => PROTON_COLOR,
        ParticleRole::Neutron => NEUTRON_COLOR,
        ParticleRole::Electron => ELECTRON_COLOR,
    }
}

/// Colour every particle by its role and set the cloud jittering.
///
/// Delays accumulate across particles so motion ripples through the
/// cloud instead of starting in lockstep.
pub fn handle_scatter_particles(
    mut commands: Commands,
    mut events: EventReader<StageEffectEvent>,
    time: Res<Time>,
    particles: Query<(Entity, &ParticleRole, &Transform)>,
) {
    for StageEffectEvent(effect) in events.read() {
        if *effect != StageEffect::ScatterParticles {
            continue;
        }
        info!("Scattering {} particles", particles.iter().count());
        let mut rng = thread_rng();
        let now = time.elapsed_secs();
        let mut delay = 0.0;
        for (entity, role, transform) in particles.iter() {
            delay += rng.gen_range(0.0..JITTER_STAGGER_STEP_SECS);
            commands.entity(entity).insert((
                ColorFade::new(LinearRgba::BLACK, role_color(*role), PARTICLE_FADE_SECS),
                Jitter::starting_now(transform.translation, now, delay, &mut rng),
            ));
        }
    }
}

/// Per-triad lookup of the three particle roles.
#[derive(Default)]
struct TriadSlots {
    proton: Option<(Entity, Vec3)>,
    neutron: Option<(Entity, Vec3)>,
    electron: Option<(Entity, Vec3)>,
}

fn collect_triads(
    particles: &Query<(Entity, &ParticleRole, &Transform, &ChildOf)>,
) -> HashMap<Entity, TriadSlots> {
    let mut triads: HashMap<Entity, TriadSlots> = HashMap::new();
    for (entity, role, transform, child_of) in particles.iter() {
        let slots = triads.entry(child_of.parent()).or_default();
        let slot = match role {
            ParticleRole::Proton => &mut slots.proton,
            ParticleRole::Neutron => &mut slots.neutron,
            ParticleRole::Electron => &mut slots.electron,
        };
        *slot = Some((entity, transform.translation));
    }
    triads
}

/// Fly each triad's proton and neutron to their midpoint. The neutron
/// absorbs the proton on arrival and carries the nucleus from then on.
/// Jitter is removed from both movers up front; a converging particle
/// must own its transform alone.
pub fn handle_combine_nuclei(
    mut commands: Commands,
    mut events: EventReader<StageEffectEvent>,
    particles: Query<(Entity, &ParticleRole, &Transform, &ChildOf)>,
) {
    for StageEffectEvent(effect) in events.read() {
        if *effect != StageEffect::CombineNuclei {
            continue;
        }
        let triads = collect_triads(&particles);
        info!("Combining nuclei across {} triads", triads.len());
        for slots in triads.into_values() {
            let (Some((proton, proton_pos)), Some((neutron, neutron_pos))) =
                (slots.proton, slots.neutron)
            else {
                continue;
            };
            let midpoint = (proton_pos + neutron_pos) / 2.0;
            commands.entity(neutron).remove::<Jitter>().insert(Converge::new(
                neutron_pos,
                midpoint,
                CONVERGE_DURATION_SECS,
                ArrivalAction::Absorb {
                    hide: proton,
                    survivor_scale: NUCLEUS_SURVIVOR_SCALE,
                },
            ));
            commands.entity(proton).remove::<Jitter>().insert(Converge::new(
                proton_pos,
                midpoint,
                CONVERGE_DURATION_SECS,
                ArrivalAction::None,
            ));
        }
    }
}

/// Fly each triad's electron and nucleus to their midpoint. The nucleus
/// swallows the electron on arrival and keeps its grown scale.
pub fn handle_form_atoms(
    mut commands: Commands,
    mut events: EventReader<StageEffectEvent>,
    particles: Query<(Entity, &ParticleRole, &Transform, &ChildOf)>,
) {
    for StageEffectEvent(effect) in events.read() {
        if *effect != StageEffect::FormAtoms {
            continue;
        }
        let triads = collect_triads(&particles);
        info!("Forming atoms across {} triads", triads.len());
        for slots in triads.into_values() {
            let (Some((nucleus, nucleus_pos)), Some((electron, electron_pos))) =
                (slots.neutron, slots.electron)
            else {
                continue;
            };
            let midpoint = (nucleus_pos + electron_pos) / 2.0;
            commands.entity(nucleus).remove::<Jitter>().insert(Converge::new(
                nucleus_pos,
                midpoint,
                CONVERGE_DURATION_SECS,
                ArrivalAction::Absorb {
                    hide: electron,
                    survivor_scale: NUCLEUS_SURVIVOR_SCALE,
                },
            ));
            commands.entity(electron).remove::<Jitter>().insert(Converge::new(
                electron_pos,
                midpoint,
                CONVERGE_DURATION_SECS,
                ArrivalAction::None,
            ));
        }
    }
}

/// Re-roll the cosmos palette: mist settles on violet, stars land
/// somewhere between white and violet. Applied instantly, right before
/// the cosmos scales in.
pub fn handle_paint_cosmos(
    mut events: EventReader<StageEffectEvent>,
    sprites: Query<(&Population, &MeshMaterial3d<StandardMaterial>), With<CosmosSprite>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for StageEffectEvent(effect) in events.read() {
        if *effect != StageEffect::PaintCosmos {
            continue;
        }
        let mut rng = thread_rng();
        for (population, handle) in sprites.iter() {
            let color = match population {
                Population::Mist => COSMOS_VIOLET,
                Population::Star => {
                    lerp_color(LinearRgba::WHITE, COSMOS_VIOLET, rng.gen_range(0.0..1.0))
                }
            };
            if let Some(material) = materials.get_mut(&handle.0) {
                let alpha = material.base_color.alpha();
                material.base_color = Color::from(color.with_alpha(alpha));
            }
        }
    }
}

/// Drift every cosmos sprite toward the redshifted tint.
pub fn handle_redshift(
    mut commands: Commands,
    mut events: EventReader<StageEffectEvent>,
    sprites: Query<(Entity, &MeshMaterial3d<StandardMaterial>), With<CosmosSprite>>,
    materials: Res<Assets<StandardMaterial>>,
) {
    for StageEffectEvent(effect) in events.read() {
        if *effect != StageEffect::Redshift {
            continue;
        }
        for (entity, handle) in sprites.iter() {
            let Some(material) = materials.get(&handle.0) else {
                continue;
            };
            let from = material.base_color.to_linear();
            commands.entity(entity).insert(ColorFade::new(
                from,
                REDSHIFT_COLOR.with_alpha(from.alpha),
                REDSHIFT_FADE_SECS,
            ));
        }
    }
}
