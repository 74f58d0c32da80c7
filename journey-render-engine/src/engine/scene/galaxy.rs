use bevy::prelude::*;
use rand::Rng;

use constants::field_settings::{
    ARM_LENGTH, GALAXY_STAR_OPACITY, MIST_ANGLE_STEP, MIST_FALLOFF_FRACTION, MIST_OPACITY,
    MIST_RADIUS_BASE, MIST_SCALE_RANGE, STAR_ANGLE_STEP, STAR_SCALE_RANGE,
};
use constants::render_settings::COSMOS_VIOLET;

use crate::engine::scene::cosmos::{BillboardSprite, CosmosSprite, Population, sprite_material};
use crate::engine::timeline::step::lerp_color;

/// Placement of one galaxy sprite along a spiral arm.
#[derive(Debug, Clone, Copy)]
pub struct GalaxyPlacement {
    pub arm: usize,
    pub index: usize,
    /// Radial distance before positional jitter is applied.
    pub base_radius: f32,
    pub angle: f32,
    pub position: Vec3,
    pub color: LinearRgba,
    pub scale: f32,
    pub population: Population,
}

/// Lay out one spiral galaxy: a wide violet mist layer with a quadratic
/// radial falloff, then a tighter layer of bright stars along the same
/// arms. Jitter thickens the arms without disturbing the spiral order.
pub fn galaxy_placements(
    arm_count: usize,
    stars_per_arm: usize,
    spread: f32,
    arm_thickness: f32,
    rng: &mut impl Rng,
) -> Vec<GalaxyPlacement> {
    let mut placements = Vec::with_capacity(arm_count * stars_per_arm * 2);

    for arm in 0..arm_count {
        let arm_offset = arm as f32 / arm_count as f32 * std::f32::consts::TAU;

        for index in 0..stars_per_arm {
            let falloff = index as f32 / (stars_per_arm as f32 * MIST_FALLOFF_FRACTION);
            let base_radius = falloff * falloff * (spread + MIST_RADIUS_BASE);
            let angle = arm_offset + index as f32 * MIST_ANGLE_STEP;
            let position = Vec3::new(
                angle.cos() * base_radius + rng.gen_range(-1.0..1.0) * arm_thickness,
                rng.gen_range(-0.5..0.5) * arm_thickness,
                angle.sin() * base_radius + rng.gen_range(-1.0..1.0) * arm_thickness,
            );
            placements.push(GalaxyPlacement {
                arm,
                index,
                base_radius,
                angle,
                position,
                color: COSMOS_VIOLET,
                scale: rng.gen_range(MIST_SCALE_RANGE.0..MIST_SCALE_RANGE.1),
                population: Population::Mist,
            });
        }

        for index in 0..stars_per_arm {
            let base_radius = index as f32 / stars_per_arm as f32 * ARM_LENGTH;
            let angle = arm_offset + index as f32 * STAR_ANGLE_STEP;
            let position = Vec3::new(
                angle.cos() * base_radius + rng.gen_range(-0.5..0.5) * spread,
                rng.gen_range(-0.5..0.5) * spread * 0.3,
                angle.sin() * base_radius + rng.gen_range(-0.5..0.5) * spread,
            );
            placements.push(GalaxyPlacement {
                arm,
                index,
                base_radius,
                angle,
                position,
                color: lerp_color(LinearRgba::WHITE, COSMOS_VIOLET, rng.gen_range(0.0..1.0)),
                scale: rng.gen_range(STAR_SCALE_RANGE.0..STAR_SCALE_RANGE.1),
                population: Population::Star,
            });
        }
    }

    placements
}

/// Spawn one galaxy's sprites as children of the cosmos root.
pub fn spawn_galaxy(
    commands: &mut Commands,
    root: Entity,
    quad: &Handle<Mesh>,
    star_texture: &Handle<Image>,
    materials: &mut Assets<StandardMaterial>,
    arm_count: usize,
    stars_per_arm: usize,
    spread: f32,
    arm_thickness: f32,
    rng: &mut impl Rng,
) {
    for placement in galaxy_placements(arm_count, stars_per_arm, spread, arm_thickness, rng) {
        // Mist glows additively; arm stars keep ordinary alpha blending
        // so they read as solid points against the mist.
        let (opacity, additive) = match placement.population {
            Population::Mist => (MIST_OPACITY, true),
            Population::Star => (GALAXY_STAR_OPACITY, false),
        };
        let material = materials.add(sprite_material(
            star_texture.clone(),
            placement.color,
            opacity,
            additive,
        ));
        commands.spawn((
            Mesh3d(quad.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(placement.position)
                .with_scale(Vec3::splat(placement.scale)),
            CosmosSprite,
            placement.population,
            BillboardSprite,
            ChildOf(root),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn placements() -> Vec<GalaxyPlacement> {
        let mut rng = StdRng::seed_from_u64(3);
        galaxy_placements(3, 50, 30.0, 30.0, &mut rng)
    }

    #[test]
    fn both_populations_fully_laid_out() {
        let all = placements();
        assert_eq!(all.len(), 3 * 50 * 2);
        let mist = all
            .iter()
            .filter(|p| p.population == Population::Mist)
            .count();
        assert_eq!(mist, 3 * 50);
    }

    #[test]
    fn arms_wind_outward_monotonically() {
        let all = placements();
        for arm in 0..3 {
            for population in [Population::Mist, Population::Star] {
                let arm_points: Vec<_> = all
                    .iter()
                    .filter(|p| p.arm == arm && p.population == population)
                    .collect();
                for pair in arm_points.windows(2) {
                    assert!(pair[1].base_radius >= pair[0].base_radius);
                    assert!(pair[1].angle > pair[0].angle);
                }
            }
        }
    }

    #[test]
    fn mist_concentrates_toward_the_core() {
        let all = placements();
        let median_radius = |population: Population| {
            let mut radii: Vec<f32> = all
                .iter()
                .filter(|p| p.population == population)
                .map(|p| p.base_radius)
                .collect();
            radii.sort_by(f32::total_cmp);
            radii[radii.len() / 2]
        };
        // The quadratic falloff keeps most mist well inside the stars'
        // linear spread.
        assert!(median_radius(Population::Mist) < median_radius(Population::Star) * 0.6);

        // The outermost mist particle sits exactly at the falloff cap.
        let mist_max = all
            .iter()
            .filter(|p| p.population == Population::Mist)
            .map(|p| p.base_radius)
            .fold(0.0f32, f32::max);
        let cap = (49.0f32 / (50.0 * MIST_FALLOFF_FRACTION)).powi(2) * (30.0 + MIST_RADIUS_BASE);
        assert!((mist_max - cap).abs() < 1e-2);

        let star_max = all
            .iter()
            .filter(|p| p.population == Population::Star)
            .map(|p| p.base_radius)
            .fold(0.0f32, f32::max);
        assert!(star_max < ARM_LENGTH);
    }

    #[test]
    fn mist_adds_while_arm_stars_blend() {
        use bevy::ecs::world::CommandQueue;

        let mut world = World::new();
        let mut queue = CommandQueue::default();
        let mut materials = Assets::<StandardMaterial>::default();
        let mut rng = StdRng::seed_from_u64(5);
        let root = world.spawn_empty().id();
        {
            let mut commands = Commands::new(&mut queue, &world);
            spawn_galaxy(
                &mut commands,
                root,
                &Handle::default(),
                &Handle::default(),
                &mut materials,
                1,
                4,
                10.0,
                10.0,
                &mut rng,
            );
        }

        assert_eq!(materials.len(), 8);
        for (_, material) in materials.iter() {
            // The two populations are told apart by their opacity.
            let expected = if (material.base_color.alpha() - MIST_OPACITY).abs() < 1e-3 {
                AlphaMode::Add
            } else {
                AlphaMode::Blend
            };
            assert_eq!(material.alpha_mode, expected);
        }
    }

    #[test]
    fn arm_offsets_cover_the_disc() {
        let all = placements();
        let first_angle = |arm: usize| {
            all.iter()
                .find(|p| p.arm == arm && p.index == 0 && p.population == Population::Mist)
                .unwrap()
                .angle
        };
        let expected = std::f32::consts::TAU / 3.0;
        assert!((first_angle(1) - first_angle(0) - expected).abs() < 1e-4);
        assert!((first_angle(2) - first_angle(1) - expected).abs() < 1e-4);
    }
}
