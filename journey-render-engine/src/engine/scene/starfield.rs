use bevy::prelude::*;
use rand::Rng;

use constants::field_settings::{STAR_SCALE_RANGE, STARFIELD_OPACITY};
use constants::render_settings::COSMOS_VIOLET;

use crate::engine::scene::cosmos::{BillboardSprite, CosmosSprite, Population, sprite_material};
use crate::engine::timeline::step::lerp_color;

/// Placement of one background star, computed before any entity exists.
#[derive(Debug, Clone, Copy)]
pub struct StarPlacement {
    pub position: Vec3,
    pub color: LinearRgba,
    pub scale: f32,
}

/// Sample star placements uniformly by volume inside a sphere.
///
/// Radius uses the cube-root inverse transform so density is constant
/// throughout the ball rather than bunched at the centre, and the polar
/// angle comes from a uniform cosine so the shell directions are
/// unbiased.
pub fn starfield_placements(count: usize, radius: f32, rng: &mut impl Rng) -> Vec<StarPlacement> {
    let mut placements = Vec::with_capacity(count);
    for _ in 0..count {
        let r = radius * rng.gen_range(0.0f32..1.0).cbrt();
        let phi = rng.gen_range(-1.0f32..1.0).acos();
        let theta = rng.gen_range(0.0..std::f32::consts::TAU);

        let position = Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        );
        let color = lerp_color(LinearRgba::WHITE, COSMOS_VIOLET, rng.gen_range(0.0..1.0));
        let scale = rng.gen_range(STAR_SCALE_RANGE.0..STAR_SCALE_RANGE.1);
        placements.push(StarPlacement {
            position,
            color,
            scale,
        });
    }
    placements
}

/// Spawn the background starfield as children of the cosmos root.
pub fn spawn_starfield(
    commands: &mut Commands,
    root: Entity,
    quad: &Handle<Mesh>,
    star_texture: &Handle<Image>,
    materials: &mut Assets<StandardMaterial>,
    count: usize,
    radius: f32,
    rng: &mut impl Rng,
) {
    for placement in starfield_placements(count, radius, rng) {
        let material = materials.add(sprite_material(
            star_texture.clone(),
            placement.color,
            STARFIELD_OPACITY,
            true,
        ));
        commands.spawn((
            Mesh3d(quad.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(placement.position)
                .with_scale(Vec3::splat(placement.scale)),
            CosmosSprite,
            Population::Star,
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

    #[test]
    fn produces_requested_count_inside_radius() {
        let mut rng = StdRng::seed_from_u64(42);
        let placements = starfield_placements(1750, 4000.0, &mut rng);
        assert_eq!(placements.len(), 1750);
        for p in &placements {
            assert!(p.position.length() <= 4000.0 + 1e-3);
            assert!(p.scale >= STAR_SCALE_RANGE.0 && p.scale <= STAR_SCALE_RANGE.1);
        }
    }

    #[test]
    fn radial_distribution_is_volumetric() {
        let mut rng = StdRng::seed_from_u64(42);
        let radius = 4000.0;
        let placements = starfield_placements(4000, radius, &mut rng);

        // Half the volume of a ball lies beyond r = R * 2^(-1/3), and an
        // eighth lies within R/2. A surface-biased sampler fails both.
        let half_volume_radius = radius * 0.5f32.cbrt();
        let outer = placements
            .iter()
            .filter(|p| p.position.length() > half_volume_radius)
            .count();
        let inner = placements
            .iter()
            .filter(|p| p.position.length() < radius / 2.0)
            .count();

        let outer_fraction = outer as f32 / placements.len() as f32;
        let inner_fraction = inner as f32 / placements.len() as f32;
        assert!((outer_fraction - 0.5).abs() < 0.05, "outer {outer_fraction}");
        assert!((inner_fraction - 0.125).abs() < 0.03, "inner {inner_fraction}");
    }

    #[test]
    fn star_colors_sit_between_white_and_violet() {
        let mut rng = StdRng::seed_from_u64(9);
        for p in starfield_placements(200, 100.0, &mut rng) {
            assert!(p.color.red <= 1.0 && p.color.red >= COSMOS_VIOLET.red - 1e-5);
            assert!(p.color.green <= 1.0 && p.color.green >= COSMOS_VIOLET.green - 1e-5);
        }
    }
}
