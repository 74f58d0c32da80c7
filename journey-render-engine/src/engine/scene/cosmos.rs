use bevy::prelude::*;

use constants::render_settings::COSMOS_ROTATION_SPEED;

/// Root container of the starfield and galaxies. The timeline scales it
/// from zero to its visible size and back; children live in its local
/// space at generator scale.
#[derive(Component)]
pub struct CosmosRoot;

/// The two sprite populations the cosmos is built from. Paint and
/// redshift effects address them separately.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Population {
    Star,
    Mist,
}

/// Marker on every textured quad under the cosmos root.
#[derive(Component)]
pub struct CosmosSprite;

/// Quads that must face the camera each frame.
#[derive(Component)]
pub struct BillboardSprite;

/// Slow constant yaw of the whole cosmos container.
pub fn rotate_cosmos(time: Res<Time>, mut roots: Query<&mut Transform, With<CosmosRoot>>) {
    for mut transform in roots.iter_mut() {
        transform.rotate_y(COSMOS_ROTATION_SPEED * time.delta_secs());
    }
}

/// Turn every billboard quad toward the camera, compensating for the
/// rotation of its parent container.
pub fn billboard_sprites(
    camera_query: Query<&GlobalTransform, With<Camera3d>>,
    parents: Query<&GlobalTransform, (With<CosmosRoot>, Without<BillboardSprite>)>,
    mut sprites: Query<(&ChildOf, &GlobalTransform, &mut Transform), With<BillboardSprite>>,
) {
    let Ok(camera) = camera_query.single() else {
        return;
    };
    let camera_pos = camera.translation();

    for (child_of, global, mut local) in sprites.iter_mut() {
        let Ok(parent) = parents.get(child_of.parent()) else {
            continue;
        };
        let to_camera = camera_pos - global.translation();
        if to_camera.length_squared() < 1e-6 {
            continue;
        }
        let face = Quat::from_rotation_arc(Vec3::Z, to_camera.normalize());
        local.rotation = parent.rotation().inverse() * face;
    }
}

/// Unlit additive-or-blended sprite material used by every star and
/// mist quad.
pub fn sprite_material(
    texture: Handle<Image>,
    color: LinearRgba,
    opacity: f32,
    additive: bool,
) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::from(color.with_alpha(opacity)),
        base_color_texture: Some(texture),
        unlit: true,
        cull_mode: None,
        alpha_mode: if additive {
            AlphaMode::Add
        } else {
            AlphaMode::Blend
        },
        ..default()
    }
}
