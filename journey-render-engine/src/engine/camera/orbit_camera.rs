use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use constants::render_settings::{CAMERA_DAMPING, CAMERA_ORBIT_RADIUS};

const ORBIT_SENSITIVITY: f32 = 0.005;
const PITCH_LIMIT: f32 = 1.55;
const DAMPING_RATE: f32 = 12.0;

/// Orbit state of the narrative camera, always looking at the origin.
#[derive(Resource, Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        OrbitCamera {
            yaw: 0.0,
            pitch: 0.0,
            radius: CAMERA_ORBIT_RADIUS,
        }
    }
}

impl OrbitCamera {
    /// The transform this orbit state resolves to.
    pub fn target_transform(&self) -> (Vec3, Quat) {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        (rotation * Vec3::new(0.0, 0.0, self.radius), rotation)
    }
}

/// Left-drag orbits the camera; motion is critically damped so releases
/// settle smoothly instead of stopping dead.
pub fn camera_controller(
    mut orbit: ResMut<OrbitCamera>,
    mut motion_events: EventReader<MouseMotion>,
    buttons: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    if buttons.pressed(MouseButton::Left) {
        for ev in motion_events.read() {
            orbit.yaw -= ev.delta.x * ORBIT_SENSITIVITY;
            orbit.pitch = (orbit.pitch - ev.delta.y * ORBIT_SENSITIVITY)
                .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    } else {
        motion_events.clear();
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let (target_pos, target_rot) = orbit.target_transform();
    let alpha = (DAMPING_RATE * CAMERA_DAMPING * time.delta_secs()).min(1.0);
    transform.translation = transform.translation.lerp(target_pos, alpha);
    transform.rotation = transform.rotation.slerp(target_rot, alpha);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orbit_sits_on_positive_z() {
        let (pos, _) = OrbitCamera::default().target_transform();
        assert!((pos - Vec3::new(0.0, 0.0, CAMERA_ORBIT_RADIUS)).length() < 1e-5);
    }

    #[test]
    fn orbit_preserves_radius() {
        let orbit = OrbitCamera {
            yaw: 1.3,
            pitch: -0.7,
            radius: CAMERA_ORBIT_RADIUS,
        };
        let (pos, _) = orbit.target_transform();
        assert!((pos.length() - CAMERA_ORBIT_RADIUS).abs() < 1e-4);
    }

    #[test]
    fn orbit_rotation_looks_at_origin() {
        let orbit = OrbitCamera {
            yaw: 0.9,
            pitch: 0.4,
            radius: CAMERA_ORBIT_RADIUS,
        };
        let (pos, rot) = orbit.target_transform();
        // The camera's forward axis (-Z) must point back at the origin.
        let forward = rot * Vec3::NEG_Z;
        let to_origin = (-pos).normalize();
        assert!(forward.dot(to_origin) > 0.9999);
    }
}
