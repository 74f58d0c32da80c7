use bevy::prelude::*;
use rand::Rng;

use constants::render_settings::{JITTER_PERIOD_SECS, PARTICLE_SCATTER_HALF_EXTENT};

/// Infinite yoyo oscillation between a home position and a random
/// scatter target, driven by the real-time clock rather than scroll.
///
/// Jitter never stops by itself; the nucleosynthesis handlers remove
/// the component explicitly when a particle is claimed by a converge.
#[derive(Component, Debug, Clone)]
pub struct Jitter {
    pub home: Vec3,
    pub target: Vec3,
    pub period: f32,
    /// Absolute clock time at which oscillation begins. Before this the
    /// particle holds its home position, which staggers the cloud.
    pub start: f32,
}

impl Jitter {
    pub fn starting_now(home: Vec3, now: f32, delay: f32, rng: &mut impl Rng) -> Self {
        Jitter {
            home,
            target: home + random_scatter_point(rng),
            period: JITTER_PERIOD_SECS,
            start: now + delay,
        }
    }
}

/// Uniform point in the scatter cube centred on the origin.
pub fn random_scatter_point(rng: &mut impl Rng) -> Vec3 {
    let half = PARTICLE_SCATTER_HALF_EXTENT;
    Vec3::new(
        rng.gen_range(-half..half),
        rng.gen_range(-half..half),
        rng.gen_range(-half..half),
    )
}

/// Ease each jittering particle back and forth along its home-to-target
/// segment with a smooth cosine yoyo.
pub fn jitter_system(time: Res<Time>, mut particles: Query<(&Jitter, &mut Transform)>) {
    let now = time.elapsed_secs();
    for (jitter, mut transform) in particles.iter_mut() {
        let elapsed = now - jitter.start;
        if elapsed <= 0.0 {
            transform.translation = jitter.home;
            continue;
        }
        // Full cosine cycle over one period: out and back, eased at
        // both extremes.
        let s = 0.5 - 0.5 * (std::f32::consts::TAU * elapsed / (2.0 * jitter.period)).cos();
        transform.translation = jitter.home.lerp(jitter.target, s);
    }
}
