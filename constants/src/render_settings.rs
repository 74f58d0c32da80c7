use bevy::prelude::*;

/// Orbit distance of the narrative camera from the scene origin.
pub const CAMERA_ORBIT_RADIUS: f32 = 5.0;

/// Damping factor applied to camera orbit motion per frame.
pub const CAMERA_DAMPING: f32 = 0.25;

/// Constant Y rotation of the star/galaxy container, radians per second.
/// Matches 0.0005 rad per frame at a 60 Hz display.
pub const COSMOS_ROTATION_SPEED: f32 = 0.03;

/// Number of proton/neutron/electron triads spawned by the particle stage.
pub const PARTICLE_TRIAD_COUNT: usize = 30;

/// Half-extent of the cube particles scatter within, local units.
pub const PARTICLE_SCATTER_HALF_EXTENT: f32 = 10.0;

/// Radius of the particle spheres.
pub const PARTICLE_RADIUS: f32 = 0.1;

/// Period of one leg of the back-and-forth kinetic jitter, seconds.
pub const JITTER_PERIOD_SECS: f32 = 3.0;

/// Upper bound of the random per-particle increment added to the
/// accumulated jitter start delay, seconds.
pub const JITTER_STAGGER_STEP_SECS: f32 = 0.03;

/// Duration of a nucleus/atom convergence move, seconds.
pub const CONVERGE_DURATION_SECS: f32 = 2.0;

/// Duration of the short grey/role colour fades on particles, seconds.
pub const PARTICLE_FADE_SECS: f32 = 0.5;

/// Scale a surviving nucleus grows to once its partner is absorbed.
pub const NUCLEUS_SURVIVOR_SCALE: f32 = 1.5;

/// Duration of the redshift colour drift on cosmos sprites, seconds.
pub const REDSHIFT_FADE_SECS: f32 = 1.0;

pub const PROTON_COLOR: LinearRgba = LinearRgba::rgb(1.0, 0.0, 0.0);
pub const NEUTRON_COLOR: LinearRgba = LinearRgba::rgb(0.0, 1.0, 0.0);
pub const ELECTRON_COLOR: LinearRgba = LinearRgba::rgb(0.0, 0.0, 1.0);
pub const NUCLEON_GREY: LinearRgba = LinearRgba::rgb(0.5, 0.5, 0.5);
pub const REDSHIFT_COLOR: LinearRgba = LinearRgba::rgb(1.0, 0.5, 0.5);

/// Violet tint shared by the starfield, galaxy mist and star populations.
pub const COSMOS_VIOLET: LinearRgba = LinearRgba::rgb(0.557, 0.267, 0.678);

/// Scale the star/galaxy container settles at while on screen.
pub const COSMOS_VISIBLE_SCALE: f32 = 0.01;

pub const TITLE_FONT_SIZE: f32 = 56.0;
pub const CREDITS_FONT_SIZE: f32 = 56.0;
pub const TITLE_COLOR: Color = Color::srgb(1.0, 0.913, 0.071);

pub const CAPTION_FONT_SIZE: f32 = 18.0;
pub const TIME_LABEL_FONT_SIZE: f32 = 22.0;
pub const CAPTION_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.5);
