/// Radius of the sphere the background starfield is sampled inside.
pub const STARFIELD_RADIUS: f32 = 4000.0;

/// Number of background stars.
pub const STARFIELD_COUNT: usize = 1750;

/// Sprite scale range for individual stars, `(min, max)`.
pub const STAR_SCALE_RANGE: (f32, f32) = (5.0, 10.0);

/// Sprite scale range for galaxy mist particles, `(min, max)`.
pub const MIST_SCALE_RANGE: (f32, f32) = (10.0, 18.0);

pub const GALAXY_COUNT: usize = 4;
pub const GALAXY_ARM_COUNT: usize = 3;
pub const GALAXY_STARS_PER_ARM: usize = 50;
pub const GALAXY_SPREAD: f32 = 30.0;
pub const GALAXY_ARM_THICKNESS: f32 = 30.0;

/// Base radial reach added to `spread` for the mist falloff curve.
pub const MIST_RADIUS_BASE: f32 = 250.0;

/// Fraction of an arm's star count the mist falloff is normalised against.
pub const MIST_FALLOFF_FRACTION: f32 = 0.8;

/// Angular increment between consecutive mist particles along an arm.
pub const MIST_ANGLE_STEP: f32 = 0.4;

/// Angular increment between consecutive stars along an arm.
pub const STAR_ANGLE_STEP: f32 = 0.2;

/// Radial length of a fully wound galaxy arm.
pub const ARM_LENGTH: f32 = 500.0;

pub const STARFIELD_OPACITY: f32 = 0.8;
pub const MIST_OPACITY: f32 = 0.4;
pub const GALAXY_STAR_OPACITY: f32 = 0.9;
