use bevy::prelude::*;

use crate::engine::timeline::effects::StageEffect;

/// Easing curves shared by timeline steps and kinetic tweens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    QuadOut,
    QuadInOut,
    CubicInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => t * (2.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Component-wise linear colour interpolation.
pub fn lerp_color(a: LinearRgba, b: LinearRgba, t: f32) -> LinearRgba {
    LinearRgba::new(
        a.red + (b.red - a.red) * t,
        a.green + (b.green - a.green) * t,
        a.blue + (b.blue - a.blue) * t,
        a.alpha + (b.alpha - a.alpha) * t,
    )
}

/// Typed property mutation evaluated absolutely between two endpoints.
#[derive(Debug, Clone, Copy)]
pub enum Track {
    Scale { from: Vec3, to: Vec3 },
    Translation { from: Vec3, to: Vec3 },
    BaseColor { from: LinearRgba, to: LinearRgba },
    Emissive { from: f32, to: f32 },
    /// Occupies budget and fires effects without mutating anything.
    Hold,
}

/// A sampled property value ready to be written to the scene graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackValue {
    Scale(Vec3),
    Translation(Vec3),
    BaseColor(LinearRgba),
    Emissive(f32),
}

impl Track {
    pub fn value_at(&self, t: f32) -> Option<TrackValue> {
        match *self {
            Track::Scale { from, to } => Some(TrackValue::Scale(from.lerp(to, t))),
            Track::Translation { from, to } => Some(TrackValue::Translation(from.lerp(to, t))),
            Track::BaseColor { from, to } => Some(TrackValue::BaseColor(lerp_color(from, to, t))),
            Track::Emissive { from, to } => Some(TrackValue::Emissive(from + (to - from) * t)),
            Track::Hold => None,
        }
    }
}

/// One-shot effect state for a step. Effects fire only on the
/// NotEntered → Entered transition; reverse scrubbing rewinds the
/// interpolation but never replays effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectGate {
    #[default]
    NotEntered,
    Entered,
}

/// One timed mutation bound to an interval of the progress scalar,
/// with optional one-shot effects at its start boundary.
#[derive(Debug, Clone)]
pub struct StageStep {
    pub start: f32,
    pub duration: f32,
    pub target: Option<Entity>,
    pub track: Track,
    pub easing: Easing,
    pub effects: Vec<StageEffect>,
    pub gate: EffectGate,
}

impl StageStep {
    /// Attach a one-shot effect fired when progress first crosses this
    /// step's start boundary in the forward direction.
    pub fn with_effect(&mut self, effect: StageEffect) -> &mut Self {
        self.effects.push(effect);
        self
    }

    pub fn end(&self) -> f32 {
        self.start + self.duration
    }
}
