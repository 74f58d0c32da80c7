use bevy::prelude::*;

use crate::engine::timeline::effects::StageEffect;
use crate::engine::timeline::step::{Easing, EffectGate, StageStep, Track, TrackValue};

/// Ordered, duration-weighted mutation steps sharing one normalized
/// 100-unit budget, scrubbed by the scroll progress scalar.
///
/// Construction happens once at startup: steps are appended with raw
/// weights, then [`StageTimeline::normalize`] rescales them so the total
/// duration is exactly the budget. Evaluation is absolute: the state at
/// any progress value is recomputed from scratch, so skipped or
/// out-of-order progress updates cannot corrupt state.
#[derive(Resource, Default)]
pub struct StageTimeline {
    steps: Vec<StageStep>,
    cursor: f32,
    normalized: bool,
}

impl StageTimeline {
    pub const TOTAL_BUDGET: f32 = 100.0;

    fn push(&mut self, target: Option<Entity>, track: Track, easing: Easing, weight: f32) -> &mut StageStep {
        debug_assert!(weight > 0.0, "stage steps need a positive weight");
        debug_assert!(!self.normalized, "timeline is immutable once normalized");
        let step = StageStep {
            start: self.cursor,
            duration: weight,
            target,
            track,
            easing,
            effects: Vec::new(),
            gate: EffectGate::default(),
        };
        self.cursor += weight;
        self.steps.push(step);
        self.steps.last_mut().expect("step was just pushed")
    }

    /// Append a scale interpolation step.
    pub fn scale(&mut self, target: Entity, from: Vec3, to: Vec3, weight: f32) -> &mut StageStep {
        self.push(Some(target), Track::Scale { from, to }, Easing::QuadOut, weight)
    }

    /// Append a translation interpolation step.
    pub fn translate(&mut self, target: Entity, from: Vec3, to: Vec3, weight: f32) -> &mut StageStep {
        self.push(Some(target), Track::Translation { from, to }, Easing::QuadOut, weight)
    }

    /// Append a material base colour interpolation step.
    pub fn color(&mut self, target: Entity, from: LinearRgba, to: LinearRgba, weight: f32) -> &mut StageStep {
        self.push(Some(target), Track::BaseColor { from, to }, Easing::QuadOut, weight)
    }

    /// Append an emissive intensity interpolation step.
    pub fn emissive(&mut self, target: Entity, from: f32, to: f32, weight: f32) -> &mut StageStep {
        self.push(Some(target), Track::Emissive { from, to }, Easing::QuadOut, weight)
    }

    /// Append a step that occupies budget and fires effects only.
    pub fn hold(&mut self, weight: f32) -> &mut StageStep {
        self.push(None, Track::Hold, Easing::Linear, weight)
    }

    /// Rescale raw step weights so the total duration is exactly the
    /// 100-unit budget. Called once when construction finishes.
    pub fn normalize(&mut self) {
        assert!(!self.steps.is_empty(), "stage timeline built with no steps");
        let scale = Self::TOTAL_BUDGET / self.cursor;
        for step in &mut self.steps {
            step.start *= scale;
            step.duration *= scale;
        }
        // Pin the final edge so the budget sums exactly despite rounding.
        if let Some(last) = self.steps.last_mut() {
            last.duration = Self::TOTAL_BUDGET - last.start;
        }
        self.cursor = Self::TOTAL_BUDGET;
        self.normalized = true;
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn total_duration(&self) -> f32 {
        self.steps.iter().map(|step| step.duration).sum()
    }

    pub fn steps(&self) -> &[StageStep] {
        &self.steps
    }

    /// Evaluate every active step at an absolute progress value.
    ///
    /// Steps whose interval has not started yet contribute nothing; the
    /// rest are reported in append order so later steps override earlier
    /// ones on the same property (last write wins). Calling this twice
    /// with the same progress yields identical values.
    pub fn sample(&self, progress: f32) -> Vec<(Entity, TrackValue)> {
        let p = progress.clamp(0.0, Self::TOTAL_BUDGET);
        let mut values = Vec::new();
        for step in &self.steps {
            if p < step.start {
                continue;
            }
            let t = if step.duration <= f32::EPSILON {
                1.0
            } else {
                ((p - step.start) / step.duration).clamp(0.0, 1.0)
            };
            if let Some(target) = step.target {
                if let Some(value) = step.track.value_at(step.easing.apply(t)) {
                    values.push((target, value));
                }
            }
        }
        values
    }

    /// Advance the one-shot gates and return effects whose start boundary
    /// has been crossed forward for the first time. Reverse crossings
    /// never rearm a gate.
    pub fn fire_effects(&mut self, progress: f32) -> Vec<StageEffect> {
        let p = progress.clamp(0.0, Self::TOTAL_BUDGET);
        let mut fired = Vec::new();
        for step in &mut self.steps {
            if step.gate == EffectGate::NotEntered && p >= step.start {
                step.gate = EffectGate::Entered;
                fired.extend(step.effects.iter().cloned());
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::mem::discriminant;

    fn entity(index: u32) -> Entity {
        Entity::from_raw(index)
    }

    fn sample_timeline() -> StageTimeline {
        let mut timeline = StageTimeline::default();
        timeline.scale(entity(1), Vec3::ZERO, Vec3::ONE, 0.5);
        timeline
            .scale(entity(1), Vec3::ONE, Vec3::splat(4.0), 1.5)
            .with_effect(StageEffect::PaintCosmos);
        timeline.color(entity(2), LinearRgba::BLACK, LinearRgba::WHITE, 1.0);
        timeline.hold(0.5).with_effect(StageEffect::Redshift);
        timeline.scale(entity(1), Vec3::splat(4.0), Vec3::ZERO, 0.5);
        timeline.normalize();
        timeline
    }

    /// Collapse sampled values to the effective final state per
    /// entity/property, mirroring last-write-wins application.
    fn effective(values: Vec<(Entity, TrackValue)>) -> HashMap<(Entity, std::mem::Discriminant<TrackValue>), TrackValue> {
        let mut state = HashMap::new();
        for (target, value) in values {
            state.insert((target, discriminant(&value)), value);
        }
        state
    }

    #[test]
    fn durations_sum_to_budget() {
        let timeline = sample_timeline();
        assert!((timeline.total_duration() - StageTimeline::TOTAL_BUDGET).abs() < 1e-3);
        let last = timeline.steps().last().unwrap();
        assert_eq!(last.end(), StageTimeline::TOTAL_BUDGET);
    }

    #[test]
    fn sampling_is_idempotent() {
        let timeline = sample_timeline();
        for p in [0.0, 12.5, 37.0, 50.0, 99.9, 100.0] {
            assert_eq!(timeline.sample(p), timeline.sample(p), "diverged at {p}");
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let timeline = sample_timeline();
        assert_eq!(timeline.sample(-25.0), timeline.sample(0.0));
        assert_eq!(timeline.sample(1e6), timeline.sample(100.0));
    }

    #[test]
    fn jump_to_end_matches_incremental_scrub() {
        let timeline = sample_timeline();

        // Monotonic fine-grained scrub, folding values as the apply
        // system would.
        let mut scrubbed = HashMap::new();
        for i in 0..=1000 {
            let p = i as f32 * 0.1;
            scrubbed.extend(effective(timeline.sample(p)));
        }

        let jumped = effective(timeline.sample(100.0));
        assert_eq!(scrubbed, jumped);
    }

    #[test]
    fn pending_steps_do_not_contribute() {
        let timeline = sample_timeline();
        // Only the first step has started; the entity holds its
        // interpolated scale with no interference from later steps.
        let first_end = timeline.steps()[0].end();
        let values = timeline.sample(first_end * 0.5);
        assert_eq!(values.len(), 1);
        let (target, value) = values[0];
        assert_eq!(target, entity(1));
        assert!(matches!(value, TrackValue::Scale(_)));
    }

    #[test]
    fn effects_fire_once_per_forward_crossing() {
        let mut timeline = sample_timeline();
        let fired = timeline.fire_effects(60.0);
        assert_eq!(fired, vec![StageEffect::PaintCosmos]);

        // Holding position or inching forward does not refire.
        assert!(timeline.fire_effects(60.0).is_empty());
        assert!(timeline.fire_effects(61.0).is_empty());
    }

    #[test]
    fn reverse_scrub_never_replays_effects() {
        let mut timeline = sample_timeline();
        let first = timeline.fire_effects(100.0);
        assert_eq!(first.len(), 2);

        // Scrub back to the start, then forward again: gates stay shut.
        assert!(timeline.fire_effects(0.0).is_empty());
        assert!(timeline.fire_effects(100.0).is_empty());
    }

    #[test]
    fn effects_skipped_by_reverse_scrub_stay_pending() {
        let mut timeline = sample_timeline();
        // Enter only the first half: the hold step's effect is pending.
        let fired = timeline.fire_effects(30.0);
        assert_eq!(fired, vec![StageEffect::PaintCosmos]);

        // Reverse, then sweep past everything.
        assert!(timeline.fire_effects(5.0).is_empty());
        let fired = timeline.fire_effects(100.0);
        assert_eq!(fired, vec![StageEffect::Redshift]);
    }
}
