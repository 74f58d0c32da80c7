use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::engine::assets::journey_manifest::{JourneyManifest, ScrollTuning};
use crate::engine::timeline::stage_timeline::StageTimeline;

/// Normalized narrative progress derived from scroll input.
///
/// `target` follows input immediately; `value` is the smoothed scalar
/// that actually scrubs the timeline. Both are clamped to the budget at
/// all times.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct ScrollProgress {
    pub target: f32,
    pub value: f32,
}

/// Fold one batch of wheel deltas into a progress target.
pub fn fold_scroll(target: f32, lines: f32, pixels: f32, tuning: &ScrollTuning) -> f32 {
    (target + lines * tuning.units_per_line + pixels * tuning.units_per_pixel)
        .clamp(0.0, StageTimeline::TOTAL_BUDGET)
}

/// Map wheel and key input to the progress target and smooth the
/// scrubbed value toward it.
pub fn scroll_progress_system(
    mut progress: ResMut<ScrollProgress>,
    mut scroll_events: EventReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
    manifest: Res<JourneyManifest>,
    time: Res<Time>,
) {
    let tuning = &manifest.scroll;

    // Scrolling down advances the narrative, so wheel deltas negate.
    let mut lines = 0.0;
    let mut pixels = 0.0;
    for ev in scroll_events.read() {
        match ev.unit {
            MouseScrollUnit::Line => lines -= ev.y,
            MouseScrollUnit::Pixel => pixels -= ev.y,
        }
    }
    progress.target = fold_scroll(progress.target, lines, pixels, tuning);

    if keyboard.just_pressed(KeyCode::PageDown) {
        progress.target = (progress.target + 10.0).min(StageTimeline::TOTAL_BUDGET);
    }
    if keyboard.just_pressed(KeyCode::PageUp) {
        progress.target = (progress.target - 10.0).max(0.0);
    }
    if keyboard.just_pressed(KeyCode::Home) {
        progress.target = 0.0;
    }
    if keyboard.just_pressed(KeyCode::End) {
        progress.target = StageTimeline::TOTAL_BUDGET;
    }

    let alpha = (tuning.smoothing * time.delta_secs()).min(1.0);
    progress.value += (progress.target - progress.value) * alpha;
    if (progress.target - progress.value).abs() < 1e-3 {
        progress.value = progress.target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_clamps_at_both_ends() {
        let tuning = ScrollTuning::default();
        assert_eq!(fold_scroll(0.0, -50.0, 0.0, &tuning), 0.0);
        assert_eq!(fold_scroll(99.0, 1e6, 0.0, &tuning), 100.0);
    }

    #[test]
    fn fold_is_pure_in_accumulated_offset() {
        let tuning = ScrollTuning::default();
        let a = fold_scroll(fold_scroll(10.0, 4.0, 0.0, &tuning), 6.0, 0.0, &tuning);
        let b = fold_scroll(10.0, 10.0, 0.0, &tuning);
        assert!((a - b).abs() < 1e-4);
    }

    #[test]
    fn pixel_and_line_units_both_advance() {
        let tuning = ScrollTuning::default();
        assert!(fold_scroll(50.0, 1.0, 0.0, &tuning) > 50.0);
        assert!(fold_scroll(50.0, 0.0, 10.0, &tuning) > 50.0);
    }
}
