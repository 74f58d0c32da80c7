use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// Lifecycle of the narrative: assets resolve first, then the scene and
/// stage timeline are constructed once, then the scroll loop runs.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Building,
    Running,
}

#[derive(Component)]
pub struct FpsText;

/// Transition to Building once every narrative asset has resolved.
pub fn transition_to_building(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.all_loaded() {
        println!("→ Narrative assets resolved, transitioning to Building state");
        next_state.set(AppState::Building);
    }
}

/// Final transition once the stage timeline has been constructed.
pub fn transition_to_running(mut next_state: ResMut<NextState<AppState>>) {
    println!("→ Stage timeline ready, transitioning to Running state");
    next_state.set(AppState::Running);
}
