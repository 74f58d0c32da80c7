pub mod apply;
pub mod effects;
pub mod scroll;
pub mod stage_timeline;
pub mod step;
