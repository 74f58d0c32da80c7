pub mod effects;
pub mod stages;
