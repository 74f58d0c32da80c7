pub mod color_fade;
pub mod converge;
pub mod jitter;
pub mod scale_fade;
