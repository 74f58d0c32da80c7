pub mod field_settings;
pub mod narrative;
pub mod render_settings;
