pub mod manifest_loader;
pub mod narrative_assets;
pub mod progress;
