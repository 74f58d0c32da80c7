pub mod assets;
pub mod camera;
pub mod caption;
pub mod core;
pub mod kinetics;
pub mod loading;
pub mod scene;
pub mod systems;
pub mod timeline;
