use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub assets_requested: bool,
    pub font_loaded: bool,
    pub star_sprite_loaded: bool,
    pub cmbr_texture_loaded: bool,
}

impl LoadingProgress {
    pub fn all_loaded(&self) -> bool {
        self.manifest_loaded && self.font_loaded && self.star_sprite_loaded && self.cmbr_texture_loaded
    }
}
