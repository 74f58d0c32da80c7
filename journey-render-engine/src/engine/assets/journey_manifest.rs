use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// How raw scroll input maps onto the 0..100 progress scalar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollTuning {
    /// Progress units added per wheel line.
    pub units_per_line: f32,
    /// Progress units added per wheel pixel (trackpads report pixels).
    pub units_per_pixel: f32,
    /// Exponential smoothing rate of the scrubbed value toward its target,
    /// per second. The scrub analogue of damped camera motion.
    pub smoothing: f32,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            units_per_line: 0.5,
            units_per_pixel: 0.01,
            smoothing: 4.0,
        }
    }
}

/// Journey manifest as a Bevy asset. Mirrors JSON structure exactly.
/// Names the external collaborators the narrative cannot start without.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct JourneyManifest {
    /// Vector font used by the title and credits text.
    pub font: String,
    /// Sprite shared by the starfield, galaxy stars and mist.
    pub star_sprite: String,
    /// Cosmic microwave background photograph.
    pub cmbr_texture: String,
    #[serde(default)]
    pub scroll: ScrollTuning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_manifest_parses() {
        let manifest: JourneyManifest =
            serde_json::from_str(include_str!("../../../assets/journey.json")).unwrap();
        assert!(manifest.font.ends_with(".ttf"));
        assert!(!manifest.star_sprite.is_empty());
        assert!(!manifest.cmbr_texture.is_empty());
        assert!(manifest.scroll.units_per_line > 0.0);
    }

    #[test]
    fn scroll_tuning_is_optional() {
        let manifest: JourneyManifest = serde_json::from_str(
            r#"{"font": "f.ttf", "star_sprite": "s.png", "cmbr_texture": "c.jpg"}"#,
        )
        .unwrap();
        assert_eq!(manifest.scroll.smoothing, ScrollTuning::default().smoothing);
    }
}
