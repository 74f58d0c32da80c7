use bevy::prelude::*;

use constants::narrative::Caption;

/// One-shot side effects bound to a stage step's forward start crossing.
///
/// Factory effects (scatter, combine, atoms) spawn or re-scope kinetic
/// sub-animations that run on the real-time clock, independent of the
/// scroll-bound timeline.
#[derive(Debug, Clone, PartialEq)]
pub enum StageEffect {
    /// Replace the caption panel and the time/tooltip labels.
    Caption {
        body: String,
        time_label: String,
        tooltip: Option<String>,
    },
    /// Colour the particle triads by role and start their kinetic jitter.
    ScatterParticles,
    /// Converge each triad's proton and neutron into a nucleus.
    CombineNuclei,
    /// Converge each triad's electron onto its nucleus.
    FormAtoms,
    /// Assign final colours to the star and mist populations.
    PaintCosmos,
    /// Drift every cosmos sprite toward the redshifted tint.
    Redshift,
}

impl StageEffect {
    pub fn caption(caption: &Caption) -> Self {
        StageEffect::Caption {
            body: caption.body.to_string(),
            time_label: caption.time_label.to_string(),
            tooltip: caption.tooltip.map(str::to_string),
        }
    }
}

/// Event carrying a fired stage effect to its handling system.
#[derive(Event, Debug, Clone)]
pub struct StageEffectEvent(pub StageEffect);
