//! Animation behavior: breathing, idle motion and gaze coordination.

use crate::band::lerp;
use crate::seed::{offsets, Seed, SeededRng};
use crate::traits::TraitVector;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathingPattern {
    Steady,
    Pulsing,
    Irregular,
}

impl BreathingPattern {
    pub fn select(geometric_organic: f32) -> Self {
        if geometric_organic < 0.3 {
            BreathingPattern::Steady
        } else if geometric_organic > 0.7 {
            BreathingPattern::Irregular
        } else {
            BreathingPattern::Pulsing
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BreathingConfig {
    /// Cycles per second.
    pub rate: f32,
    /// `[0.02, 0.08]`, fraction of radius.
    pub depth: f32,
    pub pattern: BreathingPattern,
    /// Start offset in the cycle, radians.
    pub phase: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdleConfig {
    pub drift: f32,
    pub wobble: f32,
    pub pulse: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GazeConfig {
    /// How strongly eyes return to center.
    pub center_bias: f32,
    /// How much multiple eyes move together.
    pub sync_factor: f32,
    pub curiosity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BehaviorConfig {
    pub breathing: BreathingConfig,
    pub idle: IdleConfig,
    pub gaze: GazeConfig,
}

pub fn generate_behavior(traits: &TraitVector, seed: Seed) -> BehaviorConfig {
    let mut rng = SeededRng::for_generator(seed, offsets::BEHAVIOR);
    let go = traits.geometric_organic;
    let ci = traits.connected_isolated;
    let tempo = traits.motion_tempo;

    BehaviorConfig {
        breathing: BreathingConfig {
            rate: lerp(6.0, 16.0, tempo) / 60.0,
            depth: lerp(0.02, 0.08, go),
            pattern: BreathingPattern::select(go),
            phase: rng.range(0.0, std::f32::consts::TAU),
        },
        idle: IdleConfig {
            drift: lerp(0.002, 0.012, tempo),
            wobble: lerp(0.0, 0.05, go),
            pulse: lerp(0.01, 0.05, traits.intensity_scale),
        },
        gaze: GazeConfig {
            center_bias: lerp(0.3, 0.9, ci),
            sync_factor: lerp(0.9, 0.2, go),
            curiosity: (lerp(0.8, 0.2, ci) + tempo) * 0.5,
        },
    }
}
