//! Eye generation.
//!
//! Eye positions are laid out by hand for each count instead of packed, so a
//! three-eyed creature reads as either "two plus a third eye" or a triangle.

use crate::band::{band_select, lerp, BandMapper};
use crate::creature::body::BodyConfig;
use crate::maturity::{MaturityConfig, MaturityStage};
use crate::palette::{mix, Color, Palette};
use crate::seed::{offsets, Seed, SeededRng};
use crate::traits::TraitVector;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Rim vertices per eye disc.
pub const EYE_RIM_VERTICES: usize = 24;

const SIZE_BREAKPOINTS: [f32; 4] = [0.0, 0.3, 0.6, 1.0];
const SIZE_RANGES: [(f32, f32); 3] = [(0.035, 0.05), (0.045, 0.065), (0.06, 0.085)];

/// Size multiplier applied when three eyes share a face.
const CROWDED_SCALE: f32 = 0.85;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PupilShape {
    Star,
    VerticalSlit,
    Round,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrisPattern {
    Rings,
    Radial,
    Spiral,
    Organic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GazeStyle {
    Tracking,
    Focused,
    Contemplative,
    Wandering,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IrisConfig {
    pub color: Color,
    pub ring_count: u32,
    /// `[0.3, 1.0]`.
    pub fiber_density: f32,
    pub pattern: IrisPattern,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PupilConfig {
    pub shape: PupilShape,
    /// Fraction of the eye radius, `[0.3, 0.5]`.
    pub base_size: f32,
    /// `(min, max)` pupil size while dilating.
    pub dilation_range: (f32, f32),
    /// Only elder creatures can have glowing pupils.
    pub glow: Option<Color>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EyeBehavior {
    /// Blinks per minute, `[3, 20]`.
    pub blink_rate: f32,
    /// Seconds.
    pub blink_duration: f32,
    pub gaze_speed: f32,
    /// `[0.3, 1.0]`, smaller for isolated creatures.
    pub gaze_range: f32,
    pub gaze_style: GazeStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EyeConfig {
    /// Offset from body center.
    pub position: Vec2,
    pub size: f32,
    pub iris: IrisConfig,
    pub pupil: PupilConfig,
    pub behavior: EyeBehavior,
}

/// Number of eyes for a trait vector, never above `maturity.max_eyes`.
pub fn eye_count(traits: &TraitVector, maturity: &MaturityConfig) -> u32 {
    let intensity = traits.intensity_scale;
    let count = if intensity < 0.3 {
        1
    } else if intensity < 0.6 {
        maturity.max_eyes.min(2)
    } else {
        maturity.max_eyes
    };
    count.clamp(1, maturity.max_eyes.max(1))
}

/// Eye size before crowding.
pub fn eye_size(intensity: f32) -> f32 {
    BandMapper::new(&SIZE_BREAKPOINTS, &SIZE_RANGES).map(intensity)
}

pub fn pupil_shape(traits: &TraitVector) -> PupilShape {
    band_select(
        traits.geometric_organic,
        &[0.25, 0.5],
        &[PupilShape::Star, PupilShape::VerticalSlit, PupilShape::Round],
    )
}

pub fn iris_pattern(traits: &TraitVector) -> IrisPattern {
    band_select(
        traits.geometric_organic,
        &[0.25, 0.5, 0.75],
        &[
            IrisPattern::Rings,
            IrisPattern::Radial,
            IrisPattern::Spiral,
            IrisPattern::Organic,
        ],
    )
}

pub fn gaze_style(traits: &TraitVector) -> GazeStyle {
    band_select(
        traits.connected_isolated,
        &[0.25, 0.5, 0.75],
        &[
            GazeStyle::Tracking,
            GazeStyle::Focused,
            GazeStyle::Contemplative,
            GazeStyle::Wandering,
        ],
    )
}

/// Eye centers in body space, before aspect stretch.
fn layout(count: u32, radius: f32, rng: &mut SeededRng) -> Vec<Vec2> {
    match count {
        0 | 1 => {
            let p = Vec2::new(rng.signed() * 0.08, 0.25 + rng.signed() * 0.05);
            vec![p * radius]
        }
        2 => {
            let y = 0.2 + rng.signed() * 0.04;
            vec![Vec2::new(-0.35, y) * radius, Vec2::new(0.35, y) * radius]
        }
        _ => {
            if rng.chance(0.5) {
                let y = 0.1 + rng.signed() * 0.04;
                // Two plus a third eye above
                vec![
                    Vec2::new(-0.35, y) * radius,
                    Vec2::new(0.35, y) * radius,
                    Vec2::new(0.0, 0.45) * radius,
                ]
            } else {
                let center = Vec2::new(0.0, 0.15);
                (0..3)
                    .map(|k| {
                        let angle = FRAC_PI_2 + k as f32 * TAU / 3.0;
                        (center + Vec2::from_angle(angle) * 0.35) * radius
                    })
                    .collect()
            }
        }
    }
}

/// Generate 1-3 eyes placed on `body`.
pub fn generate_eyes(
    traits: &TraitVector,
    maturity: &MaturityConfig,
    seed: Seed,
    palette: &Palette,
    body: &BodyConfig,
) -> Vec<EyeConfig> {
    let mut rng = SeededRng::for_generator(seed, offsets::EYES);
    let go = traits.geometric_organic;
    let ci = traits.connected_isolated;
    let tempo = traits.motion_tempo;
    let intensity = traits.intensity_scale;

    let count = eye_count(traits, maturity);
    let positions = layout(count, body.radius, &mut rng);

    let mut size = eye_size(intensity);
    if positions.len() == 3 {
        size *= CROWDED_SCALE;
    }

    let iris = IrisConfig {
        color: mix(palette.secondary, palette.accent, rng.range(0.0, 0.5)),
        ring_count: 2 + (3.0 * maturity.detail_level).round() as u32,
        fiber_density: lerp(0.3, 1.0, go),
        pattern: iris_pattern(traits),
    };

    let glow_roll = rng.chance(0.5);
    let glow = (maturity.stage == MaturityStage::Elder && glow_roll).then_some(palette.accent);

    let base_size = lerp(0.3, 0.5, intensity);
    let pupil = PupilConfig {
        shape: pupil_shape(traits),
        base_size,
        dilation_range: (0.7 * base_size, 1.3 * base_size),
        glow,
    };

    let behavior = EyeBehavior {
        blink_rate: lerp(3.0, 20.0, tempo),
        blink_duration: lerp(0.25, 0.12, tempo),
        gaze_speed: lerp(0.5, 2.0, tempo),
        gaze_range: lerp(1.0, 0.3, ci),
        gaze_style: gaze_style(traits),
    };

    positions
        .into_iter()
        .map(|p| EyeConfig {
            position: p * body.aspect,
            size,
            iris,
            pupil,
            behavior,
        })
        .collect()
}

/// One center-fan disc per eye.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EyeBuffers {
    pub positions: Vec<f32>,
    pub edge_factors: Vec<f32>,
    /// Which eye each vertex belongs to.
    pub eye_indices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl EyeBuffers {
    pub fn vertex_count(&self) -> usize {
        self.edge_factors.len()
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Build disc geometry for a set of eyes. Organic creatures get a slightly
/// uneven rim.
pub fn generate_eye_buffers(eyes: &[EyeConfig], traits: &TraitVector, seed: Seed) -> EyeBuffers {
    let mut rng = SeededRng::for_generator(seed, offsets::EYE_SHAPE);
    let wobble = 0.06 * traits.geometric_organic;
    let per_eye = EYE_RIM_VERTICES + 1;

    let mut buffers = EyeBuffers {
        positions: Vec::with_capacity(eyes.len() * per_eye * 3),
        edge_factors: Vec::with_capacity(eyes.len() * per_eye),
        eye_indices: Vec::with_capacity(eyes.len() * per_eye),
        indices: Vec::with_capacity(eyes.len() * EYE_RIM_VERTICES * 3),
    };

    for (eye_index, eye) in eyes.iter().enumerate() {
        let base = buffers.vertex_count() as u32;
        let tag = eye_index as f32;

        buffers
            .positions
            .extend_from_slice(&[eye.position.x, eye.position.y, 0.0]);
        buffers.edge_factors.push(0.0);
        buffers.eye_indices.push(tag);

        for i in 0..EYE_RIM_VERTICES {
            let theta = i as f32 / EYE_RIM_VERTICES as f32 * TAU;
            let r = eye.size * (1.0 + wobble * rng.signed());
            let p = eye.position + Vec2::from_angle(theta) * r;
            buffers.positions.extend_from_slice(&[p.x, p.y, 0.0]);
            buffers.edge_factors.push(1.0);
            buffers.eye_indices.push(tag);
        }

        let rim = EYE_RIM_VERTICES as u32;
        for i in 0..rim {
            buffers
                .indices
                .extend_from_slice(&[base, base + 1 + i, base + 1 + (i + 1) % rim]);
        }
    }

    buffers
}
