//! Appendage generation: type selection, per-type parameters and tube meshes.

use crate::band::lerp;
use crate::creature::body::BodyConfig;
use crate::maturity::MaturityConfig;
use crate::palette::{mix, Color, Palette};
use crate::seed::{offsets, Seed, SeededRng};
use crate::traits::TraitVector;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Circumference samples per tube ring.
pub const TUBE_SIDES: u32 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppendageType {
    Spoke,
    Cilia,
    Limb,
    Tail,
    Tendril,
    Antenna,
}

/// Fixed ranges for one appendage type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppendageParams {
    pub length: (f32, f32),
    pub thickness: (f32, f32),
    pub segments: (u32, u32),
    pub taper: (f32, f32),
    pub wave_amplitude: f32,
    pub wave_frequency: f32,
}

impl AppendageType {
    pub fn params(&self) -> AppendageParams {
        let (length, thickness, segments, taper, wave_amplitude, wave_frequency) = match self {
            AppendageType::Spoke => ((0.08, 0.15), (0.008, 0.015), (3, 4), (0.6, 0.9), 0.02, 1.0),
            AppendageType::Cilia => ((0.03, 0.06), (0.003, 0.006), (3, 4), (0.8, 1.0), 0.15, 4.0),
            AppendageType::Limb => ((0.12, 0.2), (0.015, 0.025), (5, 7), (0.4, 0.6), 0.08, 1.2),
            AppendageType::Tail => ((0.2, 0.35), (0.015, 0.03), (8, 12), (0.7, 0.95), 0.2, 0.8),
            AppendageType::Tendril => ((0.15, 0.3), (0.006, 0.012), (8, 12), (0.8, 1.0), 0.3, 1.5),
            AppendageType::Antenna => ((0.1, 0.18), (0.004, 0.007), (4, 6), (0.5, 0.7), 0.06, 2.0),
        };
        AppendageParams {
            length,
            thickness,
            segments,
            taper,
            wave_amplitude,
            wave_frequency,
        }
    }

    /// How many of this type a creature of `complexity` grows.
    pub fn count(&self, complexity: u32) -> u32 {
        if complexity == 0 {
            return 0;
        }
        match self {
            AppendageType::Spoke => 3 + 2 * complexity,
            AppendageType::Cilia => 6 + 2 * complexity,
            AppendageType::Limb => 2 * complexity,
            AppendageType::Tendril => 1 + complexity,
            AppendageType::Tail => 1,
            AppendageType::Antenna => 2,
        }
    }
}

/// Traveling wave along an appendage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    pub amplitude: f32,
    pub frequency: f32,
    pub speed: f32,
    pub phase: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppendageConfig {
    pub kind: AppendageType,
    /// Radians, 0 = +x, counter-clockwise.
    pub attach_angle: f32,
    /// Point on the body outline.
    pub attach_point: Vec2,
    pub length: f32,
    /// Base thickness.
    pub thickness: f32,
    pub segments: u32,
    /// Fraction of thickness lost at the tip.
    pub taper: f32,
    pub wave: WaveConfig,
    pub color: Color,
}

/// Types grown for a trait vector at a given complexity.
pub fn appendage_types(traits: &TraitVector, complexity: u32) -> Vec<AppendageType> {
    if complexity == 0 {
        return Vec::new();
    }
    let go = traits.geometric_organic;
    let ci = traits.connected_isolated;

    let mut types = if go < 0.3 {
        vec![AppendageType::Spoke]
    } else if go > 0.7 {
        if ci > 0.5 {
            vec![AppendageType::Tendril, AppendageType::Tail]
        } else {
            vec![AppendageType::Tendril]
        }
    } else if ci > 0.6 {
        vec![AppendageType::Tail]
    } else {
        vec![AppendageType::Limb]
    };

    if complexity >= 3 {
        if types.contains(&AppendageType::Spoke) {
            types.push(AppendageType::Cilia);
        } else {
            types.push(AppendageType::Antenna);
        }
    }
    types
}

fn attach_angles(kind: AppendageType, count: u32, rng: &mut SeededRng) -> Vec<f32> {
    match kind {
        AppendageType::Spoke | AppendageType::Cilia => {
            let step = TAU / count.max(1) as f32;
            let start = rng.range(0.0, step);
            (0..count).map(|i| start + i as f32 * step).collect()
        }
        AppendageType::Limb | AppendageType::Tendril => (0..count)
            .map(|i| {
                let side = if i % 2 == 0 { -1.0 } else { 1.0 };
                let rank = (i / 2) as f32;
                -FRAC_PI_2 + side * (0.35 + rank * 0.4) + rng.signed() * 0.08
            })
            .collect(),
        AppendageType::Tail => vec![-FRAC_PI_2; count as usize],
        AppendageType::Antenna => (0..count)
            .map(|i| if i % 2 == 0 { FRAC_PI_2 + 0.35 } else { FRAC_PI_2 - 0.35 })
            .collect(),
    }
}

/// Generate all appendages for a creature.
pub fn generate_appendages(
    traits: &TraitVector,
    maturity: &MaturityConfig,
    seed: Seed,
    palette: &Palette,
    body: &BodyConfig,
) -> Vec<AppendageConfig> {
    let mut rng = SeededRng::for_generator(seed, offsets::APPENDAGES);
    let complexity = maturity.appendage_complexity;

    let length_scale = lerp(0.8, 1.3, traits.intensity_scale);
    let amplitude_scale = lerp(0.5, 1.5, traits.geometric_organic);
    let speed = lerp(0.5, 2.0, traits.motion_tempo);

    let mut appendages = Vec::new();
    for kind in appendage_types(traits, complexity) {
        let params = kind.params();
        let count = kind.count(complexity);
        for attach_angle in attach_angles(kind, count, &mut rng) {
            appendages.push(AppendageConfig {
                kind,
                attach_angle,
                attach_point: Vec2::from_angle(attach_angle) * body.radius * body.aspect,
                length: rng.range(params.length.0, params.length.1) * length_scale,
                thickness: rng.range(params.thickness.0, params.thickness.1),
                segments: rng.int_range(params.segments.0, params.segments.1),
                taper: rng.range(params.taper.0, params.taper.1),
                wave: WaveConfig {
                    amplitude: params.wave_amplitude * amplitude_scale,
                    frequency: params.wave_frequency,
                    speed,
                    phase: rng.range(0.0, TAU),
                },
                color: mix(palette.primary, palette.secondary, rng.range(0.2, 0.6)),
            });
        }
    }
    appendages
}

/// Tube meshes for every appendage, in rest pose.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppendageBuffers {
    pub positions: Vec<f32>,
    /// Position along the appendage, `0` at the root, `1` at the tip.
    pub along: Vec<f32>,
    pub appendage_indices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl AppendageBuffers {
    pub fn vertex_count(&self) -> usize {
        self.along.len()
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Build `segments + 1` rings of [`TUBE_SIDES`] samples per appendage,
/// joined by quad strips. Organic creatures get gently curved rest poses.
pub fn generate_appendage_buffers(
    appendages: &[AppendageConfig],
    traits: &TraitVector,
    seed: Seed,
) -> AppendageBuffers {
    let mut rng = SeededRng::for_generator(seed, offsets::APPENDAGE_SHAPE);
    let mut buffers = AppendageBuffers::default();
    let sides = TUBE_SIDES;

    for (index, app) in appendages.iter().enumerate() {
        let base = buffers.vertex_count() as u32;
        let bend = rng.signed() * 0.3 * traits.geometric_organic;
        let rings = app.segments + 1;

        for ring in 0..rings {
            let t = ring as f32 / app.segments.max(1) as f32;
            let dir = Vec2::from_angle(app.attach_angle + bend * t);
            let normal = dir.perp();
            let center = app.attach_point + dir * app.length * t;
            let radius = app.thickness * (1.0 - app.taper * t);

            for k in 0..sides {
                let phi = k as f32 / sides as f32 * TAU;
                let offset = normal * phi.cos() * radius;
                let p = center + offset;
                buffers
                    .positions
                    .extend_from_slice(&[p.x, p.y, phi.sin() * radius]);
                buffers.along.push(t);
                buffers.appendage_indices.push(index as f32);
            }
        }

        for ring in 0..app.segments {
            for k in 0..sides {
                let a = base + ring * sides + k;
                let b = base + ring * sides + (k + 1) % sides;
                let c = a + sides;
                let d = b + sides;
                buffers.indices.extend_from_slice(&[a, b, c, b, d, c]);
            }
        }
    }

    buffers
}
