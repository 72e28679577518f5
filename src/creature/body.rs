//! Body generation: symmetry plan, membrane, nucleus and perimeter mesh.
//!
//! [`generate_body`] produces the structured [`BodyConfig`];
//! [`generate_body_buffers`] turns it into a center-fan mesh whose perimeter
//! follows one of four archetypes:
//!
//! | Archetype | Selected when | Outline |
//! |-----------|---------------|---------|
//! | [`BodyArchetype::Cosmic`] | `geometric_organic < 0.3` | N-gon with vertex spikes |
//! | [`BodyArchetype::Organic`] | `geometric_organic > 0.7` | Gaussian pseudopods + smooth noise |
//! | [`BodyArchetype::Lovecraftian`] | mid, `connected_isolated > 0.7` | lopsided lobes + downward tentacles |
//! | [`BodyArchetype::Balanced`] | otherwise | mild mirrored noise |

use crate::band::lerp;
use crate::maturity::MaturityConfig;
use crate::noise::fbm2;
use crate::palette::{brighten, Color, Palette};
use crate::seed::{offsets, Seed, SeededRng};
use crate::traits::TraitVector;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Hard cap on [`BodyConfig::resolution`].
pub const MAX_RESOLUTION: u32 = 64;

/// Perimeter vertices emitted per resolution step.
pub const PERIMETER_SUBDIVISION: u32 = 4;

/// Overall symmetry of the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyPlan {
    Radial,
    Bilateral,
    Asymmetric,
}

impl BodyPlan {
    /// Plan for a trait vector.
    pub fn select(traits: &TraitVector) -> Self {
        let go = traits.geometric_organic;
        if go < 0.3 {
            BodyPlan::Radial
        } else if go > 0.7 || traits.connected_isolated <= 0.5 {
            BodyPlan::Bilateral
        } else {
            BodyPlan::Asymmetric
        }
    }

    /// Resolution before maturity scaling.
    pub fn base_resolution(&self) -> u32 {
        match self {
            BodyPlan::Radial => 6,
            BodyPlan::Bilateral => 24,
            BodyPlan::Asymmetric => 32,
        }
    }
}

/// Outline family used by the perimeter mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyArchetype {
    Cosmic,
    Organic,
    Lovecraftian,
    Balanced,
}

impl BodyArchetype {
    pub fn select(traits: &TraitVector) -> Self {
        let go = traits.geometric_organic;
        if go < 0.3 {
            BodyArchetype::Cosmic
        } else if go > 0.7 {
            BodyArchetype::Organic
        } else if traits.connected_isolated > 0.7 {
            BodyArchetype::Lovecraftian
        } else {
            BodyArchetype::Balanced
        }
    }
}

/// Outer membrane appearance and breathing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MembraneConfig {
    /// `[0.02, 0.06]`, thicker for geometric bodies.
    pub thickness: f32,
    /// `[0.5, 0.9]`.
    pub opacity: f32,
    /// `[0.01, 0.05]`, fraction of radius.
    pub breath_amplitude: f32,
    /// Cycles per second, 6-16 breaths per minute.
    pub breath_rate: f32,
}

/// Inner nucleus, present from the developing stage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NucleusConfig {
    /// Offset from body center, magnitude `<= 0.3 * radius`.
    pub offset: Vec2,
    pub size: f32,
    /// Pulses per second, `[0.5, 2.0]`.
    pub pulse_rate: f32,
    pub color: Color,
}

/// Structured body description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub plan: BodyPlan,
    pub archetype: BodyArchetype,
    /// `[0.15, 0.28]`.
    pub radius: f32,
    /// Per-axis stretch.
    pub aspect: Vec2,
    /// `[0.02, 0.2]`.
    pub irregularity: f32,
    /// Perimeter control points, `<= 64`.
    pub resolution: u32,
    pub membrane: MembraneConfig,
    pub nucleus: Option<NucleusConfig>,
    pub has_circulation: bool,
    pub color: Color,
}

/// Generate the body description.
pub fn generate_body(
    traits: &TraitVector,
    maturity: &MaturityConfig,
    seed: Seed,
    palette: &Palette,
) -> BodyConfig {
    let mut rng = SeededRng::for_generator(seed, offsets::BODY);
    let go = traits.geometric_organic;
    let intensity = traits.intensity_scale;

    let plan = BodyPlan::select(traits);
    let scaled = plan.base_resolution() as f32 * (1.0 + 0.5 * maturity.detail_level);
    let resolution = (scaled.round() as u32).min(MAX_RESOLUTION);

    let aspect = match plan {
        BodyPlan::Radial => Vec2::new(1.0 + rng.signed() * 0.05, 1.0 + rng.signed() * 0.05),
        BodyPlan::Bilateral => Vec2::new(1.0, rng.range(1.1, 1.35)),
        BodyPlan::Asymmetric => Vec2::new(rng.range(0.85, 1.25), rng.range(0.85, 1.25)),
    };

    let radius = lerp(0.15, 0.28, intensity);

    let membrane = MembraneConfig {
        thickness: lerp(0.06, 0.02, go),
        opacity: lerp(0.5, 0.9, intensity),
        breath_amplitude: lerp(0.01, 0.05, go),
        breath_rate: lerp(6.0, 16.0, traits.motion_tempo) / 60.0,
    };

    // Always draw the direction so the stream position does not depend on stage
    let nucleus_angle = rng.range(0.0, TAU);
    let nucleus = maturity.has_nucleus.then(|| NucleusConfig {
        offset: Vec2::from_angle(nucleus_angle) * lerp(0.0, 0.3, go) * radius,
        size: lerp(0.2, 0.35, maturity.detail_level) * radius,
        pulse_rate: lerp(0.5, 2.0, intensity),
        color: brighten(palette.primary, 1.3),
    });

    BodyConfig {
        plan,
        archetype: BodyArchetype::select(traits),
        radius,
        aspect,
        irregularity: lerp(0.02, 0.2, go),
        resolution,
        membrane,
        nucleus,
        has_circulation: maturity.has_circulation,
        color: palette.primary,
    }
}

/// Flat center-fan mesh of the body, ready for upload.
///
/// Vertex 0 is the center; vertices `1..=n` walk the perimeter
/// counter-clockwise starting at angle 0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyBuffers {
    /// `xyz` per vertex, z = 0.
    pub positions: Vec<f32>,
    /// 0 for the center, 1 on the perimeter.
    pub edge_factors: Vec<f32>,
    /// Per-vertex animation decorrelation in `[0, 1)`.
    pub noise_offsets: Vec<f32>,
    /// Polar angle of each vertex (0 for the center).
    pub angles: Vec<f32>,
    /// Triangle list `(0, i, i + 1)`.
    pub indices: Vec<u32>,
}

impl BodyBuffers {
    pub fn vertex_count(&self) -> usize {
        self.edge_factors.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw bytes of the position buffer.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw bytes of the index buffer.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Signed shortest angular distance from `b` to `a`, in `[-PI, PI)`.
#[inline]
pub(crate) fn angle_diff(a: f32, b: f32) -> f32 {
    (a - b + PI).rem_euclid(TAU) - PI
}

#[inline]
fn gaussian(d: f32, width: f32) -> f32 {
    (-(d * d) / (2.0 * width * width)).exp()
}

#[derive(Clone, Copy, Debug)]
struct Bump {
    angle: f32,
    width: f32,
    strength: f32,
    /// Width multiplier on the counter-clockwise side.
    skew: f32,
}

impl Bump {
    fn at(&self, theta: f32) -> f32 {
        let d = angle_diff(theta, self.angle);
        let w = if d > 0.0 { self.width * self.skew } else { self.width };
        self.strength * gaussian(d, w)
    }
}

/// Archetype-specific outline, sampled as a radius multiplier.
#[derive(Clone, Debug)]
enum Outline {
    Cosmic {
        sides: u32,
        rotation: f32,
        spike: f32,
    },
    Organic {
        pods: Vec<Bump>,
    },
    Lovecraftian {
        lobes: Vec<Bump>,
        tentacles: Vec<Bump>,
        noise_gain: f32,
    },
    Balanced,
}

impl Outline {
    fn build(archetype: BodyArchetype, traits: &TraitVector, rng: &mut SeededRng) -> Self {
        match archetype {
            BodyArchetype::Cosmic => {
                let sides = rng.int_range(5, 8);
                Outline::Cosmic {
                    sides,
                    rotation: rng.range(0.0, TAU / sides as f32),
                    spike: lerp(0.08, 0.25, traits.intensity_scale),
                }
            }
            BodyArchetype::Organic => {
                let count = rng.int_range(3, 5);
                let pods = (0..count)
                    .map(|_| Bump {
                        angle: rng.range(0.0, TAU),
                        width: rng.range(0.25, 0.6),
                        strength: rng.range(0.08, 0.2),
                        skew: 1.0,
                    })
                    .collect();
                Outline::Organic { pods }
            }
            BodyArchetype::Lovecraftian => {
                let lobe_count = rng.int_range(2, 3);
                let lobes = (0..lobe_count)
                    .map(|_| Bump {
                        angle: rng.range(0.0, TAU),
                        width: rng.range(0.4, 0.9),
                        strength: rng.range(0.1, 0.25),
                        skew: rng.range(0.5, 1.8),
                    })
                    .collect();
                let tentacle_count = rng.int_range(2, 4);
                let tentacles = (0..tentacle_count)
                    .map(|_| Bump {
                        angle: -FRAC_PI_2 + rng.signed() * 0.7,
                        width: rng.range(0.04, 0.08),
                        strength: rng.range(0.25, 0.5),
                        skew: 1.0,
                    })
                    .collect();
                Outline::Lovecraftian {
                    lobes,
                    tentacles,
                    noise_gain: 0.15 * traits.connected_isolated,
                }
            }
            BodyArchetype::Balanced => Outline::Balanced,
        }
    }

    fn radius_at(&self, theta: f32, irregularity: f32, noise_origin: Vec2) -> f32 {
        let circle = Vec2::from_angle(theta);
        let r = match self {
            Outline::Cosmic {
                sides,
                rotation,
                spike,
            } => {
                let n = *sides as f32;
                let sector = TAU / n;
                let local = (theta - rotation).rem_euclid(sector);
                let facet = (PI / n).cos() / (local - PI / n).cos();
                let nearest_vertex = local.min(sector - local);
                let proximity = nearest_vertex / (sector * 0.5);
                let spikes = spike * (1.0 - proximity).powi(3);
                facet + spikes + irregularity * 0.25 * fbm2(circle * 2.0 + noise_origin, 2)
            }
            Outline::Organic { pods } => {
                let bulge: f32 = pods.iter().map(|p| p.at(theta)).sum();
                1.0 + bulge + irregularity * fbm2(circle * 1.5 + noise_origin, 3)
            }
            Outline::Lovecraftian {
                lobes,
                tentacles,
                noise_gain,
            } => {
                let lobe: f32 = lobes.iter().map(|p| p.at(theta)).sum();
                let reach: f32 = tentacles.iter().map(|p| p.at(theta)).sum();
                let noise = (irregularity + noise_gain) * fbm2(circle * 2.5 + noise_origin, 4);
                1.0 + lobe + reach + noise
            }
            Outline::Balanced => {
                // Mirror across the vertical axis
                let mirrored = Vec2::new(circle.x.abs(), circle.y);
                1.0 + irregularity * 0.6 * fbm2(mirrored * 1.8 + noise_origin, 3)
            }
        };
        r.max(0.3)
    }
}

/// Build the perimeter mesh for a body.
pub fn generate_body_buffers(body: &BodyConfig, traits: &TraitVector, seed: Seed) -> BodyBuffers {
    let mut rng = SeededRng::for_generator(seed, offsets::BODY_SHAPE);
    let outline = Outline::build(body.archetype, traits, &mut rng);
    let noise_origin = Vec2::new(rng.range(0.0, 100.0), rng.range(0.0, 100.0));

    let ring = (body.resolution * PERIMETER_SUBDIVISION) as usize;
    let vertex_count = ring + 1;

    let mut buffers = BodyBuffers {
        positions: Vec::with_capacity(vertex_count * 3),
        edge_factors: Vec::with_capacity(vertex_count),
        noise_offsets: Vec::with_capacity(vertex_count),
        angles: Vec::with_capacity(vertex_count),
        indices: Vec::with_capacity(ring * 3),
    };

    buffers.positions.extend_from_slice(&[0.0, 0.0, 0.0]);
    buffers.edge_factors.push(0.0);
    buffers.noise_offsets.push(rng.next_f32());
    buffers.angles.push(0.0);

    for i in 0..ring {
        let theta = i as f32 / ring as f32 * TAU;
        let r = body.radius * outline.radius_at(theta, body.irregularity, noise_origin);
        let p = Vec2::from_angle(theta) * r * body.aspect;
        buffers.positions.extend_from_slice(&[p.x, p.y, 0.0]);
        buffers.edge_factors.push(1.0);
        buffers.noise_offsets.push(rng.next_f32());
        buffers.angles.push(theta);
    }

    for i in 0..ring as u32 {
        let next = (i + 1) % ring as u32;
        buffers.indices.extend_from_slice(&[0, i + 1, next + 1]);
    }

    buffers
}
