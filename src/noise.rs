//! CPU gradient noise and the flow-field sampler.
//!
//! The simplex kernel here is a line-for-line mirror of the WGSL in
//! [`crate::shader_utils::NOISE_WGSL`], and [`FlowField::velocity`] mirrors
//! `flow_velocity` in [`crate::shader_utils::FLOW_WGSL`]. Particles advected
//! on the CPU therefore follow the same currents the background shader draws.
//!
//! # Available Functions
//!
//! - [`noise3`] - 3D simplex noise in roughly `[-1, 1]`
//! - [`noise2`] - 2D simplex noise (z = 0 slice)
//! - [`fbm3`] / [`fbm2`] - fractal Brownian motion, gain 0.5, lacunarity 2
//! - [`FlowField`] - domain-warped curl flow sampler

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3, Vec3Swizzles, Vec4, Vec4Swizzles};
use serde::{Deserialize, Serialize};

#[inline]
fn mod289_3(x: Vec3) -> Vec3 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn mod289_4(x: Vec4) -> Vec4 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn permute4(x: Vec4) -> Vec4 {
    mod289_4(((x * 34.0) + Vec4::ONE) * x)
}

#[inline]
fn taylor_inv_sqrt4(r: Vec4) -> Vec4 {
    Vec4::splat(1.792_842_9) - r * 0.853_734_7
}

/// WGSL `step(edge, x)`: 1.0 where `x >= edge`.
#[inline]
fn step3(edge: Vec3, x: Vec3) -> Vec3 {
    Vec3::new(
        if x.x >= edge.x { 1.0 } else { 0.0 },
        if x.y >= edge.y { 1.0 } else { 0.0 },
        if x.z >= edge.z { 1.0 } else { 0.0 },
    )
}

/// `-step(h, 0)`: -1.0 where `h <= 0`.
#[inline]
fn neg_step_zero(h: Vec4) -> Vec4 {
    Vec4::new(
        if h.x <= 0.0 { -1.0 } else { 0.0 },
        if h.y <= 0.0 { -1.0 } else { 0.0 },
        if h.z <= 0.0 { -1.0 } else { 0.0 },
        if h.w <= 0.0 { -1.0 } else { 0.0 },
    )
}

/// 3D simplex noise.
pub fn noise3(v: Vec3) -> f32 {
    const C: Vec2 = Vec2::new(1.0 / 6.0, 1.0 / 3.0);

    // First corner
    let mut i = (v + Vec3::splat(v.dot(Vec3::splat(C.y)))).floor();
    let x0 = v - i + Vec3::splat(i.dot(Vec3::splat(C.x)));

    // Other corners
    let g = step3(x0.yzx(), x0);
    let l = Vec3::ONE - g;
    let i1 = g.min(l.zxy());
    let i2 = g.max(l.zxy());

    let x1 = x0 - i1 + Vec3::splat(C.x);
    let x2 = x0 - i2 + Vec3::splat(C.y);
    let x3 = x0 - Vec3::splat(0.5);

    // Permutations
    i = mod289_3(i);
    let p = permute4(
        permute4(
            permute4(Vec4::splat(i.z) + Vec4::new(0.0, i1.z, i2.z, 1.0))
                + Vec4::splat(i.y)
                + Vec4::new(0.0, i1.y, i2.y, 1.0),
        ) + Vec4::splat(i.x)
            + Vec4::new(0.0, i1.x, i2.x, 1.0),
    );

    // Gradients
    let n_ = 0.142_857_14_f32;
    let ns = Vec3::new(2.0 * n_, 0.5 * n_ - 1.0, n_);

    let j = p - (p * ns.z * ns.z).floor() * 49.0;

    let x_ = (j * ns.z).floor();
    let y_ = (j - x_ * 7.0).floor();

    let x = x_ * ns.x + Vec4::splat(ns.y);
    let y = y_ * ns.x + Vec4::splat(ns.y);
    let h = Vec4::ONE - x.abs() - y.abs();

    let b0 = Vec4::new(x.x, x.y, y.x, y.y);
    let b1 = Vec4::new(x.z, x.w, y.z, y.w);

    let s0 = b0.floor() * 2.0 + Vec4::ONE;
    let s1 = b1.floor() * 2.0 + Vec4::ONE;
    let sh = neg_step_zero(h);

    let a0 = b0.xzyw() + s0.xzyw() * sh.xxyy();
    let a1 = b1.xzyw() + s1.xzyw() * sh.zzww();

    let mut p0 = Vec3::new(a0.x, a0.y, h.x);
    let mut p1 = Vec3::new(a0.z, a0.w, h.y);
    let mut p2 = Vec3::new(a1.x, a1.y, h.z);
    let mut p3 = Vec3::new(a1.z, a1.w, h.w);

    // Normalize gradients
    let norm = taylor_inv_sqrt4(Vec4::new(p0.dot(p0), p1.dot(p1), p2.dot(p2), p3.dot(p3)));
    p0 *= norm.x;
    p1 *= norm.y;
    p2 *= norm.z;
    p3 *= norm.w;

    // Mix final noise value
    let mut m = (Vec4::splat(0.6) - Vec4::new(x0.dot(x0), x1.dot(x1), x2.dot(x2), x3.dot(x3)))
        .max(Vec4::ZERO);
    m = m * m;
    42.0 * (m * m).dot(Vec4::new(p0.dot(x0), p1.dot(x1), p2.dot(x2), p3.dot(x3)))
}

/// 2D simplex noise (the z = 0 slice of [`noise3`]).
#[inline]
pub fn noise2(p: Vec2) -> f32 {
    noise3(p.extend(0.0))
}

/// Fractal Brownian motion over [`noise3`].
pub fn fbm3(p: Vec3, octaves: u32) -> f32 {
    let mut value = 0.0;
    let mut amplitude = 0.5;
    let mut pos = p;
    for _ in 0..octaves {
        value += amplitude * noise3(pos);
        pos *= 2.0;
        amplitude *= 0.5;
    }
    value
}

/// Fractal Brownian motion over [`noise2`].
#[inline]
pub fn fbm2(p: Vec2, octaves: u32) -> f32 {
    fbm3(p.extend(0.0), octaves)
}

/// Offsets decorrelating the two warp fields. Shared with the WGSL.
const WARP_OFFSET_A: Vec2 = Vec2::new(0.0, 0.0);
const WARP_OFFSET_B: Vec2 = Vec2::new(5.2, 1.3);

/// Domain-warped curl-noise velocity field over unit UV space.
///
/// `velocity` returns a unit vector (or zero in a perfectly flat spot).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowField {
    /// Spatial frequency applied to UV coordinates.
    pub scale: f32,
    /// FBM octaves for every evaluation.
    pub octaves: u32,
    /// How far the warp fields displace the sampling point.
    pub warp: f32,
    /// Multiplier from wall-clock seconds to noise time.
    pub time_scale: f32,
    /// Finite-difference step for the gradient.
    pub epsilon: f32,
    /// Translation of the noise domain, in scaled units.
    pub offset: Vec2,
}

impl Default for FlowField {
    fn default() -> Self {
        Self {
            scale: 2.5,
            octaves: 4,
            warp: 0.8,
            time_scale: 0.08,
            epsilon: 0.01,
            offset: Vec2::ZERO,
        }
    }
}

impl FlowField {
    /// Sample the flow direction at `uv` and `time`.
    pub fn velocity(&self, uv: Vec2, time: f32) -> Vec2 {
        let t = time * self.time_scale;
        let p = uv * self.scale + self.offset;

        let q = Vec2::new(
            fbm3((p + WARP_OFFSET_A).extend(t), self.octaves),
            fbm3((p + WARP_OFFSET_B).extend(t), self.octaves),
        );
        let w = p + q * self.warp;

        let e = self.epsilon;
        let ex = Vec2::new(e, 0.0);
        let ey = Vec2::new(0.0, e);
        let dx = (fbm3((w + ex).extend(t), self.octaves) - fbm3((w - ex).extend(t), self.octaves))
            / (2.0 * e);
        let dy = (fbm3((w + ey).extend(t), self.octaves) - fbm3((w - ey).extend(t), self.octaves))
            / (2.0 * e);

        Vec2::new(dy, -dx).normalize_or_zero()
    }

    /// Uniform block matching `FlowParams` in the WGSL.
    pub fn to_uniforms(&self) -> FlowUniforms {
        FlowUniforms {
            scale: self.scale,
            octaves: self.octaves as i32,
            warp: self.warp,
            time_scale: self.time_scale,
            epsilon: self.epsilon,
            offset: self.offset.to_array(),
            _pad: 0.0,
        }
    }
}

/// GPU layout of [`FlowField`]. 32 bytes, 16-byte aligned.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct FlowUniforms {
    pub scale: f32,
    pub octaves: i32,
    pub warp: f32,
    pub time_scale: f32,
    pub epsilon: f32,
    pub offset: [f32; 2],
    pub _pad: f32,
}
