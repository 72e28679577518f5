//! WGSL mirrors of the CPU noise and flow code for the render layer.
//!
//! The render layer draws the background flow with the same function the
//! particle engine integrates, so particles visibly ride the currents. Every
//! function here has a CPU twin:
//!
//! | WGSL | Rust |
//! |------|------|
//! | `hash(n)` | [`crate::seed::hash_u32`] |
//! | `noise3(p)` / `noise2(p)` | [`crate::noise::noise3`] / [`crate::noise::noise2`] |
//! | `fbm3(p, o)` / `fbm2(p, o)` | [`crate::noise::fbm3`] / [`crate::noise::fbm2`] |
//! | `flow_velocity(uv, t, fp)` | [`crate::noise::FlowField::velocity`] |
//!
//! Bind [`crate::noise::FlowUniforms`] as `FlowParams` and
//! [`crate::creature::StyleUniforms`] as `StyleParams`.
//!
//! # Example
//!
//! ```
//! let src = sporeform::shader_utils::flow_field_wgsl();
//! assert!(src.contains("fn flow_velocity"));
//! ```

/// WGSL code for the integer hash.
pub const RANDOM_WGSL: &str = r#"
fn hash(n: u32) -> u32 {
    var x = n;
    x = x ^ (x >> 17u);
    x = x * 0xed5ad4bbu;
    x = x ^ (x >> 11u);
    x = x * 0xac4c1b51u;
    x = x ^ (x >> 15u);
    x = x * 0x31848babu;
    x = x ^ (x >> 14u);
    return x;
}

// Float in [0, 1) from the top 24 bits
fn rand(seed: u32) -> f32 {
    return f32(hash(seed) >> 8u) / 16777216.0;
}
"#;

/// WGSL code for simplex noise and FBM.
pub const NOISE_WGSL: &str = r#"
fn mod289_3(x: vec3<f32>) -> vec3<f32> {
    return x - floor(x * (1.0 / 289.0)) * 289.0;
}

fn mod289_4(x: vec4<f32>) -> vec4<f32> {
    return x - floor(x * (1.0 / 289.0)) * 289.0;
}

fn permute4(x: vec4<f32>) -> vec4<f32> {
    return mod289_4(((x * 34.0) + 1.0) * x);
}

fn taylor_inv_sqrt4(r: vec4<f32>) -> vec4<f32> {
    return 1.7928429 - 0.8537347 * r;
}

fn noise3(v: vec3<f32>) -> f32 {
    let C = vec2<f32>(1.0 / 6.0, 1.0 / 3.0);

    var i = floor(v + dot(v, vec3(C.y)));
    let x0 = v - i + dot(i, vec3(C.x));

    let g = step(x0.yzx, x0.xyz);
    let l = 1.0 - g;
    let i1 = min(g.xyz, l.zxy);
    let i2 = max(g.xyz, l.zxy);

    let x1 = x0 - i1 + C.x;
    let x2 = x0 - i2 + C.y;
    let x3 = x0 - vec3<f32>(0.5);

    i = mod289_3(i);
    let p = permute4(permute4(permute4(
        i.z + vec4<f32>(0.0, i1.z, i2.z, 1.0))
      + i.y + vec4<f32>(0.0, i1.y, i2.y, 1.0))
      + i.x + vec4<f32>(0.0, i1.x, i2.x, 1.0));

    let n_ = 0.14285714;
    let ns = vec3<f32>(2.0 * n_, 0.5 * n_ - 1.0, n_);

    let j = p - 49.0 * floor(p * ns.z * ns.z);

    let x_ = floor(j * ns.z);
    let y_ = floor(j - 7.0 * x_);

    let x = x_ * ns.x + ns.yyyy;
    let y = y_ * ns.x + ns.yyyy;
    let h = 1.0 - abs(x) - abs(y);

    let b0 = vec4<f32>(x.xy, y.xy);
    let b1 = vec4<f32>(x.zw, y.zw);

    let s0 = floor(b0) * 2.0 + 1.0;
    let s1 = floor(b1) * 2.0 + 1.0;
    let sh = -step(h, vec4<f32>(0.0));

    let a0 = b0.xzyw + s0.xzyw * sh.xxyy;
    let a1 = b1.xzyw + s1.xzyw * sh.zzww;

    var p0 = vec3<f32>(a0.xy, h.x);
    var p1 = vec3<f32>(a0.zw, h.y);
    var p2 = vec3<f32>(a1.xy, h.z);
    var p3 = vec3<f32>(a1.zw, h.w);

    let norm = taylor_inv_sqrt4(vec4<f32>(dot(p0, p0), dot(p1, p1), dot(p2, p2), dot(p3, p3)));
    p0 *= norm.x;
    p1 *= norm.y;
    p2 *= norm.z;
    p3 *= norm.w;

    var m = max(0.6 - vec4<f32>(dot(x0, x0), dot(x1, x1), dot(x2, x2), dot(x3, x3)), vec4<f32>(0.0));
    m = m * m;
    return 42.0 * dot(m * m, vec4<f32>(dot(p0, x0), dot(p1, x1), dot(p2, x2), dot(p3, x3)));
}

fn noise2(p: vec2<f32>) -> f32 {
    return noise3(vec3<f32>(p, 0.0));
}

fn fbm3(p: vec3<f32>, octaves: i32) -> f32 {
    var value = 0.0;
    var amplitude = 0.5;
    var pos = p;
    for (var o = 0; o < octaves; o++) {
        value += amplitude * noise3(pos);
        pos *= 2.0;
        amplitude *= 0.5;
    }
    return value;
}

fn fbm2(p: vec2<f32>, octaves: i32) -> f32 {
    return fbm3(vec3<f32>(p, 0.0), octaves);
}
"#;

/// WGSL code for the domain-warped curl flow sampler.
pub const FLOW_WGSL: &str = r#"
struct FlowParams {
    scale: f32,
    octaves: i32,
    warp: f32,
    time_scale: f32,
    epsilon: f32,
    offset_x: f32,
    offset_y: f32,
    _pad0: f32,
}

fn flow_velocity(uv: vec2<f32>, time: f32, fp: FlowParams) -> vec2<f32> {
    let t = time * fp.time_scale;
    let p = uv * fp.scale + vec2<f32>(fp.offset_x, fp.offset_y);

    let q = vec2<f32>(
        fbm3(vec3<f32>(p + vec2<f32>(0.0, 0.0), t), fp.octaves),
        fbm3(vec3<f32>(p + vec2<f32>(5.2, 1.3), t), fp.octaves)
    );
    let w = p + q * fp.warp;

    let e = fp.epsilon;
    let ex = vec2<f32>(e, 0.0);
    let ey = vec2<f32>(0.0, e);
    let dx = (fbm3(vec3<f32>(w + ex, t), fp.octaves) - fbm3(vec3<f32>(w - ex, t), fp.octaves)) / (2.0 * e);
    let dy = (fbm3(vec3<f32>(w + ey, t), fp.octaves) - fbm3(vec3<f32>(w - ey, t), fp.octaves)) / (2.0 * e);

    let v = vec2<f32>(dy, -dx);
    let len = length(v);
    if len < 1e-12 {
        return vec2<f32>(0.0);
    }
    return v / len;
}
"#;

/// WGSL declaration of the creature style uniform block.
pub const STYLE_WGSL: &str = r#"
const STYLE_COSMIC: u32 = 0u;
const STYLE_BIOLUMINESCENT: u32 = 1u;
const STYLE_LOVECRAFTIAN: u32 = 2u;
const STYLE_BALANCED: u32 = 3u;

struct StyleParams {
    mode: u32,
    fractal_detail: f32,
    prismatic_shift: f32,
    glow_intensity: f32,
    subsurface_scatter: f32,
    eerie_intensity: f32,
    desaturation: f32,
    _pad: f32,
}
"#;

/// Hash, noise, FBM and flow sampler in one source block.
pub fn flow_field_wgsl() -> String {
    format!(
        "// sporeform flow field\n{}\n{}\n{}\n",
        RANDOM_WGSL, NOISE_WGSL, FLOW_WGSL
    )
}

/// Everything a creature shader needs: noise plus the style block.
pub fn creature_wgsl() -> String {
    format!(
        "// sporeform creature utilities\n{}\n{}\n{}\n",
        RANDOM_WGSL, NOISE_WGSL, STYLE_WGSL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_source_contains_all_functions() {
        let src = flow_field_wgsl();
        for name in ["fn hash", "fn noise3", "fn fbm3", "fn flow_velocity", "struct FlowParams"] {
            assert!(src.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_warp_offsets_match_cpu() {
        // Offsets in FLOW_WGSL must stay in sync with noise.rs
        assert!(FLOW_WGSL.contains("vec2<f32>(5.2, 1.3)"));
    }

    #[test]
    fn test_style_block_declared() {
        assert!(creature_wgsl().contains("struct StyleParams"));
    }
}
