//! Rendering style selection.
//!
//! The style is purely numeric: a mode plus six intensity scalars that the
//! render layer reads from a uniform block (see `STYLE_WGSL` in
//! [`crate::shader_utils`]). Scalars that do not apply to the selected mode
//! are zero.

use crate::band::lerp;
use crate::seed::{offsets, Seed, SeededRng};
use crate::traits::TraitVector;
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleMode {
    Cosmic,
    Bioluminescent,
    Lovecraftian,
    Balanced,
}

impl StyleMode {
    pub fn select(traits: &TraitVector) -> Self {
        let go = traits.geometric_organic;
        if go < 0.3 {
            StyleMode::Cosmic
        } else if go > 0.7 {
            StyleMode::Bioluminescent
        } else if traits.connected_isolated > 0.7 {
            StyleMode::Lovecraftian
        } else {
            StyleMode::Balanced
        }
    }

    /// Discriminant used by the `STYLE_*` WGSL constants.
    pub fn index(&self) -> u32 {
        match self {
            StyleMode::Cosmic => 0,
            StyleMode::Bioluminescent => 1,
            StyleMode::Lovecraftian => 2,
            StyleMode::Balanced => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub mode: StyleMode,
    pub fractal_detail: f32,
    pub prismatic_shift: f32,
    pub glow_intensity: f32,
    pub subsurface_scatter: f32,
    pub eerie_intensity: f32,
    pub desaturation: f32,
}

impl StyleConfig {
    fn empty(mode: StyleMode) -> Self {
        Self {
            mode,
            fractal_detail: 0.0,
            prismatic_shift: 0.0,
            glow_intensity: 0.0,
            subsurface_scatter: 0.0,
            eerie_intensity: 0.0,
            desaturation: 0.0,
        }
    }

    pub fn to_uniforms(&self) -> StyleUniforms {
        StyleUniforms {
            mode: self.mode.index(),
            fractal_detail: self.fractal_detail,
            prismatic_shift: self.prismatic_shift,
            glow_intensity: self.glow_intensity,
            subsurface_scatter: self.subsurface_scatter,
            eerie_intensity: self.eerie_intensity,
            desaturation: self.desaturation,
            _pad: 0.0,
        }
    }
}

/// GPU layout of [`StyleConfig`], matching `StyleParams` in WGSL.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct StyleUniforms {
    pub mode: u32,
    pub fractal_detail: f32,
    pub prismatic_shift: f32,
    pub glow_intensity: f32,
    pub subsurface_scatter: f32,
    pub eerie_intensity: f32,
    pub desaturation: f32,
    pub _pad: f32,
}

impl StyleUniforms {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

pub fn generate_style(traits: &TraitVector, seed: Seed) -> StyleConfig {
    let mut rng = SeededRng::for_generator(seed, offsets::STYLE);
    let go = traits.geometric_organic;
    let ci = traits.connected_isolated;
    let intensity = traits.intensity_scale;
    let jitter = rng.signed() * 0.05;

    let mode = StyleMode::select(traits);
    let mut style = StyleConfig::empty(mode);
    match mode {
        StyleMode::Cosmic => {
            style.fractal_detail = lerp(0.4, 1.0, intensity);
            style.prismatic_shift = (lerp(0.1, 0.6, traits.motion_tempo) + jitter).max(0.0);
        }
        StyleMode::Bioluminescent => {
            style.glow_intensity = lerp(0.4, 1.0, intensity);
            style.subsurface_scatter = (lerp(0.3, 0.8, go) + jitter).clamp(0.0, 1.0);
        }
        StyleMode::Lovecraftian => {
            style.eerie_intensity = lerp(0.4, 1.0, ci);
            style.desaturation = (lerp(0.2, 0.6, ci) + jitter).max(0.0);
        }
        StyleMode::Balanced => {
            style.glow_intensity = lerp(0.1, 0.3, intensity);
            style.subsurface_scatter = (lerp(0.1, 0.3, go) + jitter).max(0.0);
        }
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selection() {
        let t = |go, ci| TraitVector::new(go, ci, 0.5, 0.5);
        assert_eq!(StyleMode::select(&t(0.29, 0.9)), StyleMode::Cosmic);
        assert_eq!(StyleMode::select(&t(0.71, 0.9)), StyleMode::Bioluminescent);
        assert_eq!(StyleMode::select(&t(0.5, 0.71)), StyleMode::Lovecraftian);
        assert_eq!(StyleMode::select(&t(0.5, 0.7)), StyleMode::Balanced);
    }

    #[test]
    fn test_irrelevant_scalars_are_zero() {
        let cosmic = generate_style(&TraitVector::new(0.1, 0.5, 0.5, 0.5), 1);
        assert_eq!(cosmic.glow_intensity, 0.0);
        assert_eq!(cosmic.eerie_intensity, 0.0);
        assert!(cosmic.fractal_detail > 0.0);

        let eerie = generate_style(&TraitVector::new(0.5, 0.9, 0.5, 0.5), 1);
        assert_eq!(eerie.fractal_detail, 0.0);
        assert_eq!(eerie.subsurface_scatter, 0.0);
        assert!(eerie.eerie_intensity > 0.0);
    }

    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<StyleUniforms>(), 32);
        let style = generate_style(&TraitVector::new(0.9, 0.5, 0.5, 0.5), 2);
        let u = style.to_uniforms();
        assert_eq!(u.mode, 1);
        assert_eq!(u.as_bytes().len(), 32);
    }
}
