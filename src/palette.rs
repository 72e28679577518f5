//! Creature color palettes.
//!
//! A [`Palette`] is three RGB colors (`primary`, `secondary`, `accent`, each
//! channel `0.0-1.0`). Callers normally supply their own; [`Palette::from_seed`]
//! and the [`PalettePreset`] table cover the cases where they don't.
//!
//! # Usage
//!
//! ```
//! use sporeform::palette::{Palette, PalettePreset};
//!
//! let ocean = PalettePreset::Ocean.palette();
//! let seeded = Palette::from_seed(1234);
//! assert_eq!(seeded, Palette::from_seed(1234));
//! # let _ = ocean;
//! ```

use crate::seed::{offsets, Seed, SeededRng};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// RGB color, channels in `[0, 1]`.
pub type Color = Vec3;

/// Scale a color and clamp each channel to `[0, 1]`.
#[inline]
pub fn brighten(color: Color, factor: f32) -> Color {
    (color * factor).clamp(Vec3::ZERO, Vec3::ONE)
}

/// Linear mix from `a` to `b`.
#[inline]
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    a.lerp(b, t.clamp(0.0, 1.0))
}

/// Convert HSV (all `0-1`, hue wraps) to RGB.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Color {
    let h = h.rem_euclid(1.0);
    let c = v * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h * 6.0) as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m)
}

/// Three-color creature palette.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Body and membrane.
    pub primary: Color,
    /// Iris base and particle mid-tones.
    pub secondary: Color,
    /// Highlights, glow.
    pub accent: Color,
}

impl Palette {
    pub fn new(primary: Color, secondary: Color, accent: Color) -> Self {
        Self {
            primary,
            secondary,
            accent,
        }
    }

    /// Seeded triadic palette: a base hue plus two rotated hues.
    pub fn from_seed(seed: Seed) -> Self {
        let mut rng = SeededRng::for_generator(seed, offsets::PALETTE);
        let hue = rng.next_f32();
        let spread = rng.range(0.25, 0.4);
        let saturation = rng.range(0.55, 0.85);
        Self {
            primary: hsv_to_rgb(hue, saturation, 0.75),
            secondary: hsv_to_rgb(hue + spread, saturation * 0.9, 0.85),
            accent: hsv_to_rgb(hue - spread, saturation, 1.0),
        }
    }

    /// Colors as an array, in declaration order.
    pub fn colors(&self) -> [Color; 3] {
        [self.primary, self.secondary, self.accent]
    }
}

impl Default for Palette {
    fn default() -> Self {
        PalettePreset::Ocean.palette()
    }
}

/// Named palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PalettePreset {
    /// Cool blues and teals.
    #[default]
    Ocean,
    /// Warm oranges and pinks.
    Sunset,
    /// Pink, cyan, purple.
    Neon,
    /// Greens and browns.
    Forest,
    /// Deep red through yellow.
    Ember,
    /// Violet and green.
    Aurora,
}

impl PalettePreset {
    pub const ALL: [PalettePreset; 6] = [
        PalettePreset::Ocean,
        PalettePreset::Sunset,
        PalettePreset::Neon,
        PalettePreset::Forest,
        PalettePreset::Ember,
        PalettePreset::Aurora,
    ];

    pub fn palette(&self) -> Palette {
        match self {
            PalettePreset::Ocean => Palette::new(
                Vec3::new(0.0, 0.4, 0.6),
                Vec3::new(0.2, 0.6, 0.8),
                Vec3::new(0.6, 0.9, 1.0),
            ),
            PalettePreset::Sunset => Palette::new(
                Vec3::new(0.5, 0.0, 0.5),
                Vec3::new(1.0, 0.2, 0.4),
                Vec3::new(1.0, 0.9, 0.4),
            ),
            PalettePreset::Neon => Palette::new(
                Vec3::new(0.5, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 0.5),
                Vec3::new(0.0, 1.0, 1.0),
            ),
            PalettePreset::Forest => Palette::new(
                Vec3::new(0.2, 0.4, 0.1),
                Vec3::new(0.3, 0.15, 0.05),
                Vec3::new(0.5, 0.8, 0.3),
            ),
            PalettePreset::Ember => Palette::new(
                Vec3::new(0.5, 0.0, 0.0),
                Vec3::new(1.0, 0.3, 0.0),
                Vec3::new(1.0, 0.7, 0.0),
            ),
            PalettePreset::Aurora => Palette::new(
                Vec3::new(0.28, 0.14, 0.46),
                Vec3::new(0.13, 0.57, 0.55),
                Vec3::new(0.37, 0.79, 0.38),
            ),
        }
    }
}
