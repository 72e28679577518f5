//! Spawn context for particle initialization.
//!
//! Wraps the particle stream with helpers for the placement patterns the
//! particle buffers need. Every draw comes from one [`SeededRng`], so the same
//! seed always lays out the same cloud.

use crate::palette::{mix, Color, Palette};
use crate::seed::SeededRng;
use glam::Vec2;
use rand::Rng;

/// How far inside the unit square respawn points may sit.
pub const EDGE_INSET: f32 = 0.05;

/// Context handed to the particle initializer.
///
/// ```
/// use sporeform::seed::SeededRng;
/// use sporeform::spawn::SpawnContext;
///
/// let mut ctx = SpawnContext::new(SeededRng::new(7));
/// let p = ctx.random_on_edge();
/// assert!(p.x.abs() <= 1.0 && p.y.abs() <= 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct SpawnContext {
    rng: SeededRng,
}

impl SpawnContext {
    pub fn new(rng: SeededRng) -> Self {
        Self { rng }
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.next_f32()
    }

    /// Random f32 in `[min, max)`.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Random point inside the square `[-half_size, half_size]^2`.
    pub fn random_in_square(&mut self, half_size: f32) -> Vec2 {
        Vec2::new(
            self.random_range(-half_size, half_size),
            self.random_range(-half_size, half_size),
        )
    }

    /// Random point just inside one of the four edges of the unit square.
    pub fn random_on_edge(&mut self) -> Vec2 {
        let edge = self.rng.gen_range(0u32..4);
        let along = self.random_range(-1.0, 1.0);
        let inset = 1.0 - self.random_range(0.0, EDGE_INSET);
        match edge {
            0 => Vec2::new(-inset, along),
            1 => Vec2::new(inset, along),
            2 => Vec2::new(along, -inset),
            _ => Vec2::new(along, inset),
        }
    }

    /// Size around `base`, varied by up to `jitter` in either direction.
    pub fn jittered(&mut self, base: f32, jitter: f32) -> f32 {
        base * (1.0 + jitter * self.random_range(-1.0, 1.0))
    }

    /// Random position along the primary-secondary-accent gradient.
    pub fn random_tint(&mut self) -> f32 {
        self.random()
    }
}

/// Color at `tint` along the palette gradient.
pub fn palette_gradient(palette: &Palette, tint: f32) -> Color {
    if tint < 0.5 {
        mix(palette.primary, palette.secondary, tint * 2.0)
    } else {
        mix(palette.secondary, palette.accent, tint * 2.0 - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_stream_same_layout() {
        let mut a = SpawnContext::new(SeededRng::new(0));
        let mut b = SpawnContext::new(SeededRng::new(0));
        for _ in 0..20 {
            assert_eq!(a.random_on_edge(), b.random_on_edge());
        }
    }

    #[test]
    fn test_random_in_square_bounds() {
        let mut ctx = SpawnContext::new(SeededRng::new(1));
        for _ in 0..100 {
            let pos = ctx.random_in_square(0.5);
            assert!(pos.x.abs() <= 0.5 && pos.y.abs() <= 0.5);
        }
    }

    #[test]
    fn test_edge_points_hug_the_border() {
        let mut ctx = SpawnContext::new(SeededRng::new(2));
        for _ in 0..200 {
            let p = ctx.random_on_edge();
            let outer = p.x.abs().max(p.y.abs());
            assert!(outer <= 1.0 && outer > 1.0 - EDGE_INSET - 1e-6);
        }
    }

    #[test]
    fn test_gradient_endpoints() {
        let palette = Palette::default();
        assert_eq!(palette_gradient(&palette, 0.0), palette.primary);
        assert_eq!(palette_gradient(&palette, 0.5), palette.secondary);
        assert!((palette_gradient(&palette, 1.0) - palette.accent).length() < 1e-6);
    }
}
