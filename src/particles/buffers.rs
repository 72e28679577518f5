//! Fixed-size particle buffers.
//!
//! Layout (all `f32`):
//!
//! | Buffer | Length | Indexing |
//! |--------|--------|----------|
//! | `positions` | `3 * count * trail` | `(particle * trail + segment) * 3` |
//! | `sizes`, `ages`, `tints` | `count` | `particle` |
//! | `colors` | `3 * count` | `particle * 3` |
//! | `trail_indices` | `count * trail` | `particle * trail + segment` |
//! | `respawn_pool` | `2 * count * pool` | `(particle * pool + slot) * 2` |
//!
//! Segment 0 is the head. Nothing here is resized after construction.

use super::config::ParticleConfig;
use crate::palette::Palette;
use crate::seed::{offsets, Seed, SeededRng};
use crate::spawn::{palette_gradient, SpawnContext};
use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleBuffers {
    particle_count: usize,
    trail_segments: usize,
    pool_size: usize,
    pub positions: Vec<f32>,
    pub sizes: Vec<f32>,
    /// `[0, 1]`, 0 right after a respawn.
    pub ages: Vec<f32>,
    /// Position of each particle along the palette gradient.
    pub tints: Vec<f32>,
    pub colors: Vec<f32>,
    /// Segment number of every trail vertex.
    pub trail_indices: Vec<f32>,
    pub respawn_pool: Vec<f32>,
}

impl ParticleBuffers {
    /// Allocate and fill every buffer from the particle stream of `seed`.
    pub fn new(seed: Seed, config: &ParticleConfig, palette: &Palette) -> Self {
        let count = config.particle_count;
        let trail = config.trail_segments;
        let pool = config.respawn_pool_size;

        let mut buffers = Self {
            particle_count: count,
            trail_segments: trail,
            pool_size: pool,
            positions: Vec::with_capacity(config.position_len()),
            sizes: Vec::with_capacity(count),
            ages: Vec::with_capacity(count),
            tints: Vec::with_capacity(count),
            colors: Vec::with_capacity(count * 3),
            trail_indices: Vec::with_capacity(count * trail),
            respawn_pool: Vec::with_capacity(config.pool_len()),
        };

        let rng = SeededRng::for_generator(seed, offsets::PARTICLES);
        let mut ctx = SpawnContext::new(rng);

        for _ in 0..count {
            let start = ctx.random_in_square(1.0);
            for segment in 0..trail {
                buffers.positions.extend_from_slice(&[start.x, start.y, 0.0]);
                buffers.trail_indices.push(segment as f32);
            }

            buffers
                .sizes
                .push(ctx.jittered(config.base_size, config.size_jitter).max(0.0));
            buffers.ages.push(ctx.random());

            let tint = ctx.random_tint();
            buffers.tints.push(tint);
            buffers
                .colors
                .extend_from_slice(&palette_gradient(palette, tint).to_array());

            for _ in 0..pool {
                let p = ctx.random_on_edge();
                buffers.respawn_pool.extend_from_slice(&[p.x, p.y]);
            }
        }

        buffers
    }

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    #[inline]
    pub fn trail_segments(&self) -> usize {
        self.trail_segments
    }

    #[inline]
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Head position of particle `i`.
    #[inline]
    pub fn head(&self, i: usize) -> Vec2 {
        let base = i * self.trail_segments * 3;
        Vec2::new(self.positions[base], self.positions[base + 1])
    }

    /// Trail point `segment` of particle `i`.
    #[inline]
    pub fn trail_point(&self, i: usize, segment: usize) -> Vec2 {
        let base = (i * self.trail_segments + segment) * 3;
        Vec2::new(self.positions[base], self.positions[base + 1])
    }

    /// Respawn point `slot` of particle `i`.
    #[inline]
    pub fn pool_entry(&self, i: usize, slot: usize) -> Vec2 {
        let base = (i * self.pool_size + slot) * 2;
        Vec2::new(self.respawn_pool[base], self.respawn_pool[base + 1])
    }

    /// Every respawn point of particle `i`.
    pub fn pool_entries(&self, i: usize) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.pool_size).map(move |slot| self.pool_entry(i, slot))
    }

    /// Shift particle `i`'s trail back one slot and write a new head.
    pub(crate) fn push_head(&mut self, i: usize, head: Vec2) {
        let base = i * self.trail_segments * 3;
        let end = base + self.trail_segments * 3;
        self.positions.copy_within(base..end - 3, base + 3);
        self.positions[base] = head.x;
        self.positions[base + 1] = head.y;
    }

    /// Collapse particle `i`'s whole trail onto `point`.
    pub(crate) fn collapse_trail(&mut self, i: usize, point: Vec2) {
        let base = i * self.trail_segments * 3;
        for vertex in self.positions[base..base + self.trail_segments * 3].chunks_exact_mut(3) {
            vertex[0] = point.x;
            vertex[1] = point.y;
        }
    }

    /// Recompute colors for a new palette without touching anything else.
    pub fn recolor(&mut self, palette: &Palette) {
        for (color, &tint) in self.colors.chunks_exact_mut(3).zip(&self.tints) {
            color.copy_from_slice(&palette_gradient(palette, tint).to_array());
        }
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn size_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.sizes)
    }

    pub fn age_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.ages)
    }

    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    pub fn trail_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.trail_indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PalettePreset;

    fn small() -> ParticleConfig {
        ParticleConfig {
            particle_count: 20,
            trail_segments: 4,
            respawn_pool_size: 5,
            ..Default::default()
        }
    }

    #[test]
    fn test_lengths() {
        let config = small();
        let b = ParticleBuffers::new(1, &config, &Palette::default());
        assert_eq!(b.positions.len(), 20 * 4 * 3);
        assert_eq!(b.sizes.len(), 20);
        assert_eq!(b.ages.len(), 20);
        assert_eq!(b.colors.len(), 60);
        assert_eq!(b.trail_indices.len(), 80);
        assert_eq!(b.respawn_pool.len(), 20 * 5 * 2);
        assert_eq!(b.position_bytes().len(), b.positions.len() * 4);
    }

    #[test]
    fn test_same_seed_same_cloud() {
        let a = ParticleBuffers::new(9, &small(), &Palette::default());
        let b = ParticleBuffers::new(9, &small(), &Palette::default());
        let c = ParticleBuffers::new(10, &small(), &Palette::default());
        assert_eq!(a, b);
        assert_ne!(a.positions, c.positions);
    }

    #[test]
    fn test_push_head_shifts_trail() {
        let mut b = ParticleBuffers::new(1, &small(), &Palette::default());
        let before: Vec<Vec2> = (0..4).map(|s| b.trail_point(3, s)).collect();
        let neighbour = b.head(4);
        b.push_head(3, Vec2::new(0.5, -0.5));
        assert_eq!(b.head(3), Vec2::new(0.5, -0.5));
        for s in 1..4 {
            assert_eq!(b.trail_point(3, s), before[s - 1]);
        }
        assert_eq!(b.head(4), neighbour);
    }

    #[test]
    fn test_recolor_keeps_tints() {
        let mut b = ParticleBuffers::new(2, &small(), &Palette::default());
        let tints = b.tints.clone();
        b.recolor(&PalettePreset::Ember.palette());
        assert_eq!(b.tints, tints);
        assert_eq!(
            b.colors,
            ParticleBuffers::new(2, &small(), &PalettePreset::Ember.palette()).colors
        );
    }
}
