//! Frame-driven particle advection with bounded respawn.

use super::buffers::ParticleBuffers;
use super::config::ParticleConfig;
use super::params::VisualParams;
use crate::error::Result;
use crate::noise::FlowField;
use crate::palette::Palette;
use crate::time::FrameClock;
use glam::Vec2;

/// Owns the particle buffers of one view and advances them each frame.
///
/// Not meant to be shared between views: respawn counters and trails are
/// per-view state.
///
/// ```
/// use sporeform::particles::{ParticleConfig, ParticleEngine, VisualParams};
/// use sporeform::palette::Palette;
///
/// let config = ParticleConfig { particle_count: 64, ..Default::default() };
/// let mut engine =
///     ParticleEngine::new(VisualParams::default(), config, &Palette::default()).unwrap();
/// let len = engine.buffers().positions.len();
/// for frame in 0..120 {
///     engine.update(frame as f32 / 60.0, 1.0 / 60.0);
/// }
/// assert_eq!(engine.buffers().positions.len(), len);
/// ```
#[derive(Clone, Debug)]
pub struct ParticleEngine {
    params: VisualParams,
    config: ParticleConfig,
    palette: Palette,
    flow: FlowField,
    buffers: ParticleBuffers,
    respawn_counters: Vec<u32>,
    respawns: u64,
    clock: FrameClock,
}

impl ParticleEngine {
    /// Validate `config` and allocate every buffer.
    pub fn new(params: VisualParams, config: ParticleConfig, palette: &Palette) -> Result<Self> {
        config.validate()?;
        let buffers = ParticleBuffers::new(params.seed, &config, palette);
        log::debug!(
            "allocated particle buffers: {} particles x {} segments, pool {}",
            config.particle_count,
            config.trail_segments,
            config.respawn_pool_size
        );
        Ok(Self {
            flow: params.flow_field(),
            respawn_counters: vec![0; config.particle_count],
            respawns: 0,
            clock: FrameClock::new(config.max_delta),
            params,
            palette: *palette,
            config,
            buffers,
        })
    }

    /// Advance one frame. `time` feeds the flow field, `delta` is clamped to
    /// the configured maximum before integration.
    pub fn update(&mut self, time: f32, delta: f32) {
        if self.clock.is_paused() {
            self.clock.tick(time, delta);
            return;
        }
        let (time, dt) = self.clock.tick(time, delta);
        let step = dt * self.config.speed;
        let bound = 1.0 + self.config.margin;
        let fade = dt * self.config.fade_in_rate;

        for i in 0..self.buffers.particle_count() {
            let head = self.buffers.head(i);
            let uv = (head + Vec2::ONE) * 0.5;
            let next = head + self.flow.velocity(uv, time) * step;
            self.buffers.push_head(i, next);

            if next.x.abs() > bound || next.y.abs() > bound {
                self.respawn(i);
            } else {
                let age = &mut self.buffers.ages[i];
                *age = (*age + fade).min(1.0);
            }
        }
    }

    /// Move particle `i` to its next pool entry.
    fn respawn(&mut self, i: usize) {
        let counter = self.respawn_counters[i];
        let slot = counter as usize % self.buffers.pool_size();
        self.respawn_counters[i] = counter.wrapping_add(1);

        let point = self.buffers.pool_entry(i, slot);
        self.buffers.collapse_trail(i, point);
        self.buffers.ages[i] = 0.0;
        self.respawns += 1;
        log::trace!("particle {i} respawned at pool slot {slot}");
    }

    /// Apply new parameters. Buffers are reallocated only when particle
    /// count, trail length, pool size or seed change; returns whether they
    /// were.
    pub fn rebuild(
        &mut self,
        params: VisualParams,
        config: ParticleConfig,
        palette: &Palette,
    ) -> Result<bool> {
        config.validate()?;
        let reallocate = params.seed != self.params.seed
            || config.particle_count != self.config.particle_count
            || config.trail_segments != self.config.trail_segments
            || config.respawn_pool_size != self.config.respawn_pool_size;

        if reallocate {
            *self = Self::new(params, config, palette)?;
            return Ok(true);
        }

        self.flow = params.flow_field();
        self.clock.set_max_delta(config.max_delta);
        if *palette != self.palette {
            self.buffers.recolor(palette);
            self.palette = *palette;
        }
        self.params = params;
        self.config = config;
        Ok(false)
    }

    /// Restore the state right after construction.
    pub fn reset(&mut self) {
        self.buffers = ParticleBuffers::new(self.params.seed, &self.config, &self.palette);
        self.respawn_counters.fill(0);
        self.respawns = 0;
        self.clock.reset();
    }

    /// Place particle `i` at `position`, collapsing its trail.
    pub fn place(&mut self, i: usize, position: Vec2) {
        self.buffers.collapse_trail(i, position);
    }

    #[inline]
    pub fn buffers(&self) -> &ParticleBuffers {
        &self.buffers
    }

    #[inline]
    pub fn params(&self) -> &VisualParams {
        &self.params
    }

    #[inline]
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    #[inline]
    pub fn flow(&self) -> &FlowField {
        &self.flow
    }

    #[inline]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Pause, resume and time-scale control.
    #[inline]
    pub fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }

    /// How many times particle `i` has respawned.
    #[inline]
    pub fn respawn_counter(&self, i: usize) -> u32 {
        self.respawn_counters[i]
    }

    /// Respawns across all particles since construction or reset.
    #[inline]
    pub fn total_respawns(&self) -> u64 {
        self.respawns
    }
}
