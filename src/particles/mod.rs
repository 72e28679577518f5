//! Flow-field particle cloud.
//!
//! [`ParticleBuffers`] are allocated once per `(count, trail, pool, seed)`
//! and mutated in place by [`ParticleEngine::update`]. Each frame, every
//! particle samples the [`FlowField`](crate::noise::FlowField) at its head,
//! advects, and shifts its trail. Particles that leave the margin jump to the
//! next point of their own precomputed respawn pool, so a long-running view
//! never allocates or draws fresh randomness.

mod buffers;
mod config;
mod engine;
mod params;

pub use buffers::ParticleBuffers;
pub use config::ParticleConfig;
pub use engine::ParticleEngine;
pub use params::VisualParams;
