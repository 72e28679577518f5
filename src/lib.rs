//! # Sporeform - deterministic procedural creatures
//!
//! Grows a creature and a flow-field particle cloud from a short
//! personality self-report. Output is plain data: configuration structs
//! plus flat `f32`/`u32` buffers ready for GPU upload. Rendering lives
//! elsewhere; this crate never touches a graphics API.
//!
//! ## Quick Start
//!
//! ```
//! use sporeform::prelude::*;
//!
//! let agent = AgentData::from_json(r#"{
//!     "agent_id": "claude-7f3a2b",
//!     "sessions_count": 42,
//!     "self_assessed_traits": ["helpful", "thorough", "curious"]
//! }"#).unwrap();
//!
//! let palette = Palette::from_seed(agent.seed());
//! let creature = Creature::from_agent(&agent, &palette);
//! assert_eq!(creature.maturity.stage, MaturityStage::Developing);
//!
//! let config = ParticleConfig { particle_count: 200, ..Default::default() };
//! let mut cloud = ParticleEngine::new(VisualParams::from_agent(&agent), config, &palette).unwrap();
//! cloud.update(0.016, 0.016);
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! AgentData -> seed -> TraitVector -> MaturityConfig
//!           -> { Body, Eyes, Appendages, Behavior, Style } -> Creature
//!
//! VisualParams -> FlowField + ParticleBuffers -> update(time, delta) per frame
//! ```
//!
//! ## Determinism
//!
//! Every random draw comes from a [`seed::SeededRng`] started at
//! `seed + offset`, one offset per generator (see [`seed::offsets`]).
//! Identical inputs give bit-identical creatures and particle clouds on every
//! platform that implements IEEE-754 `f32`.
//!
//! ## Trait Space
//!
//! | Axis | 0 | 1 |
//! |------|---|---|
//! | `geometric_organic` | crystalline, radial, spoked | soft, pseudopods, tendrils |
//! | `connected_isolated` | social, tracking gaze | introspective, eerie |
//! | `intensity_scale` | small, one eye | large, many eyes |
//! | `motion_tempo` | slow breathing | fast blinking |
//!
//! ## Shaders
//!
//! [`shader_utils`] exports the WGSL twins of the CPU noise and flow code,
//! plus the style uniform block, so a renderer's background can match what
//! the particles feel.

pub mod agent;
pub mod band;
pub mod creature;
pub mod error;
pub mod maturity;
pub mod noise;
pub mod palette;
pub mod particles;
pub mod seed;
pub mod shader_utils;
pub mod spawn;
pub mod time;
pub mod traits;

pub use bytemuck;
pub use glam;
pub use glam::{Vec2, Vec3, Vec4};

pub use agent::{AgentData, AgentMetrics};
pub use creature::{generate_creature, Creature, CreatureParams};
pub use error::{Result, SporeformError};
pub use maturity::{classify_maturity, MaturityConfig, MaturityStage};
pub use noise::{FlowField, FlowUniforms};
pub use palette::{Palette, PalettePreset};
pub use particles::{ParticleBuffers, ParticleConfig, ParticleEngine, VisualParams};
pub use seed::{hash_string, RngState, Seed, SeededRng};
pub use time::FrameClock;
pub use traits::{aggregate_traits, TraitVector};

/// Convenient imports for typical usage.
///
/// ```
/// use sporeform::prelude::*;
/// ```
///
/// This imports:
/// - [`Creature`], [`CreatureParams`], [`generate_creature`] - creature pipeline
/// - [`ParticleEngine`], [`ParticleConfig`], [`VisualParams`] - particle cloud
/// - [`AgentData`], [`TraitVector`], [`Palette`] - inputs
/// - [`Vec2`], [`Vec3`], [`Vec4`] - glam vector types
pub mod prelude {
    pub use crate::agent::{AgentData, AgentMetrics};
    pub use crate::creature::{
        generate_creature, AppendageType, BodyArchetype, BodyPlan, Creature, CreatureParams,
        GazeStyle, IrisPattern, PupilShape, StyleMode,
    };
    pub use crate::error::{Result, SporeformError};
    pub use crate::maturity::{classify_maturity, MaturityConfig, MaturityStage};
    pub use crate::noise::FlowField;
    pub use crate::palette::{Palette, PalettePreset};
    pub use crate::particles::{ParticleBuffers, ParticleConfig, ParticleEngine, VisualParams};
    pub use crate::seed::{hash_string, Seed};
    pub use crate::time::FrameClock;
    pub use crate::traits::{aggregate_traits, TraitVector};
    pub use crate::{Vec2, Vec3, Vec4};
}
