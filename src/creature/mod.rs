//! Creature generation.
//!
//! A [`Creature`] is a pure value grown from a seed, a trait vector, a
//! maturity level and a palette. Each part comes from its own generator, and
//! each generator draws from its own seeded stream, so changing one part's
//! logic never reshuffles another.
//!
//! ```
//! use sporeform::creature::{generate_creature, CreatureParams};
//! use sporeform::palette::Palette;
//! use sporeform::seed::hash_string;
//! use sporeform::traits::aggregate_traits;
//!
//! let seed = hash_string("claude-7f3a2b");
//! let params = CreatureParams {
//!     seed,
//!     traits: aggregate_traits(&["helpful", "thorough", "curious"], seed),
//!     palette: Palette::default(),
//! };
//! let creature = generate_creature(&params, 42);
//! assert_eq!(creature.eyes.len(), 2);
//! assert_eq!(creature, generate_creature(&params, 42));
//! ```

pub mod appendages;
pub mod behavior;
pub mod body;
pub mod eyes;
pub mod style;

pub use appendages::{
    generate_appendage_buffers, generate_appendages, AppendageBuffers, AppendageConfig,
    AppendageType, WaveConfig,
};
pub use behavior::{generate_behavior, BehaviorConfig, BreathingPattern};
pub use body::{
    generate_body, generate_body_buffers, BodyArchetype, BodyBuffers, BodyConfig, BodyPlan,
    MembraneConfig, NucleusConfig,
};
pub use eyes::{
    generate_eye_buffers, generate_eyes, EyeBuffers, EyeConfig, GazeStyle, IrisPattern,
    PupilShape,
};
pub use style::{generate_style, StyleConfig, StyleMode, StyleUniforms};

use crate::agent::AgentData;
use crate::maturity::{classify_maturity, MaturityConfig};
use crate::palette::Palette;
use crate::seed::Seed;
use crate::traits::{aggregate_traits, TraitVector};
use serde::{Deserialize, Serialize};

/// Inputs that fully determine a creature, together with a session count.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatureParams {
    pub seed: Seed,
    pub traits: TraitVector,
    pub palette: Palette,
}

/// Everything the render layer needs to draw one creature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub seed: Seed,
    pub traits: TraitVector,
    pub maturity: MaturityConfig,
    pub palette: Palette,
    pub body: BodyConfig,
    pub body_buffers: BodyBuffers,
    pub eyes: Vec<EyeConfig>,
    pub eye_buffers: EyeBuffers,
    pub appendages: Vec<AppendageConfig>,
    pub appendage_buffers: AppendageBuffers,
    pub behavior: BehaviorConfig,
    pub style: StyleConfig,
}

/// Run every generator for `params` at `sessions` sessions.
///
/// Trait axes are clamped to `[0, 1]` first; negative session counts count
/// as zero.
pub fn generate_creature(params: &CreatureParams, sessions: i64) -> Creature {
    let seed = params.seed;
    let traits = params.traits.clamped();
    let palette = params.palette;
    let maturity = classify_maturity(sessions);

    let body = generate_body(&traits, &maturity, seed, &palette);
    let body_buffers = generate_body_buffers(&body, &traits, seed);
    let eyes = generate_eyes(&traits, &maturity, seed, &palette, &body);
    let eye_buffers = generate_eye_buffers(&eyes, &traits, seed);
    let appendages = generate_appendages(&traits, &maturity, seed, &palette, &body);
    let appendage_buffers = generate_appendage_buffers(&appendages, &traits, seed);
    let behavior = generate_behavior(&traits, seed);
    let style = generate_style(&traits, seed);

    log::debug!(
        "generated creature seed={} stage={} plan={:?} eyes={} appendages={} vertices={}",
        seed,
        maturity.stage.name(),
        body.plan,
        eyes.len(),
        appendages.len(),
        body_buffers.vertex_count() + eye_buffers.vertex_count() + appendage_buffers.vertex_count(),
    );

    Creature {
        seed,
        traits,
        maturity,
        palette,
        body,
        body_buffers,
        eyes,
        eye_buffers,
        appendages,
        appendage_buffers,
        behavior,
        style,
    }
}

impl Creature {
    /// Full pipeline from an agent record: seed from `agent_id`, traits from
    /// `self_assessed_traits`, maturity from `sessions_count`.
    pub fn from_agent(agent: &AgentData, palette: &Palette) -> Self {
        let seed = agent.seed();
        let params = CreatureParams {
            seed,
            traits: aggregate_traits(&agent.self_assessed_traits, seed),
            palette: *palette,
        };
        generate_creature(&params, agent.sessions_count)
    }

    /// Creature JSON for handing to a renderer.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
