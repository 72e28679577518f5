//! Integration tests for the full creature pipeline.
//!
//! These run the public API end to end, from an agent record to a creature
//! and a particle cloud.

use sporeform::creature::{BodyPlan, Creature};
use sporeform::prelude::*;

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_reference_agent_scenario() {
    let seed = hash_string("claude-7f3a2b");
    let traits = aggregate_traits(&["helpful", "thorough", "curious"], seed);

    // helpful and thorough both sit well below 0.2 on connected/isolated
    assert!(traits.connected_isolated < 0.3, "{traits:?}");
    assert!((0.3..0.7).contains(&traits.intensity_scale), "{traits:?}");

    let maturity = classify_maturity(42);
    assert_eq!(maturity.stage, MaturityStage::Developing);
    assert_eq!(maturity.max_eyes, 2);
    assert!(maturity.has_nucleus);
    assert!(!maturity.has_circulation);
    assert_eq!(maturity.appendage_complexity, 1);

    let creature = generate_creature(
        &CreatureParams {
            seed,
            traits,
            palette: Palette::default(),
        },
        42,
    );
    assert!(creature.eyes.len() <= 2);
    assert!(creature.body.nucleus.is_some());
    assert!(!creature.appendages.is_empty());
}

#[test]
fn test_empty_traits_scenario() {
    let traits = aggregate_traits::<&str>(&[], 77);
    assert_eq!(traits, TraitVector::new(0.5, 0.5, 0.5, 0.5));

    let creature = generate_creature(
        &CreatureParams {
            seed: 77,
            traits,
            palette: Palette::default(),
        },
        5,
    );
    assert_eq!(creature.body.plan, BodyPlan::Bilateral);
}

#[test]
fn test_nascent_scenario_ignores_traits() {
    for traits in [
        TraitVector::new(0.0, 0.0, 0.0, 0.0),
        TraitVector::new(1.0, 1.0, 1.0, 1.0),
        TraitVector::new(0.2, 0.9, 0.95, 0.1),
    ] {
        let creature = generate_creature(
            &CreatureParams {
                seed: 3,
                traits,
                palette: Palette::default(),
            },
            0,
        );
        assert_eq!(creature.maturity.stage, MaturityStage::Nascent);
        assert_eq!(creature.eyes.len(), 1);
        assert!(creature.body.nucleus.is_none());
        assert!(creature.appendages.is_empty());
    }
}

#[test]
fn test_agent_record_to_creature_and_cloud() {
    let agent = AgentData::from_json(
        r#"{
            "agent_id": "claude-7f3a2b",
            "sessions_count": 42,
            "primary_topics": ["rust", "graphics"],
            "self_assessed_traits": ["helpful", "thorough", "curious"],
            "metrics": {
                "avg_response_length": 6,
                "response_speed": 7,
                "assertiveness": 5,
                "creativity": 8,
                "precision": 9
            }
        }"#,
    )
    .unwrap();

    let palette = Palette::from_seed(agent.seed());
    let a = Creature::from_agent(&agent, &palette);
    let b = Creature::from_agent(&agent, &palette);
    assert_eq!(a, b);
    assert_eq!(a.seed, hash_string("claude-7f3a2b"));

    let params = VisualParams::from_agent(&agent);
    assert_eq!(params.seed, a.seed);
    assert!(params.organicness > 0.5);

    let config = ParticleConfig {
        particle_count: 100,
        ..Default::default()
    };
    let mut engine = ParticleEngine::new(params, config, &palette).unwrap();
    engine.update(0.016, 0.016);
    assert_eq!(engine.clock().frame(), 1);
}

#[test]
fn test_unknown_traits_degrade_gracefully() {
    let traits = aggregate_traits(&["zxqv-unheard-of", "  ", "ANOTHER made up word"], 5);
    for axis in traits.to_array() {
        assert!((0.2..=0.8).contains(&axis), "{traits:?}");
    }
    assert_eq!(traits, aggregate_traits(&["zxqv-unheard-of", "  ", "ANOTHER made up word"], 5));
}

// ============================================================================
// Particle engine over long runs
// ============================================================================

#[test]
fn test_long_run_has_fixed_buffers_and_only_pool_respawns() {
    let config = ParticleConfig {
        particle_count: 40,
        trail_segments: 5,
        respawn_pool_size: 16,
        speed: 2.0,
        ..Default::default()
    };
    let params = VisualParams {
        seed: 11,
        ..Default::default()
    };
    let mut engine = ParticleEngine::new(params, config.clone(), &Palette::default()).unwrap();

    let lens = |e: &ParticleEngine| {
        let b = e.buffers();
        (
            b.positions.len(),
            b.sizes.len(),
            b.ages.len(),
            b.colors.len(),
            b.trail_indices.len(),
            b.respawn_pool.len(),
        )
    };
    let before = lens(&engine);
    let pool = engine.buffers().respawn_pool.clone();

    for frame in 0..3000 {
        engine.update(frame as f32 / 60.0, 1.0 / 60.0);
        let b = engine.buffers();
        for i in 0..config.particle_count {
            if b.ages[i] == 0.0 {
                let head = b.head(i);
                assert!(b.pool_entries(i).any(|p| p == head));
            }
        }
    }

    assert_eq!(lens(&engine), before);
    assert_eq!(engine.buffers().respawn_pool, pool);
    assert!(engine.total_respawns() > 0);
}

#[test]
fn test_bytes_views_match_buffer_sizes() {
    let creature = generate_creature(
        &CreatureParams {
            seed: 21,
            traits: TraitVector::new(0.8, 0.8, 0.8, 0.8),
            palette: Palette::default(),
        },
        700,
    );
    assert_eq!(
        creature.body_buffers.position_bytes().len(),
        creature.body_buffers.positions.len() * 4
    );
    assert_eq!(
        creature.appendage_buffers.index_bytes().len(),
        creature.appendage_buffers.indices.len() * 4
    );
    assert_eq!(creature.style.to_uniforms().as_bytes().len(), 32);
}
