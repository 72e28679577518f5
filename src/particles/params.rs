//! Visual parameters that drive the particle cloud.

use crate::agent::{AgentData, AgentMetrics};
use crate::band::{clamp01, lerp};
use crate::noise::FlowField;
use crate::seed::{hash_to_float, Seed};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Largest seed-derived translation of the flow domain.
const FLOW_OFFSET_RANGE: f32 = 64.0;

/// Seed plus the three knobs that shape the flow field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualParams {
    pub seed: Seed,
    /// `[0, 1]`, more octaves and finer structure.
    pub complexity: f32,
    /// `[0, 1]`, stronger domain warp.
    pub organicness: f32,
    /// `[0.5, 1.5]`, flow time multiplier.
    pub anim_speed: f32,
}

impl Default for VisualParams {
    fn default() -> Self {
        Self {
            seed: 0,
            complexity: 0.5,
            organicness: 0.5,
            anim_speed: 1.0,
        }
    }
}

impl VisualParams {
    /// Derive from an agent's metrics.
    pub fn from_agent(agent: &AgentData) -> Self {
        let m = &agent.metrics;
        let n = AgentMetrics::normalize;
        Self {
            seed: agent.seed(),
            complexity: (n(m.precision) + n(m.avg_response_length)) * 0.5,
            organicness: clamp01(0.5 + (n(m.creativity) - n(m.assertiveness)) * 0.5),
            anim_speed: lerp(0.5, 1.5, n(m.response_speed)),
        }
    }

    /// Flow field these parameters describe. The seed picks where in the
    /// noise domain the field is read, so each agent gets its own currents.
    pub fn flow_field(&self) -> FlowField {
        let complexity = clamp01(self.complexity);
        FlowField {
            scale: lerp(1.5, 4.0, complexity),
            octaves: 2 + (3.0 * complexity).round() as u32,
            warp: lerp(0.2, 1.6, clamp01(self.organicness)),
            time_scale: 0.08 * self.anim_speed.max(0.0),
            offset: Vec2::new(hash_to_float(self.seed, 1), hash_to_float(self.seed, 2))
                * FLOW_OFFSET_RANGE,
            ..FlowField::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(metrics: AgentMetrics) -> AgentData {
        AgentData {
            agent_id: "flow".into(),
            sessions_count: 1,
            primary_topics: vec![],
            self_assessed_traits: vec![],
            metrics,
        }
    }

    #[test]
    fn test_from_agent_extremes() {
        let low = VisualParams::from_agent(&agent(AgentMetrics {
            avg_response_length: 1.0,
            response_speed: 1.0,
            assertiveness: 10.0,
            creativity: 1.0,
            precision: 1.0,
        }));
        assert_eq!(low.complexity, 0.0);
        assert_eq!(low.organicness, 0.0);
        assert_eq!(low.anim_speed, 0.5);

        let high = VisualParams::from_agent(&agent(AgentMetrics {
            avg_response_length: 10.0,
            response_speed: 10.0,
            assertiveness: 1.0,
            creativity: 10.0,
            precision: 10.0,
        }));
        assert_eq!(high.complexity, 1.0);
        assert_eq!(high.organicness, 1.0);
        assert_eq!(high.anim_speed, 1.5);
    }

    #[test]
    fn test_flow_field_mapping() {
        let flow = VisualParams {
            complexity: 1.0,
            organicness: 0.0,
            ..Default::default()
        }
        .flow_field();
        assert_eq!(flow.octaves, 5);
        assert_eq!(flow.scale, 4.0);
        assert!((flow.warp - 0.2).abs() < 1e-6);
        assert!((flow.time_scale - 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_seed_moves_flow_domain() {
        let a = VisualParams {
            seed: 1,
            ..Default::default()
        };
        let b = VisualParams { seed: 2, ..a };
        assert_eq!(a.flow_field(), a.flow_field());
        assert_ne!(a.flow_field().offset, b.flow_field().offset);
        assert_eq!(a.flow_field().octaves, b.flow_field().octaves);

        let offset = a.flow_field().offset;
        assert!((0.0..FLOW_OFFSET_RANGE).contains(&offset.x));
        assert!((0.0..FLOW_OFFSET_RANGE).contains(&offset.y));
    }
}
