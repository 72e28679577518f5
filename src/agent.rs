//! The self-report record a creature is grown from.
//!
//! Schema validation happens upstream; this module only deserializes the
//! record and derives seeds from it.
//!
//! ```
//! use sporeform::agent::AgentData;
//!
//! let agent = AgentData::from_json(r#"{
//!     "agent_id": "claude-7f3a2b",
//!     "sessions_count": 42,
//!     "primary_topics": ["rust"],
//!     "self_assessed_traits": ["helpful", "thorough", "curious"],
//!     "metrics": {
//!         "avg_response_length": 6, "response_speed": 7,
//!         "assertiveness": 5, "creativity": 8, "precision": 9
//!     }
//! }"#).unwrap();
//! assert_eq!(agent.sessions_count, 42);
//! ```

use crate::band::inverse_lerp;
use crate::error::Result;
use crate::seed::{hash_string, Seed};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Self-assessed metrics, each on a `1-10` scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentMetrics {
    pub avg_response_length: f32,
    pub response_speed: f32,
    pub assertiveness: f32,
    pub creativity: f32,
    pub precision: f32,
}

impl AgentMetrics {
    /// Map a `1-10` metric to `[0, 1]`, clamping out-of-range values.
    #[inline]
    pub fn normalize(value: f32) -> f32 {
        inverse_lerp(1.0, 10.0, value)
    }
}

impl Default for AgentMetrics {
    fn default() -> Self {
        Self {
            avg_response_length: 5.5,
            response_speed: 5.5,
            assertiveness: 5.5,
            creativity: 5.5,
            precision: 5.5,
        }
    }
}

/// A validated agent self-report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentData {
    pub agent_id: String,
    /// Negative values are treated as zero.
    pub sessions_count: i64,
    #[serde(default)]
    pub primary_topics: Vec<String>,
    #[serde(default)]
    pub self_assessed_traits: Vec<String>,
    #[serde(default)]
    pub metrics: AgentMetrics,
}

impl AgentData {
    /// Parse a record from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a record from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save the record as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Canonical seed: the hash of `agent_id`.
    pub fn seed(&self) -> Seed {
        hash_string(&self.agent_id)
    }
}
