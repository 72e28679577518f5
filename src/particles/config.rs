//! Engine configuration, loadable from JSON.

use crate::error::{Result, SporeformError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Sizing and integration settings for a [`ParticleEngine`](super::ParticleEngine).
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub particle_count: usize,
    /// Positions kept per particle, head included.
    pub trail_segments: usize,
    /// Precomputed respawn points per particle.
    pub respawn_pool_size: usize,
    /// Advection speed in units per second.
    pub speed: f32,
    /// How far past the unit square a particle may drift before respawning.
    pub margin: f32,
    /// Largest step integrated in one frame, in seconds.
    pub max_delta: f32,
    /// Age gained per second after a respawn.
    pub fade_in_rate: f32,
    pub base_size: f32,
    /// Relative size variation, `0` for uniform particles.
    pub size_jitter: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            particle_count: 1500,
            trail_segments: 8,
            respawn_pool_size: 16,
            speed: 0.35,
            margin: 0.1,
            max_delta: 0.05,
            fade_in_rate: 1.5,
            base_size: 0.012,
            size_jitter: 0.5,
        }
    }
}

impl ParticleConfig {
    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        let check = |ok: bool, field: &'static str, reason: &str| {
            if ok {
                Ok(())
            } else {
                log::warn!("rejected particle config: {field} {reason}");
                Err(SporeformError::invalid(field, reason))
            }
        };

        check(self.particle_count > 0, "particle_count", "must be at least 1")?;
        check(self.trail_segments > 0, "trail_segments", "must be at least 1")?;
        check(self.respawn_pool_size > 0, "respawn_pool_size", "must be at least 1")?;
        check(self.max_delta > 0.0, "max_delta", "must be positive")?;
        check(
            self.speed.is_finite() && self.speed >= 0.0,
            "speed",
            "must be finite and non-negative",
        )?;
        check(
            self.margin.is_finite() && self.margin >= 0.0,
            "margin",
            "must be finite and non-negative",
        )?;
        check(
            self.fade_in_rate.is_finite() && self.fade_in_rate >= 0.0,
            "fade_in_rate",
            "must be finite and non-negative",
        )?;
        Ok(())
    }

    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Floats in the position buffer.
    pub fn position_len(&self) -> usize {
        self.particle_count * self.trail_segments * 3
    }

    /// Floats in the respawn pool.
    pub fn pool_len(&self) -> usize {
        self.particle_count * self.respawn_pool_size * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ParticleConfig::default().validate().is_ok());
        assert_eq!(ParticleConfig::default().respawn_pool_size, 16);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ParticleConfig::from_json(r#"{"particle_count": 32}"#).unwrap();
        assert_eq!(config.particle_count, 32);
        assert_eq!(config.trail_segments, 8);
        assert_eq!(config.position_len(), 32 * 8 * 3);
    }

    #[test]
    fn test_rejects_zero_sizes() {
        for json in [
            r#"{"particle_count": 0}"#,
            r#"{"trail_segments": 0}"#,
            r#"{"respawn_pool_size": 0}"#,
            r#"{"max_delta": 0.0}"#,
            r#"{"speed": -1.0}"#,
        ] {
            let err = ParticleConfig::from_json(json).unwrap_err();
            assert!(matches!(err, SporeformError::Validation { .. }), "{json}");
        }
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join("sporeform_particle_config.json");
        let config = ParticleConfig {
            particle_count: 10,
            speed: 0.5,
            ..Default::default()
        };
        config.save(&path).unwrap();
        let loaded = ParticleConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ParticleConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SporeformError::Io(_)));
    }
}
