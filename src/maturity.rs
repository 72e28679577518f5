//! Maturity classification from session counts.
//!
//! Stages gate which features a creature may grow. Every capability is a
//! non-decreasing step function of the stage, so an older creature can only
//! gain features.
//!
//! | Stage | Sessions | Eyes | Nucleus | Circulation | Appendages |
//! |-------|----------|------|---------|-------------|------------|
//! | Nascent | 0-10 | 1 | no | no | 0 |
//! | Developing | 11-100 | 2 | yes | no | 1 |
//! | Mature | 101-500 | 3 | yes | yes | 2 |
//! | Elder | 501+ | 3 | yes | yes | 3 |

use crate::band::clamp01;
use serde::{Deserialize, Serialize};

/// Lifecycle bucket derived from session count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityStage {
    Nascent,
    Developing,
    Mature,
    Elder,
}

impl MaturityStage {
    /// Stage for a (non-negative) session count.
    pub fn from_sessions(sessions: u64) -> Self {
        match sessions {
            0..=10 => MaturityStage::Nascent,
            11..=100 => MaturityStage::Developing,
            101..=500 => MaturityStage::Mature,
            _ => MaturityStage::Elder,
        }
    }

    /// Lowercase display name.
    pub fn name(&self) -> &'static str {
        match self {
            MaturityStage::Nascent => "nascent",
            MaturityStage::Developing => "developing",
            MaturityStage::Mature => "mature",
            MaturityStage::Elder => "elder",
        }
    }
}

/// Everything downstream generators need to know about age.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaturityConfig {
    pub stage: MaturityStage,
    pub sessions_count: u64,
    /// 1, 2 or 3.
    pub max_eyes: u32,
    pub has_nucleus: bool,
    pub has_circulation: bool,
    /// 0 disables appendages entirely.
    pub appendage_complexity: u32,
    /// Logarithmic growth in `[0, 1]`.
    pub detail_level: f32,
}

impl MaturityConfig {
    /// Whether every capability of `self` is at least that of `other`.
    pub fn dominates(&self, other: &MaturityConfig) -> bool {
        self.stage >= other.stage
            && self.max_eyes >= other.max_eyes
            && (self.has_nucleus || !other.has_nucleus)
            && (self.has_circulation || !other.has_circulation)
            && self.appendage_complexity >= other.appendage_complexity
            && self.detail_level >= other.detail_level
    }
}

/// `clamp(log10(sessions + 1) / 4, 0, 1)`.
pub fn detail_level(sessions: u64) -> f32 {
    clamp01(((sessions as f64 + 1.0).log10() / 4.0) as f32)
}

/// Classify a session count. Negative counts are treated as zero.
pub fn classify_maturity(sessions_count: i64) -> MaturityConfig {
    let sessions = sessions_count.max(0) as u64;
    let stage = MaturityStage::from_sessions(sessions);

    let (max_eyes, has_nucleus, has_circulation, appendage_complexity) = match stage {
        MaturityStage::Nascent => (1, false, false, 0),
        MaturityStage::Developing => (2, true, false, 1),
        MaturityStage::Mature => (3, true, true, 2),
        MaturityStage::Elder => (3, true, true, 3),
    };

    MaturityConfig {
        stage,
        sessions_count: sessions,
        max_eyes,
        has_nucleus,
        has_circulation,
        appendage_complexity,
        detail_level: detail_level(sessions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(classify_maturity(0).stage, MaturityStage::Nascent);
        assert_eq!(classify_maturity(10).stage, MaturityStage::Nascent);
        assert_eq!(classify_maturity(11).stage, MaturityStage::Developing);
        assert_eq!(classify_maturity(100).stage, MaturityStage::Developing);
        assert_eq!(classify_maturity(101).stage, MaturityStage::Mature);
        assert_eq!(classify_maturity(500).stage, MaturityStage::Mature);
        assert_eq!(classify_maturity(501).stage, MaturityStage::Elder);
        assert_eq!(classify_maturity(i64::MAX).stage, MaturityStage::Elder);
    }

    #[test]
    fn test_negative_is_zero() {
        assert_eq!(classify_maturity(-5), classify_maturity(0));
    }

    #[test]
    fn test_developing_scenario() {
        let m = classify_maturity(42);
        assert_eq!(m.stage, MaturityStage::Developing);
        assert_eq!(m.max_eyes, 2);
        assert!(m.has_nucleus);
        assert!(!m.has_circulation);
        assert_eq!(m.appendage_complexity, 1);
    }

    #[test]
    fn test_detail_level() {
        assert_eq!(detail_level(0), 0.0);
        assert!((detail_level(9) - 0.25).abs() < 1e-6);
        assert!((detail_level(9_999) - 1.0).abs() < 1e-6);
        assert_eq!(detail_level(u64::MAX), 1.0);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = classify_maturity(0);
        for s in 1..2_000 {
            let next = classify_maturity(s);
            assert!(next.dominates(&prev), "regressed at {s}");
            prev = next;
        }
    }
}
