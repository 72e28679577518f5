//! Trait aggregation: free-text descriptors to a 4D [`TraitVector`].
//!
//! Each descriptor is resolved against a hand-authored vocabulary, first by
//! exact match, then by substring containment in either direction. Anything
//! still unknown is hashed into a deliberately tame vector so an odd word
//! never produces an extreme creature.
//!
//! # Example
//!
//! ```
//! use sporeform::traits::{aggregate_traits, TraitVector};
//!
//! let v = aggregate_traits::<&str>(&[], 0);
//! assert_eq!(v, TraitVector::CENTER);
//! ```

use crate::band::{clamp01, lerp};
use crate::seed::{hash_string, hash_to_float, Seed};
use serde::{Deserialize, Serialize};

/// A point in the four-axis personality space, every axis in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraitVector {
    /// 0 = crystalline/geometric, 1 = soft/organic.
    pub geometric_organic: f32,
    /// 0 = connected/social, 1 = isolated/introspective.
    pub connected_isolated: f32,
    /// Overall energy and presence.
    pub intensity_scale: f32,
    /// Speed of motion and response.
    pub motion_tempo: f32,
}

impl TraitVector {
    /// The neutral vector produced by empty input.
    pub const CENTER: Self = Self::new(0.5, 0.5, 0.5, 0.5);

    /// Construct without clamping.
    pub const fn new(
        geometric_organic: f32,
        connected_isolated: f32,
        intensity_scale: f32,
        motion_tempo: f32,
    ) -> Self {
        Self {
            geometric_organic,
            connected_isolated,
            intensity_scale,
            motion_tempo,
        }
    }

    /// Copy with every axis clamped to `[0, 1]` (NaN becomes 0).
    pub fn clamped(self) -> Self {
        Self::new(
            clamp01(self.geometric_organic),
            clamp01(self.connected_isolated),
            clamp01(self.intensity_scale),
            clamp01(self.motion_tempo),
        )
    }

    /// Axes as an array, in declaration order.
    pub fn to_array(self) -> [f32; 4] {
        [
            self.geometric_organic,
            self.connected_isolated,
            self.intensity_scale,
            self.motion_tempo,
        ]
    }

    fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl Default for TraitVector {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Curated descriptor vocabulary: `(key, [go, ci, intensity, tempo])`.
///
/// Order matters for substring fallback: the first containing key wins.
pub const VOCABULARY: &[(&str, [f32; 4])] = &[
    // Social / supportive
    ("helpful", [0.55, 0.10, 0.50, 0.55]),
    ("friendly", [0.65, 0.10, 0.55, 0.60]),
    ("kind", [0.70, 0.15, 0.40, 0.45]),
    ("empathetic", [0.75, 0.12, 0.50, 0.40]),
    ("warm", [0.72, 0.15, 0.50, 0.45]),
    ("supportive", [0.60, 0.10, 0.45, 0.45]),
    ("collaborative", [0.55, 0.08, 0.50, 0.55]),
    ("patient", [0.60, 0.25, 0.30, 0.15]),
    ("generous", [0.65, 0.12, 0.55, 0.50]),
    ("encouraging", [0.62, 0.12, 0.60, 0.60]),
    ("diplomatic", [0.50, 0.20, 0.40, 0.35]),
    ("honest", [0.40, 0.25, 0.60, 0.45]),
    // Analytical / precise
    ("thorough", [0.30, 0.15, 0.55, 0.30]),
    ("precise", [0.10, 0.40, 0.60, 0.40]),
    ("analytical", [0.15, 0.55, 0.55, 0.45]),
    ("logical", [0.12, 0.50, 0.50, 0.45]),
    ("methodical", [0.15, 0.40, 0.45, 0.25]),
    ("systematic", [0.10, 0.45, 0.50, 0.35]),
    ("rigorous", [0.12, 0.45, 0.70, 0.40]),
    ("detailed", [0.25, 0.35, 0.50, 0.30]),
    ("careful", [0.30, 0.35, 0.35, 0.20]),
    ("structured", [0.08, 0.40, 0.50, 0.35]),
    ("organized", [0.12, 0.35, 0.45, 0.40]),
    ("efficient", [0.15, 0.40, 0.60, 0.75]),
    ("accurate", [0.12, 0.40, 0.55, 0.40]),
    ("objective", [0.15, 0.60, 0.45, 0.40]),
    // Creative / exploratory
    ("curious", [0.70, 0.35, 0.60, 0.70]),
    ("creative", [0.85, 0.40, 0.65, 0.65]),
    ("imaginative", [0.88, 0.50, 0.60, 0.60]),
    ("playful", [0.80, 0.20, 0.60, 0.85]),
    ("artistic", [0.90, 0.50, 0.55, 0.50]),
    ("inventive", [0.75, 0.45, 0.65, 0.65]),
    ("innovative", [0.70, 0.45, 0.70, 0.70]),
    ("whimsical", [0.90, 0.40, 0.45, 0.75]),
    ("adventurous", [0.75, 0.30, 0.75, 0.80]),
    ("exploratory", [0.78, 0.45, 0.55, 0.65]),
    ("open-minded", [0.72, 0.30, 0.45, 0.55]),
    ("adaptable", [0.70, 0.30, 0.45, 0.65]),
    // Reflective / solitary
    ("thoughtful", [0.55, 0.60, 0.40, 0.25]),
    ("reflective", [0.60, 0.75, 0.35, 0.20]),
    ("introspective", [0.60, 0.85, 0.35, 0.15]),
    ("philosophical", [0.65, 0.80, 0.45, 0.20]),
    ("contemplative", [0.62, 0.82, 0.30, 0.12]),
    ("calm", [0.60, 0.55, 0.20, 0.10]),
    ("quiet", [0.50, 0.75, 0.20, 0.15]),
    ("reserved", [0.40, 0.80, 0.25, 0.25]),
    ("independent", [0.45, 0.85, 0.60, 0.50]),
    ("mysterious", [0.70, 0.90, 0.55, 0.30]),
    ("stoic", [0.25, 0.80, 0.40, 0.15]),
    ("skeptical", [0.30, 0.75, 0.55, 0.40]),
    // Energetic / assertive
    ("energetic", [0.60, 0.25, 0.85, 0.90]),
    ("enthusiastic", [0.65, 0.15, 0.85, 0.85]),
    ("passionate", [0.70, 0.30, 0.90, 0.70]),
    ("bold", [0.40, 0.40, 0.90, 0.70]),
    ("confident", [0.35, 0.35, 0.80, 0.60]),
    ("direct", [0.20, 0.45, 0.75, 0.70]),
    ("assertive", [0.25, 0.45, 0.85, 0.70]),
    ("intense", [0.50, 0.60, 0.95, 0.65]),
    ("witty", [0.60, 0.30, 0.65, 0.85]),
    ("quick", [0.40, 0.40, 0.60, 0.90]),
    ("gentle", [0.75, 0.25, 0.20, 0.25]),
    ("humble", [0.55, 0.35, 0.20, 0.35]),
];

/// Weight of the descriptor at `index`: `max(0.2, 1 - 0.08 * index)`.
#[inline]
pub fn trait_weight(index: usize) -> f32 {
    (1.0 - 0.08 * index as f32).max(0.2)
}

/// Trim and lowercase a descriptor.
pub fn normalize_trait(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Resolve a normalized descriptor against [`VOCABULARY`].
///
/// Exact match first, then the first key where either string contains the
/// other.
pub fn lookup_trait(normalized: &str) -> Option<TraitVector> {
    if let Some((_, v)) = VOCABULARY.iter().find(|(key, _)| *key == normalized) {
        return Some(TraitVector::from_array(*v));
    }
    VOCABULARY
        .iter()
        .find(|(key, _)| key.contains(normalized) || normalized.contains(key))
        .map(|(_, v)| TraitVector::from_array(*v))
}

/// Synthesize a vector for an out-of-vocabulary descriptor.
///
/// `intensity_scale` lands in `[0.3, 0.7]`, the other axes in `[0.2, 0.8]`.
/// The fallback seed salts the hash, so the same word reads slightly
/// differently on different agents but never differs between runs.
pub fn hash_trait_to_vector(normalized: &str, fallback_seed: Seed) -> TraitVector {
    let h = hash_string(&format!("{normalized}:{fallback_seed}"));
    TraitVector::new(
        lerp(0.2, 0.8, hash_to_float(h, 0)),
        lerp(0.2, 0.8, hash_to_float(h, 1)),
        lerp(0.3, 0.7, hash_to_float(h, 2)),
        lerp(0.2, 0.8, hash_to_float(h, 3)),
    )
}

/// Resolve a single raw descriptor, vocabulary first, hash second.
pub fn resolve_trait(raw: &str, fallback_seed: Seed) -> Option<TraitVector> {
    let normalized = normalize_trait(raw);
    if normalized.is_empty() {
        return None;
    }
    Some(lookup_trait(&normalized).unwrap_or_else(|| {
        log::debug!("trait {normalized:?} not in vocabulary, hashing");
        hash_trait_to_vector(&normalized, fallback_seed)
    }))
}

/// Weighted average of every descriptor's vector.
///
/// Blank descriptors are skipped but still consume their position's weight
/// slot. No usable descriptors yields [`TraitVector::CENTER`].
pub fn aggregate_traits<S: AsRef<str>>(traits: &[S], fallback_seed: Seed) -> TraitVector {
    let mut sum = [0.0f32; 4];
    let mut total_weight = 0.0f32;

    for (index, raw) in traits.iter().enumerate() {
        let Some(vector) = resolve_trait(raw.as_ref(), fallback_seed) else {
            continue;
        };
        let weight = trait_weight(index);
        for (acc, axis) in sum.iter_mut().zip(vector.to_array()) {
            *acc += axis * weight;
        }
        total_weight += weight;
    }

    if total_weight <= 0.0 {
        return TraitVector::CENTER;
    }

    TraitVector::from_array(sum.map(|s| s / total_weight)).clamped()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_shape() {
        assert!(VOCABULARY.len() >= 60);
        for (key, v) in VOCABULARY {
            assert_eq!(*key, key.trim().to_lowercase());
            assert!(v.iter().all(|a| (0.0..=1.0).contains(a)), "{key}");
        }
    }

    #[test]
    fn test_weights() {
        assert_eq!(trait_weight(0), 1.0);
        assert!((trait_weight(1) - 0.92).abs() < 1e-6);
        assert_eq!(trait_weight(10), 0.2);
        assert_eq!(trait_weight(100), 0.2);
    }

    #[test]
    fn test_exact_and_normalized_lookup() {
        let a = resolve_trait("  Helpful ", 0).unwrap();
        assert_eq!(a, TraitVector::new(0.55, 0.10, 0.50, 0.55));
    }

    #[test]
    fn test_substring_lookup_both_ways() {
        // trait contains key
        assert_eq!(
            lookup_trait("very curious"),
            Some(TraitVector::new(0.70, 0.35, 0.60, 0.70))
        );
        // key contains trait
        assert_eq!(
            lookup_trait("introspect"),
            Some(TraitVector::new(0.60, 0.85, 0.35, 0.15))
        );
    }

    #[test]
    fn test_unknown_traits_stay_tame() {
        for word in ["zxqv", "blorp", "hyperdimensional", "1234", "ÿ"] {
            let v = hash_trait_to_vector(word, 77);
            assert!((0.2..=0.8).contains(&v.geometric_organic));
            assert!((0.2..=0.8).contains(&v.connected_isolated));
            assert!((0.3..=0.7).contains(&v.intensity_scale));
            assert!((0.2..=0.8).contains(&v.motion_tempo));
        }
    }

    #[test]
    fn test_empty_input_is_center() {
        assert_eq!(aggregate_traits::<&str>(&[], 5), TraitVector::CENTER);
        assert_eq!(aggregate_traits(&["", "   "], 5), TraitVector::CENTER);
    }

    #[test]
    fn test_scenario_helpful_thorough_curious() {
        let v = aggregate_traits(&["helpful", "thorough", "curious"], 1);
        assert!(v.connected_isolated < 0.25, "{v:?}");
        assert!((0.4..0.65).contains(&v.intensity_scale), "{v:?}");
    }

    #[test]
    fn test_earlier_traits_dominate() {
        let a = aggregate_traits(&["introspective", "friendly"], 0);
        let b = aggregate_traits(&["friendly", "introspective"], 0);
        assert!(a.connected_isolated > b.connected_isolated);
    }
}
