//! Piecewise-linear band mapping shared by every generator.
//!
//! Most generator outputs are either "which band does this trait fall in"
//! or "lerp inside the band it falls in". Both go through this module so the
//! threshold convention is the same everywhere: a value exactly on a
//! breakpoint belongs to the band *above* it (`v < threshold` selects the
//! lower band).

/// Linear interpolation from `a` to `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp to `[0, 1]`, mapping NaN to 0.
#[inline]
pub fn clamp01(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Where `v` sits between `a` and `b`, clamped to `[0, 1]`.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    if (b - a).abs() < f32::EPSILON {
        0.0
    } else {
        clamp01((v - a) / (b - a))
    }
}

/// Index of the band containing `value`.
///
/// `thresholds` must be ascending. Returns the number of thresholds that are
/// `<= value`, so `band_index(0.3, &[0.3, 0.6]) == 1`.
pub fn band_index(value: f32, thresholds: &[f32]) -> usize {
    thresholds.iter().take_while(|&&t| value >= t).count()
}

/// Pick an output by band.
///
/// `outputs` must have exactly one more entry than `thresholds`.
pub fn band_select<T: Copy>(value: f32, thresholds: &[f32], outputs: &[T]) -> T {
    debug_assert_eq!(outputs.len(), thresholds.len() + 1);
    outputs[band_index(value, thresholds).min(outputs.len() - 1)]
}

/// Piecewise-linear mapping with an independent output range per band.
///
/// `breakpoints` delimits `n` bands; each band lerps through its own
/// `(start, end)` pair. Adjacent ranges do not have to meet, which is how the
/// three-segment eye size ramp gets its visible steps.
///
/// ```
/// use sporeform::band::BandMapper;
///
/// let ramp = BandMapper::new(&[0.0, 0.5, 1.0], &[(0.0, 1.0), (10.0, 20.0)]);
/// assert_eq!(ramp.map(0.25), 0.5);
/// assert_eq!(ramp.map(0.75), 15.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BandMapper<'a> {
    breakpoints: &'a [f32],
    outputs: &'a [(f32, f32)],
}

impl<'a> BandMapper<'a> {
    /// Create a mapper. `outputs.len()` must equal `breakpoints.len() - 1`.
    pub fn new(breakpoints: &'a [f32], outputs: &'a [(f32, f32)]) -> Self {
        assert!(breakpoints.len() >= 2, "BandMapper needs at least one band");
        assert_eq!(
            outputs.len(),
            breakpoints.len() - 1,
            "BandMapper needs one output range per band"
        );
        Self {
            breakpoints,
            outputs,
        }
    }

    /// Map `value`; values outside the breakpoints clamp to the end bands.
    pub fn map(&self, value: f32) -> f32 {
        let inner = &self.breakpoints[1..self.breakpoints.len() - 1];
        let band = band_index(value, inner);
        let (lo, hi) = (self.breakpoints[band], self.breakpoints[band + 1]);
        let (start, end) = self.outputs[band];
        lerp(start, end, inverse_lerp(lo, hi, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_index_ties_go_up() {
        let t = [0.3, 0.6];
        assert_eq!(band_index(0.0, &t), 0);
        assert_eq!(band_index(0.299, &t), 0);
        assert_eq!(band_index(0.3, &t), 1);
        assert_eq!(band_index(0.6, &t), 2);
        assert_eq!(band_index(1.0, &t), 2);
    }

    #[test]
    fn test_band_select() {
        let v = band_select(0.55, &[0.25, 0.5, 0.75], &['a', 'b', 'c', 'd']);
        assert_eq!(v, 'c');
    }

    #[test]
    fn test_mapper_segments() {
        let bps = [0.0, 0.3, 0.6, 1.0];
        let outs = [(1.0, 2.0), (5.0, 6.0), (9.0, 10.0)];
        let m = BandMapper::new(&bps, &outs);
        assert_eq!(m.map(0.0), 1.0);
        assert!((m.map(0.15) - 1.5).abs() < 1e-6);
        assert_eq!(m.map(0.3), 5.0);
        assert_eq!(m.map(1.0), 10.0);
        assert_eq!(m.map(2.0), 10.0);
        assert_eq!(m.map(-1.0), 1.0);
    }

    #[test]
    fn test_clamp01_nan() {
        assert_eq!(clamp01(f32::NAN), 0.0);
        assert_eq!(clamp01(1.5), 1.0);
    }
}
