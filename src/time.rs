//! Frame clock for the particle engine.
//!
//! The engine never reads the wall clock. The render loop hands it
//! `(time, delta)` each frame and [`FrameClock`] turns that into the values
//! integration actually uses: a clamped, scaled delta and a scaled elapsed
//! time that stops while paused.
//!
//! # Example
//!
//! ```
//! use sporeform::time::FrameClock;
//!
//! let mut clock = FrameClock::new(0.05);
//!
//! // A one-second stall integrates as a single 50ms step
//! let (_, delta) = clock.tick(1.0, 1.0);
//! assert_eq!(delta, 0.05);
//! assert_eq!(clock.frame(), 1);
//! ```

/// Deterministic frame timing driven by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameClock {
    /// Scaled time accumulated from clamped deltas.
    elapsed_secs: f32,
    /// Delta of the last tick, after clamping and scaling.
    delta_secs: f32,
    /// Last raw time passed in by the caller.
    external_time: f32,
    /// Frames ticked since creation or reset.
    frame_count: u64,
    /// Upper bound for a single step.
    max_delta: f32,
    /// Whether time is paused.
    paused: bool,
    /// Time scale multiplier (1.0 = normal speed).
    time_scale: f32,
}

impl FrameClock {
    /// Create a clock that never integrates more than `max_delta` seconds
    /// in one frame.
    pub fn new(max_delta: f32) -> Self {
        Self {
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            external_time: 0.0,
            frame_count: 0,
            max_delta: max_delta.max(0.0),
            paused: false,
            time_scale: 1.0,
        }
    }

    /// Advance by one frame. Call once per frame.
    ///
    /// Negative or NaN deltas count as zero. Returns `(time, delta)` where
    /// `time` is the caller's time scaled by the time scale.
    pub fn tick(&mut self, time: f32, delta: f32) -> (f32, f32) {
        self.external_time = time;
        self.frame_count += 1;

        if self.paused {
            self.delta_secs = 0.0;
            return (self.time(), 0.0);
        }

        let clamped = if delta.is_nan() {
            0.0
        } else {
            delta.clamp(0.0, self.max_delta)
        };
        self.delta_secs = clamped * self.time_scale;
        self.elapsed_secs += self.delta_secs;

        (self.time(), self.delta_secs)
    }

    /// Caller's time, scaled.
    #[inline]
    pub fn time(&self) -> f32 {
        self.external_time * self.time_scale
    }

    /// Sum of every integrated delta.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Frames ticked, paused frames included.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// While paused, `tick` integrates nothing.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Set time scale multiplier.
    ///
    /// - `1.0` = normal speed
    /// - `0.5` = half speed
    /// - `2.0` = double speed
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Change the step bound without touching pause state or counters.
    pub fn set_max_delta(&mut self, max_delta: f32) {
        self.max_delta = max_delta.max(0.0);
    }

    /// Reset counters. Keeps `max_delta` and the time scale.
    pub fn reset(&mut self) {
        self.elapsed_secs = 0.0;
        self.delta_secs = 0.0;
        self.external_time = 0.0;
        self.frame_count = 0;
        self.paused = false;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(0.05)
    }
}
