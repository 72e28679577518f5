//! Seed derivation and the deterministic random stream.
//!
//! Everything procedural in the crate starts from a single [`Seed`] derived
//! from an agent identifier. Generators never share a stream: each one starts
//! from `seed + offset` (see [`offsets`]) so adding a draw to the eye
//! generator can never shift the body it sits on.
//!
//! # Example
//!
//! ```
//! use sporeform::seed::{hash_string, offsets, SeededRng};
//!
//! let seed = hash_string("claude-7f3a2b");
//! let mut a = SeededRng::for_generator(seed, offsets::BODY);
//! let mut b = SeededRng::for_generator(seed, offsets::BODY);
//! assert_eq!(a.next_f32(), b.next_f32());
//! ```

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Canonical seed for an identifier.
pub type Seed = u32;

/// Per-generator seed offsets.
pub mod offsets {
    pub const BODY: u32 = 1000;
    pub const BODY_SHAPE: u32 = 1500;
    pub const EYES: u32 = 2000;
    pub const EYE_SHAPE: u32 = 2500;
    pub const APPENDAGES: u32 = 3000;
    pub const APPENDAGE_SHAPE: u32 = 3500;
    pub const BEHAVIOR: u32 = 4000;
    pub const STYLE: u32 = 5000;
    pub const PARTICLES: u32 = 6000;
    pub const PALETTE: u32 = 7000;
}

/// Polynomial rolling hash of a string (`h = h * 31 + c`), absolute value.
///
/// Wraps as a signed 32-bit accumulator so long strings stay well defined.
pub fn hash_string(s: &str) -> Seed {
    let mut hash: i32 = 0;
    for c in s.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(c as i32);
    }
    hash.unsigned_abs()
}

/// Derive a float in `[0, 1)` from a hash and an offset.
pub fn hash_to_float(hash: u32, offset: u32) -> f32 {
    let rehashed = hash_string(&format!("{hash}-{offset}"));
    (rehashed % 10_000) as f32 / 10_000.0
}

/// Derive an integer in `[min, max]` (inclusive) from a hash and an offset.
pub fn hash_to_int(hash: u32, offset: u32, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    let span = (i64::from(max) - i64::from(min) + 1) as f32;
    let value = i64::from(min) + (hash_to_float(hash, offset) * span).floor() as i64;
    value.min(i64::from(max)) as i32
}

/// Integer avalanche mix. Identical to `hash(n)` in the WGSL utilities.
#[inline]
pub fn hash_u32(n: u32) -> u32 {
    let mut x = n;
    x ^= x >> 17;
    x = x.wrapping_mul(0xed5a_d4bb);
    x ^= x >> 11;
    x = x.wrapping_mul(0xac4c_1b51);
    x ^= x >> 15;
    x = x.wrapping_mul(0x3184_8bab);
    x ^= x >> 14;
    x
}

/// State of the xorshift stream. Plain data, threaded explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RngState(pub u32);

impl RngState {
    /// State used when a seed would otherwise collapse to zero.
    const ZERO_REPLACEMENT: u32 = 0x9e37_79b9;

    /// Start a stream from a raw seed.
    pub fn new(seed: u32) -> Self {
        let mixed = hash_u32(seed);
        Self(if mixed == 0 { Self::ZERO_REPLACEMENT } else { mixed })
    }

    /// Start the stream of a specific generator (`seed + offset`).
    pub fn for_generator(seed: Seed, offset: u32) -> Self {
        Self::new(seed.wrapping_add(offset))
    }
}

/// Advance the state once, returning the raw 32-bit output.
#[inline]
pub fn next_u32(state: RngState) -> (u32, RngState) {
    let mut x = state.0;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    (x, RngState(x))
}

/// Advance the state once, returning a float in `[0, 1)`.
///
/// Uses the top 24 bits so the result is exactly representable in `f32`
/// and can never round up to 1.0.
#[inline]
pub fn next(state: RngState) -> (f32, RngState) {
    let (bits, state) = next_u32(state);
    ((bits >> 8) as f32 / (1u32 << 24) as f32, state)
}

/// Convenience wrapper that owns an [`RngState`].
///
/// Also implements [`rand::RngCore`], so `rand::Rng` helpers such as
/// `gen_range` draw from the same deterministic stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRng {
    state: RngState,
}

impl SeededRng {
    /// Stream for a raw seed.
    pub fn new(seed: u32) -> Self {
        Self {
            state: RngState::new(seed),
        }
    }

    /// Stream for a generator: `seed + offset`.
    pub fn for_generator(seed: Seed, offset: u32) -> Self {
        Self {
            state: RngState::for_generator(seed, offset),
        }
    }

    /// Current state, e.g. to resume a stream later.
    #[inline]
    pub fn state(&self) -> RngState {
        self.state
    }

    /// Float in `[0, 1)`.
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        let (value, state) = next(self.state);
        self.state = state;
        value
    }

    /// Float in `[min, max)`.
    #[inline]
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Float in `[-1, 1)`.
    #[inline]
    pub fn signed(&mut self) -> f32 {
        self.next_f32() * 2.0 - 1.0
    }

    /// Integer in `[min, max]` (inclusive).
    pub fn int_range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = (u64::from(max) - u64::from(min) + 1) as f32;
        (u64::from(min) + (self.next_f32() * span) as u64).min(u64::from(max)) as u32
    }

    /// `true` with probability `p`.
    #[inline]
    pub fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        let (bits, state) = next_u32(self.state);
        self.state = state;
        bits
    }

    fn next_u64(&mut self) -> u64 {
        let hi = RngCore::next_u32(self) as u64;
        let lo = RngCore::next_u32(self) as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = RngCore::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
