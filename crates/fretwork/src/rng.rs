//! Seeded random stream shared by every generator.
//!
//! Panels have to be reproducible from `(width, height, seed, params)` alone,
//! so the stream is a plain 31-bit linear congruential recurrence: the same
//! seed and the same draw order always give the same floats.

const MULTIPLIER: u64 = 1_664_525;
const INCREMENT: u64 = 1_013_904_223;
const MODULUS_MASK: u64 = 0x7fff_ffff;

/// A deterministic stream of floats driven by a 31-bit LCG.
///
/// Not cryptographic and not long-period. One stream is created per
/// synthesis call and dropped afterwards.
///
/// # Example
/// ```
/// use fretwork::rng::RandomStream;
///
/// let mut stream = RandomStream::new(42);
/// let value = stream.next_f64();
/// assert!((0.0..=1.0).contains(&value));
/// ```
#[derive(Debug, Clone)]
pub struct RandomStream {
    state: u64,
}

impl RandomStream {
    /// Create a stream from an integer seed.
    ///
    /// The seed is truncated to its low 32 bits (as a signed value), its
    /// magnitude taken, and zero replaced by one, so every seed yields a
    /// nonzero positive starting state.
    #[inline]
    pub fn new(seed: i64) -> Self {
        let magnitude = u64::from((seed as i32).unsigned_abs());
        Self { state: if magnitude == 0 { 1 } else { magnitude } }
    }

    /// Current raw state. Exposed for tests and diagnostics.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance the recurrence and return `state / (2^31 - 1)`.
    ///
    /// The result lies in `[0, 1]`; exactly `1.0` occurs once per period
    /// (state `2^31 - 1`), which is why index helpers below clamp.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        // state <= 2^32, so the product stays far below u64::MAX
        self.state = (self.state * MULTIPLIER + INCREMENT) & MODULUS_MASK;
        self.state as f64 / MODULUS_MASK as f64
    }

    /// Get a random f64 in the range [min, max].
    #[inline]
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Get a random index in the range [0, len).
    ///
    /// Returns 0 for an empty range.
    #[inline]
    pub fn next_index(&mut self, len: usize) -> usize {
        let index = (self.next_f64() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }

    /// One categorical draw: `first` when the draw is below 0.5.
    ///
    /// Generators call this once per structural choice and keep the result;
    /// re-drawing mid-algorithm would shift every later draw.
    #[inline]
    pub fn pick<T>(&mut self, first: T, second: T) -> T {
        if self.next_f64() < 0.5 { first } else { second }
    }
}

impl Default for RandomStream {
    fn default() -> Self {
        Self::new(1)
    }
}
