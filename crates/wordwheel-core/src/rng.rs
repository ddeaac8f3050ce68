//! Deterministic pseudo-random stream used for every generation choice.

/// LCG multiplier (Knuth MMIX).
const MULTIPLIER: u64 = 6364136223846793005;
/// LCG increment.
const INCREMENT: u64 = 1442695040888963407;
/// Mixes the attempt counter into a seed so retries get distinct streams.
const ATTEMPT_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded linear congruential generator.
///
/// The same seed always yields the same sequence of draws, which is what
/// makes `generate_puzzle(level, Some(seed))` reproducible. Instances are
/// cheap and are threaded by `&mut` through every call that consumes
/// randomness; nothing in the crate keeps one in shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a stream starting from `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Stream for the `attempt`-th base word tried under `seed`.
    pub fn for_attempt(seed: u64, attempt: usize) -> Self {
        Self::new(seed ^ (attempt as u64).wrapping_mul(ATTEMPT_MIX))
    }

    /// Seed from the OS entropy source.
    ///
    /// Only for cosmetic shuffles (e.g. a mid-game rewheel); anything that
    /// must be reproducible takes an explicit seed.
    pub fn from_entropy() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::new(u64::from_le_bytes(seed_bytes))
    }

    /// Current internal state.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance the recurrence and return the new state.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Uniform-ish index in `0..bound`; returns 0 for an empty range.
    ///
    /// Uses the high bits of the state: the low bits of a power-of-two
    /// modulus LCG cycle with short periods.
    pub fn next_usize(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        ((self.next_u64() >> 33) % bound as u64) as usize
    }

    /// Pick an element, or `None` if the slice is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.next_usize(items.len()))
        }
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}
