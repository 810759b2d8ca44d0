//! Deterministic pseudo-random draws for pattern generation.

/// Default seed for [`Lfsr16`]. Must be non-zero.
pub const LFSR_SEED: u16 = 0xCAFE;

/// Feedback tap mask for the 16-bit LFSR (taps 16, 14, 13, 11).
///
/// Together with a non-zero seed this gives the maximal 65535-state
/// period; the all-zero state is never reached.
pub const LFSR_TAPS: u16 = 0xB400;

/// 16-bit linear-feedback shift register.
///
/// Pure function of its internal state, bit-for-bit reproducible for a
/// given seed. The sequence doubles as the entropy source for flash
/// patterns, so reproducibility matters more than statistical quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lfsr16 {
    state: u16,
}

impl Lfsr16 {
    /// Creates a generator with the fixed default seed.
    pub const fn new() -> Self {
        Self { state: LFSR_SEED }
    }

    /// Creates a generator with a custom seed.
    ///
    /// A zero seed would lock the register in its degenerate all-zero
    /// state, so it is replaced with the default seed.
    pub const fn with_seed(seed: u16) -> Self {
        Self {
            state: if seed == 0 { LFSR_SEED } else { seed },
        }
    }

    /// Advances the register one step and returns the new state.
    ///
    /// Galois-style update: shift right, then conditionally XOR the tap
    /// mask when the bit shifted out was set. `wrapping_neg` turns the
    /// low bit into an all-ones/all-zeros mask, avoiding a branch.
    pub fn draw(&mut self) -> u16 {
        self.state = (self.state >> 1) ^ ((self.state & 1).wrapping_neg() & LFSR_TAPS);
        self.state
    }

    /// Returns the current register state without advancing it.
    pub fn state(&self) -> u16 {
        self.state
    }
}

impl Default for Lfsr16 {
    fn default() -> Self {
        Self::new()
    }
}
