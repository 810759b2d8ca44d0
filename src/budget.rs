//! Flash-rate budgeting.
//!
//! Provides [`FlashBudget`], the token economy bounding total flash
//! activity. At one coarse tick (~8 s) per cycle, a full budget of 900
//! tokens is roughly two hours of continuous flashing before the device
//! throttles itself — the escape hatch for a firefly stuck in a dark
//! enclosure. Tokens recharge one per cycle while ambient light is back.

/// Full token budget.
pub const TOKENS_MAX: i16 = 900;

/// Depletable flash allowance.
///
/// Exactly one of [`consume`](FlashBudget::consume) or
/// [`recharge`](FlashBudget::recharge) is expected per control cycle,
/// chosen by whether the darkness condition held. Both saturate at their
/// bound, so the count never leaves `[0, TOKENS_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlashBudget {
    tokens: i16,
}

impl FlashBudget {
    /// Creates a full budget.
    pub const fn new() -> Self {
        Self { tokens: TOKENS_MAX }
    }

    /// Creates a budget at a specific level, clamped to `[0, TOKENS_MAX]`.
    pub const fn with_tokens(tokens: i16) -> Self {
        Self {
            tokens: if tokens < 0 {
                0
            } else if tokens > TOKENS_MAX {
                TOKENS_MAX
            } else {
                tokens
            },
        }
    }

    /// Returns true while at least one flash is still allowed.
    pub fn can_flash(&self) -> bool {
        self.tokens > 0
    }

    /// Spends one token. Call only when a flash sequence actually plays.
    pub fn consume(&mut self) {
        if self.tokens > 0 {
            self.tokens -= 1;
        }
    }

    /// Returns one token, capped at the full budget.
    pub fn recharge(&mut self) {
        if self.tokens < TOKENS_MAX {
            self.tokens += 1;
        }
    }

    /// Returns the remaining token count.
    pub fn tokens(&self) -> i16 {
        self.tokens
    }
}

impl Default for FlashBudget {
    fn default() -> Self {
        Self::new()
    }
}
