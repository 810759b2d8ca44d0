//! Ambient-light hysteresis filtering.
//!
//! Provides [`AmbientFilter`] which turns a stream of raw brightness
//! readings into a bounded darkness-confidence counter. A single flickering
//! reading (a passing car, a phone screen) moves the counter by one step at
//! most, so only persistent darkness reaches the flash threshold.

/// Lower bound of the darkness counter.
pub const DARKNESS_FLOOR: i8 = 0;

/// Upper bound of the darkness counter.
pub const DARKNESS_CEILING: i8 = 10;

/// Darkness level at which ambient conditions are trusted as dark.
pub const CONFIDENCE_LIMIT: i8 = 7;

/// Hysteresis counter over brightness readings.
///
/// This is a one-sample-per-cycle integrator, not a moving average: each
/// reading moves the counter by exactly one step, saturating at the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AmbientFilter {
    darkness: i8,
}

impl AmbientFilter {
    /// Creates a filter with zero darkness confidence.
    pub const fn new() -> Self {
        Self {
            darkness: DARKNESS_FLOOR,
        }
    }

    /// Feeds one brightness reading into the filter.
    ///
    /// Note the polarity: a reading *above* the threshold counts toward
    /// darkness. The sensing divider reads higher as light falls, so do not
    /// flip this comparison without re-checking the hardware.
    pub fn observe(&mut self, reading: u16, threshold: u16) {
        if reading > threshold {
            if self.darkness < DARKNESS_CEILING {
                self.darkness += 1;
            }
        } else {
            if self.darkness > DARKNESS_FLOOR {
                self.darkness -= 1;
            }
        }
    }

    /// Returns true once darkness has persisted long enough to be trusted.
    pub fn is_dark(&self) -> bool {
        self.darkness >= CONFIDENCE_LIMIT
    }

    /// Returns the current darkness confidence level.
    pub fn darkness(&self) -> i8 {
        self.darkness
    }
}
