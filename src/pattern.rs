//! Flash pattern decoding.
//!
//! A flash event is shaped by a 16-bit value: a pseudo-random draw folded
//! with the current light reading so that ambient noise feeds the pattern.
//! Six low bits select, per channel, whether it glows at all, whether its
//! envelope cursor is phase-shifted, and whether its brightness is halved.

use crate::envelope::OFFSET_SLOTS;

const CH0_ENABLED: u16 = 1 << 0;
const CH1_ENABLED: u16 = 1 << 1;
const CH0_OFFSET: u16 = 1 << 2;
const CH1_OFFSET: u16 = 1 << 3;
const CH0_INTENSITY: u16 = 1 << 4;
const CH1_INTENSITY: u16 = 1 << 5;

/// Identifier for one of the two glow channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Ch0,
    Ch1,
}

impl Channel {
    /// Both channels, in playback order.
    pub const ALL: [Channel; 2] = [Channel::Ch0, Channel::Ch1];

    /// Index of this channel into per-channel arrays.
    pub fn index(self) -> usize {
        match self {
            Channel::Ch0 => 0,
            Channel::Ch1 => 1,
        }
    }
}

/// Playback choices for a single channel within one flash event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelPlan {
    /// Whether this channel glows at all during the event.
    pub enabled: bool,
    /// Envelope index shift, `0` or [`OFFSET_SLOTS`] slots.
    pub offset: u8,
    /// Right shift applied to each envelope value, `0` or `1` (halving).
    pub intensity_shift: u8,
}

/// The decoded shape of one flash event.
///
/// Decoding is a pure bit-mask extraction: the same `(draw, reading)` pair
/// always yields the same pattern, and every 16-bit value decodes
/// unambiguously. A pattern with both channels disabled is legal — the
/// event still costs a flash token and still paces through the step loop,
/// it just lights nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlashPattern {
    channels: [ChannelPlan; 2],
}

impl FlashPattern {
    /// Decodes a random draw folded with the current light reading.
    pub fn decode(draw: u16, reading: u16) -> Self {
        let bits = draw ^ reading;

        let plan = |enabled: u16, offset: u16, intensity: u16| ChannelPlan {
            enabled: bits & enabled != 0,
            offset: if bits & offset != 0 { OFFSET_SLOTS } else { 0 },
            intensity_shift: if bits & intensity != 0 { 1 } else { 0 },
        };

        Self {
            channels: [
                plan(CH0_ENABLED, CH0_OFFSET, CH0_INTENSITY),
                plan(CH1_ENABLED, CH1_OFFSET, CH1_INTENSITY),
            ],
        }
    }

    /// Returns the plan for one channel.
    pub fn channel(&self, channel: Channel) -> ChannelPlan {
        self.channels[channel.index()]
    }

    /// Number of channels that will actually glow (0, 1 or 2).
    pub fn enabled_count(&self) -> u8 {
        self.channels.iter().filter(|plan| plan.enabled).count() as u8
    }

    /// True when no physical channel activates for this pattern.
    pub fn is_silent(&self) -> bool {
        self.enabled_count() == 0
    }
}
