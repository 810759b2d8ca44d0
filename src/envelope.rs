//! The shared glow envelope.
//!
//! One flash event plays this fixed bell-shaped duty-cycle curve: a quick
//! rise to full brightness followed by a long exponential-looking decay,
//! which is what makes the blink read as a firefly rather than a strobe.
//! Both channels traverse the same table through independent
//! (offset, intensity-shift) cursors, so the curve exists exactly once.

/// Number of entries in [`GLOW_ENVELOPE`].
pub const ENVELOPE_LEN: usize = 22;

/// Steps actually played per flash event.
///
/// Two fewer than the table length: the trailing zero pad is headroom so a
/// phase-offset cursor never indexes past the end
/// (`PLAYBACK_STEPS - 1 + OFFSET_SLOTS == ENVELOPE_LEN - 1`).
pub const PLAYBACK_STEPS: usize = ENVELOPE_LEN - 2;

/// Envelope index shift applied to a phase-offset channel.
pub const OFFSET_SLOTS: u8 = 2;

/// Duty-cycle curve of one glow, 0 → peak 255 → 0.
pub const GLOW_ENVELOPE: [u8; ENVELOPE_LEN] = [
    0, 0, 90, 168, 223, 252, 255, 236, 202, 162, 122, 86, 58, 37, 22, 12, 7, 3, 2, 1, 0, 0,
];
